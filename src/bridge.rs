//! Startup policy and the top-level run: list, locate, open, grab, loop, clean up.

use crate::cli::Args;
use crate::config::{Config, TARGET_DEVICE_NAME};
use crate::device::{self, DeviceInfo, EvdevSource, GrabGuard, Grabbable, InputDevice};
use crate::error::{BridgeError, Result};
use crate::event_loop::{EventLoop, EventSource, LoopExit};
use crate::midi::{DefaultMidiEngine, MidiEngine};
use crate::shutdown::Shutdown;
use clap::CommandFactory;
use log::{error, info, warn};
use std::io::{self, Write};

/// How a run ended without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Listed,
    Interrupted,
    EndOfInput,
}

impl From<LoopExit> for Outcome {
    fn from(exit: LoopExit) -> Self {
        match exit {
            LoopExit::Interrupted => Outcome::Interrupted,
            LoopExit::EndOfInput => Outcome::EndOfInput,
        }
    }
}

/// Writes the listing printed by `--list`
pub fn write_listing<W, D>(out: &mut W, ports: &[String], devices: D) -> io::Result<()>
where
    W: Write,
    D: IntoIterator<Item = DeviceInfo>,
{
    writeln!(out, "MIDI output ports:")?;
    for port in ports {
        writeln!(out, "    {}", port)?;
    }
    writeln!(out, "Devices:")?;
    for dev in devices {
        writeln!(out, "    {} {}", dev.path.display(), dev.name)?;
    }
    Ok(())
}

fn list() -> Result<Outcome> {
    let ports = match DefaultMidiEngine::list_available_ports() {
        Ok(ports) => ports,
        Err(e) => {
            warn!("Failed to list MIDI ports: {}", e);
            Vec::new()
        }
    };
    let stdout = io::stdout();
    if let Err(e) = write_listing(&mut stdout.lock(), &ports, device::list_devices()) {
        warn!("Failed to print listing: {}", e);
    }
    Ok(Outcome::Listed)
}

/// Prints a failed run's diagnostic to `out` and returns the exit status.
///
/// A missing device also gets the usage text.
pub fn report_error<W: Write>(out: &mut W, error: &BridgeError) -> i32 {
    let mut written = writeln!(out, "{}", error);
    if let BridgeError::DeviceNotFound { .. } = error {
        written = written.and_then(|()| writeln!(out, "{}", Args::command().render_help()));
    }
    if let Err(e) = written {
        warn!("Failed to print error report: {}", e);
    }
    error.exit_code()
}

/// Runs the event loop with the grab held for exactly its duration
pub fn run_loop<S, M>(source: S, engine: M, config: &Config) -> Result<LoopExit>
where
    S: EventSource + Grabbable,
    M: MidiEngine,
{
    let guard = GrabGuard::new(source, config.grab).map_err(|source| BridgeError::Grab {
        path: config.device_path.clone().unwrap_or_default(),
        source,
    })?;

    let mut event_loop = EventLoop::new(guard, engine, config);
    let result = event_loop.run();
    event_loop.source_mut().release();

    if let Err(e) = &result {
        error!("Event loop stopped: {}", e);
    }
    result
}

/// Full run for a parsed configuration
pub fn run(config: &Config) -> Result<Outcome> {
    if config.list {
        return list();
    }

    // installed first so an interrupt at any point of startup ends the run cleanly
    let shutdown = Shutdown::install()?;

    let path = device::resolve_device_path(
        config.device_path.as_deref(),
        device::list_devices(),
        TARGET_DEVICE_NAME,
    )?;

    let engine = DefaultMidiEngine::open(&config.port_name)?;
    let input = InputDevice::open(&path)?;

    let config = Config {
        device_path: Some(path),
        ..config.clone()
    };
    info!(
        "Bridging {} to MIDI port {} on channel {}",
        input.path().display(),
        engine.port_name(),
        config.channel
    );

    let exit = run_loop(EvdevSource::new(input, shutdown), engine, &config)?;
    Ok(exit.into())
}
