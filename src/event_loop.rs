// event_loop.rs

use crate::config::{Channel, Config};
use crate::error::Result;
use crate::keymap::Direction;
use crate::midi::{MidiEngine, MidiMessage, DATA_MAX};
use evdev::{EventType, InputEvent, Key};
use log::{debug, info, warn};
use std::io::{self, Write};

/// One event as read from the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRecord {
    pub kind: EventType,
    pub code: u16,
    pub value: i32,
}

impl InputRecord {
    pub fn new(kind: EventType, code: u16, value: i32) -> Self {
        InputRecord { kind, code, value }
    }

    /// A key event; value 0 is a release, anything else a press
    pub fn key(key: Key, value: i32) -> Self {
        Self::new(EventType::KEY, key.code(), value)
    }

    pub fn is_key(&self) -> bool {
        self.kind == EventType::KEY
    }

    pub fn is_press(&self) -> bool {
        self.value != 0
    }
}

impl From<InputEvent> for InputRecord {
    fn from(ev: InputEvent) -> Self {
        InputRecord::new(ev.event_type(), ev.code(), ev.value())
    }
}

/// What a blocking read produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Events(Vec<InputRecord>),
    Interrupted,
    EndOfInput,
}

/// Blocking producer of input events
pub trait EventSource {
    /// Blocks until events arrive, an interrupt is requested or input ends
    fn fetch(&mut self) -> Result<Fetched>;
}

/// Why the loop stopped without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Interrupted,
    EndOfInput,
}

/// Maps a key event on one of the turner's keys to its CC message.
///
/// Press and release are taken from the event value alone, so key-repeat
/// events produce another CC 127 each time.
pub fn translate(record: &InputRecord, channel: Channel) -> Option<(Direction, MidiMessage)> {
    if !record.is_key() {
        return None;
    }
    let direction = Direction::from_code(record.code)?;
    let value = if record.is_press() { DATA_MAX } else { 0 };
    Some((
        direction,
        MidiMessage::control_change(channel.wire(), direction.controller(), value),
    ))
}

pub struct EventLoop<S, M> {
    source: S,
    engine: M,
    channel: Channel,
    trace: Option<Box<dyn Write>>,
}

impl<S: EventSource, M: MidiEngine> EventLoop<S, M> {
    pub fn new(source: S, engine: M, config: &Config) -> Self {
        let trace: Option<Box<dyn Write>> = if config.verbose {
            Some(Box::new(io::stdout()))
        } else {
            None
        };
        EventLoop {
            source,
            engine,
            channel: config.channel,
            trace,
        }
    }

    /// Sends verbose trace lines to `writer` instead of stdout
    pub fn with_trace(mut self, writer: Box<dyn Write>) -> Self {
        self.trace = Some(writer);
        self
    }

    pub fn run(&mut self) -> Result<LoopExit> {
        info!("Event loop started on channel {}", self.channel);
        loop {
            match self.source.fetch()? {
                Fetched::Events(records) => {
                    for record in &records {
                        self.handle(record)?;
                    }
                }
                Fetched::Interrupted => {
                    info!("Interrupted, leaving event loop");
                    return Ok(LoopExit::Interrupted);
                }
                Fetched::EndOfInput => {
                    info!("Input ended, leaving event loop");
                    return Ok(LoopExit::EndOfInput);
                }
            }
        }
    }

    fn handle(&mut self, record: &InputRecord) -> Result<()> {
        let Some((direction, msg)) = translate(record, self.channel) else {
            return Ok(());
        };

        let action = if record.is_press() {
            "press"
        } else {
            "release"
        };
        debug!("{} {} -> {}", action, direction, msg);
        self.trace_line(format_args!(
            "{}: {} (cc {})",
            action,
            direction,
            direction.controller()
        ));
        self.trace_line(format_args!("Sent {}", msg));

        self.engine.send(msg)?;
        Ok(())
    }

    fn trace_line(&mut self, line: std::fmt::Arguments<'_>) {
        if let Some(out) = self.trace.as_mut() {
            if let Err(e) = writeln!(out, "{}", line) {
                warn!("Failed to write trace line: {}", e);
            }
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
