use crate::config::{Channel, DEFAULT_CHANNEL, DEFAULT_PORT_NAME};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lekato cube turner to MIDI", long_about = None)]
pub struct Args {
    /// Input device path, e.g. /dev/input/event15
    #[arg(short = 'd', long = "device", value_name = "PATH")]
    pub device_path: Option<PathBuf>,

    /// List MIDI output ports, input devices and quit
    #[arg(short, long)]
    pub list: bool,

    /// MIDI output port name to create
    #[arg(short = 'n', long, default_value = DEFAULT_PORT_NAME)]
    pub port_name: String,

    /// MIDI channel number (1-16)
    #[arg(short, long, default_value = DEFAULT_CHANNEL, value_parser = parse_channel)]
    pub channel: Channel,

    /// Grab input device, swallow input events
    #[arg(short, long)]
    pub grab: bool,

    /// Print MIDI messages
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses a user-facing channel (1-16) for clap
pub fn parse_channel(value: &str) -> Result<Channel, String> {
    let number: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid channel number {:?}", value))?;
    Channel::from_user(number).map_err(|e| e.to_string())
}
