// config.rs

use crate::cli::Args;
use crate::error::BridgeError;
use log::{debug, info};
use std::fmt;
use std::path::PathBuf;

/// Name matched exactly when no device path is given
pub const TARGET_DEVICE_NAME: &str = "CubeTurner Keyboard";
pub const DEFAULT_PORT_NAME: &str = "lekatoMidiPort";
pub const DEFAULT_CHANNEL: &str = "10";

/// MIDI channel, stored as the wire value 0-15
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel(u8);

impl Channel {
    /// Converts the user-facing number (1-16) into a channel
    pub fn from_user(number: u8) -> Result<Self, BridgeError> {
        if !(1..=16).contains(&number) {
            return Err(BridgeError::InvalidChannel(number.to_string()));
        }
        Ok(Channel(number - 1))
    }

    pub fn wire(self) -> u8 {
        self.0
    }

    pub fn user(self) -> u8 {
        self.0 + 1
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user())
    }
}

/// Run configuration, fixed once parsed
#[derive(Debug, Clone)]
pub struct Config {
    pub channel: Channel,
    pub port_name: String,
    pub device_path: Option<PathBuf>,
    pub grab: bool,
    pub verbose: bool,
    pub list: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        debug!("Parsed arguments: {:?}", args);

        if let Some(path) = &args.device_path {
            info!("Explicit device path given: {}", path.display());
        }
        if args.grab {
            info!("Grab requested - device events will be swallowed");
        }

        Config {
            channel: args.channel,
            port_name: args.port_name,
            device_path: args.device_path,
            grab: args.grab,
            verbose: args.verbose,
            list: args.list,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            channel: Channel(9),
            port_name: DEFAULT_PORT_NAME.to_string(),
            device_path: None,
            grab: false,
            verbose: false,
            list: false,
        }
    }
}
