use crate::midi::MidiError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that stop the bridge
#[derive(Debug)]
pub enum BridgeError {
    /// No explicit path was given and no device carries the expected name
    DeviceNotFound { name: String },
    /// The input device node could not be opened
    DeviceOpen { path: PathBuf, source: io::Error },
    /// User-facing channel outside 1-16
    InvalidChannel(String),
    /// Exclusive access to the device was refused
    Grab { path: PathBuf, source: io::Error },
    /// Reading from the device failed while running
    Read(io::Error),
    /// Creating the port or sending on it failed
    Midi(MidiError),
    /// The interrupt handler could not be installed
    Interrupt(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::DeviceNotFound { name } => write!(f, "{} device not found!", name),
            BridgeError::DeviceOpen { path, source } => {
                write!(f, "cannot open input device {}: {}", path.display(), source)
            }
            BridgeError::InvalidChannel(value) => write!(f, "Invalid channel number {:?}", value),
            BridgeError::Grab { path, source } => {
                write!(f, "cannot grab input device {}: {}", path.display(), source)
            }
            BridgeError::Read(e) => write!(f, "input device read failed: {}", e),
            BridgeError::Midi(e) => write!(f, "{}", e),
            BridgeError::Interrupt(msg) => write!(f, "cannot install interrupt handler: {}", msg),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BridgeError::DeviceOpen { source, .. } | BridgeError::Grab { source, .. } => {
                Some(source)
            }
            BridgeError::Read(e) => Some(e),
            BridgeError::Midi(e) => Some(e),
            _ => None,
        }
    }
}

impl BridgeError {
    /// Process exit status for a failed run; losing the device mid-run is 2
    pub fn exit_code(&self) -> i32 {
        match self {
            BridgeError::Read(_) => 2,
            _ => 1,
        }
    }
}

impl From<MidiError> for BridgeError {
    fn from(e: MidiError) -> Self {
        BridgeError::Midi(e)
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
