use std::error::Error;
use std::fmt;

/// Custom error type for MIDI operations
#[derive(Debug)]
pub enum MidiError {
    /// Error when sending a MIDI message
    SendError(String),
    /// Error when creating or connecting a MIDI port
    ConnectionError(String),
}

impl fmt::Display for MidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiError::SendError(msg) => write!(f, "MIDI send error: {}", msg),
            MidiError::ConnectionError(msg) => write!(f, "MIDI connection error: {}", msg),
        }
    }
}

impl Error for MidiError {}

impl From<midir::InitError> for MidiError {
    fn from(e: midir::InitError) -> Self {
        MidiError::ConnectionError(e.to_string())
    }
}

impl<T> From<midir::ConnectError<T>> for MidiError {
    fn from(e: midir::ConnectError<T>) -> Self {
        MidiError::ConnectionError(e.to_string())
    }
}

impl From<midir::SendError> for MidiError {
    fn from(e: midir::SendError) -> Self {
        MidiError::SendError(e.to_string())
    }
}

/// Highest value a MIDI data byte can carry
pub const DATA_MAX: u8 = 0x7F;

/// A message written to the output port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    /// Control Change message with controller number and value
    ControlChange {
        channel: u8,
        controller: u8,
        value: u8,
    },
}

impl MidiMessage {
    pub fn control_change(channel: u8, controller: u8, value: u8) -> Self {
        MidiMessage::ControlChange {
            channel,
            controller,
            value,
        }
    }

    /// Wire encoding: status byte with the channel in the low nibble, then the data bytes
    pub fn to_bytes(&self) -> [u8; 3] {
        match *self {
            MidiMessage::ControlChange {
                channel,
                controller,
                value,
            } => [
                0xB0 | (channel & 0x0F),
                controller & DATA_MAX,
                value & DATA_MAX,
            ],
        }
    }
}

impl fmt::Display for MidiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiMessage::ControlChange {
                channel,
                controller,
                value,
            } => write!(
                f,
                "control_change channel={} control={} value={}",
                channel, controller, value
            ),
        }
    }
}

/// Result type for MIDI operations
pub type Result<T> = std::result::Result<T, MidiError>;

/// Trait defining the interface for MIDI output implementations
pub trait MidiEngine {
    /// Sends a MIDI message to the port
    fn send(&mut self, msg: MidiMessage) -> Result<()>;
}
