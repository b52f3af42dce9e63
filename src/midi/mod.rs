//! MIDI output for the bridge
//!
//! The main components are:
//! - [`MidiEngine`] trait for sending MIDI messages
//! - [`VirtualPortEngine`] for the virtual output port via midir
//! - [`MockMidiEngine`] for testing
//!
mod engine;
pub mod midir_engine;
pub mod mock_engine;

pub use engine::{MidiEngine, MidiError, MidiMessage, Result, DATA_MAX};

pub use midir_engine::VirtualPortEngine;
pub use mock_engine::MockMidiEngine;

// Set default engine type
pub type DefaultMidiEngine = VirtualPortEngine;
