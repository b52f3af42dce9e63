pub mod bridge;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod event_loop;
pub mod keymap;
pub mod logging;
pub mod midi;
pub mod shutdown;

pub use cli::Args;
pub use config::{Channel, Config};
pub use error::BridgeError;
