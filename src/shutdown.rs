//! Ctrl+C / termination handling that can wake a blocked device read.

use crate::error::{BridgeError, Result};
use log::info;
use std::io::Write;
use std::os::fd::{AsFd, BorrowedFd};
use std::os::unix::net::UnixStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct Shutdown {
    requested: Arc<AtomicBool>,
    wake_rx: UnixStream,
}

impl Shutdown {
    /// Installs the process-wide handler; may only be called once per process.
    pub fn install() -> Result<Self> {
        let (wake_tx, wake_rx) =
            UnixStream::pair().map_err(|e| BridgeError::Interrupt(e.to_string()))?;
        let requested = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&requested);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
            // the reader only needs to become readable, the byte itself is never read
            let _ = (&wake_tx).write_all(&[1]);
        })
        .map_err(|e| BridgeError::Interrupt(e.to_string()))?;

        info!("Interrupt handler installed");
        Ok(Shutdown { requested, wake_rx })
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Becomes readable once shutdown is requested
    pub fn wake_fd(&self) -> BorrowedFd<'_> {
        self.wake_rx.as_fd()
    }
}
