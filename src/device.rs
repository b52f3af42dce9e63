//! Input device discovery, opening and exclusive access.
//!
//! Devices are located either by an explicit path or by matching the exact
//! name the turner reports. Grabbing is tied to [`GrabGuard`] so the device
//! is released exactly once on every way out of the event loop.

use crate::error::{BridgeError, Result};
use crate::event_loop::{EventSource, Fetched, InputRecord};
use crate::shutdown::Shutdown;
use evdev::Device;
use log::{debug, error, info};
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use std::io;
use std::os::fd::{AsRawFd, BorrowedFd};
use std::path::{Path, PathBuf};

/// Path and name of an input device the OS reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub path: PathBuf,
    pub name: String,
}

/// Enumerates input devices in OS order
pub fn list_devices() -> impl Iterator<Item = DeviceInfo> {
    evdev::enumerate().map(|(path, device)| DeviceInfo {
        name: device.name().unwrap_or_default().to_string(),
        path,
    })
}

/// First device whose name equals `target_name` exactly
pub fn find_named_device<I>(devices: I, target_name: &str) -> Option<DeviceInfo>
where
    I: IntoIterator<Item = DeviceInfo>,
{
    devices.into_iter().find(|dev| dev.name == target_name)
}

/// Explicit path wins verbatim; otherwise the device must be found by name
pub fn resolve_device_path<I>(
    explicit: Option<&Path>,
    devices: I,
    target_name: &str,
) -> Result<PathBuf>
where
    I: IntoIterator<Item = DeviceInfo>,
{
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match find_named_device(devices, target_name) {
        Some(dev) => {
            info!("Found {} at {}", dev.name, dev.path.display());
            Ok(dev.path)
        }
        None => Err(BridgeError::DeviceNotFound {
            name: target_name.to_string(),
        }),
    }
}

/// Exclusive-access control over an input device
pub trait Grabbable {
    fn grab(&mut self) -> io::Result<()>;
    fn ungrab(&mut self) -> io::Result<()>;
}

/// Holds a source and, if requested, its grab; releases on drop
pub struct GrabGuard<S: Grabbable> {
    inner: S,
    held: bool,
}

impl<S: Grabbable> GrabGuard<S> {
    pub fn new(mut inner: S, grab: bool) -> io::Result<Self> {
        if grab {
            inner.grab()?;
            info!("Input device grabbed");
        }
        Ok(GrabGuard { inner, held: grab })
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Ungrabs if the grab is held; safe to call any number of times
    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        match self.inner.ungrab() {
            Ok(()) => info!("Input device released"),
            Err(e) => debug!("Ungrab failed, device probably gone: {}", e),
        }
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: Grabbable> Drop for GrabGuard<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: Grabbable + EventSource> EventSource for GrabGuard<S> {
    fn fetch(&mut self) -> Result<Fetched> {
        self.inner.fetch()
    }
}

/// An opened evdev device
pub struct InputDevice {
    path: PathBuf,
    device: Device,
}

impl InputDevice {
    pub fn open(path: &Path) -> Result<Self> {
        let device = Device::open(path).map_err(|source| {
            error!("Open {} failed: {}", path.display(), source);
            BridgeError::DeviceOpen {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(
            "Opened input device {} ({})",
            path.display(),
            device.name().unwrap_or("unnamed")
        );
        Ok(InputDevice {
            path: path.to_path_buf(),
            device,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Grabbable for InputDevice {
    fn grab(&mut self) -> io::Result<()> {
        self.device.grab()
    }

    fn ungrab(&mut self) -> io::Result<()> {
        self.device.ungrab()
    }
}

/// Real event source: blocks on the device until it is readable or
/// shutdown is requested
pub struct EvdevSource {
    device: InputDevice,
    shutdown: Shutdown,
}

impl EvdevSource {
    pub fn new(device: InputDevice, shutdown: Shutdown) -> Self {
        EvdevSource { device, shutdown }
    }

    /// Returns (device readable, woken for shutdown)
    fn wait(&self) -> io::Result<(bool, bool)> {
        // SAFETY: the fd is owned by `self.device`, which outlives this call.
        let device_fd = unsafe { BorrowedFd::borrow_raw(self.device.device.as_raw_fd()) };
        let mut fds = [
            PollFd::new(device_fd, PollFlags::POLLIN),
            PollFd::new(self.shutdown.wake_fd(), PollFlags::POLLIN),
        ];

        loop {
            match poll(&mut fds, PollTimeout::NONE) {
                Ok(_) => break,
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(io::Error::from(e)),
            }
        }

        let fired = |fd: &PollFd<'_>| fd.revents().is_some_and(|r| !r.is_empty());
        Ok((fired(&fds[0]), fired(&fds[1])))
    }
}

impl Grabbable for EvdevSource {
    fn grab(&mut self) -> io::Result<()> {
        self.device.grab()
    }

    fn ungrab(&mut self) -> io::Result<()> {
        self.device.ungrab()
    }
}

impl EventSource for EvdevSource {
    fn fetch(&mut self) -> Result<Fetched> {
        loop {
            if self.shutdown.is_requested() {
                return Ok(Fetched::Interrupted);
            }

            let (readable, woken) = self.wait().map_err(BridgeError::Read)?;
            if woken {
                return Ok(Fetched::Interrupted);
            }
            if !readable {
                continue;
            }

            // POLLERR/POLLHUP after unplug surface here as a read error
            let device = &mut self.device;
            let events = match device.device.fetch_events() {
                Ok(events) => events.map(InputRecord::from).collect::<Vec<_>>(),
                Err(e) => {
                    error!("Reading {} failed: {}", device.path.display(), e);
                    return Err(BridgeError::Read(e));
                }
            };
            return Ok(Fetched::Events(events));
        }
    }
}
