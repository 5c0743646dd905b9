// src/device/console.rs

//! Console graphics-mode guard.
//!
//! While the framebuffer is being drawn, the text console has to be muted
//! or the kernel will scribble log output over the frame. The guard
//! switches the VT to `KD_GRAPHICS` for its lifetime and restores
//! `KD_TEXT` on drop.

use anyhow::Result;
use log::{debug, info, warn};
use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use crate::error::GfxError;

const KDSETMODE: libc::c_ulong = 0x4b3a;
const KD_TEXT: libc::c_int = 0;
const KD_GRAPHICS: libc::c_int = 1;

nix::ioctl_write_int_bad!(kd_set_mode, KDSETMODE);

/// Holds the console in graphics mode until dropped.
pub struct ConsoleMode {
    file: std::fs::File,
    path: PathBuf,
}

impl ConsoleMode {
    /// Switch the console at `path` into graphics mode.
    ///
    /// A console that cannot be opened is not an error (headless targets
    /// have no VT) and yields `None`. A console that opens but refuses
    /// the mode switch is fatal (`GfxError::ModeSwitchFailure`): the VT is
    /// there and would corrupt the display if left in text mode.
    pub fn acquire(path: &Path) -> Result<Option<Self>> {
        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(path)
        {
            Ok(file) => file,
            Err(e) => {
                info!("console {} unavailable, skipping mode switch: {}", path.display(), e);
                return Ok(None);
            }
        };
        if let Err(e) = unsafe { kd_set_mode(file.as_raw_fd(), KD_GRAPHICS) } {
            return Err(GfxError::ModeSwitchFailure {
                device: path.to_path_buf(),
                source: io::Error::from_raw_os_error(e as i32),
            }
            .into());
        }
        debug!("console {} switched to graphics mode", path.display());
        Ok(Some(Self {
            file,
            path: path.to_path_buf(),
        }))
    }
}

impl Drop for ConsoleMode {
    fn drop(&mut self) {
        match unsafe { kd_set_mode(self.file.as_raw_fd(), KD_TEXT) } {
            Ok(_) => debug!("console {} restored to text mode", self.path.display()),
            Err(e) => warn!(
                "failed to restore {} to text mode: {}",
                self.path.display(),
                e
            ),
        }
    }
}
