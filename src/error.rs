// src/error.rs

//! Error taxonomy for display bring-up and font loading.
//!
//! Fatal errors only occur on the init and load paths; drawing operations
//! on a torn-down display are defensive no-ops, and per-frame device
//! failures (a refused pan ioctl) are logged and swallowed because a
//! headless boot UI has no recovery path for them.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by `bootgfx` init and resource loading.
///
/// Carried inside `anyhow::Error` at the public boundary; callers that need
/// to distinguish cases can `downcast_ref::<GfxError>()`.
#[derive(Debug)]
pub enum GfxError {
    /// The framebuffer device could not be opened, queried, or mapped.
    DeviceUnavailable {
        device: PathBuf,
        source: io::Error,
    },
    /// The console device opened but refused the graphics-mode switch.
    ModeSwitchFailure {
        device: PathBuf,
        source: io::Error,
    },
    /// No font resource resolved for the given name, or its header was
    /// malformed. Nothing is installed on failure.
    FontLoad { name: String, reason: String },
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfxError::DeviceUnavailable { device, source } => {
                write!(f, "display device {} unavailable: {}", device.display(), source)
            }
            GfxError::ModeSwitchFailure { device, source } => {
                write!(
                    f,
                    "failed to switch {} to graphics mode: {}",
                    device.display(),
                    source
                )
            }
            GfxError::FontLoad { name, reason } => {
                write!(f, "failed to load font {:?}: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for GfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GfxError::DeviceUnavailable { source, .. } => Some(source),
            GfxError::ModeSwitchFailure { source, .. } => Some(source),
            GfxError::FontLoad { .. } => None,
        }
    }
}
