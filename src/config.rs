// src/config.rs

//! Configuration for display bring-up.
//!
//! Every field has a sensible default for the common single-framebuffer
//! target, so `Config::default()` is enough for most callers; deployments
//! with a different device layout load a JSON file over the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Complete configuration for a `Display`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Framebuffer device settings.
    pub device: DeviceConfig,
    /// Console (virtual terminal) settings.
    pub console: ConsoleConfig,
    /// Font resource settings.
    pub font: FontConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Path of the framebuffer character device.
    pub path: PathBuf,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            path: PathBuf::from("/dev/fb0"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Virtual terminal to mute while graphics mode is active.
    /// `None` skips the console mode switch entirely.
    pub path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            path: Some(PathBuf::from("/dev/tty0")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directory searched for `<name>.dat` font resources.
    pub resource_dir: PathBuf,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            resource_dir: PathBuf::from("/res/fonts"),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
