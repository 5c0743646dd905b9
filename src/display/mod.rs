// src/display/mod.rs

//! The display context: double-buffer lifecycle, composition surface, and
//! the public drawing API.
//!
//! One `Display` represents one physical display. All drawing targets the
//! off-screen composition surface through the rasterization engine;
//! nothing is visible until `flip()` copies the composition into the
//! newly selected physical buffer and pans the device to it. Drawing an
//! arbitrary number of primitives between flips therefore never tears the
//! visible image.
//!
//! The context replaces the usual global display singleton: construct as
//! many as you like against fake devices, but per process only one can
//! meaningfully own the hardware. Operations on a torn-down context are
//! defensive no-ops, enforced here rather than per call site.
//!
//! Single-threaded by design; callers serialize drawing and flips.

use anyhow::Result;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::color::Rgba;
use crate::config::Config;
use crate::device::console::ConsoleMode;
use crate::device::fbdev::FbDevice;
use crate::device::{DisplayDevice, Geometry};
use crate::font::{default_font, FontAtlas, FontMetrics};
use crate::raster::soft::SoftRaster;
use crate::raster::{RasterOps, TexEnv};
use crate::surface::{PixelFormat, Surface};
use crate::text;


pub struct Display {
    // declared before `device` so the composition surface is released
    // before the mapping it was composited into
    raster: Box<dyn RasterOps>,
    device: Option<Box<dyn DisplayDevice>>,
    console: Option<ConsoleMode>,
    font_dir: PathBuf,
    geometry: Geometry,
    active: usize,
}

impl Display {
    /// Bring up the real display: mute the console, negotiate and map the
    /// framebuffer, and bind a fresh composition surface.
    ///
    /// Fatal errors (`GfxError::DeviceUnavailable`,
    /// `GfxError::ModeSwitchFailure`) unwind every resource acquired up to
    /// that point, console mode included.
    pub fn open(config: &Config) -> Result<Self> {
        let console = match &config.console.path {
            Some(path) => ConsoleMode::acquire(path)?,
            None => None,
        };
        let device = FbDevice::open(&config.device.path)?;
        let mut display = Self::with_parts(Box::new(device), Box::new(SoftRaster::new()));
        display.console = console;
        display.font_dir = config.font.resource_dir.clone();
        info!(
            "display ready: {}x{}",
            display.geometry.width, display.geometry.height
        );
        Ok(display)
    }

    /// Assemble a display from an explicit device and rasterization
    /// engine. This is the seam tests and alternative engines use; no
    /// console handling, font resources resolved from the default
    /// directory.
    pub fn with_parts(device: Box<dyn DisplayDevice>, mut raster: Box<dyn RasterOps>) -> Self {
        let geometry = device.geometry();
        let composition = Surface::new(
            geometry.width,
            geometry.height,
            geometry.stride,
            PixelFormat::Rgb565,
        );
        raster.set_target(composition);
        let mut display = Self {
            raster,
            device: Some(device),
            console: None,
            font_dir: Config::default().font.resource_dir,
            geometry,
            active: 0,
        };
        // frame 0 starts out front, frame 1 is the first flip target
        if let Some(device) = display.device.as_mut() {
            device.set_active(0);
        }
        display
    }

    /// Visible width in pixels.
    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    /// Visible height in pixels.
    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// Index of the physical buffer most recently published (0 or 1).
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The device behind this display, while it is live.
    pub fn device(&self) -> Option<&dyn DisplayDevice> {
        self.device.as_deref()
    }

    /// Borrow the live composition surface.
    pub fn surface(&self) -> Option<&Surface> {
        self.raster.target()
    }

    /// Publish the composition surface: toggle the active buffer, copy the
    /// full frame into it, and pan the device there. The composition
    /// surface itself is unchanged, so drawing keeps accumulating on the
    /// same logical frame afterwards.
    pub fn flip(&mut self) {
        let Some(device) = self.device.as_mut() else {
            return;
        };
        let Some(target) = self.raster.target() else {
            return;
        };
        self.active ^= 1;
        let frame = device.frame_mut(self.active);
        let len = frame.len().min(target.data().len());
        frame[..len].copy_from_slice(&target.data()[..len]);
        device.set_active(self.active);
    }

    /// Set the draw color used by fills, text, and watermarking.
    pub fn set_color(&mut self, color: Rgba) {
        self.raster.set_color(color);
    }

    /// Fill a rectangle with the current draw color.
    pub fn fill(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.raster.fill_rect(x, y, w, h);
    }

    /// Advance width of `s` in pixels, against `font` or the embedded
    /// default.
    pub fn measure_text(&self, s: &str, font: Option<&FontAtlas>) -> i32 {
        text::measure(font.unwrap_or_else(|| default_font()), s)
    }

    /// Draw `s` with its top-left pen position at `(x, y)` in the current
    /// draw color. Returns the final pen x for run chaining.
    pub fn draw_text(&mut self, x: i32, y: i32, s: &str, font: Option<&FontAtlas>) -> i32 {
        text::draw(
            self.raster.as_mut(),
            font.unwrap_or_else(|| default_font()),
            x,
            y,
            s,
        )
    }

    /// Load a font resource by name from the configured resource
    /// directory. The caller owns the returned atlas.
    pub fn load_font(&self, name: &str) -> Result<FontAtlas> {
        FontAtlas::load(name, &self.font_dir)
    }

    /// Metrics of `font`, or of the embedded default.
    pub fn font_metrics(&self, font: Option<&FontAtlas>) -> FontMetrics {
        font.unwrap_or_else(|| default_font()).metrics()
    }

    /// Opaque copy of a `w x h` region of `source` onto the composition
    /// surface at `(dx, dy)`.
    #[allow(clippy::too_many_arguments)]
    pub fn blit(&mut self, source: &Surface, sx: i32, sy: i32, w: i32, h: i32, dx: i32, dy: i32) {
        self.raster
            .textured_rect(source, TexEnv::Replace, sx, sy, dx, dy, w, h);
    }

    /// Like `blit`, but modulated by the current draw color for
    /// semi-transparent overlay compositing.
    #[allow(clippy::too_many_arguments)]
    pub fn watermark(
        &mut self,
        source: &Surface,
        sx: i32,
        sy: i32,
        w: i32,
        h: i32,
        dx: i32,
        dy: i32,
    ) {
        self.raster
            .textured_rect(source, TexEnv::Modulate, sx, sy, dx, dy, w, h);
    }

    /// A fresh, independently owned copy of the current composition
    /// surface, or `None` once torn down. Releasing a snapshot is just
    /// dropping it.
    pub fn snapshot(&self) -> Option<Surface> {
        self.raster.target().cloned()
    }

    /// Write the current composition surface's raw bytes to a sink.
    pub fn write_frame_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        match self.raster.target() {
            Some(target) => sink.write_all(target.data()),
            None => Ok(()),
        }
    }

    /// Tear the display down: release the composition surface, unmap and
    /// close the device, and restore the console to text mode. Idempotent;
    /// every later drawing or flip call is a no-op.
    pub fn shutdown(&mut self) {
        if self.device.is_none() && self.raster.target().is_none() {
            return;
        }
        info!("display shutting down");
        self.raster.take_target();
        self.device = None;
        self.console = None;
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        self.shutdown();
    }
}
