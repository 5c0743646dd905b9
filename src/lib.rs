// src/lib.rs

//! Double-buffered framebuffer graphics for a boot-time UI.
//!
//! The crate negotiates a 16-bit pixel format with a Linux framebuffer
//! device, keeps all drawing on an off-screen composition surface, and
//! publishes frames with an explicit double-buffer flip. Text comes from
//! compact run-length-encoded glyph atlases (an embedded default plus
//! loadable `.dat` resources); images are composited with opaque or
//! color-modulated blits.
//!
//! ```no_run
//! use bootgfx::{Config, Display, Rgba};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut display = Display::open(&Config::default())?;
//! display.set_color(Rgba::WHITE);
//! display.draw_text(16, 16, "loading...", None);
//! display.flip();
//! # Ok(())
//! # }
//! ```
//!
//! Everything runs synchronously on the caller's thread; one `Display`
//! per physical display, torn down explicitly or on drop.

pub mod color;
pub mod config;
pub mod device;
pub mod display;
pub mod error;
pub mod font;
pub mod raster;
pub mod surface;
pub mod text;

pub use color::Rgba;
pub use config::Config;
pub use display::Display;
pub use error::GfxError;
pub use font::{default_font, FontAtlas, FontMetrics};
pub use surface::{PixelFormat, Surface};
