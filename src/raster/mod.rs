// src/raster/mod.rs

//! The seam to the 2D rasterization engine.
//!
//! The composition pipeline never touches pixels of its render target
//! directly; it issues draw intents against `RasterOps`. The engine behind
//! the trait is out of scope for this crate: `soft::SoftRaster` is the
//! minimal reference implementation used by the built-in pipeline and by
//! tests, and a hardware-assisted engine can slot in without touching any
//! caller.
//!
//! The target surface is owned by the engine while bound (set with
//! `set_target`, recovered with `take_target`), so no live reference to the
//! composition buffer can outlast the display that owns the engine.

pub mod soft;

use crate::color::Rgba;
use crate::surface::Surface;

/// Texture environment for textured rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexEnv {
    /// Source texels replace the destination (alpha-format textures mask
    /// the current draw color instead, since they carry no color of their
    /// own).
    Replace,
    /// Source texels are modulated by the current draw color before
    /// compositing, for semi-transparent overlays.
    Modulate,
}

/// Draw intents the composition pipeline issues.
///
/// Every operation is a defined no-op while no target is bound; the
/// pipeline relies on that to make drawing after teardown harmless.
pub trait RasterOps {
    /// Bind the color-buffer target. Replaces any previous target.
    fn set_target(&mut self, target: Surface);

    /// Unbind and return the target, if one is bound.
    fn take_target(&mut self) -> Option<Surface>;

    /// The currently bound target.
    fn target(&self) -> Option<&Surface>;

    /// Set the current draw color (used by fills, glyph masks, and
    /// `TexEnv::Modulate`).
    fn set_color(&mut self, color: Rgba);

    /// Fill an axis-aligned rectangle with the current draw color,
    /// source-alpha blended. Clipped to the target.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32);

    /// Draw a `w x h` textured rectangle at `(dst_x, dst_y)`, sampling the
    /// texture starting at `(src_x, src_y)`. Clipped to both surfaces.
    #[allow(clippy::too_many_arguments)]
    fn textured_rect(
        &mut self,
        tex: &Surface,
        env: TexEnv,
        src_x: i32,
        src_y: i32,
        dst_x: i32,
        dst_y: i32,
        w: i32,
        h: i32,
    );
}
