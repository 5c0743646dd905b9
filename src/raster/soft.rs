// src/raster/soft.rs

//! Reference software implementation of `RasterOps`.
//!
//! Plays the role a hardware-assisted 2D engine would on a real product:
//! clipped rectangle fills, opaque copies, and source-alpha compositing
//! into an RGB565 target. Single-channel textures act as coverage masks
//! over the current draw color, which is how glyph atlases reach the
//! screen.

use log::trace;

use crate::color::Rgba;
use crate::raster::{RasterOps, TexEnv};
use crate::surface::{PixelFormat, Surface};

pub struct SoftRaster {
    target: Option<Surface>,
    color: Rgba,
}

impl SoftRaster {
    pub fn new() -> Self {
        Self {
            target: None,
            color: Rgba::BLACK,
        }
    }
}

impl Default for SoftRaster {
    fn default() -> Self {
        Self::new()
    }
}

fn blend_channel(fg: u32, bg: u32, alpha: u32) -> u32 {
    (fg * alpha + bg * (255 - alpha)) / 255
}

fn read_565(target: &Surface, x: u32, y: u32) -> u16 {
    let off = target.pixel_offset(x, y);
    let d = target.data();
    u16::from_le_bytes([d[off], d[off + 1]])
}

fn write_565(target: &mut Surface, x: u32, y: u32, px: u16) {
    let off = target.pixel_offset(x, y);
    target.data_mut()[off..off + 2].copy_from_slice(&px.to_le_bytes());
}

/// Source-alpha blend `src` over the RGB565 pixel at `(x, y)`.
fn composite_565(target: &mut Surface, x: u32, y: u32, src: Rgba) {
    match src.a {
        0 => {}
        255 => write_565(target, x, y, src.to_rgb565()),
        a => {
            let bg = Rgba::from_rgb565(read_565(target, x, y));
            let a = a as u32;
            let out = Rgba::opaque(
                blend_channel(src.r as u32, bg.r as u32, a) as u8,
                blend_channel(src.g as u32, bg.g as u32, a) as u8,
                blend_channel(src.b as u32, bg.b as u32, a) as u8,
            );
            write_565(target, x, y, out.to_rgb565());
        }
    }
}

/// Clip `[pos, pos + len)` to `[0, bound)`, returning the in-range span.
fn clip_span(pos: i32, len: i32, bound: u32) -> Option<(u32, u32)> {
    let start = pos.max(0);
    let end = pos.saturating_add(len.max(0)).min(bound as i32);
    if start >= end {
        None
    } else {
        Some((start as u32, end as u32))
    }
}

impl RasterOps for SoftRaster {
    fn set_target(&mut self, target: Surface) {
        debug_assert_eq!(target.format(), PixelFormat::Rgb565);
        self.target = Some(target);
    }

    fn take_target(&mut self) -> Option<Surface> {
        self.target.take()
    }

    fn target(&self) -> Option<&Surface> {
        self.target.as_ref()
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let color = self.color;
        let Some(target) = self.target.as_mut() else {
            return;
        };
        let Some((x0, x1)) = clip_span(x, w, target.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(y, h, target.height()) else {
            return;
        };
        trace!("fill_rect ({},{}) {}x{} -> cols {}..{}", x, y, w, h, x0, x1);
        for py in y0..y1 {
            for px in x0..x1 {
                composite_565(target, px, py, color);
            }
        }
    }

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
    ) {
        let color = self.color;
        let Some(target) = self.target.as_mut() else {
            return;
        };
        let Some((x0, x1)) = clip_span(dst_x, w, target.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(dst_y, h, target.height()) else {
            return;
        };
        for py in y0..y1 {
            let sy = src_y + (py as i32 - dst_y);
            if sy < 0 || sy as u32 >= tex.height() {
                continue;
            }
            for px in x0..x1 {
                let sx = src_x + (px as i32 - dst_x);
                if sx < 0 || sx as u32 >= tex.width() {
                    continue;
                }
                let (sx, sy) = (sx as u32, sy as u32);
                match tex.format() {
                    PixelFormat::Alpha8 => {
                        // Coverage mask over the current draw color; the
                        // env modes coincide for colorless textures.
                        let coverage = tex.data()[tex.pixel_offset(sx, sy)] as u32;
                        let a = (color.a as u32 * coverage / 255) as u8;
                        composite_565(target, px, py, Rgba::new(color.r, color.g, color.b, a));
                    }
                    PixelFormat::Rgb565 => {
                        let texel = read_565(tex, sx, sy);
                        match env {
                            TexEnv::Replace => write_565(target, px, py, texel),
                            TexEnv::Modulate => {
                                let t = Rgba::from_rgb565(texel);
                                let src = Rgba::new(
                                    (t.r as u32 * color.r as u32 / 255) as u8,
                                    (t.g as u32 * color.g as u32 / 255) as u8,
                                    (t.b as u32 * color.b as u32 / 255) as u8,
                                    color.a,
                                );
                                composite_565(target, px, py, src);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster_with_target(w: u32, h: u32) -> SoftRaster {
        let mut r = SoftRaster::new();
        r.set_target(Surface::new(w, h, w, PixelFormat::Rgb565));
        r
    }

    fn pixel(r: &SoftRaster, x: u32, y: u32) -> u16 {
        read_565(r.target().unwrap(), x, y)
    }

    #[test]
    fn test_ops_without_target_are_noops() {
        let mut r = SoftRaster::new();
        r.set_color(Rgba::WHITE);
        r.fill_rect(0, 0, 4, 4);
        let tex = Surface::new(2, 2, 2, PixelFormat::Alpha8);
        r.textured_rect(&tex, TexEnv::Replace, 0, 0, 0, 0, 2, 2);
        assert!(r.target().is_none());
    }

    #[test]
    fn test_opaque_fill_writes_packed_color() {
        let mut r = raster_with_target(4, 4);
        r.set_color(Rgba::opaque(255, 0, 0));
        r.fill_rect(1, 1, 2, 2);
        assert_eq!(pixel(&r, 1, 1), 0xf800);
        assert_eq!(pixel(&r, 2, 2), 0xf800);
        assert_eq!(pixel(&r, 0, 0), 0, "outside the rect stays untouched");
        assert_eq!(pixel(&r, 3, 3), 0);
    }

    #[test]
    fn test_fill_clips_to_target() {
        let mut r = raster_with_target(4, 4);
        r.set_color(Rgba::WHITE);
        r.fill_rect(-2, -2, 100, 100);
        assert_eq!(pixel(&r, 0, 0), 0xffff);
        assert_eq!(pixel(&r, 3, 3), 0xffff);
    }

    #[test]
    fn test_zero_and_negative_extents_draw_nothing() {
        let mut r = raster_with_target(4, 4);
        r.set_color(Rgba::WHITE);
        r.fill_rect(1, 1, 0, 3);
        r.fill_rect(1, 1, -5, -5);
        assert!(r.target().unwrap().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_half_alpha_fill_blends_toward_color() {
        let mut r = raster_with_target(1, 1);
        r.set_color(Rgba::new(255, 255, 255, 128));
        r.fill_rect(0, 0, 1, 1);
        let out = Rgba::from_rgb565(pixel(&r, 0, 0));
        // 128/255 of white over black: mid grey, within 565 quantization.
        assert!((out.r as i32 - 128).abs() <= 8, "r = {}", out.r);
        assert!((out.g as i32 - 128).abs() <= 8, "g = {}", out.g);
    }

    #[test]
    fn test_alpha8_texture_masks_current_color() {
        let mut r = raster_with_target(2, 1);
        r.set_color(Rgba::opaque(0, 255, 0));
        let mut tex = Surface::new(2, 1, 2, PixelFormat::Alpha8);
        tex.data_mut()[0] = 255; // left texel opaque, right transparent
        r.textured_rect(&tex, TexEnv::Replace, 0, 0, 0, 0, 2, 1);
        assert_eq!(pixel(&r, 0, 0), 0x07e0);
        assert_eq!(pixel(&r, 1, 0), 0);
    }

    #[test]
    fn test_rgb565_replace_copies_source_region() {
        let mut r = raster_with_target(2, 2);
        let mut tex = Surface::new(2, 2, 2, PixelFormat::Rgb565);
        write_565(&mut tex, 1, 1, 0x1234);
        r.textured_rect(&tex, TexEnv::Replace, 1, 1, 0, 0, 1, 1);
        assert_eq!(pixel(&r, 0, 0), 0x1234);
    }

    #[test]
    fn test_modulate_scales_texel_by_draw_color() {
        let mut r = raster_with_target(1, 1);
        r.set_color(Rgba::opaque(0, 0, 0)); // modulate white texel to black
        let mut tex = Surface::new(1, 1, 1, PixelFormat::Rgb565);
        write_565(&mut tex, 0, 0, 0xffff);
        // seed the target with something visible first
        r.set_color(Rgba::WHITE);
        r.fill_rect(0, 0, 1, 1);
        r.set_color(Rgba::opaque(0, 0, 0));
        r.textured_rect(&tex, TexEnv::Modulate, 0, 0, 0, 0, 1, 1);
        assert_eq!(pixel(&r, 0, 0), 0);
    }

    #[test]
    fn test_textured_rect_skips_out_of_bounds_samples() {
        let mut r = raster_with_target(4, 1);
        r.set_color(Rgba::WHITE);
        let mut tex = Surface::new(2, 1, 2, PixelFormat::Alpha8);
        tex.data_mut().fill(255);
        // destination wider than the texture: the uncovered tail is untouched
        r.textured_rect(&tex, TexEnv::Replace, 0, 0, 0, 0, 4, 1);
        assert_eq!(pixel(&r, 1, 0), 0xffff);
        assert_eq!(pixel(&r, 2, 0), 0);
        assert_eq!(pixel(&r, 3, 0), 0);
    }
}
