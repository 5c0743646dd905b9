// src/text.rs

//! Glyph-run measurement and drawing.
//!
//! Strings are treated as byte sequences; codes in `[32, 127)` index the
//! atlas and everything else is zero-width with no draw side effect, so a
//! stray control byte in a label simply disappears instead of smearing the
//! last atlas cell across the screen.

use crate::font::FontAtlas;
use crate::raster::{RasterOps, TexEnv};

/// Advance width of `text` in pixels. Pure; draws nothing.
pub fn measure(font: &FontAtlas, text: &str) -> i32 {
    text.bytes().map(|b| font.glyph_width(b) as i32).sum()
}

/// Draw `text` with its top-left pen position at `(x, y)`, one textured
/// rectangle per glyph. Returns the final pen x, which equals
/// `x + measure(font, text)`; callers chain runs off the return value.
pub fn draw(raster: &mut dyn RasterOps, font: &FontAtlas, x: i32, y: i32, text: &str) -> i32 {
    let mut pen = x;
    for b in text.bytes() {
        let cwidth = font.glyph_width(b);
        if cwidth > 0 {
            raster.textured_rect(
                font.texture(),
                TexEnv::Replace,
                font.glyph_offset(b) as i32,
                0,
                pen,
                y,
                cwidth as i32,
                font.cell_height() as i32,
            );
        }
        pen += cwidth as i32;
    }
    pen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PixelFormat, Surface};
    use crate::Rgba;

    /// Records draw intents instead of touching pixels.
    #[derive(Default)]
    struct RecordingRaster {
        target: Option<Surface>,
        rects: Vec<(i32, i32, i32, i32, i32, i32)>, // src_x, src_y, dst_x, dst_y, w, h
    }

    impl RasterOps for RecordingRaster {
        fn set_target(&mut self, target: Surface) {
            self.target = Some(target);
        }
        fn take_target(&mut self) -> Option<Surface> {
            self.target.take()
        }
        fn target(&self) -> Option<&Surface> {
            self.target.as_ref()
        }
        fn set_color(&mut self, _color: Rgba) {}
        fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32) {}
        fn textured_rect(
            &mut self,
            _tex: &Surface,
            _env: TexEnv,
            src_x: i32,
            src_y: i32,
            dst_x: i32,
            dst_y: i32,
            w: i32,
            h: i32,
        ) {
            self.rects.push((src_x, src_y, dst_x, dst_y, w, h));
        }
    }

    /// A 96-cell atlas with per-cell width 3 and height 5.
    fn test_font() -> FontAtlas {
        // 96 * 3 * 5 = 1440 background pixels = 11 * 127 + 43
        let mut stream = vec![0x7fu8; 11];
        stream.push(0x2b);
        FontAtlas::from_rle(96 * 3, 5, 3, &stream).unwrap()
    }

    #[test]
    fn test_measure_sums_per_glyph_widths() {
        let font = test_font();
        assert_eq!(measure(&font, "abc"), 9);
        assert_eq!(measure(&font, ""), 0);
    }

    #[test]
    fn test_measure_matches_widths_derived_from_the_offset_grid() {
        // The embedded font's offset table is the uniform grid i * cell,
        // so an independent derivation is printable-count * cell width.
        let font = crate::font::default_font();
        let s = "Hello, world!";
        let cell = font.metrics().max_glyph_width as i32;
        assert_eq!(measure(font, s), s.len() as i32 * cell);
    }

    #[test]
    fn test_out_of_range_bytes_contribute_nothing() {
        let font = test_font();
        assert_eq!(measure(&font, "a\tb"), 6);
        assert_eq!(measure(&font, "\u{7f}"), 0);
        assert_eq!(measure(&font, "\n\r\x1b"), 0);
    }

    #[test]
    fn test_draw_returns_pen_plus_measure() {
        let font = test_font();
        let mut raster = RecordingRaster::default();
        let end = draw(&mut raster, &font, 7, 3, "xyz");
        assert_eq!(end, 7 + measure(&font, "xyz"));
    }

    #[test]
    fn test_draw_advances_pen_per_glyph() {
        let font = test_font();
        let mut raster = RecordingRaster::default();
        draw(&mut raster, &font, 10, 4, "AB");
        assert_eq!(
            raster.rects,
            vec![
                (font.glyph_offset(b'A') as i32, 0, 10, 4, 3, 5),
                (font.glyph_offset(b'B') as i32, 0, 13, 4, 3, 5),
            ]
        );
    }

    #[test]
    fn test_space_uses_first_offset() {
        let font = test_font();
        let mut raster = RecordingRaster::default();
        draw(&mut raster, &font, 0, 0, " ");
        assert_eq!(raster.rects.len(), 1);
        assert_eq!(raster.rects[0].0, 0, "code 32 sources from offsets[0]");
    }

    #[test]
    fn test_undrawable_codes_issue_no_rects() {
        let font = test_font();
        let mut raster = RecordingRaster::default();
        let end = draw(&mut raster, &font, 5, 0, "\u{7f}\x1f");
        assert!(raster.rects.is_empty());
        assert_eq!(end, 5);
    }
}
