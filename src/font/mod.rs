// src/font/mod.rs

//! Glyph atlas decoding.
//!
//! A font is a single-channel surface holding all printable-ASCII glyphs
//! side by side, plus a 97-entry offset table: entry `i` is the left edge
//! of the glyph for code `32 + i`, entry 96 is the atlas width, so every
//! glyph width is `offsets[i + 1] - offsets[i]`.
//!
//! Two sources produce the same shape: the embedded run-length stream
//! (monospaced, uniform-grid offsets) and binary `.dat` resources with a
//! per-glyph offset table and a 1-bit-packed bitmap.

mod builtin;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::GfxError;
use crate::surface::{PixelFormat, Surface};

/// Number of glyph cells in an atlas (codes 32..=127).
pub const GLYPH_CELLS: usize = 96;

/// Font metrics reported to callers laying out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub cell_height: u32,
    pub ascent: u32,
    pub max_glyph_width: u32,
}

/// A decoded glyph atlas. Owns its texture; dropping the atlas releases
/// everything.
#[derive(Debug, Clone)]
pub struct FontAtlas {
    texture: Surface,
    offsets: [u32; GLYPH_CELLS + 1],
    cell_height: u32,
    ascent: u32,
}

/// Expand a run-length stream into exactly `expected` bytes.
///
/// Each input byte's high bit selects the fill value (255 or 0) and its
/// low 7 bits give the run length; a zero length is malformed.
fn decode_rle(rundata: &[u8], expected: usize) -> Result<Vec<u8>> {
    let mut bits = vec![0u8; expected];
    let mut pos = 0usize;
    for &b in rundata {
        let run = (b & 0x7f) as usize;
        if run == 0 {
            bail!("zero-length run at byte offset {}", pos);
        }
        if pos + run > expected {
            bail!("run overflows bitmap ({} of {} bytes filled)", pos, expected);
        }
        if b & 0x80 != 0 {
            bits[pos..pos + run].fill(255);
        }
        pos += run;
    }
    if pos != expected {
        bail!("stream ends early ({} of {} bytes filled)", pos, expected);
    }
    Ok(bits)
}

fn read_u32<R: Read>(r: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

impl FontAtlas {
    /// Decode an embedded monospaced font from a run-length stream.
    ///
    /// `width` must equal `96 * cell_width`; glyph offsets are the uniform
    /// grid `i * cell_width` with the atlas width as sentinel.
    pub fn from_rle(width: u32, height: u32, cell_width: u32, rundata: &[u8]) -> Result<Self> {
        if width != GLYPH_CELLS as u32 * cell_width {
            bail!(
                "atlas width {} does not cover {} cells of {}",
                width,
                GLYPH_CELLS,
                cell_width
            );
        }
        let bits = decode_rle(rundata, width as usize * height as usize)
            .context("malformed embedded font stream")?;
        let mut offsets = [0u32; GLYPH_CELLS + 1];
        for (i, off) in offsets.iter_mut().enumerate() {
            *off = i as u32 * cell_width;
        }
        debug!("embedded font decoded: {}x{} cell {}", width, height, cell_width);
        Ok(Self {
            texture: Surface::from_vec(width, height, width, PixelFormat::Alpha8, bits),
            offsets,
            cell_height: height,
            ascent: height.saturating_sub(2),
        })
    }

    /// Load a font resource by name: first as a direct path, then as
    /// `<resource_dir>/<name>.dat`.
    ///
    /// Fails with `GfxError::FontLoad` if neither resolves or the resource
    /// is malformed; nothing is installed on failure.
    pub fn load(name: &str, resource_dir: &Path) -> Result<Self> {
        let fallback = resource_dir.join(format!("{}.dat", name));
        let file = File::open(Path::new(name))
            .or_else(|_| File::open(&fallback))
            .map_err(|_| GfxError::FontLoad {
                name: name.to_string(),
                reason: format!("no resource at {:?} or {:?}", name, fallback),
            })?;
        let atlas = Self::from_reader(BufReader::new(file)).map_err(|e| GfxError::FontLoad {
            name: name.to_string(),
            reason: format!("{:#}", e),
        })?;
        info!(
            "font {:?} loaded: {}x{}",
            name,
            atlas.texture.width(),
            atlas.texture.height()
        );
        Ok(atlas)
    }

    /// Parse the binary resource layout:
    /// `[u32 width][u32 height][96 x u32 offsets][1-bit bitmap, MSB first]`,
    /// all little-endian.
    fn from_reader<R: Read>(mut r: R) -> Result<Self> {
        let width = read_u32(&mut r).context("truncated header")?;
        let height = read_u32(&mut r).context("truncated header")?;
        if width == 0 || height == 0 || width > 1 << 15 || height > 1 << 15 {
            bail!("implausible atlas geometry {}x{}", width, height);
        }

        let mut offsets = [0u32; GLYPH_CELLS + 1];
        for off in offsets.iter_mut().take(GLYPH_CELLS) {
            *off = read_u32(&mut r).context("truncated glyph offsets")?;
        }
        offsets[GLYPH_CELLS] = width;
        for i in 0..GLYPH_CELLS {
            if offsets[i] > offsets[i + 1] {
                bail!("glyph offsets not monotonic at cell {}", i);
            }
        }

        let pixels = width as usize * height as usize;
        let mut packed = vec![0u8; pixels.div_ceil(8)];
        r.read_exact(&mut packed).context("truncated bitmap")?;
        let mut bits = vec![0u8; pixels];
        for (pos, out) in bits.iter_mut().enumerate() {
            if packed[pos / 8] & (0x80 >> (pos % 8)) != 0 {
                *out = 255;
            }
        }

        Ok(Self {
            texture: Surface::from_vec(width, height, width, PixelFormat::Alpha8, bits),
            offsets,
            cell_height: height,
            ascent: height.saturating_sub(2),
        })
    }

    /// The atlas texture (single-channel alpha).
    pub fn texture(&self) -> &Surface {
        &self.texture
    }

    /// Width of the glyph for `code`, or 0 for anything outside the
    /// drawable range 32..=126.
    pub fn glyph_width(&self, code: u8) -> u32 {
        if (32..127).contains(&code) {
            let i = (code - 32) as usize;
            self.offsets[i + 1] - self.offsets[i]
        } else {
            0
        }
    }

    /// Left edge of the glyph for `code` within the atlas. 0 for
    /// undrawable codes; pair with `glyph_width` before using.
    pub fn glyph_offset(&self, code: u8) -> u32 {
        if (32..127).contains(&code) {
            self.offsets[(code - 32) as usize]
        } else {
            0
        }
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn ascent(&self) -> u32 {
        self.ascent
    }

    pub fn metrics(&self) -> FontMetrics {
        let max_glyph_width = (0..GLYPH_CELLS)
            .map(|i| self.offsets[i + 1] - self.offsets[i])
            .max()
            .unwrap_or(0);
        FontMetrics {
            cell_height: self.cell_height,
            ascent: self.ascent,
            max_glyph_width,
        }
    }
}

/// The embedded default font, decoded on first use.
pub fn default_font() -> &'static FontAtlas {
    static FONT: Lazy<FontAtlas> = Lazy::new(|| {
        FontAtlas::from_rle(
            builtin::WIDTH,
            builtin::HEIGHT,
            builtin::CELL_WIDTH,
            builtin::RUNDATA,
        )
        .expect("embedded font stream is self-consistent")
    });
    &FONT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rle_single_opaque_run() {
        // Contract: 0x85 (high bit set, length 5) is five bytes of 255.
        assert_eq!(decode_rle(&[0x85], 5).unwrap(), vec![255u8; 5]);
    }

    #[test]
    fn test_rle_alternating_runs() {
        let bits = decode_rle(&[0x02, 0x83, 0x01], 6).unwrap();
        assert_eq!(bits, vec![0, 0, 255, 255, 255, 0]);
    }

    #[test]
    fn test_rle_rejects_overrun_underrun_and_zero_runs() {
        assert!(decode_rle(&[0x85], 3).is_err());
        assert!(decode_rle(&[0x85], 6).is_err());
        assert!(decode_rle(&[0x80], 5).is_err());
        assert!(decode_rle(&[0x00], 5).is_err());
    }

    #[test]
    fn test_from_rle_synthesizes_uniform_grid() {
        // 96 one-pixel cells, three rows: 288 pixels of background.
        let atlas = FontAtlas::from_rle(96, 3, 1, &[0x7f, 0x7f, 0x22]).unwrap();
        assert_eq!(atlas.glyph_width(b'A'), 1);
        assert_eq!(atlas.glyph_offset(b'!'), 1);
        assert_eq!(atlas.cell_height(), 3);
        assert_eq!(atlas.ascent(), 1);
        assert_eq!(atlas.metrics().max_glyph_width, 1);
    }

    #[test]
    fn test_from_rle_rejects_width_not_covering_cells() {
        assert!(FontAtlas::from_rle(95, 1, 1, &[0x7f, 0x10]).is_err());
    }

    fn write_test_font(path: &Path, width: u32, height: u32, offsets: &[u32; 96]) {
        let mut f = File::create(path).unwrap();
        f.write_all(&width.to_le_bytes()).unwrap();
        f.write_all(&height.to_le_bytes()).unwrap();
        for off in offsets {
            f.write_all(&off.to_le_bytes()).unwrap();
        }
        let pixels = (width * height) as usize;
        // alternating bit pattern so some texels decode to 255
        f.write_all(&vec![0b1010_1010u8; pixels.div_ceil(8)]).unwrap();
    }

    #[test]
    fn test_file_font_round_trips_metrics() {
        let path = std::env::temp_dir().join(format!("bootgfx-font-{}.dat", std::process::id()));
        let mut offsets = [0u32; 96];
        for (i, off) in offsets.iter_mut().enumerate() {
            *off = (i as u32).min(10);
        }
        write_test_font(&path, 10, 18, &offsets);

        let atlas = FontAtlas::load(path.to_str().unwrap(), Path::new("/nonexistent")).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(atlas.cell_height(), 18);
        assert_eq!(atlas.ascent(), 16);
        assert_eq!(atlas.glyph_width(32), 1, "code 32 spans offsets[0]..offsets[1]");
        assert_eq!(atlas.texture().format(), PixelFormat::Alpha8);
        // MSB-first expansion: bit pattern 10101010 starts opaque
        assert_eq!(atlas.texture().data()[0], 255);
        assert_eq!(atlas.texture().data()[1], 0);
    }

    #[test]
    fn test_load_falls_back_to_resource_dir() {
        let dir = std::env::temp_dir().join(format!("bootgfx-fonts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let offsets = [0u32; 96];
        write_test_font(&dir.join("menu.dat"), 4, 4, &offsets);

        let atlas = FontAtlas::load("menu", &dir).unwrap();
        std::fs::remove_file(dir.join("menu.dat")).ok();
        assert_eq!(atlas.cell_height(), 4);
    }

    #[test]
    fn test_missing_font_reports_font_load_error() {
        let err = FontAtlas::load("no-such-font", Path::new("/nonexistent"))
            .err()
            .expect("load must fail");
        assert!(matches!(
            err.downcast_ref::<GfxError>(),
            Some(GfxError::FontLoad { .. })
        ));
    }

    #[test]
    fn test_non_monotonic_offsets_are_rejected() {
        let path = std::env::temp_dir().join(format!("bootgfx-badfont-{}.dat", std::process::id()));
        let mut offsets = [0u32; 96];
        offsets[0] = 9;
        offsets[1] = 3;
        write_test_font(&path, 10, 4, &offsets);
        let err = FontAtlas::load(path.to_str().unwrap(), Path::new("/nonexistent"))
            .err()
            .expect("load must fail");
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            err.downcast_ref::<GfxError>(),
            Some(GfxError::FontLoad { .. })
        ));
    }

    #[test]
    fn test_truncated_header_is_a_font_load_error() {
        let path = std::env::temp_dir().join(format!("bootgfx-short-{}.dat", std::process::id()));
        std::fs::write(&path, [1, 2, 3]).unwrap();
        let err = FontAtlas::load(path.to_str().unwrap(), Path::new("/nonexistent"))
            .err()
            .expect("load must fail");
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            err.downcast_ref::<GfxError>(),
            Some(GfxError::FontLoad { .. })
        ));
    }

    #[test]
    fn test_default_font_decodes_and_is_monospaced() {
        let font = default_font();
        assert_eq!(font.cell_height(), builtin::HEIGHT);
        assert_eq!(font.texture().width(), builtin::WIDTH);
        assert_eq!(font.glyph_width(b'M'), builtin::CELL_WIDTH);
        assert_eq!(font.metrics().max_glyph_width, builtin::CELL_WIDTH);
        // real glyph data: 'A' has ink somewhere in its cell
        let a_off = font.glyph_offset(b'A') as usize;
        let has_ink = (0..font.cell_height() as usize).any(|y| {
            let row = font.texture().row(y as u32);
            row[a_off..a_off + builtin::CELL_WIDTH as usize]
                .iter()
                .any(|&px| px == 255)
        });
        assert!(has_ink);
    }

    #[test]
    fn test_undrawable_codes_have_zero_width() {
        let font = default_font();
        assert_eq!(font.glyph_width(31), 0);
        assert_eq!(font.glyph_width(127), 0);
        assert_eq!(font.glyph_width(200), 0);
        assert_eq!(font.glyph_offset(127), 0);
    }
}
