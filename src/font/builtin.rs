// src/font/builtin.rs
//! Embedded default font: DejaVu Sans Mono rendered to a 10x18 cell,
//! 1-bit, stored as the run-length stream `FontAtlas::from_rle` decodes
//! (high bit selects the fill value, low 7 bits give the run length).
//! Generated by tools/gen_builtin_font.py; do not edit by hand.

/// Atlas width in pixels (96 cells of 10).
pub const WIDTH: u32 = 960;
/// Atlas height in pixels.
pub const HEIGHT: u32 = 18;
/// Fixed advance of every glyph cell.
pub const CELL_WIDTH: u32 = 10;

pub static RUNDATA: &[u8] = &[
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x65,
    0x81, 0x06, 0x81, 0x7f, 0x7f, 0x7f, 0x77, 0x83, 0x10, 0x83, 0x1b, 0x81, 0x12, 0x81, 0x18, 0x81,
    0x12, 0x82, 0x0e, 0x81, 0x0c, 0x81, 0x09, 0x81, 0x06, 0x81, 0x08, 0x84, 0x7f, 0x18, 0x82, 0x06,
    0x82, 0x06, 0x82, 0x28, 0x82, 0x07, 0x81, 0x02, 0x81, 0x07, 0x81, 0x02, 0x82, 0x06, 0x81, 0x06,
    0x82, 0x09, 0x84, 0x07, 0x82, 0x09, 0x82, 0x06, 0x82, 0x09, 0x82, 0x33, 0x82, 0x04, 0x84, 0x05,
    0x84, 0x05, 0x86, 0x05, 0x85, 0x08, 0x83, 0x04, 0x86, 0x05, 0x85, 0x03, 0x88, 0x03, 0x86, 0x04,
    0x85, 0x37, 0x86, 0x10, 0x82, 0x05, 0x87, 0x05, 0x86, 0x02, 0x86, 0x04, 0x88, 0x03, 0x87, 0x04,
    0x85, 0x03, 0x82, 0x04, 0x82, 0x03, 0x86, 0x05, 0x85, 0x03, 0x82, 0x04, 0x82, 0x03, 0x82, 0x07,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x04, 0x84, 0x04, 0x87, 0x05, 0x84, 0x04, 0x86, 0x05,
    0x86, 0x02, 0x8a, 0x01, 0x82, 0x04, 0x82, 0x02, 0x81, 0x06, 0x81, 0x01, 0x82, 0x06, 0x82, 0x01,
    0x82, 0x04, 0x82, 0x02, 0x81, 0x06, 0x81, 0x02, 0x88, 0x05, 0x83, 0x04, 0x82, 0x0a, 0x83, 0x08,
    0x82, 0x12, 0x81, 0x10, 0x82, 0x18, 0x82, 0x0f, 0x84, 0x0d, 0x82, 0x0b, 0x82, 0x09, 0x81, 0x06,
    0x82, 0x08, 0x83, 0x4f, 0x81, 0x46, 0x83, 0x06, 0x82, 0x06, 0x83, 0x27, 0x82, 0x07, 0x81, 0x02,
    0x81, 0x07, 0x81, 0x02, 0x82, 0x05, 0x83, 0x04, 0x84, 0x07, 0x82, 0x0a, 0x82, 0x09, 0x81, 0x08,
    0x81, 0x07, 0x81, 0x01, 0x82, 0x01, 0x81, 0x30, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x84, 0x05,
    0x82, 0x03, 0x82, 0x08, 0x82, 0x07, 0x83, 0x04, 0x81, 0x09, 0x82, 0x0d, 0x81, 0x04, 0x82, 0x02,
    0x82, 0x03, 0x82, 0x03, 0x82, 0x36, 0x81, 0x03, 0x82, 0x05, 0x85, 0x06, 0x82, 0x05, 0x82, 0x03,
    0x83, 0x03, 0x82, 0x04, 0x81, 0x02, 0x82, 0x02, 0x83, 0x03, 0x82, 0x09, 0x82, 0x08, 0x82, 0x03,
    0x81, 0x03, 0x82, 0x04, 0x82, 0x05, 0x82, 0x0a, 0x82, 0x03, 0x82, 0x03, 0x82, 0x04, 0x82, 0x07,
    0x82, 0x04, 0x82, 0x02, 0x83, 0x03, 0x82, 0x03, 0x82, 0x02, 0x82, 0x03, 0x82, 0x03, 0x83, 0x03,
    0x82, 0x02, 0x82, 0x03, 0x82, 0x03, 0x82, 0x03, 0x82, 0x04, 0x81, 0x06, 0x82, 0x05, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x01, 0x82, 0x06, 0x82, 0x02, 0x81, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x08, 0x82, 0x05, 0x81, 0x07, 0x81, 0x0c, 0x81, 0x07, 0x84, 0x12, 0x81, 0x0f, 0x82, 0x18,
    0x82, 0x0f, 0x82, 0x0f, 0x82, 0x1d, 0x82, 0x0a, 0x81, 0x4e, 0x82, 0x45, 0x82, 0x08, 0x82, 0x08,
    0x82, 0x26, 0x82, 0x07, 0x81, 0x02, 0x81, 0x07, 0x81, 0x02, 0x81, 0x04, 0x86, 0x02, 0x81, 0x03,
    0x81, 0x07, 0x81, 0x0b, 0x82, 0x08, 0x82, 0x08, 0x82, 0x06, 0x86, 0x30, 0x82, 0x04, 0x81, 0x04,
    0x81, 0x07, 0x81, 0x0b, 0x82, 0x08, 0x82, 0x05, 0x81, 0x01, 0x82, 0x04, 0x81, 0x09, 0x81, 0x0d,
    0x82, 0x03, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x81, 0x3b, 0x82, 0x03, 0x82, 0x04, 0x81, 0x04,
    0x84, 0x04, 0x82, 0x04, 0x82, 0x03, 0x82, 0x07, 0x82, 0x04, 0x81, 0x03, 0x82, 0x09, 0x82, 0x07,
    0x82, 0x08, 0x82, 0x04, 0x82, 0x05, 0x82, 0x0a, 0x82, 0x03, 0x82, 0x02, 0x82, 0x05, 0x82, 0x07,
    0x83, 0x02, 0x83, 0x02, 0x83, 0x03, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x0b, 0x82, 0x05, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x04, 0x82, 0x01, 0x82, 0x06, 0x82, 0x02, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x09,
    0x81, 0x06, 0x81, 0x07, 0x82, 0x0b, 0x81, 0x06, 0x82, 0x02, 0x82, 0x21, 0x82, 0x18, 0x82, 0x0f,
    0x82, 0x0f, 0x82, 0x1d, 0x82, 0x0a, 0x81, 0x4e, 0x82, 0x45, 0x82, 0x08, 0x82, 0x08, 0x82, 0x26,
    0x82, 0x07, 0x81, 0x02, 0x81, 0x04, 0x89, 0x02, 0x81, 0x02, 0x81, 0x04, 0x82, 0x02, 0x81, 0x07,
    0x82, 0x0a, 0x82, 0x08, 0x81, 0x0a, 0x81, 0x08, 0x82, 0x08, 0x82, 0x27, 0x82, 0x04, 0x82, 0x04,
    0x82, 0x06, 0x81, 0x0b, 0x82, 0x08, 0x81, 0x05, 0x82, 0x01, 0x82, 0x04, 0x81, 0x08, 0x82, 0x0d,
    0x82, 0x03, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x08, 0x82, 0x0b, 0x82, 0x0c,
    0x82, 0x0d, 0x82, 0x03, 0x82, 0x05, 0x81, 0x04, 0x81, 0x02, 0x81, 0x04, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x09, 0x82, 0x07, 0x82, 0x08, 0x82, 0x04, 0x82, 0x05,
    0x82, 0x0a, 0x82, 0x03, 0x82, 0x01, 0x82, 0x06, 0x82, 0x07, 0x81, 0x01, 0x81, 0x02, 0x81, 0x01,
    0x81, 0x02, 0x84, 0x02, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x0b, 0x82, 0x05, 0x82, 0x04, 0x82, 0x03, 0x81, 0x04,
    0x81, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x03, 0x82, 0x01, 0x81, 0x05, 0x82, 0x02, 0x82, 0x08,
    0x82, 0x06, 0x81, 0x07, 0x82, 0x0b, 0x81, 0x05, 0x82, 0x04, 0x82, 0x17, 0x86, 0x03, 0x87, 0x05,
    0x85, 0x04, 0x87, 0x04, 0x85, 0x03, 0x88, 0x03, 0x87, 0x02, 0x82, 0x01, 0x84, 0x04, 0x84, 0x06,
    0x84, 0x06, 0x82, 0x03, 0x82, 0x05, 0x81, 0x06, 0x88, 0x02, 0x82, 0x01, 0x84, 0x05, 0x84, 0x04,
    0x87, 0x05, 0x86, 0x04, 0x86, 0x04, 0x85, 0x03, 0x87, 0x03, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x01, 0x82, 0x06, 0x82, 0x01, 0x82, 0x04, 0x82, 0x02, 0x82, 0x05, 0x81, 0x03, 0x87, 0x05,
    0x82, 0x08, 0x82, 0x08, 0x82, 0x26, 0x82, 0x07, 0x81, 0x02, 0x81, 0x04, 0x89, 0x01, 0x82, 0x02,
    0x81, 0x05, 0x84, 0x03, 0x81, 0x03, 0x82, 0x14, 0x81, 0x0a, 0x81, 0x06, 0x86, 0x06, 0x82, 0x27,
    0x82, 0x04, 0x82, 0x04, 0x82, 0x06, 0x81, 0x0a, 0x82, 0x08, 0x82, 0x05, 0x81, 0x02, 0x82, 0x04,
    0x85, 0x04, 0x82, 0x01, 0x83, 0x09, 0x81, 0x05, 0x82, 0x02, 0x82, 0x03, 0x82, 0x04, 0x82, 0x05,
    0x82, 0x08, 0x82, 0x09, 0x84, 0x02, 0x88, 0x02, 0x84, 0x0b, 0x82, 0x03, 0x81, 0x03, 0x85, 0x03,
    0x81, 0x02, 0x81, 0x04, 0x82, 0x03, 0x82, 0x03, 0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x09,
    0x82, 0x07, 0x82, 0x08, 0x82, 0x04, 0x82, 0x05, 0x82, 0x0a, 0x82, 0x03, 0x84, 0x07, 0x82, 0x07,
    0x81, 0x01, 0x81, 0x02, 0x81, 0x01, 0x81, 0x02, 0x82, 0x01, 0x81, 0x02, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x81, 0x03, 0x83, 0x0a,
    0x82, 0x05, 0x82, 0x04, 0x82, 0x03, 0x81, 0x04, 0x81, 0x03, 0x81, 0x02, 0x82, 0x02, 0x81, 0x04,
    0x84, 0x06, 0x84, 0x08, 0x82, 0x07, 0x81, 0x08, 0x82, 0x0a, 0x81, 0x05, 0x81, 0x06, 0x81, 0x1b,
    0x82, 0x03, 0x83, 0x03, 0x81, 0x04, 0x82, 0x08, 0x81, 0x03, 0x83, 0x03, 0x82, 0x03, 0x81, 0x06,
    0x82, 0x06, 0x81, 0x03, 0x83, 0x02, 0x83, 0x02, 0x82, 0x06, 0x82, 0x09, 0x81, 0x06, 0x82, 0x02,
    0x82, 0x06, 0x81, 0x06, 0x82, 0x01, 0x82, 0x02, 0x81, 0x02, 0x83, 0x02, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x03, 0x83, 0x03, 0x81, 0x04, 0x82, 0x02, 0x83, 0x04, 0x83, 0x06, 0x82, 0x03, 0x81, 0x05,
    0x82, 0x06, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x01, 0x82, 0x06, 0x82, 0x02, 0x82, 0x02,
    0x82, 0x03, 0x82, 0x04, 0x82, 0x08, 0x81, 0x06, 0x82, 0x08, 0x82, 0x08, 0x82, 0x26, 0x82, 0x11,
    0x81, 0x02, 0x82, 0x04, 0x84, 0x06, 0x81, 0x02, 0x83, 0x04, 0x83, 0x12, 0x82, 0x0a, 0x82, 0x07,
    0x82, 0x08, 0x82, 0x27, 0x81, 0x05, 0x82, 0x01, 0x82, 0x01, 0x82, 0x06, 0x81, 0x0a, 0x82, 0x05,
    0x84, 0x05, 0x82, 0x02, 0x82, 0x04, 0x82, 0x01, 0x83, 0x03, 0x83, 0x02, 0x82, 0x07, 0x82, 0x06,
    0x84, 0x04, 0x82, 0x04, 0x82, 0x05, 0x82, 0x08, 0x82, 0x06, 0x84, 0x05, 0x88, 0x05, 0x84, 0x07,
    0x82, 0x03, 0x82, 0x02, 0x82, 0x01, 0x83, 0x02, 0x82, 0x02, 0x82, 0x03, 0x87, 0x03, 0x82, 0x08,
    0x82, 0x04, 0x82, 0x02, 0x88, 0x03, 0x87, 0x02, 0x82, 0x08, 0x88, 0x05, 0x82, 0x0a, 0x82, 0x03,
    0x85, 0x06, 0x82, 0x07, 0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x01, 0x82, 0x01, 0x82, 0x02,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x03, 0x83, 0x02, 0x82, 0x04, 0x82, 0x02, 0x87, 0x04, 0x85, 0x07,
    0x82, 0x05, 0x82, 0x04, 0x82, 0x03, 0x82, 0x02, 0x82, 0x03, 0x81, 0x02, 0x82, 0x02, 0x81, 0x05,
    0x82, 0x07, 0x83, 0x09, 0x81, 0x08, 0x81, 0x08, 0x82, 0x0a, 0x81, 0x29, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x03, 0x82, 0x07, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x05, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x09, 0x81, 0x06, 0x82, 0x01, 0x81, 0x08, 0x81, 0x06,
    0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x04, 0x82, 0x07, 0x81, 0x0a, 0x82, 0x06, 0x82, 0x04, 0x82, 0x03,
    0x81, 0x04, 0x81, 0x03, 0x81, 0x06, 0x81, 0x04, 0x84, 0x05, 0x81, 0x04, 0x81, 0x08, 0x81, 0x07,
    0x82, 0x08, 0x82, 0x08, 0x82, 0x26, 0x82, 0x11, 0x81, 0x02, 0x81, 0x06, 0x85, 0x05, 0x82, 0x06,
    0x81, 0x02, 0x82, 0x02, 0x82, 0x0d, 0x82, 0x0a, 0x82, 0x07, 0x82, 0x05, 0x88, 0x23, 0x82, 0x05,
    0x82, 0x01, 0x82, 0x01, 0x82, 0x06, 0x81, 0x09, 0x82, 0x09, 0x82, 0x03, 0x82, 0x03, 0x82, 0x09,
    0x81, 0x03, 0x82, 0x04, 0x82, 0x06, 0x82, 0x05, 0x82, 0x02, 0x82, 0x04, 0x82, 0x01, 0x84, 0x16,
    0x82, 0x18, 0x82, 0x05, 0x82, 0x04, 0x82, 0x01, 0x82, 0x03, 0x82, 0x02, 0x82, 0x02, 0x82, 0x03,
    0x82, 0x03, 0x83, 0x02, 0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x09, 0x82, 0x07, 0x82, 0x03,
    0x83, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x0a, 0x82, 0x03, 0x82, 0x01, 0x82, 0x06, 0x82, 0x07,
    0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x02, 0x81, 0x01, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02,
    0x87, 0x03, 0x82, 0x04, 0x82, 0x02, 0x86, 0x07, 0x84, 0x06, 0x82, 0x05, 0x82, 0x04, 0x82, 0x03,
    0x82, 0x02, 0x82, 0x03, 0x81, 0x01, 0x84, 0x01, 0x81, 0x05, 0x83, 0x07, 0x82, 0x08, 0x82, 0x08,
    0x81, 0x09, 0x82, 0x09, 0x81, 0x25, 0x86, 0x02, 0x82, 0x04, 0x82, 0x03, 0x81, 0x08, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x05, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05,
    0x82, 0x09, 0x81, 0x06, 0x84, 0x08, 0x81, 0x06, 0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x04, 0x82, 0x07,
    0x82, 0x09, 0x82, 0x06, 0x82, 0x04, 0x82, 0x03, 0x82, 0x02, 0x82, 0x03, 0x81, 0x02, 0x82, 0x02,
    0x81, 0x05, 0x82, 0x06, 0x82, 0x02, 0x82, 0x07, 0x82, 0x05, 0x83, 0x09, 0x82, 0x09, 0x83, 0x03,
    0x85, 0x02, 0x81, 0x19, 0x82, 0x0e, 0x89, 0x06, 0x84, 0x02, 0x82, 0x02, 0x84, 0x02, 0x81, 0x03,
    0x82, 0x01, 0x82, 0x0d, 0x82, 0x0a, 0x82, 0x0e, 0x88, 0x0e, 0x84, 0x11, 0x81, 0x06, 0x82, 0x04,
    0x82, 0x06, 0x81, 0x08, 0x82, 0x0b, 0x82, 0x02, 0x82, 0x03, 0x82, 0x09, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x05, 0x82, 0x05, 0x82, 0x04, 0x82, 0x04, 0x83, 0x01, 0x82, 0x16, 0x83, 0x16, 0x83, 0x05,
    0x82, 0x04, 0x82, 0x01, 0x82, 0x03, 0x82, 0x02, 0x86, 0x03, 0x82, 0x04, 0x82, 0x02, 0x82, 0x08,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x09, 0x82, 0x07, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05,
    0x82, 0x0a, 0x82, 0x03, 0x82, 0x02, 0x82, 0x05, 0x82, 0x07, 0x81, 0x02, 0x82, 0x02, 0x81, 0x02,
    0x82, 0x02, 0x81, 0x01, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x08, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x03, 0x82, 0x09, 0x82, 0x05, 0x82, 0x05, 0x82, 0x04, 0x82, 0x04, 0x81, 0x02, 0x81, 0x04,
    0x83, 0x02, 0x83, 0x04, 0x84, 0x07, 0x82, 0x07, 0x82, 0x09, 0x81, 0x09, 0x82, 0x09, 0x81, 0x24,
    0x87, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x88, 0x05, 0x82, 0x05,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x09, 0x81, 0x06, 0x84, 0x08, 0x81, 0x06,
    0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x04, 0x82, 0x08, 0x85, 0x05, 0x82, 0x06, 0x82, 0x04, 0x82, 0x03,
    0x82, 0x02, 0x82, 0x03, 0x82, 0x01, 0x82, 0x01, 0x82, 0x05, 0x82, 0x07, 0x81, 0x02, 0x82, 0x06,
    0x82, 0x06, 0x83, 0x09, 0x82, 0x09, 0x83, 0x03, 0x81, 0x03, 0x84, 0x29, 0x89, 0x06, 0x81, 0x01,
    0x82, 0x06, 0x81, 0x02, 0x84, 0x04, 0x81, 0x01, 0x81, 0x0f, 0x81, 0x0a, 0x81, 0x12, 0x82, 0x25,
    0x82, 0x06, 0x82, 0x04, 0x82, 0x06, 0x81, 0x07, 0x82, 0x0c, 0x82, 0x02, 0x88, 0x08, 0x82, 0x02,
    0x82, 0x04, 0x82, 0x05, 0x82, 0x05, 0x82, 0x04, 0x82, 0x08, 0x82, 0x18, 0x84, 0x04, 0x88, 0x04,
    0x84, 0x07, 0x81, 0x05, 0x82, 0x01, 0x82, 0x03, 0x82, 0x01, 0x88, 0x02, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x09, 0x82, 0x07, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x05, 0x82, 0x0a, 0x82, 0x03, 0x82, 0x03, 0x82, 0x04, 0x82, 0x07, 0x81, 0x06, 0x81, 0x02,
    0x82, 0x02, 0x84, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x81, 0x09, 0x82, 0x05, 0x82, 0x05, 0x82, 0x04, 0x82, 0x04, 0x81, 0x02, 0x81, 0x04, 0x83, 0x02,
    0x83, 0x03, 0x82, 0x02, 0x82, 0x06, 0x82, 0x07, 0x81, 0x0a, 0x81, 0x0a, 0x81, 0x09, 0x81, 0x23,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x03, 0x81, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x0b,
    0x82, 0x05, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x09, 0x81, 0x06, 0x82, 0x01,
    0x82, 0x07, 0x81, 0x06, 0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x04, 0x82, 0x0b, 0x82, 0x05, 0x82, 0x06,
    0x82, 0x04, 0x82, 0x04, 0x81, 0x02, 0x81, 0x04, 0x82, 0x01, 0x82, 0x01, 0x82, 0x04, 0x84, 0x06,
    0x82, 0x01, 0x81, 0x06, 0x82, 0x09, 0x82, 0x08, 0x82, 0x08, 0x82, 0x38, 0x81, 0x02, 0x82, 0x08,
    0x81, 0x01, 0x82, 0x05, 0x82, 0x02, 0x82, 0x01, 0x81, 0x04, 0x83, 0x0f, 0x81, 0x0a, 0x81, 0x12,
    0x82, 0x08, 0x82, 0x12, 0x82, 0x07, 0x81, 0x08, 0x81, 0x04, 0x81, 0x07, 0x81, 0x06, 0x82, 0x0d,
    0x82, 0x07, 0x82, 0x09, 0x81, 0x04, 0x81, 0x04, 0x82, 0x05, 0x81, 0x06, 0x82, 0x04, 0x82, 0x08,
    0x81, 0x06, 0x82, 0x08, 0x82, 0x0a, 0x83, 0x0c, 0x83, 0x10, 0x82, 0x02, 0x81, 0x03, 0x82, 0x01,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x03, 0x82, 0x07, 0x82, 0x03, 0x82, 0x03, 0x82, 0x09,
    0x82, 0x07, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05, 0x82, 0x0a, 0x82, 0x03, 0x82, 0x03,
    0x82, 0x04, 0x82, 0x07, 0x81, 0x06, 0x81, 0x02, 0x82, 0x03, 0x83, 0x02, 0x82, 0x04, 0x82, 0x02,
    0x82, 0x08, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x08, 0x82, 0x05, 0x82, 0x05, 0x82, 0x04,
    0x82, 0x04, 0x84, 0x04, 0x83, 0x02, 0x83, 0x03, 0x81, 0x04, 0x81, 0x06, 0x82, 0x06, 0x82, 0x0a,
    0x81, 0x0a, 0x82, 0x08, 0x81, 0x23, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x03, 0x82, 0x07,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x0b, 0x82, 0x05, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x05,
    0x82, 0x09, 0x81, 0x06, 0x82, 0x02, 0x82, 0x06, 0x81, 0x06, 0x81, 0x02, 0x82, 0x02, 0x81, 0x02,
    0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x82, 0x04, 0x82, 0x04,
    0x82, 0x0c, 0x81, 0x05, 0x82, 0x07, 0x81, 0x04, 0x82, 0x04, 0x84, 0x05, 0x82, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x05, 0x84, 0x06, 0x81, 0x0a, 0x82, 0x08, 0x82, 0x08, 0x82, 0x26, 0x82, 0x10,
    0x81, 0x02, 0x81, 0x05, 0x82, 0x02, 0x81, 0x01, 0x82, 0x06, 0x81, 0x02, 0x82, 0x01, 0x82, 0x03,
    0x83, 0x0f, 0x82, 0x08, 0x82, 0x12, 0x82, 0x08, 0x82, 0x12, 0x82, 0x06, 0x82, 0x08, 0x82, 0x02,
    0x82, 0x05, 0x85, 0x03, 0x87, 0x03, 0x81, 0x04, 0x82, 0x08, 0x82, 0x03, 0x81, 0x04, 0x82, 0x04,
    0x82, 0x02, 0x82, 0x05, 0x82, 0x06, 0x83, 0x02, 0x83, 0x03, 0x81, 0x03, 0x82, 0x06, 0x82, 0x08,
    0x82, 0x0c, 0x81, 0x0c, 0x81, 0x0c, 0x82, 0x05, 0x81, 0x03, 0x85, 0x01, 0x81, 0x06, 0x81, 0x02,
    0x82, 0x03, 0x83, 0x03, 0x83, 0x03, 0x81, 0x02, 0x82, 0x02, 0x83, 0x03, 0x88, 0x03, 0x82, 0x08,
    0x82, 0x03, 0x82, 0x02, 0x82, 0x04, 0x82, 0x03, 0x86, 0x03, 0x81, 0x03, 0x82, 0x04, 0x82, 0x04,
    0x82, 0x03, 0x87, 0x02, 0x81, 0x06, 0x81, 0x02, 0x82, 0x03, 0x83, 0x03, 0x82, 0x02, 0x82, 0x03,
    0x82, 0x09, 0x82, 0x02, 0x82, 0x03, 0x82, 0x04, 0x82, 0x02, 0x82, 0x03, 0x83, 0x05, 0x82, 0x06,
    0x82, 0x02, 0x82, 0x06, 0x82, 0x06, 0x82, 0x02, 0x82, 0x03, 0x82, 0x04, 0x82, 0x05, 0x82, 0x05,
    0x88, 0x05, 0x81, 0x0b, 0x81, 0x08, 0x81, 0x23, 0x82, 0x03, 0x83, 0x02, 0x83, 0x02, 0x82, 0x04,
    0x82, 0x08, 0x82, 0x02, 0x83, 0x03, 0x82, 0x04, 0x81, 0x05, 0x82, 0x06, 0x82, 0x02, 0x83, 0x02,
    0x82, 0x04, 0x82, 0x05, 0x82, 0x09, 0x81, 0x06, 0x82, 0x03, 0x82, 0x05, 0x82, 0x05, 0x81, 0x02,
    0x82, 0x02, 0x81, 0x02, 0x82, 0x04, 0x82, 0x03, 0x82, 0x02, 0x82, 0x03, 0x83, 0x02, 0x82, 0x04,
    0x82, 0x02, 0x83, 0x04, 0x82, 0x07, 0x81, 0x03, 0x82, 0x06, 0x82, 0x06, 0x82, 0x02, 0x83, 0x04,
    0x84, 0x05, 0x82, 0x02, 0x82, 0x04, 0x81, 0x04, 0x81, 0x06, 0x82, 0x06, 0x82, 0x0a, 0x82, 0x08,
    0x82, 0x08, 0x82, 0x26, 0x82, 0x0f, 0x82, 0x02, 0x81, 0x06, 0x86, 0x08, 0x83, 0x03, 0x85, 0x01,
    0x82, 0x0e, 0x82, 0x08, 0x82, 0x1c, 0x82, 0x12, 0x82, 0x06, 0x81, 0x0a, 0x84, 0x05, 0x87, 0x02,
    0x88, 0x02, 0x86, 0x09, 0x82, 0x03, 0x86, 0x06, 0x85, 0x05, 0x82, 0x07, 0x86, 0x04, 0x85, 0x07,
    0x82, 0x08, 0x82, 0x26, 0x82, 0x05, 0x82, 0x07, 0x82, 0x06, 0x82, 0x01, 0x87, 0x05, 0x86, 0x02,
    0x85, 0x05, 0x88, 0x03, 0x82, 0x09, 0x85, 0x03, 0x82, 0x04, 0x82, 0x03, 0x86, 0x03, 0x86, 0x04,
    0x82, 0x05, 0x82, 0x02, 0x87, 0x02, 0x81, 0x06, 0x81, 0x02, 0x82, 0x04, 0x82, 0x04, 0x84, 0x04,
    0x82, 0x0a, 0x84, 0x04, 0x82, 0x05, 0x82, 0x01, 0x87, 0x06, 0x82, 0x06, 0x86, 0x06, 0x82, 0x06,
    0x82, 0x02, 0x82, 0x02, 0x82, 0x06, 0x82, 0x04, 0x82, 0x05, 0x89, 0x04, 0x81, 0x0b, 0x82, 0x07,
    0x81, 0x24, 0x84, 0x01, 0x82, 0x02, 0x82, 0x01, 0x84, 0x05, 0x85, 0x04, 0x84, 0x01, 0x82, 0x04,
    0x86, 0x05, 0x82, 0x07, 0x83, 0x01, 0x82, 0x02, 0x82, 0x04, 0x82, 0x02, 0x88, 0x06, 0x81, 0x06,
    0x82, 0x04, 0x81, 0x06, 0x84, 0x02, 0x81, 0x02, 0x82, 0x02, 0x81, 0x02, 0x82, 0x04, 0x82, 0x04,
    0x84, 0x04, 0x82, 0x01, 0x84, 0x05, 0x86, 0x04, 0x82, 0x07, 0x85, 0x07, 0x84, 0x04, 0x84, 0x01,
    0x82, 0x05, 0x82, 0x06, 0x82, 0x02, 0x82, 0x03, 0x82, 0x04, 0x82, 0x05, 0x82, 0x06, 0x87, 0x05,
    0x82, 0x08, 0x82, 0x08, 0x82, 0x45, 0x81, 0x27, 0x81, 0x08, 0x81, 0x1d, 0x82, 0x19, 0x82, 0x79,
    0x82, 0x2e, 0x81, 0x7f, 0x2e, 0x82, 0x60, 0x81, 0x0c, 0x81, 0x07, 0x81, 0x65, 0x81, 0x1b, 0x81,
    0x37, 0x82, 0x0e, 0x82, 0x4b, 0x82, 0x12, 0x82, 0x08, 0x82, 0x08, 0x82, 0x45, 0x81, 0x27, 0x82,
    0x06, 0x82, 0x1c, 0x82, 0x1a, 0x81, 0x79, 0x82, 0x30, 0x85, 0x7f, 0x2a, 0x81, 0x60, 0x83, 0x10,
    0x83, 0x65, 0x81, 0x1b, 0x81, 0x37, 0x82, 0x0e, 0x82, 0x4b, 0x81, 0x14, 0x83, 0x06, 0x82, 0x06,
    0x83, 0x7f, 0x7f, 0x60, 0x83, 0x7f, 0x7f, 0x7f, 0x03, 0x85, 0x19, 0x84, 0x37, 0x82, 0x0e, 0x82,
    0x49, 0x83, 0x15, 0x82, 0x06, 0x82, 0x06, 0x82, 0x1a,
];
