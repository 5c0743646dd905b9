// tests/pipeline.rs

//! End-to-end pipeline tests over the public API: compose a frame against
//! the in-memory device, publish it, and verify what the "hardware" sees.

use bootgfx::device::memory::MemoryDevice;
use bootgfx::device::DisplayDevice;
use bootgfx::raster::soft::SoftRaster;
use bootgfx::{Config, Display, GfxError, PixelFormat, Rgba, Surface};
use std::path::PathBuf;

fn new_display(width: u32, height: u32) -> Display {
    Display::with_parts(
        Box::new(MemoryDevice::new(width, height)),
        Box::new(SoftRaster::new()),
    )
}

#[test]
fn compose_and_publish_a_frame() {
    let mut display = new_display(128, 64);

    display.set_color(Rgba::opaque(0, 0, 128));
    display.fill(0, 0, 128, 64);
    display.set_color(Rgba::WHITE);
    let end = display.draw_text(8, 8, "loading...", None);
    assert_eq!(end, 8 + display.measure_text("loading...", None));

    let mut icon = Surface::new(8, 8, 8, PixelFormat::Rgb565);
    icon.data_mut().fill(0xff);
    display.blit(&icon, 0, 0, 8, 8, 100, 40);

    display.flip();

    let published = display.snapshot().expect("display is live");
    let device = display.device().expect("device is live");
    assert_eq!(device.frame(1), published.data());
    assert_eq!(display.active_index(), 1);

    // a second frame lands on the other buffer without disturbing this one
    display.set_color(Rgba::BLACK);
    display.fill(0, 0, 128, 64);
    display.flip();
    assert_eq!(display.active_index(), 0);
    assert_eq!(device_frame(&display, 1), published.data().to_vec());
}

fn device_frame(display: &Display, index: usize) -> Vec<u8> {
    display.device().unwrap().frame(index).to_vec()
}

#[test]
fn frame_export_matches_geometry() {
    let mut display = new_display(32, 16);
    display.set_color(Rgba::opaque(255, 0, 0));
    display.fill(0, 0, 32, 16);

    let mut sink = Vec::new();
    display.write_frame_to(&mut sink).unwrap();
    assert_eq!(sink.len(), 32 * 16 * 2);
    assert_eq!(&sink[..2], &0xf800u16.to_le_bytes());
}

#[test]
fn open_with_missing_device_fails_cleanly() {
    let mut config = Config::default();
    config.device.path = PathBuf::from("/dev/bootgfx-integration-missing");
    config.console.path = None;

    let err = Display::open(&config).err().expect("open must fail");
    assert!(matches!(
        err.downcast_ref::<GfxError>(),
        Some(GfxError::DeviceUnavailable { .. })
    ));
}

#[test]
fn loaded_font_draws_through_the_display() {
    // a tiny all-opaque atlas: every glyph cell is a 2x4 solid block
    let dir = std::env::temp_dir().join(format!("bootgfx-pipeline-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("block.dat");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&192u32.to_le_bytes()); // width: 96 cells of 2
    bytes.extend_from_slice(&4u32.to_le_bytes()); // height
    for i in 0..96u32 {
        bytes.extend_from_slice(&(i * 2).to_le_bytes());
    }
    bytes.extend(std::iter::repeat(0xffu8).take((192 * 4) / 8));
    std::fs::write(&path, bytes).unwrap();

    let mut display = new_display(16, 8);
    let font = bootgfx::FontAtlas::load("block", &dir).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(display.font_metrics(Some(&font)).cell_height, 4);
    display.set_color(Rgba::WHITE);
    let end = display.draw_text(0, 0, "ab", Some(&font));
    assert_eq!(end, 4);

    let surface = display.snapshot().unwrap();
    let off = surface.pixel_offset(0, 0);
    assert_eq!(
        u16::from_le_bytes([surface.data()[off], surface.data()[off + 1]]),
        0xffff
    );
}
