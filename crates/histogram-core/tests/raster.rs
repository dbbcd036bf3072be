// File: crates/histogram-core/tests/raster.rs
// Purpose: PNG export of a settled graphic (requires the "raster" feature).

#![cfg(feature = "raster")]

mod support;

use histogram_core::raster::{render_png, write_png};
use histogram_core::{Renderer, Samples, Theme};
use support::{afternoon, five_then_threes};

#[test]
fn settled_graphic_rasterizes_to_png() {
    let samples = Samples::try_new(five_then_threes()).unwrap();
    let graphic = Renderer::default().graphic(&samples, 480.0, afternoon()).settled();
    let theme = Theme::dark();
    let bytes = render_png(&graphic, &theme).expect("render png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 70));
    // Top-left corner is background, fully opaque.
    assert_eq!(img.get_pixel(0, 0).0, [0x12, 0x12, 0x14, 255]);

    let out = std::path::PathBuf::from("target/test_out/settled.png");
    write_png(&graphic, &theme, &out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}
