// tests/image_io_tests.rs

use blockcoder::{Dct, Pixel, Pixmap, SampleGrid, roundtrip_grid};
use image::{GrayImage, RgbImage};
use tempfile::tempdir;

/// The image-writer contract: samples are rounded to the nearest integer
/// and clipped to [0, 255] on export.
#[test]
fn test_gray_export_rounds_and_clips() {
    let grid = SampleGrid::from_vec(
        6,
        1,
        vec![-5.2, 0.4, 127.49, 127.5, 254.6, 300.0],
    );
    assert_eq!(grid.to_gray_bytes(), vec![0, 0, 127, 128, 255, 255]);
}

#[test]
fn test_grayscale_png_round_trip() {
    let width = 32u32;
    let height = 24u32;
    let grid = SampleGrid::from_fn(width, height, |x, y| ((x * 7 + y * 13) % 256) as f64);

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gray.png");

    let img = GrayImage::from_raw(width, height, grid.to_gray_bytes())
        .expect("Failed to build grayscale image");
    img.save(&path).expect("Failed to save PNG");

    let loaded = image::open(&path).expect("Failed to reload PNG").to_luma8();
    assert_eq!(loaded.dimensions(), (width, height));

    let reloaded = SampleGrid::from_gray_bytes(width, height, loaded.as_raw());
    assert_eq!(reloaded, grid);
}

#[test]
fn test_rgb_png_round_trip_via_raw_pixels() {
    let width = 16u32;
    let height = 16u32;
    let pm = Pixmap::from_fn(width, height, |x, y| {
        Pixel::new((x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8)
    });

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("color.png");

    let img = RgbImage::from_raw(width, height, pm.as_raw().to_vec())
        .expect("Failed to build RGB image");
    img.save(&path).expect("Failed to save PNG");

    let loaded = image::open(&path).expect("Failed to reload PNG").into_rgb8();
    assert_eq!(loaded.as_raw().as_slice(), pm.as_raw());
}

/// A loaded image that goes through the transform pipeline and back out
/// through the writer contract is byte-identical: the reconstruction
/// error is far below the 0.5 rounding threshold.
#[test]
fn test_loaded_image_survives_pipeline_byte_exact() {
    let width = 64u32;
    let height = 48u32;
    let bytes: Vec<u8> = (0..width * height).map(|i| (i % 251) as u8).collect();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.png");
    GrayImage::from_raw(width, height, bytes.clone())
        .expect("Failed to build grayscale image")
        .save(&path)
        .expect("Failed to save PNG");

    let loaded = image::open(&path).expect("Failed to reload PNG").to_luma8();
    let grid = SampleGrid::from_gray_bytes(width, height, loaded.as_raw());

    let restored = roundtrip_grid(&grid, &Dct);
    assert_eq!(restored.to_gray_bytes(), bytes);
}
