//! Tests for decoding images from disk.

use image::{GrayImage, Luma, Rgb, RgbImage};
use image_common::{Image, ImageError};

#[test]
fn test_open_grayscale_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");

    let mut buffer = GrayImage::new(3, 2);
    buffer.put_pixel(0, 0, Luma([0]));
    buffer.put_pixel(2, 1, Luma([255]));
    buffer.save(&path).unwrap();

    let image = Image::open(&path).unwrap();
    assert_eq!(image.channel_count(), 1);
    assert_eq!(image.width(), 3);
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel(0, 0, 0).unwrap(), 0.0);
    assert_eq!(image.pixel(2, 1, 0).unwrap(), 1.0);
}

#[test]
fn test_open_rgb_png_keeps_channel_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");

    let mut buffer = RgbImage::new(2, 2);
    buffer.put_pixel(1, 0, Rgb([255, 0, 51]));
    buffer.save(&path).unwrap();

    let image = Image::open(&path).unwrap();
    assert_eq!(image.channel_count(), 3);
    assert_eq!(image.pixel(1, 0, 0).unwrap(), 1.0);
    assert_eq!(image.pixel(1, 0, 1).unwrap(), 0.0);
    assert!((image.pixel(1, 0, 2).unwrap() - 0.2).abs() < 1e-12);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Image::open(dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ImageError::Io { .. }));
}

#[test]
fn test_open_garbage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = Image::open(&path).unwrap_err();
    assert!(matches!(err, ImageError::Decode { .. }));
}
