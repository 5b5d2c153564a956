//! Test fixtures for favgen
//!
//! Source images are generated in memory and written to scratch directories.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Solid red 4x4 RGBA PNG
pub fn png_rgba_4x4() -> Vec<u8> {
    let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    encode_png(DynamicImage::ImageRgba8(img))
}

/// 64x64 RGBA gradient, the usual favicon source in tests
pub fn png_rgba_64x64() -> Vec<u8> {
    let mut img = RgbaImage::new(64, 64);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255]);
    }
    encode_png(DynamicImage::ImageRgba8(img))
}

/// Non-square source, stretched by every resize
pub fn png_rgba_32x64() -> Vec<u8> {
    let mut img = RgbaImage::new(32, 64);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([(x * 8) as u8, (y * 4) as u8, 200, 255]);
    }
    encode_png(DynamicImage::ImageRgba8(img))
}

/// Opaque RGB source as JPEG
pub fn jpeg_rgb_48x48() -> Vec<u8> {
    let img = RgbImage::from_pixel(48, 48, Rgb([0, 120, 255]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");
    buffer
}

/// Bytes no decoder accepts
pub fn invalid_image_data() -> Vec<u8> {
    vec![0, 1, 2, 3, 4, 5]
}

/// Write fixture bytes to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("Failed to write fixture");
    path
}

fn encode_png(img: DynamicImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_decode() {
        let fixtures = [
            ("png_rgba_4x4", png_rgba_4x4(), (4, 4)),
            ("png_rgba_64x64", png_rgba_64x64(), (64, 64)),
            ("png_rgba_32x64", png_rgba_32x64(), (32, 64)),
            ("jpeg_rgb_48x48", jpeg_rgb_48x48(), (48, 48)),
        ];

        for (name, data, (w, h)) in fixtures {
            let img = image::load_from_memory(&data)
                .unwrap_or_else(|e| panic!("Fixture {} failed to load: {}", name, e));
            assert_eq!((img.width(), img.height()), (w, h), "{}", name);
        }
    }
}
