use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

/// Saves a `width × height` image filled with one colour.
pub fn save_solid(path: &Path, width: u32, height: u32, rgb: [u8; 3], format: ImageFormat) {
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save_with_format(path, format)
        .expect("failed to write synthetic image");
}

/// Saves a PNG whose pixel at (x, y) is `[x * 40, y * 30, (x + y) * 10]`,
/// so both zero and non-zero channels occur.
pub fn save_gradient_png(path: &Path, width: u32, height: u32) -> Vec<[u8; 3]> {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb(gradient_pixel(x, y)));
    img.save_with_format(path, ImageFormat::Png)
        .expect("failed to write synthetic image");
    (0..height)
        .flat_map(|y| (0..width).map(move |x| gradient_pixel(x, y)))
        .collect()
}

fn gradient_pixel(x: u32, y: u32) -> [u8; 3] {
    [(x * 40) as u8, (y * 30) as u8, ((x + y) * 10) as u8]
}

/// Reads a vector file back into numbers.
pub fn read_vector(path: &Path) -> Vec<f64> {
    std::fs::read_to_string(path)
        .expect("vector file missing")
        .lines()
        .map(|l| l.parse::<f64>().expect("not a number"))
        .collect()
}

/// Writes a 1×1 GIF89a whose single pixel is palette entry 0 = `rgb`.
///
/// Built byte by byte so the colour is exact; the GIF encoder would
/// quantize it.
pub fn save_single_pixel_gif(path: &Path, rgb: [u8; 3]) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"GIF89a");
    // logical screen 1×1, global colour table of 2 entries
    bytes.extend_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00]);
    bytes.extend_from_slice(&rgb);
    bytes.extend_from_slice(&[0x00, 0x00, 0x00]);
    // image descriptor at (0, 0), 1×1, no local table
    bytes.extend_from_slice(&[0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    // LZW min code size 2; codes clear, 0, end
    bytes.extend_from_slice(&[0x02, 0x02, 0x44, 0x01, 0x00]);
    bytes.push(0x3B);
    std::fs::write(path, bytes).expect("failed to write synthetic image");
}
