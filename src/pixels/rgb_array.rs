//! Flat RGB pixel storage.
//!
//! An image is decoded once, converted to 8-bit RGB and copied into a
//! `Vec<[u8; 3]>` in row-major order: row 0 left to right, then row 1, and
//! so on. The array is read-only after construction.

use std::io::{self, Write};
use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::error::RowVecError;

/// One pixel: `[red, green, blue]`, each 0–255.
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbArray {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RgbArray {
    /// Builds an array from raw triples. Returns `None` unless
    /// `pixels.len() == width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<RgbArray> {
        let area = (width as usize).checked_mul(height as usize)?;
        (pixels.len() == area).then_some(RgbArray { width, height, pixels })
    }

    /// Copies the pixel data of a decoded image. Alpha is dropped and wider
    /// channel types are narrowed to 8 bits.
    pub fn from_image(img: &DynamicImage) -> RgbArray {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();
        RgbArray { width, height, pixels }
    }

    /// Decodes an image file (PNG, JPEG, BMP or GIF) from disk.
    pub fn open(path: &Path) -> Result<RgbArray, RowVecError> {
        let img = image::open(path).map_err(|source| RowVecError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let array = RgbArray::from_image(&img);
        debug!(
            "decoded {}: {}x{} ({} pixels)",
            path.display(),
            array.width,
            array.height,
            array.len()
        );
        Ok(array)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at flat index `i` (row-major).
    pub fn get(&self, i: usize) -> Option<Rgb> {
        self.pixels.get(i).copied()
    }

    /// Writes one line per pixel as `"R G B "`.
    pub fn write_table<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for [r, g, b] in &self.pixels {
            writeln!(writer, "{} {} {} ", r, g, b)?;
        }
        Ok(())
    }
}
