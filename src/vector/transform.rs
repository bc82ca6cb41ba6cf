use log::debug;
use rand::Rng;

use crate::config::VectorConfig;
use crate::pixels::{Rgb, RgbArray};

/// Replaces a zero channel with 1 so it can be used as a divisor.
#[inline]
pub fn one_if_zero(value: u8) -> u8 {
    if value == 0 { 1 } else { value }
}

/// Unsigned row-vector element for one pixel: `scale * (R / G / B)`.
///
/// All three channels go through `one_if_zero` first, so the result is
/// always finite.
pub fn element(rgb: Rgb, scale: f64) -> f64 {
    let [r, g, b] = rgb.map(|c| one_if_zero(c) as f64);
    r / g / b * scale
}

/// Fair coin: `-1.0` or `1.0` with equal probability.
#[inline]
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) { -1.0 } else { 1.0 }
}

/// Maps every pixel to its signed element, in pixel order.
///
/// The source array is left untouched; `rng` is consumed once per pixel.
pub fn to_row_vector<R: Rng + ?Sized>(
    pixels: &RgbArray,
    config: &VectorConfig,
    rng: &mut R,
) -> Vec<f64> {
    let values: Vec<f64> = pixels
        .pixels()
        .iter()
        .map(|&rgb| element(rgb, config.scale) * random_sign(rng))
        .collect();
    debug!("built row vector of {} elements (scale {})", values.len(), config.scale);
    values
}
