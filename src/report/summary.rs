use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::RowVecError;
use crate::pixels::RgbArray;

/// Sidecar statistics for one written row vector.
///
/// `min_abs` and `max_abs` are `None` for an empty image. `negatives` counts
/// values strictly below zero; a flipped `-0.0` (scale 0) is not negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorSummary {
    pub width: u32,
    pub height: u32,
    pub pixels: usize,
    pub negatives: usize,
    pub min_abs: Option<f64>,
    pub max_abs: Option<f64>,
}

impl VectorSummary {
    pub fn from_values(source: &RgbArray, values: &[f64]) -> VectorSummary {
        let negatives = values.iter().filter(|v| **v < 0.0).count();
        let min_abs = values.iter().map(|v| v.abs()).reduce(f64::min);
        let max_abs = values.iter().map(|v| v.abs()).reduce(f64::max);
        VectorSummary {
            width: source.width(),
            height: source.height(),
            pixels: values.len(),
            negatives,
            min_abs,
            max_abs,
        }
    }
}

/// Serializes a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), RowVecError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
