use std::path::Path;

use log::info;

use crate::config::VectorConfig;
use crate::error::RowVecError;
use crate::pixels::RgbArray;
use crate::vector::{to_row_vector, write_row_vector};

/// Builds the signed row vector for `pixels` and writes it to
/// `config.output`. Returns the values written.
pub fn write_vector_for(pixels: &RgbArray, config: &VectorConfig) -> Result<Vec<f64>, RowVecError> {
    config.validate()?;
    let mut rng = config.rng();
    let values = to_row_vector(pixels, config, &mut rng);
    write_row_vector(&config.output, &values)?;
    Ok(values)
}

/// Full pipeline: decode `image`, copy its pixels, transform and write.
pub fn convert_file(image: &Path, config: &VectorConfig) -> Result<(RgbArray, Vec<f64>), RowVecError> {
    let pixels = RgbArray::open(image)?;
    let values = write_vector_for(&pixels, config)?;
    info!("{} -> {}", image.display(), config.output.display());
    Ok((pixels, values))
}
