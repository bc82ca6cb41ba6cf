use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::RowVecError;

/// Plain decimal text for one element: never exponent notation, and whole
/// numbers keep a trailing `.0` (`10.0`, `0.000015378700499807765`).
pub fn format_element(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Writes one value per line, formatted with `format_element`.
pub fn write_row_vector_to<W: Write>(writer: &mut W, values: &[f64]) -> Result<(), RowVecError> {
    for v in values {
        writeln!(writer, "{}", format_element(*v))?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the vector into it.
pub fn write_row_vector(path: &Path, values: &[f64]) -> Result<(), RowVecError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_row_vector_to(&mut writer, values)?;
    writer.flush()?;
    info!("wrote {} values to {}", values.len(), path.display());
    Ok(())
}
