pub mod config;
pub mod convert;
pub mod error;
pub mod pixels;
pub mod report;
pub mod vector;

// Convenience re-exports
pub use config::VectorConfig;
pub use convert::{convert_file, write_vector_for};
pub use error::RowVecError;
pub use pixels::{Rgb, RgbArray};
pub use report::VectorSummary;
pub use vector::{element, one_if_zero, to_row_vector};
