pub mod summary;

pub use summary::{write_json_file, VectorSummary};
