pub mod vector_config;

pub use vector_config::VectorConfig;
