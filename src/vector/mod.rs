pub mod transform;
pub mod writer;

pub use transform::{element, one_if_zero, random_sign, to_row_vector};
pub use writer::{format_element, write_row_vector, write_row_vector_to};
