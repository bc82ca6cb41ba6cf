pub mod rgb_array;

pub use rgb_array::{Rgb, RgbArray};
