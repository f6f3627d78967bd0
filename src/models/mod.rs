pub mod image;
pub mod preset;

pub use image::*;
pub use preset::*;
