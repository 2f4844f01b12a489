mod color_stream;
pub mod geometry;
mod pattern;

pub use color_stream::SeededColorStream;
pub use geometry::{Cube, Diamond, Point};
pub use pattern::{CubePattern, CubeSettings, COLOR_OPTIONS};
