mod svg;

pub use svg::{cube_svg, mosaic_svg, XML_DECLARATION};
