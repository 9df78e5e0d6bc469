//! Randomized chip placement
//!
//! Derives geographic bounding boxes for chips at random positions inside
//! a raster's extent.

mod bbox_generator;
mod generate;

#[cfg(test)]
mod tests;

pub use self::bbox_generator::{BoundingBoxGenerator, DEFAULT_DIVISOR};
pub use self::generate::generate_bounding_boxes;
