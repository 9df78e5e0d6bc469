//! Coordinate handling for geospatial data
//!
//! This module provides the bounding box record shared by the generator and
//! the benchmark runner, and the affine transform that maps between pixel
//! and geographic space.

mod bbox;
mod point;
mod transform;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::{GeoTransform, PixelOffset};
