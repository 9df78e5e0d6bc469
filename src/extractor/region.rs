//! Region structure for defining the pixel window of a chip
//!
//! This module defines the Region structure that specifies a rectangular
//! area of an image for extraction. The coordinates are in pixels and
//! follow the typical image coordinate system where (0,0) is the top-left
//! corner of the image.

use crate::coordinate::{BoundingBox, GeoTransform};
use crate::errors::{BenchError, BenchResult};

/// Distance from an integer below which a fractional pixel edge is snapped
const SNAP_EPSILON: f64 = 1e-6;

/// Region for image extraction (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: usize,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: usize,

    /// Width of the region in pixels
    pub width: usize,

    /// Height of the region in pixels
    pub height: usize,
}

impl Region {
    /// Create a new region
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> usize {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> usize {
        self.y + self.height
    }

    /// Number of pixels per band covered by the region
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert a geographic bounding box to the pixel window covering it
    ///
    /// All four corners are taken through the inverse transform, so rotated
    /// geotransforms produce the enclosing window. Edges within a millionth
    /// of a pixel of an integer are snapped before rounding outward.
    ///
    /// # Arguments
    /// * `bbox` - Bounding box in the raster's geographic coordinates
    /// * `transform` - Pixel-to-geographic transform of the raster
    /// * `raster_width` - Raster width in pixels
    /// * `raster_height` - Raster height in pixels
    ///
    /// # Returns
    /// The window, or an error when it is empty or leaves the raster
    pub fn from_bbox(
        bbox: &BoundingBox,
        transform: &GeoTransform,
        raster_width: usize,
        raster_height: usize,
    ) -> BenchResult<Region> {
        bbox.validate()?;

        let mut col_min = f64::INFINITY;
        let mut col_max = f64::NEG_INFINITY;
        let mut row_min = f64::INFINITY;
        let mut row_max = f64::NEG_INFINITY;
        for corner in bbox.corners() {
            let pixel = transform.geo_to_pixel(&corner)?;
            col_min = col_min.min(pixel.x);
            col_max = col_max.max(pixel.x);
            row_min = row_min.min(pixel.y);
            row_max = row_max.max(pixel.y);
        }

        let x0 = snap(col_min).floor() as i64;
        let y0 = snap(row_min).floor() as i64;
        let x1 = snap(col_max).ceil() as i64;
        let y1 = snap(row_max).ceil() as i64;

        let out_of_bounds = || BenchError::WindowOutOfBounds {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
            raster_width,
            raster_height,
        };

        if x0 < 0 || y0 < 0 || x1 <= x0 || y1 <= y0 {
            return Err(out_of_bounds());
        }
        if x1 as usize > raster_width || y1 as usize > raster_height {
            return Err(out_of_bounds());
        }

        Ok(Region::new(x0 as usize, y0 as usize, (x1 - x0) as usize, (y1 - y0) as usize))
    }
}

fn snap(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        value
    }
}
