//! Bounding box structure for defining chip regions

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::errors::{BenchError, BenchResult};

/// A bounding box in geographic (longitude/latitude) coordinates
///
/// Serialized with the field names used by the bounding-box file:
/// `{"x_min": .., "y_min": .., "x_max": .., "y_max": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum X coordinate (western edge)
    pub x_min: f64,
    /// Minimum Y coordinate (southern edge)
    pub y_min: f64,
    /// Maximum X coordinate (eastern edge)
    pub x_max: f64,
    /// Maximum Y coordinate (northern edge)
    pub y_max: f64,
}

impl BoundingBox {
    /// Create a new bounding box without checking its orientation
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        BoundingBox { x_min, y_min, x_max, y_max }
    }

    /// Check the `x_min < x_max` and `y_min < y_max` invariant
    pub fn validate(&self) -> BenchResult<()> {
        let finite = [self.x_min, self.y_min, self.x_max, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(BenchError::InvalidBoundingBox(format!("{} has non-finite coordinates", self)));
        }
        if self.x_min >= self.x_max {
            return Err(BenchError::InvalidBoundingBox(format!("{} has x_min >= x_max", self)));
        }
        if self.y_min >= self.y_max {
            return Err(BenchError::InvalidBoundingBox(format!("{} has y_min >= y_max", self)));
        }
        Ok(())
    }

    /// The four corners, starting top-left and going clockwise
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_max),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_min, self.y_min),
        ]
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x_min, self.y_min, self.x_max, self.y_max)
    }
}
