//! Point structure for representing coordinates

/// A point in a coordinate system
///
/// Used both for geographic positions (longitude/latitude) and for
/// fractional pixel positions (column/row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (longitude, or pixel column)
    pub x: f64,
    /// Y coordinate (latitude, or pixel row)
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}
