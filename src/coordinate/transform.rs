//! Affine pixel-to-geographic transformation

use super::point::Point;
use crate::errors::{BenchError, BenchResult};

/// Which corner of a pixel a transformed coordinate refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOffset {
    /// Top-left corner of the pixel
    UpperLeft,
    /// Bottom-right corner of the pixel
    LowerRight,
}

impl PixelOffset {
    /// Fractional (column, row) shift applied to a pixel index
    fn shift(&self) -> (f64, f64) {
        match self {
            PixelOffset::UpperLeft => (0.0, 0.0),
            PixelOffset::LowerRight => (1.0, 1.0),
        }
    }
}

/// Six-coefficient affine transform in GDAL order
///
/// `[origin_x, pixel_width, row_rotation, origin_y, column_rotation, pixel_height]`
///
/// ```text
/// X = origin_x + col * pixel_width     + row * row_rotation
/// Y = origin_y + col * column_rotation + row * pixel_height
/// ```
///
/// `pixel_height` is negative for north-up imagery, which is why pixel rows
/// grow downward while latitude grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    coefficients: [f64; 6],
}

impl GeoTransform {
    /// Create a transform from raw GDAL coefficients
    pub fn new(coefficients: [f64; 6]) -> Self {
        GeoTransform { coefficients }
    }

    /// Create a north-up transform from its upper-left corner and pixel size
    ///
    /// `pixel_height` is given as a positive size and stored negated.
    pub fn from_origin(west: f64, north: f64, pixel_width: f64, pixel_height: f64) -> Self {
        GeoTransform::new([west, pixel_width, 0.0, north, 0.0, -pixel_height])
    }

    /// Identity transform (pixel coordinates equal world coordinates)
    pub fn identity() -> Self {
        GeoTransform::new([0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// True when the transform has no rotation terms and Y decreases by row
    pub fn is_north_up(&self) -> bool {
        let [_, pw, rr, _, cr, ph] = self.coefficients;
        rr == 0.0 && cr == 0.0 && pw > 0.0 && ph < 0.0
    }

    /// Transform a pixel position (row, col) to world coordinates
    ///
    /// The `offset` picks which part of the pixel the returned coordinate
    /// describes; `LowerRight` of pixel (r, c) is the same point as
    /// `UpperLeft` of pixel (r + 1, c + 1).
    pub fn pixel_to_geo(&self, row: f64, col: f64, offset: PixelOffset) -> Point {
        let (dc, dr) = offset.shift();
        self.apply(col + dc, row + dr)
    }

    /// Apply the forward transform to a fractional (column, row) position
    pub fn apply(&self, col: f64, row: f64) -> Point {
        let [ox, pw, rr, oy, cr, ph] = self.coefficients;
        Point::new(ox + col * pw + row * rr, oy + col * cr + row * ph)
    }

    /// Transform world coordinates back to a fractional (column, row) position
    pub fn geo_to_pixel(&self, point: &Point) -> BenchResult<Point> {
        let [ox, pw, rr, oy, cr, ph] = self.coefficients;
        let det = pw * ph - rr * cr;
        if det == 0.0 || !det.is_finite() {
            return Err(BenchError::RasterError(format!(
                "Geotransform {:?} is not invertible",
                self.coefficients
            )));
        }

        let dx = point.x - ox;
        let dy = point.y - oy;
        let col = (dx * ph - dy * rr) / det;
        let row = (dy * pw - dx * cr) / det;
        Ok(Point::new(col, row))
    }
}
