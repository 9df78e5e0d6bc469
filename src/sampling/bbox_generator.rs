//! Random bounding box generation
//!
//! Chips are a fixed fraction of the image (`width / divisor` by
//! `height / divisor` pixels) so that every encoding of the same raster is
//! asked for exactly the same window.
//!
//! Pixel origins are drawn from `[0, width / divisor]` (inclusive) on each
//! axis. The far corner is taken with a lower-right pixel offset, so the
//! chip covers `size + 1` pixels and its far edge sits at
//! `origin + size + 1`. Staying inside the image therefore requires
//! `2 * (dim / divisor) + 1 <= dim`, which holds for every dimension when
//! `divisor >= 3` but not for `divisor == 2` and even dimensions.

use log::debug;
use rand::Rng;

use crate::coordinate::{BoundingBox, GeoTransform, PixelOffset};
use crate::errors::{BenchError, BenchResult};

/// Default window divisor
pub const DEFAULT_DIVISOR: usize = 4;

/// Smallest divisor for which the origin range keeps chips inside the image
const MIN_DIVISOR: usize = 3;

/// Generates randomly positioned chip bounding boxes
#[derive(Debug, Clone, Copy)]
pub struct BoundingBoxGenerator {
    divisor: usize,
}

impl Default for BoundingBoxGenerator {
    fn default() -> Self {
        BoundingBoxGenerator { divisor: DEFAULT_DIVISOR }
    }
}

impl BoundingBoxGenerator {
    /// Create a generator with the given window divisor
    pub fn new(divisor: usize) -> BenchResult<Self> {
        if divisor < MIN_DIVISOR {
            return Err(BenchError::ConfigError(format!(
                "Window divisor must be at least {}, got {}",
                MIN_DIVISOR, divisor
            )));
        }
        Ok(BoundingBoxGenerator { divisor })
    }

    /// The window divisor
    pub fn divisor(&self) -> usize {
        self.divisor
    }

    /// Chip size in pixels for an image of `width` x `height`
    ///
    /// Also the largest origin that will be drawn on each axis.
    pub fn window_size(&self, width: usize, height: usize) -> (usize, usize) {
        (width / self.divisor, height / self.divisor)
    }

    /// Draw one random chip for an image
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        width: usize,
        height: usize,
        transform: &GeoTransform,
    ) -> BoundingBox {
        let (max_x, max_y) = self.window_size(width, height);
        let x0 = rng.gen_range(0..=max_x);
        let y0 = rng.gen_range(0..=max_y);
        debug!("Chip origin ({}, {}) within [0, {}] x [0, {}]", x0, y0, max_x, max_y);
        self.bbox_for_origin(x0, y0, width, height, transform)
    }

    /// Draw `count` independent chips for an image
    pub fn generate_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        width: usize,
        height: usize,
        transform: &GeoTransform,
    ) -> Vec<BoundingBox> {
        (0..count)
            .map(|_| self.generate(rng, width, height, transform))
            .collect()
    }

    /// Geographic bounding box of the chip whose top-left pixel is `(x0, y0)`
    ///
    /// The top-left corner comes from pixel `(x0, y0)` with an upper-left
    /// offset and the bottom-right corner from pixel `(x0 + w, y0 + h)` with a
    /// lower-right offset. Rows grow downward while latitude grows upward, so
    /// `y_max` comes from the top-left and `y_min` from the bottom-right.
    pub fn bbox_for_origin(
        &self,
        x0: usize,
        y0: usize,
        width: usize,
        height: usize,
        transform: &GeoTransform,
    ) -> BoundingBox {
        let (chip_w, chip_h) = self.window_size(width, height);
        let x1 = x0 + chip_w;
        let y1 = y0 + chip_h;

        let top_left = transform.pixel_to_geo(y0 as f64, x0 as f64, PixelOffset::UpperLeft);
        let bottom_right = transform.pixel_to_geo(y1 as f64, x1 as f64, PixelOffset::LowerRight);

        BoundingBox {
            x_min: top_left.x,
            y_min: bottom_right.y,
            x_max: bottom_right.x,
            y_max: top_left.y,
        }
    }
}
