//! Raster reader seam
//!
//! The benchmark only needs three things from a raster library: open a
//! path or virtual-filesystem URL under an access configuration, describe
//! the raster, and read the window under a bounding box. These traits
//! capture that so the runner can be driven by GDAL or by test stubs.

use crate::config::AccessConfig;
use crate::coordinate::{BoundingBox, GeoTransform};
use crate::errors::BenchResult;

use super::chip::Chip;

/// Size and georeferencing of an opened raster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterInfo {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Number of bands
    pub bands: usize,
    /// Pixel-to-geographic transform
    pub transform: GeoTransform,
}

/// An opened raster
///
/// Implementations release their underlying resources when dropped.
pub trait RasterHandle {
    /// Describe the raster
    fn info(&self) -> BenchResult<RasterInfo>;

    /// Read every band inside a geographic bounding box
    ///
    /// # Arguments
    /// * `bbox` - Bounding box in the raster's geographic coordinates
    ///
    /// # Returns
    /// The chip, or an error if the window leaves the raster or the read fails
    fn window(&self, bbox: &BoundingBox) -> BenchResult<Chip>;
}

/// Opens rasters under a given access configuration
pub trait RasterReader {
    type Handle: RasterHandle;

    /// Open a raster
    ///
    /// The access configuration stays in effect for as long as the returned
    /// handle lives and no longer.
    ///
    /// # Arguments
    /// * `url` - Local path or virtual-filesystem URL (e.g. `/vsis3/bucket/key`)
    /// * `access` - HTTP range-read tuning for remote sources
    fn open(&self, url: &str, access: &AccessConfig) -> BenchResult<Self::Handle>;

    /// Open a raster, read one chip and close it again
    ///
    /// The handle is dropped before returning on both the success and the
    /// error path.
    fn chip(&self, url: &str, bbox: &BoundingBox, access: &AccessConfig) -> BenchResult<Chip> {
        let handle = self.open(url, access)?;
        handle.window(bbox)
    }
}
