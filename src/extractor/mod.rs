//! Chip extraction from raster sources
//!
//! This module defines the reader seam the benchmark runs against, the
//! GDAL implementation of it, and the pixel window and chip types.

mod chip;
mod chip_export;
#[cfg(feature = "gdal")]
mod gdal_reader;
mod raster_reader;
mod region;

#[cfg(test)]
mod tests;

// Public exports
pub use chip::Chip;
pub use chip_export::{to_grayscale, ChipExporter};
#[cfg(feature = "gdal")]
pub use gdal_reader::{GdalHandle, GdalReader};
pub use raster_reader::{RasterHandle, RasterInfo, RasterReader};
pub use region::Region;
