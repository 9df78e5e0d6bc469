//! GDAL-backed raster reader
//!
//! Opens local files and `/vsis3/` URLs through GDAL. HTTP tuning options
//! are installed as thread-local GDAL configuration for the lifetime of one
//! handle and the previous values are put back when it is dropped.

use gdal::Dataset;
use log::{debug, warn};

use crate::config::AccessConfig;
use crate::coordinate::{BoundingBox, GeoTransform};
use crate::errors::{BenchError, BenchResult};

use super::chip::Chip;
use super::raster_reader::{RasterHandle, RasterInfo, RasterReader};
use super::region::Region;

/// Raster reader using the GDAL C library
#[derive(Debug, Default, Clone, Copy)]
pub struct GdalReader;

impl GdalReader {
    pub fn new() -> Self {
        GdalReader
    }
}

impl RasterReader for GdalReader {
    type Handle = GdalHandle;

    fn open(&self, url: &str, access: &AccessConfig) -> BenchResult<GdalHandle> {
        let scope = ConfigScope::apply(access)?;
        debug!("Opening {} with access profile '{}'", url, access.name);
        let dataset = Dataset::open(url)
            .map_err(|e| BenchError::RasterError(format!("Failed to open {}: {}", url, e)))?;

        Ok(GdalHandle {
            dataset,
            url: url.to_string(),
            _scope: scope,
        })
    }
}

/// An open GDAL dataset
///
/// Field order matters: the dataset is closed before the configuration
/// scope restores the previous options.
pub struct GdalHandle {
    dataset: Dataset,
    url: String,
    _scope: ConfigScope,
}

impl RasterHandle for GdalHandle {
    fn info(&self) -> BenchResult<RasterInfo> {
        let (width, height) = self.dataset.raster_size();
        let transform = self.dataset.geo_transform().map_err(|e| {
            BenchError::RasterError(format!("{} has no geotransform: {}", self.url, e))
        })?;

        Ok(RasterInfo {
            width,
            height,
            bands: self.dataset.raster_count(),
            transform: GeoTransform::new(transform),
        })
    }

    fn window(&self, bbox: &BoundingBox) -> BenchResult<Chip> {
        let info = self.info()?;
        let region = Region::from_bbox(bbox, &info.transform, info.width, info.height)?;
        debug!(
            "Reading {}x{} window at ({}, {}) from {}",
            region.width, region.height, region.x, region.y, self.url
        );

        let mut data = Vec::with_capacity(region.pixel_count() * info.bands);
        for index in 1..=info.bands {
            let band = self.dataset.rasterband(index)?;
            let buffer = band.read_as::<f64>(
                (region.x as isize, region.y as isize),
                (region.width, region.height),
                (region.width, region.height),
                None,
            )?;
            data.extend_from_slice(buffer.data());
        }

        Chip::new(region.width, region.height, info.bands, data).ok_or_else(|| {
            BenchError::RasterError(format!("Short read from {}", self.url))
        })
    }
}

/// Thread-local GDAL configuration active while it is alive
struct ConfigScope {
    previous: Vec<(&'static str, Option<String>)>,
}

impl ConfigScope {
    fn apply(access: &AccessConfig) -> BenchResult<Self> {
        let mut scope = ConfigScope { previous: Vec::new() };
        for (key, value) in access.gdal_options() {
            let prior = gdal::config::get_thread_local_config_option(key, "")?;
            gdal::config::set_thread_local_config_option(key, &value)?;
            scope.previous.push((key, if prior.is_empty() { None } else { Some(prior) }));
        }
        Ok(scope)
    }
}

impl Drop for ConfigScope {
    fn drop(&mut self) {
        for (key, prior) in self.previous.drain(..).rev() {
            let restored = match prior {
                Some(value) => gdal::config::set_thread_local_config_option(key, &value),
                None => gdal::config::clear_thread_local_config_option(key),
            };
            if let Err(e) = restored {
                warn!("Failed to restore GDAL option {}: {}", key, e);
            }
        }
    }
}
