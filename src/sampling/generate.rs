//! Bounding-box generation for a set of local rasters

use std::path::PathBuf;

use log::{info, warn};
use rand::Rng;

use super::bbox_generator::BoundingBoxGenerator;
use crate::config::AccessConfig;
use crate::errors::BenchResult;
use crate::extractor::{RasterHandle, RasterReader};
use crate::records::BoundingBoxFile;
use crate::utils::progress::ProgressTracker;

/// Generate `trials` chip boxes for every (identifier, path) source
///
/// Each raster is opened only long enough to read its size and transform.
pub fn generate_bounding_boxes<R, G>(
    reader: &R,
    sources: &[(String, PathBuf)],
    generator: &BoundingBoxGenerator,
    trials: usize,
    rng: &mut G,
    show_progress: bool,
) -> BenchResult<BoundingBoxFile>
where
    R: RasterReader,
    G: Rng + ?Sized,
{
    let access = AccessConfig::plain("local");
    let progress = ProgressTracker::new(sources.len() as u64, "Generating bounding boxes", show_progress);

    let mut file = BoundingBoxFile::new();
    for (identifier, path) in sources {
        info!("Generating bounding boxes for {}", identifier);
        progress.start_item(identifier);
        let info = {
            let handle = reader.open(&path.to_string_lossy(), &access)?;
            handle.info()?
        };
        if !info.transform.is_north_up() {
            warn!("{} is not north-up; its boxes may have swapped edges", identifier);
        }

        let boxes = generator.generate_many(rng, trials, info.width, info.height, &info.transform);
        file.insert(identifier, boxes);
        progress.finish_item();
    }
    progress.finish();
    Ok(file)
}
