//! Timed chip extraction across both encodings
//!
//! For every identifier the runner reads each chip from the COG and then
//! from the NITF, strictly one after the other, timing each open-and-read
//! call. Per-encoding times are averaged over the identifier's boxes and
//! the per-box pixel comparisons are folded into one flag.

use log::{debug, info, warn};

use super::clock::Clock;
use super::sizes::SizeLookup;
use crate::config::AccessConfig;
use crate::coordinate::BoundingBox;
use crate::errors::{BenchError, BenchResult};
use crate::extractor::{Chip, ChipExporter, RasterReader};
use crate::records::{BoundingBoxFile, ResultsFile, TimingResult};
use crate::storage::BucketLayout;
use crate::utils::format_utils::{format_mb, format_seconds};
use crate::utils::progress::ProgressTracker;

/// Runs the chip benchmark for one access configuration at a time
pub struct BenchmarkRunner<'a, R, S, C>
where
    R: RasterReader,
    S: SizeLookup + ?Sized,
    C: Clock + ?Sized,
{
    reader: &'a R,
    sizes: &'a S,
    clock: &'a C,
    layout: &'a BucketLayout,
    exporter: Option<&'a ChipExporter>,
    show_progress: bool,
}

impl<'a, R, S, C> BenchmarkRunner<'a, R, S, C>
where
    R: RasterReader,
    S: SizeLookup + ?Sized,
    C: Clock + ?Sized,
{
    /// Create a runner
    ///
    /// # Arguments
    /// * `reader` - Opens and reads both encodings
    /// * `sizes` - Supplies the NITF file size of each identifier
    /// * `clock` - Monotonic time source for the timings
    /// * `layout` - Resolves identifiers to NITF and COG URLs
    pub fn new(reader: &'a R, sizes: &'a S, clock: &'a C, layout: &'a BucketLayout) -> Self {
        BenchmarkRunner {
            reader,
            sizes,
            clock,
            layout,
            exporter: None,
            show_progress: false,
        }
    }

    /// Also write every extracted chip as a PNG preview
    pub fn with_exporter(mut self, exporter: &'a ChipExporter) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Benchmark every identifier in the bounding-box file
    ///
    /// The first failing open or read aborts the run; no partial results
    /// are returned.
    pub fn run(&self, boxes: &BoundingBoxFile, access: &AccessConfig) -> BenchResult<ResultsFile> {
        boxes.validate()?;
        info!(
            "Benchmarking {} rasters with access profile '{}'",
            boxes.len(),
            access.name
        );

        let progress = ProgressTracker::new(boxes.len() as u64, &access.name, self.show_progress);

        let mut results = ResultsFile::new();
        for (identifier, bboxes) in boxes.iter() {
            progress.start_item(identifier);
            let result = self.run_identifier(identifier, bboxes, access)?;
            results.insert(identifier, result);
            progress.finish_item();
        }
        progress.finish();

        info!(
            "{} of {} rasters had identical chips",
            results.identical_count(),
            results.len()
        );
        Ok(results)
    }

    /// Benchmark one identifier over all of its boxes
    pub fn run_identifier(
        &self,
        identifier: &str,
        bboxes: &[BoundingBox],
        access: &AccessConfig,
    ) -> BenchResult<TimingResult> {
        if bboxes.is_empty() {
            return Err(BenchError::NoBoundingBoxes(identifier.to_string()));
        }

        let nitf_url = self.layout.nitf_url(identifier);
        let cog_url = self.layout.cog_url(identifier);
        let nitf_filesize = self.sizes.nitf_size(identifier)?;

        info!("{}", identifier);
        info!("\tNitf file size: {}", format_mb(nitf_filesize));

        let mut cog_total = 0.0;
        let mut nitf_total = 0.0;
        let mut identical = true;

        for (trial, bbox) in bboxes.iter().enumerate() {
            info!("\tChipping {} COG", identifier);
            let (cog_chip, cog_time) = self.timed_chip(&cog_url, bbox, access)?;
            info!("\tDone chipping {} COG in {}", identifier, format_seconds(cog_time));

            info!("\tChipping {} NITF", identifier);
            let (nitf_chip, nitf_time) = self.timed_chip(&nitf_url, bbox, access)?;
            info!("\tDone chipping {} NITF in {}", identifier, format_seconds(nitf_time));

            cog_total += cog_time;
            nitf_total += nitf_time;

            if !cog_chip.is_identical(&nitf_chip) {
                debug!(
                    "Chip {} of {} differs: COG {}x{}x{}, NITF {}x{}x{}",
                    trial,
                    identifier,
                    cog_chip.width(),
                    cog_chip.height(),
                    cog_chip.bands(),
                    nitf_chip.width(),
                    nitf_chip.height(),
                    nitf_chip.bands()
                );
                identical = false;
            }

            if let Some(exporter) = self.exporter {
                exporter.save(identifier, trial, "cog", &cog_chip)?;
                exporter.save(identifier, trial, "nitf", &nitf_chip)?;
            }
        }

        if identical {
            info!("\tAll chips are identical");
        } else {
            warn!("\tSome chips are not identical");
        }

        let count = bboxes.len() as f64;
        Ok(TimingResult {
            cog_time: cog_total / count,
            nitf_time: nitf_total / count,
            nitf_filesize,
            has_identical_pixels: identical,
        })
    }

    /// Open, read and close one chip, timing the whole call
    fn timed_chip(&self, url: &str, bbox: &BoundingBox, access: &AccessConfig) -> BenchResult<(Chip, f64)> {
        let start = self.clock.now();
        let chip = self.reader.chip(url, bbox, access)?;
        let elapsed = self.clock.seconds_since(start);
        debug!("Read {}x{} chip from {}", chip.width(), chip.height(), url);
        Ok((chip, elapsed))
    }
}
