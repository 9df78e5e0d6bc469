//! Benchmark step: time chip extraction per access profile

use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, warn};

use crate::benchmark::{BenchmarkRunner, Clock, LocalFileSizes};
use crate::commands::cli::string_arg;
use crate::commands::command_traits::Command;
use crate::config::{AccessConfig, Settings};
use crate::errors::BenchResult;
use crate::extractor::{ChipExporter, RasterReader};
use crate::records::{BoundingBoxFile, ResultsFile};
use crate::storage::BucketLayout;
use crate::utils::format_utils::{format_mb, format_seconds};

/// Command for running the benchmark once per selected access profile
pub struct RunCommand<'a> {
    settings: &'a Settings,
    /// Overrides the `/vsis3/<bucket>/` URL prefix
    base_url: Option<String>,
    /// Directory for PNG previews of every chip
    save_chips: Option<PathBuf>,
    show_progress: bool,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command
    ///
    /// # Arguments
    /// * `args` - Matches of the `run` or `all` subcommand
    /// * `settings` - Run settings
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> BenchResult<Self> {
        let base_url = string_arg(args, "base-url");
        if let Some(url) = &base_url {
            info!("Reading rasters from {}", url);
        }
        Ok(RunCommand {
            settings,
            base_url,
            save_chips: string_arg(args, "save-chips").map(PathBuf::from),
            show_progress: !args.get_flag("no-progress"),
        })
    }

    pub fn with_base_url(settings: &'a Settings, base_url: Option<String>) -> Self {
        RunCommand {
            settings,
            base_url,
            save_chips: None,
            show_progress: false,
        }
    }

    fn layout(&self) -> BucketLayout {
        let layout = BucketLayout::new(&self.settings.bucket, &self.settings.cog_prefix);
        match &self.base_url {
            Some(url) => layout.with_base_url(url),
            None => layout,
        }
    }

    /// Run every selected variant and save one results file per variant
    ///
    /// Returns the results in variant order.
    pub fn run_with<R, C>(&self, reader: &R, clock: &C) -> BenchResult<Vec<(AccessConfig, ResultsFile)>>
    where
        R: RasterReader,
        C: Clock + ?Sized,
    {
        let boxes = BoundingBoxFile::load(&self.settings.bbox_path())?;
        let layout = self.layout();
        let sizes = LocalFileSizes::new(&self.settings.data_dir);
        fs::create_dir_all(&self.settings.results_dir)?;

        let mut outputs = Vec::new();
        for access in self.settings.selected_profiles()? {
            info!("Running benchmark variant '{}'", access.name);

            let exporter = match &self.save_chips {
                Some(dir) => Some(ChipExporter::new(dir.join(&access.name))?),
                None => None,
            };
            let mut runner = BenchmarkRunner::new(reader, &sizes, clock, &layout).with_progress(self.show_progress);
            if let Some(exporter) = &exporter {
                runner = runner.with_exporter(exporter);
            }

            let results = runner.run(&boxes, &access)?;
            log_summary(&access, &results);
            results.save(&self.settings.results_dir.join(access.results_file_name()))?;
            outputs.push((access, results));
        }
        Ok(outputs)
    }
}

fn log_summary(access: &AccessConfig, results: &ResultsFile) {
    info!("Summary for '{}':", access.name);
    for (identifier, result) in results.iter() {
        let line = format!(
            "{}: COG {}, NITF {}, NITF size {}",
            identifier,
            format_seconds(result.cog_time),
            format_seconds(result.nitf_time),
            format_mb(result.nitf_filesize)
        );
        if result.has_identical_pixels {
            info!("\t{} (identical pixels)", line);
        } else {
            warn!("\t{} (pixels differ)", line);
        }
    }
    let mismatched = results.len() - results.identical_count();
    if mismatched == 0 {
        info!("All {} rasters produced identical chips", results.len());
    } else {
        warn!("{} of {} rasters produced differing chips", mismatched, results.len());
    }
}

impl<'a> Command for RunCommand<'a> {
    #[cfg(feature = "gdal")]
    fn execute(&self) -> BenchResult<()> {
        self.run_with(&crate::extractor::GdalReader::new(), &crate::benchmark::MonotonicClock::new())?;
        Ok(())
    }

    #[cfg(not(feature = "gdal"))]
    fn execute(&self) -> BenchResult<()> {
        Err(super::gdal_unavailable("run"))
    }
}
