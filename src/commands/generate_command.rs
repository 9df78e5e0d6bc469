//! Generation step: random chip boxes for every local NITF file

use clap::ArgMatches;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::errors::BenchResult;
use crate::extractor::RasterReader;
use crate::records::BoundingBoxFile;
use crate::sampling::{generate_bounding_boxes, BoundingBoxGenerator};
use crate::storage::BucketLayout;

/// Command for writing the bounding-box file
pub struct GenerateCommand<'a> {
    settings: &'a Settings,
    show_progress: bool,
}

impl<'a> GenerateCommand<'a> {
    /// Create a new generate command
    ///
    /// # Arguments
    /// * `args` - Matches of the `generate` or `all` subcommand
    /// * `settings` - Run settings with divisor, trials and seed applied
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> BenchResult<Self> {
        Ok(GenerateCommand::with_progress(settings, !args.get_flag("no-progress")))
    }

    pub fn with_progress(settings: &'a Settings, show_progress: bool) -> Self {
        GenerateCommand { settings, show_progress }
    }

    /// Seeded generator when a seed is configured, otherwise from OS entropy
    pub fn rng(&self) -> StdRng {
        match self.settings.seed {
            Some(seed) => {
                info!("Using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }

    /// Generate and save the bounding-box file using the given reader
    pub fn generate_with<R: RasterReader>(&self, reader: &R) -> BenchResult<BoundingBoxFile> {
        let sources = BucketLayout::local_identifiers(&self.settings.data_dir)?;
        if sources.is_empty() {
            warn!("No .nitf files found in {}", self.settings.data_dir.display());
        }

        let generator = BoundingBoxGenerator::new(self.settings.divisor)?;
        let mut rng = self.rng();
        let boxes = generate_bounding_boxes(
            reader,
            &sources,
            &generator,
            self.settings.trials,
            &mut rng,
            self.show_progress,
        )?;

        boxes.save(&self.settings.bbox_path())?;
        Ok(boxes)
    }
}

impl<'a> Command for GenerateCommand<'a> {
    #[cfg(feature = "gdal")]
    fn execute(&self) -> BenchResult<()> {
        self.generate_with(&crate::extractor::GdalReader::new())?;
        Ok(())
    }

    #[cfg(not(feature = "gdal"))]
    fn execute(&self) -> BenchResult<()> {
        Err(super::gdal_unavailable("generate"))
    }
}
