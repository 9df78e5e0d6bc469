//! Download step: mirror the bucket's NITF files locally

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::errors::BenchResult;
use crate::storage::{download_nitf_files, DownloadSummary, ObjectGateway, S3Gateway};
use crate::utils::format_utils::format_mb;

/// Command for downloading every `.nitf` object of the bucket
pub struct DownloadCommand<'a> {
    settings: &'a Settings,
    show_progress: bool,
}

impl<'a> DownloadCommand<'a> {
    /// Create a new download command
    ///
    /// # Arguments
    /// * `args` - Matches of the `download` subcommand
    /// * `settings` - Run settings
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> BenchResult<Self> {
        Ok(DownloadCommand::with_progress(settings, !args.get_flag("no-progress")))
    }

    pub fn with_progress(settings: &'a Settings, show_progress: bool) -> Self {
        DownloadCommand { settings, show_progress }
    }

    /// Download through any gateway, skipping files already present
    pub fn download_with<G: ObjectGateway + ?Sized>(&self, gateway: &G) -> BenchResult<DownloadSummary> {
        info!(
            "Downloading NITF files from {} into {}",
            self.settings.bucket,
            self.settings.data_dir.display()
        );
        let summary = download_nitf_files(gateway, &self.settings.data_dir, self.show_progress)?;
        info!(
            "Download finished: {} new ({}), {} already present",
            summary.downloaded.len(),
            format_mb(summary.bytes),
            summary.skipped.len()
        );
        Ok(summary)
    }
}

impl<'a> Command for DownloadCommand<'a> {
    fn execute(&self) -> BenchResult<()> {
        let gateway = S3Gateway::new(self.settings)?;
        self.download_with(&gateway)?;
        Ok(())
    }
}
