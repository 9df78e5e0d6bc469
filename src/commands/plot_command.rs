//! Plot step: render the saved results of every variant

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::errors::BenchResult;
use crate::records::ResultsFile;
use crate::report::{write_plots, PlotPaths};

/// Command for plotting each selected variant's results file
pub struct PlotCommand<'a> {
    settings: &'a Settings,
}

impl<'a> PlotCommand<'a> {
    pub fn new(_args: &ArgMatches, settings: &'a Settings) -> BenchResult<Self> {
        Ok(PlotCommand::from_settings(settings))
    }

    pub fn from_settings(settings: &'a Settings) -> Self {
        PlotCommand { settings }
    }

    /// Render the plots, returning their paths in variant order
    pub fn plot_all(&self) -> BenchResult<Vec<PlotPaths>> {
        let mut written = Vec::new();
        for access in self.settings.selected_profiles()? {
            let path = self.settings.results_dir.join(access.results_file_name());
            let results = ResultsFile::load(&path)?;
            info!("Plotting {} results of variant '{}'", results.len(), access.name);
            written.push(write_plots(&results, &self.settings.plots_dir, &access.results_suffix)?);
        }
        Ok(written)
    }
}

impl<'a> Command for PlotCommand<'a> {
    fn execute(&self) -> BenchResult<()> {
        self.plot_all()?;
        Ok(())
    }
}
