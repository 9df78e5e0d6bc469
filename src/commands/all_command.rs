//! The full pipeline: download, generate, run, plot

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{DownloadCommand, GenerateCommand, PlotCommand, RunCommand};
use crate::config::Settings;
use crate::errors::BenchResult;

/// Runs every step in order, stopping at the first failure
pub struct AllCommand<'a> {
    download: DownloadCommand<'a>,
    generate: GenerateCommand<'a>,
    run: RunCommand<'a>,
    plot: PlotCommand<'a>,
}

impl<'a> AllCommand<'a> {
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> BenchResult<Self> {
        Ok(AllCommand {
            download: DownloadCommand::new(args, settings)?,
            generate: GenerateCommand::new(args, settings)?,
            run: RunCommand::new(args, settings)?,
            plot: PlotCommand::new(args, settings)?,
        })
    }
}

impl<'a> Command for AllCommand<'a> {
    fn execute(&self) -> BenchResult<()> {
        let steps: [(&str, &dyn Command); 4] = [
            ("download", &self.download),
            ("generate", &self.generate),
            ("run", &self.run),
            ("plot", &self.plot),
        ];
        for (name, step) in steps {
            info!("=== {} ===", name);
            step.execute()?;
        }
        Ok(())
    }
}
