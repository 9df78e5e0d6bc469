//! CLI command implementations
//!
//! This module contains the pipeline steps exposed as subcommands,
//! implemented using the Command pattern.

pub mod all_command;
pub mod cli;
pub mod command_traits;
pub mod download_command;
pub mod generate_command;
pub mod plot_command;
pub mod run_command;

#[cfg(test)]
mod tests;

pub use all_command::AllCommand;
pub use cli::{apply_overrides, build_cli};
pub use command_traits::{Command, CommandFactory};
pub use download_command::DownloadCommand;
pub use generate_command::GenerateCommand;
pub use plot_command::PlotCommand;
pub use run_command::RunCommand;

use clap::ArgMatches;

use crate::config::Settings;
use crate::errors::{BenchError, BenchResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct ChipbenchCommandFactory;

impl ChipbenchCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ChipbenchCommandFactory
    }
}

impl Default for ChipbenchCommandFactory {
    fn default() -> Self {
        ChipbenchCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for ChipbenchCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings) -> BenchResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("download", sub)) => Ok(Box::new(DownloadCommand::new(sub, settings)?)),
            Some(("generate", sub)) => Ok(Box::new(GenerateCommand::new(sub, settings)?)),
            Some(("run", sub)) => Ok(Box::new(RunCommand::new(sub, settings)?)),
            Some(("plot", sub)) => Ok(Box::new(PlotCommand::new(sub, settings)?)),
            Some(("all", sub)) => Ok(Box::new(AllCommand::new(sub, settings)?)),
            Some((other, _)) => Err(BenchError::GenericError(format!("Unknown command '{}'", other))),
            None => Err(BenchError::GenericError("No command given".to_string())),
        }
    }
}

#[cfg(not(feature = "gdal"))]
fn gdal_unavailable(step: &str) -> BenchError {
    BenchError::ConfigError(format!(
        "'{}' needs GDAL; rebuild with the `gdal` feature enabled",
        step
    ))
}
