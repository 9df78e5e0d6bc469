//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, one command per pipeline step.

use crate::config::Settings;
use crate::errors::BenchResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> BenchResult<()>;
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - Top-level CLI argument matches from clap
    /// * `settings` - Run settings with CLI overrides already applied
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, settings: &'a Settings) -> BenchResult<Box<dyn Command + 'a>>;
}
