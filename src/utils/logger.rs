//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate, writing every accepted record to a log file and echoing it to
//! the console. Levels are filtered with `env_logger`'s directive syntax
//! read from `CHIPBENCH_LOG` (for example `debug` or `chipbench=trace`).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use env_logger::filter::{Builder as FilterBuilder, Filter};
use log::{Log, Metadata, Record};

use super::progress::suspend_bar;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "CHIPBENCH_LOG";

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Level filter
    filter: Filter,
    /// Whether records are echoed to stdout
    console: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `default_filter` - Directives used when `CHIPBENCH_LOG` is unset
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, default_filter: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            filter: build_filter(default_filter),
            console: true,
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("{e:?}")))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, default_filter: &str) -> io::Result<()> {
        let global_logger = Logger::new(log_file, default_filter)?;
        let max_level = global_logger.filter.filter();

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(max_level);
        Ok(())
    }
}

fn build_filter(default_filter: &str) -> Filter {
    let directives = std::env::var(LOG_ENV).unwrap_or_else(|_| default_filter.to_string());
    FilterBuilder::new().parse(&directives).build()
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.filter.matches(record) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            if self.console {
                suspend_bar(|| println!("{}", message));
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
