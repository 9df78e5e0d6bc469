//! The chip benchmark itself
//!
//! This module provides the runner together with the time and file-size
//! sources it depends on, both swappable for tests.

mod clock;
mod runner;
mod sizes;

#[cfg(test)]
mod tests;

pub use clock::{Clock, MonotonicClock};
pub use runner::BenchmarkRunner;
pub use sizes::{LocalFileSizes, SizeLookup};
