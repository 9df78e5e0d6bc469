pub mod benchmark;
pub mod commands;
pub mod config;
pub mod coordinate;
pub mod errors;
pub mod extractor;
pub mod records;
pub mod report;
pub mod sampling;
pub mod storage;
pub mod utils;

pub use benchmark::{BenchmarkRunner, Clock, MonotonicClock};
pub use config::{AccessConfig, Settings};
pub use coordinate::{BoundingBox, GeoTransform, Point};
pub use errors::{BenchError, BenchResult};
pub use extractor::{Chip, RasterHandle, RasterInfo, RasterReader};
pub use records::{BoundingBoxFile, ResultsFile, TimingResult};
pub use sampling::BoundingBoxGenerator;
#[cfg(feature = "gdal")]
pub use extractor::GdalReader;
