//! Custom error types for the benchmark harness

use std::fmt;
use std::io;

/// Benchmark error types
///
/// Failures from storage, GDAL and the filesystem are carried through
/// unchanged so the run terminates with the original cause. A pixel
/// mismatch between encodings is never an error.
#[derive(Debug)]
pub enum BenchError {
    /// I/O error
    IoError(io::Error),
    /// JSON encoding or decoding error
    JsonError(serde_json::Error),
    /// Invalid or unreadable configuration
    ConfigError(String),
    /// Object storage failure (listing, download)
    StorageError(String),
    /// Raster open or read failure
    RasterError(String),
    /// Bounding box violates `min < max` on an axis
    InvalidBoundingBox(String),
    /// Requested pixel window falls outside the raster
    WindowOutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        raster_width: usize,
        raster_height: usize,
    },
    /// An identifier has an empty list of bounding boxes
    NoBoundingBoxes(String),
    /// Plot or chip rendering failure
    RenderError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::IoError(e) => write!(f, "I/O error: {}", e),
            BenchError::JsonError(e) => write!(f, "JSON error: {}", e),
            BenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            BenchError::StorageError(msg) => write!(f, "Object storage error: {}", msg),
            BenchError::RasterError(msg) => write!(f, "Raster error: {}", msg),
            BenchError::InvalidBoundingBox(msg) => write!(f, "Invalid bounding box: {}", msg),
            BenchError::WindowOutOfBounds { x, y, width, height, raster_width, raster_height } => write!(
                f,
                "Window x={}, y={}, width={}, height={} is outside raster of {}x{}",
                x, y, width, height, raster_width, raster_height
            ),
            BenchError::NoBoundingBoxes(id) => write!(f, "No bounding boxes for '{}'", id),
            BenchError::RenderError(msg) => write!(f, "Render error: {}", msg),
            BenchError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::IoError(e) => Some(e),
            BenchError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

impl From<io::Error> for BenchError {
    fn from(error: io::Error) -> Self {
        BenchError::IoError(error)
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(error: serde_json::Error) -> Self {
        BenchError::JsonError(error)
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(error: toml::de::Error) -> Self {
        BenchError::ConfigError(error.to_string())
    }
}

impl From<object_store::Error> for BenchError {
    fn from(error: object_store::Error) -> Self {
        BenchError::StorageError(error.to_string())
    }
}

#[cfg(feature = "gdal")]
impl From<gdal::errors::GdalError> for BenchError {
    fn from(error: gdal::errors::GdalError) -> Self {
        BenchError::RasterError(error.to_string())
    }
}

impl From<image::ImageError> for BenchError {
    fn from(error: image::ImageError) -> Self {
        BenchError::RenderError(error.to_string())
    }
}

impl From<quick_xml::Error> for BenchError {
    fn from(error: quick_xml::Error) -> Self {
        BenchError::RenderError(error.to_string())
    }
}

impl From<String> for BenchError {
    fn from(msg: String) -> Self {
        BenchError::GenericError(msg)
    }
}
