//! HTTP range-read tuning for remote rasters

use serde::{Deserialize, Serialize};

/// A named set of GDAL HTTP access options
///
/// Profiles are values, not process state: the reader installs them for
/// the duration of one open/read and removes them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Profile name (the key it was declared under)
    #[serde(default)]
    pub name: String,
    /// Appended to results and plot file names for this profile
    #[serde(default)]
    pub results_suffix: String,
    /// `GDAL_DISABLE_READDIR_ON_OPEN` value, e.g. `EMPTY_DIR`
    #[serde(default)]
    pub disable_readdir_on_open: Option<String>,
    /// `GDAL_HTTP_MERGE_CONSECUTIVE_RANGES`
    #[serde(default)]
    pub merge_consecutive_ranges: bool,
    /// `GDAL_HTTP_MULTIPLEX`
    #[serde(default)]
    pub multiplex: bool,
    /// `GDAL_HTTP_VERSION`, e.g. `2` or `1.1`
    #[serde(default)]
    pub http_version: Option<String>,
    /// `CPL_VSIL_CURL_CHUNK_SIZE` in bytes
    #[serde(default)]
    pub chunk_size: Option<u64>,
}

impl AccessConfig {
    /// A profile with no options set
    pub fn plain(name: &str) -> Self {
        AccessConfig {
            name: name.to_string(),
            results_suffix: String::new(),
            disable_readdir_on_open: None,
            merge_consecutive_ranges: false,
            multiplex: false,
            http_version: None,
            chunk_size: None,
        }
    }

    /// GDAL configuration key/value pairs this profile sets
    ///
    /// Boolean flags are only emitted when enabled, so a disabled flag
    /// leaves GDAL's own default in place.
    pub fn gdal_options(&self) -> Vec<(&'static str, String)> {
        let mut options = Vec::new();
        if let Some(mode) = &self.disable_readdir_on_open {
            options.push(("GDAL_DISABLE_READDIR_ON_OPEN", mode.clone()));
        }
        if self.merge_consecutive_ranges {
            options.push(("GDAL_HTTP_MERGE_CONSECUTIVE_RANGES", "YES".to_string()));
        }
        if self.multiplex {
            options.push(("GDAL_HTTP_MULTIPLEX", "YES".to_string()));
        }
        if let Some(version) = &self.http_version {
            options.push(("GDAL_HTTP_VERSION", version.clone()));
        }
        if let Some(size) = self.chunk_size {
            options.push(("CPL_VSIL_CURL_CHUNK_SIZE", size.to_string()));
        }
        options
    }

    /// File name for this profile's results, e.g. `results_with_x.json`
    pub fn results_file_name(&self) -> String {
        format!("results{}.json", self.results_suffix)
    }
}
