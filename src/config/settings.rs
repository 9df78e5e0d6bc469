//! Run settings loaded from `chipbench.toml`

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::access::AccessConfig;
use super::profiles::{builtin_profile, builtin_profile_names, name_profiles};
use crate::errors::{BenchError, BenchResult};
use crate::sampling::{BoundingBoxGenerator, DEFAULT_DIVISOR};

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "chipbench.toml";

/// Bucket holding the sample NITF files and their COG conversions
pub const DEFAULT_BUCKET: &str = "kitware-nitf-cog-comparison-test";

/// Configuration for a benchmark run
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Object storage bucket
    pub bucket: String,
    /// AWS region, if not taken from the environment
    pub region: Option<String>,
    /// Custom S3 endpoint (MinIO and friends)
    pub endpoint: Option<String>,
    /// Key prefix of the COG conversions
    pub cog_prefix: String,
    /// Where NITF files are downloaded and looked up
    pub data_dir: PathBuf,
    /// Bounding-box file name, relative to `data_dir`
    pub bbox_file: String,
    /// Directory receiving `results*.json`
    pub results_dir: PathBuf,
    /// Directory receiving plots
    pub plots_dir: PathBuf,
    /// Chip size divisor
    pub divisor: usize,
    /// Bounding boxes generated per raster
    pub trials: usize,
    /// Seed for bounding box generation; unseeded when absent
    pub seed: Option<u64>,
    /// Access profiles to benchmark, in order
    pub variants: Vec<String>,
    /// Profiles declared in the settings file
    pub profiles: BTreeMap<String, AccessConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bucket: DEFAULT_BUCKET.to_string(),
            region: None,
            endpoint: None,
            cog_prefix: "converted_cogs/".to_string(),
            data_dir: PathBuf::from("."),
            bbox_file: "bounding_boxes.json".to_string(),
            results_dir: PathBuf::from("."),
            plots_dir: PathBuf::from("."),
            divisor: DEFAULT_DIVISOR,
            trials: 1,
            seed: None,
            variants: vec!["default".to_string(), "vsil_curl_chunk_size".to_string()],
            profiles: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(content: &str) -> BenchResult<Self> {
        let mut settings: Settings = toml::from_str(content)?;
        settings.profiles = name_profiles(std::mem::take(&mut settings.profiles));
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings
    ///
    /// An explicit path must exist. Without one, `chipbench.toml` in the
    /// working directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> BenchResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if !fallback.exists() {
                    debug!("No {} found, using default settings", DEFAULT_SETTINGS_FILE);
                    return Ok(Settings::default());
                }
                fallback
            }
        };

        info!("Loading settings from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| {
            BenchError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Settings::from_toml_str(&content)
    }

    /// Check values that have no sensible interpretation
    pub fn validate(&self) -> BenchResult<()> {
        if self.bucket.trim().is_empty() {
            return Err(BenchError::ConfigError("bucket must not be empty".to_string()));
        }
        if self.trials == 0 {
            return Err(BenchError::ConfigError("trials must be at least 1".to_string()));
        }
        if self.variants.is_empty() {
            return Err(BenchError::ConfigError("at least one variant is required".to_string()));
        }
        BoundingBoxGenerator::new(self.divisor)?;
        Ok(())
    }

    /// Full path of the bounding-box file
    pub fn bbox_path(&self) -> PathBuf {
        self.data_dir.join(&self.bbox_file)
    }

    /// Resolve an access profile, preferring ones declared in the settings file
    pub fn access_profile(&self, name: &str) -> BenchResult<AccessConfig> {
        self.profiles
            .get(name)
            .cloned()
            .or_else(|| builtin_profile(name))
            .ok_or_else(|| {
                let mut known = builtin_profile_names();
                known.extend(self.profiles.keys().cloned());
                known.sort();
                known.dedup();
                BenchError::ConfigError(format!(
                    "Unknown access profile '{}' (known: {})",
                    name,
                    known.join(", ")
                ))
            })
    }

    /// Profiles for every selected variant, in order
    pub fn selected_profiles(&self) -> BenchResult<Vec<AccessConfig>> {
        self.variants.iter().map(|name| self.access_profile(name)).collect()
    }
}
