//! Benchmark results: one timing record per raster identifier

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::BenchResult;

/// Averaged chip timings of one raster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    /// Mean COG chip time in seconds
    pub cog_time: f64,
    /// Mean NITF chip time in seconds
    pub nitf_time: f64,
    /// Size of the NITF file in bytes
    pub nitf_filesize: u64,
    /// Whether every chip was identical between the two encodings
    pub has_identical_pixels: bool,
}

/// Results of one benchmark variant, ordered by identifier
///
/// Keys are kept sorted, so loading a results file and saving it again
/// reproduces it byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsFile {
    entries: BTreeMap<String, TimingResult>,
}

impl ResultsFile {
    pub fn new() -> Self {
        ResultsFile::default()
    }

    pub fn insert(&mut self, identifier: &str, result: TimingResult) {
        self.entries.insert(identifier.to_string(), result);
    }

    pub fn get(&self, identifier: &str) -> Option<&TimingResult> {
        self.entries.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimingResult)> {
        self.entries.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Number of identifiers whose chips all matched
    pub fn identical_count(&self) -> usize {
        self.entries.values().filter(|r| r.has_identical_pixels).count()
    }

    pub fn from_json_str(content: &str) -> BenchResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Pretty-printed JSON (two-space indent)
    pub fn to_json_string(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> BenchResult<Self> {
        info!("Loading results from {}", path.display());
        let content = fs::read_to_string(path)?;
        ResultsFile::from_json_str(&content)
    }

    pub fn save(&self, path: &Path) -> BenchResult<()> {
        fs::write(path, self.to_json_string()?)?;
        info!("Results saved to {}", path.display());
        Ok(())
    }
}
