//! NITF file size lookup

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{BenchError, BenchResult};
use crate::storage::BucketLayout;

/// Source of the NITF file size reported with each result
pub trait SizeLookup {
    fn nitf_size(&self, identifier: &str) -> BenchResult<u64>;
}

/// Sizes of the downloaded NITF files in a local directory
#[derive(Debug, Clone)]
pub struct LocalFileSizes {
    data_dir: PathBuf,
}

impl LocalFileSizes {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        LocalFileSizes { data_dir: data_dir.as_ref().to_path_buf() }
    }
}

impl SizeLookup for LocalFileSizes {
    fn nitf_size(&self, identifier: &str) -> BenchResult<u64> {
        let path = BucketLayout::local_nitf_path(&self.data_dir, identifier);
        let meta = fs::metadata(&path).map_err(|e| {
            BenchError::GenericError(format!("Cannot stat {}: {}", path.display(), e))
        })?;
        Ok(meta.len())
    }
}
