//! Naming conventions of the comparison bucket
//!
//! NITF sources sit at the top level as `<identifier>.nitf`; their COG
//! conversions live under a prefix as `<prefix><identifier>.nitf.tif`.

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::BenchResult;

lazy_static! {
    static ref NITF_KEY: Regex = Regex::new(r"^([^/]+)\.nitf$").unwrap();
}

/// Maps raster identifiers to object keys, GDAL URLs and local paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketLayout {
    cog_prefix: String,
    base_url: String,
}

impl BucketLayout {
    /// Layout for a bucket read through GDAL's `/vsis3/` handler
    pub fn new(bucket: &str, cog_prefix: &str) -> Self {
        BucketLayout {
            cog_prefix: cog_prefix.to_string(),
            base_url: format!("/vsis3/{}/", bucket),
        }
    }

    /// Replace the URL prefix rasters are opened from
    ///
    /// Useful for `/vsicurl/` endpoints or a local mirror of the bucket.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Object key of an identifier's NITF
    pub fn nitf_key(&self, identifier: &str) -> String {
        format!("{}.nitf", identifier)
    }

    /// Object key of an identifier's COG conversion
    pub fn cog_key(&self, identifier: &str) -> String {
        format!("{}{}.nitf.tif", self.cog_prefix, identifier)
    }

    /// URL GDAL opens for an object key
    pub fn url_for_key(&self, key: &str) -> String {
        format!("{}{}", self.base_url, key)
    }

    pub fn nitf_url(&self, identifier: &str) -> String {
        self.url_for_key(&self.nitf_key(identifier))
    }

    pub fn cog_url(&self, identifier: &str) -> String {
        self.url_for_key(&self.cog_key(identifier))
    }

    /// Identifier of a top-level `.nitf` key, `None` for anything else
    pub fn identifier_from_key(key: &str) -> Option<&str> {
        NITF_KEY
            .captures(key)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Local download path of an identifier's NITF
    pub fn local_nitf_path(data_dir: &Path, identifier: &str) -> PathBuf {
        data_dir.join(format!("{}.nitf", identifier))
    }

    /// All `*.nitf` files in a directory as (identifier, path), sorted by identifier
    pub fn local_identifiers(data_dir: &Path) -> BenchResult<Vec<(String, PathBuf)>> {
        let mut found = Vec::new();
        for entry in fs::read_dir(data_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "nitf") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                found.push((stem.to_string(), path.clone()));
            }
        }
        found.sort();
        Ok(found)
    }
}
