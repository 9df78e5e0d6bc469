//! Mirror the bucket's NITF files into a local directory

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::gateway::ObjectGateway;
use super::layout::BucketLayout;
use crate::errors::BenchResult;
use crate::utils::progress::ProgressTracker;

/// Outcome of a download pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Files fetched in this pass
    pub downloaded: Vec<PathBuf>,
    /// Files already present and left untouched
    pub skipped: Vec<PathBuf>,
    /// Bytes written
    pub bytes: u64,
}

/// Download every top-level `.nitf` object not already present locally
pub fn download_nitf_files<G: ObjectGateway + ?Sized>(
    gateway: &G,
    data_dir: &Path,
    show_progress: bool,
) -> BenchResult<DownloadSummary> {
    fs::create_dir_all(data_dir)?;

    let mut identifiers: Vec<String> = gateway
        .list(None)?
        .iter()
        .filter_map(|key| BucketLayout::identifier_from_key(key).map(str::to_string))
        .collect();
    identifiers.sort();
    info!("Found {} NITF files in bucket", identifiers.len());

    let progress = ProgressTracker::new(identifiers.len() as u64, "Downloading", show_progress);
    let mut summary = DownloadSummary::default();

    for identifier in &identifiers {
        let key = format!("{}.nitf", identifier);
        let dest = BucketLayout::local_nitf_path(data_dir, identifier);
        if dest.exists() {
            info!("Skipping '{}' download because it already exists.", key);
            summary.skipped.push(dest);
        } else {
            progress.start_item(&key);
            summary.bytes += gateway.download(&key, &dest)?;
            summary.downloaded.push(dest);
        }
        progress.finish_item();
    }

    progress.finish();
    info!(
        "Downloaded {} files ({} bytes), skipped {}",
        summary.downloaded.len(),
        summary.bytes,
        summary.skipped.len()
    );
    Ok(summary)
}
