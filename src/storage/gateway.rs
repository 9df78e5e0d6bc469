//! Object storage access
//!
//! The S3 client is asynchronous; the gateway owns a current-thread runtime
//! and blocks on each call so the rest of the harness stays sequential.

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use futures::{Stream, StreamExt, TryStreamExt};
use log::{debug, info};
use object_store::{aws::AmazonS3Builder, path::Path as ObjectPath, ObjectStore};
use tokio::runtime::Runtime;

use crate::config::Settings;
use crate::errors::{BenchError, BenchResult};

/// Listing and downloading objects from a bucket
pub trait ObjectGateway {
    /// Keys under a prefix (the whole bucket when `None`)
    fn list(&self, prefix: Option<&str>) -> BenchResult<Vec<String>>;

    /// Download an object to a local file, returning its size in bytes
    fn download(&self, key: &str, dest: &Path) -> BenchResult<u64>;
}

/// S3 (or S3-compatible) bucket accessed through `object_store`
pub struct S3Gateway {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    runtime: Runtime,
}

impl S3Gateway {
    /// Create a client for the configured bucket
    ///
    /// Credentials and region come from the standard `AWS_*` environment
    /// variables unless the settings override them.
    pub fn new(settings: &Settings) -> BenchResult<Self> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(&settings.bucket);
        if let Some(region) = &settings.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &settings.endpoint {
            builder = builder
                .with_endpoint(endpoint)
                .with_allow_http(endpoint.starts_with("http://"));
        }

        let store = builder.build().map_err(|e| {
            BenchError::StorageError(format!("Failed to create S3 client: {}", e))
        })?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(S3Gateway {
            store: Arc::new(store),
            bucket: settings.bucket.clone(),
            runtime,
        })
    }
}

impl ObjectGateway for S3Gateway {
    fn list(&self, prefix: Option<&str>) -> BenchResult<Vec<String>> {
        let prefix = prefix.map(ObjectPath::from);
        debug!(
            "Listing s3://{}/{}",
            self.bucket,
            prefix.as_ref().map(|p| p.to_string()).unwrap_or_default()
        );

        self.runtime.block_on(async {
            let mut keys = Vec::new();
            let mut stream = self.store.list(prefix.as_ref());
            while let Some(meta) = stream
                .try_next()
                .await
                .map_err(|e| BenchError::StorageError(format!("List failed: {}", e)))?
            {
                keys.push(meta.location.to_string());
            }
            Ok(keys)
        })
    }

    fn download(&self, key: &str, dest: &Path) -> BenchResult<u64> {
        let location = ObjectPath::from(key);
        info!("Downloading s3://{}/{} to {}", self.bucket, key, dest.display());

        self.runtime.block_on(async {
            let result = self
                .store
                .get(&location)
                .await
                .map_err(|e| BenchError::StorageError(format!("Failed to read {}: {}", key, e)))?;
            save_stream(key, result.into_stream(), dest).await
        })
    }
}

/// Stream an object's bytes into `dest` through a sibling `.part` file
///
/// The partial file is renamed into place only once every chunk is written
/// and is removed when the stream or a write fails.
pub(crate) async fn save_stream<S, B, E>(key: &str, stream: S, dest: &Path) -> BenchResult<u64>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    let partial = dest.with_extension("part");
    match write_chunks(key, stream, &partial).await {
        Ok(written) => {
            fs::rename(&partial, dest)?;
            Ok(written)
        }
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&partial) {
                debug!("Could not remove {}: {}", partial.display(), cleanup);
            }
            Err(e)
        }
    }
}

async fn write_chunks<S, B, E>(key: &str, mut stream: S, partial: &Path) -> BenchResult<u64>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    let mut file = File::create(partial)?;
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(|e| {
            BenchError::StorageError(format!("Download of {} interrupted: {}", key, e))
        })?;
        file.write_all(bytes.as_ref())?;
        written += bytes.as_ref().len() as u64;
    }
    file.flush()?;
    Ok(written)
}
