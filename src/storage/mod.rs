//! Object storage gateway and bucket naming conventions

mod download;
mod gateway;
mod layout;

#[cfg(test)]
mod tests;

pub use download::{download_nitf_files, DownloadSummary};
pub use gateway::{ObjectGateway, S3Gateway};
pub use layout::BucketLayout;
