//! Configuration: run settings and GDAL access profiles

mod access;
mod profiles;
mod settings;

#[cfg(test)]
mod tests;

pub use access::AccessConfig;
pub use profiles::{builtin_profile, builtin_profile_names, parse_profiles};
pub use settings::{Settings, DEFAULT_BUCKET, DEFAULT_SETTINGS_FILE};
