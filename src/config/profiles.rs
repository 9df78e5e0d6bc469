//! Built-in access profiles
//!
//! Parsed once from the bundled `access_profiles.toml`.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::Deserialize;

use super::access::AccessConfig;
use crate::errors::BenchResult;

lazy_static! {
    static ref BUILTIN_PROFILES: BTreeMap<String, AccessConfig> = {
        let content = include_str!("../../access_profiles.toml");
        parse_profiles(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in access profiles: {}", e);
            BTreeMap::new()
        })
    };
}

#[derive(Debug, Default, Deserialize)]
struct ProfileTable {
    #[serde(default)]
    profiles: BTreeMap<String, AccessConfig>,
}

/// Parse a `[profiles.<name>]` TOML document
///
/// Each profile takes its name from its table key.
pub fn parse_profiles(content: &str) -> BenchResult<BTreeMap<String, AccessConfig>> {
    let table: ProfileTable = toml::from_str(content)?;
    Ok(name_profiles(table.profiles))
}

/// Fill in each profile's `name` from the key it is stored under
pub(crate) fn name_profiles(profiles: BTreeMap<String, AccessConfig>) -> BTreeMap<String, AccessConfig> {
    profiles
        .into_iter()
        .map(|(name, mut profile)| {
            profile.name = name.clone();
            (name, profile)
        })
        .collect()
}

/// Look up a built-in profile by name
pub fn builtin_profile(name: &str) -> Option<AccessConfig> {
    BUILTIN_PROFILES.get(name).cloned()
}

/// Names of all built-in profiles
pub fn builtin_profile_names() -> Vec<String> {
    BUILTIN_PROFILES.keys().cloned().collect()
}
