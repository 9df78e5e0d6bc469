//! Tests for access profiles

use crate::config::{builtin_profile, builtin_profile_names, parse_profiles, AccessConfig};

#[test]
fn test_builtin_profiles_are_loaded() {
    let names = builtin_profile_names();
    assert!(names.contains(&"default".to_string()));
    assert!(names.contains(&"vsil_curl_chunk_size".to_string()));
}

#[test]
fn test_default_profile_options() {
    let profile = builtin_profile("default").unwrap();
    assert_eq!(profile.name, "default");
    assert_eq!(profile.results_file_name(), "results.json");
    assert_eq!(
        profile.gdal_options(),
        vec![
            ("GDAL_DISABLE_READDIR_ON_OPEN", "EMPTY_DIR".to_string()),
            ("GDAL_HTTP_MERGE_CONSECUTIVE_RANGES", "YES".to_string()),
            ("GDAL_HTTP_MULTIPLEX", "YES".to_string()),
            ("GDAL_HTTP_VERSION", "2".to_string()),
        ]
    );
}

#[test]
fn test_chunk_size_profile() {
    let profile = builtin_profile("vsil_curl_chunk_size").unwrap();
    assert_eq!(profile.chunk_size, Some(524288));
    assert_eq!(profile.results_file_name(), "results_with_vsil_curl_chunk_size.json");
    assert!(profile
        .gdal_options()
        .contains(&("CPL_VSIL_CURL_CHUNK_SIZE", "524288".to_string())));
}

#[test]
fn test_plain_profile_sets_nothing() {
    assert!(AccessConfig::plain("local").gdal_options().is_empty());
}

#[test]
fn test_parse_names_profiles_from_keys() {
    let profiles = parse_profiles(
        r#"
        [profiles.http1]
        results_suffix = "_http1"
        http_version = "1.1"
        "#,
    )
    .unwrap();
    let http1 = &profiles["http1"];
    assert_eq!(http1.name, "http1");
    assert!(!http1.multiplex);
    assert_eq!(http1.gdal_options(), vec![("GDAL_HTTP_VERSION", "1.1".to_string())]);
}
