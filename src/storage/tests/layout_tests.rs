//! Tests for bucket naming conventions

use std::fs;

use crate::storage::BucketLayout;

#[test]
fn test_urls_follow_bucket_convention() {
    let layout = BucketLayout::new("my-bucket", "converted_cogs/");
    assert_eq!(layout.nitf_url("img1"), "/vsis3/my-bucket/img1.nitf");
    assert_eq!(layout.cog_url("img1"), "/vsis3/my-bucket/converted_cogs/img1.nitf.tif");
    assert_eq!(layout.cog_key("img1"), "converted_cogs/img1.nitf.tif");
}

#[test]
fn test_custom_base_url_gets_trailing_slash() {
    let layout = BucketLayout::new("b", "cogs/").with_base_url("/data/mirror");
    assert_eq!(layout.base_url(), "/data/mirror/");
    assert_eq!(layout.nitf_url("x"), "/data/mirror/x.nitf");
}

#[test]
fn test_identifier_from_key() {
    assert_eq!(BucketLayout::identifier_from_key("scene_01.nitf"), Some("scene_01"));
    assert_eq!(BucketLayout::identifier_from_key("converted_cogs/scene_01.nitf.tif"), None);
    assert_eq!(BucketLayout::identifier_from_key("nested/scene.nitf"), None);
    assert_eq!(BucketLayout::identifier_from_key("scene.ntf"), None);
}

#[test]
fn test_local_identifiers_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.nitf"), b"b").unwrap();
    fs::write(dir.path().join("a.nitf"), b"a").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    fs::create_dir(dir.path().join("dir.nitf")).unwrap();

    let found = BucketLayout::local_identifiers(dir.path()).unwrap();
    let ids: Vec<&str> = found.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}
