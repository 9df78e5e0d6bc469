//! Tests for streaming object bytes to disk

use std::fs;

use futures::executor::block_on;
use futures::stream;

use crate::errors::BenchError;
use crate::storage::gateway::save_stream;

#[test]
fn test_complete_stream_is_moved_into_place() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.nitf");
    let chunks = stream::iter(vec![Ok::<_, String>(vec![1u8, 2]), Ok(vec![3u8])]);

    let written = block_on(save_stream("a.nitf", chunks, &dest)).unwrap();

    assert_eq!(written, 3);
    assert_eq!(fs::read(&dest).unwrap(), vec![1u8, 2, 3]);
    assert!(!dest.with_extension("part").exists());
}

#[test]
fn test_interrupted_stream_leaves_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("b.nitf");
    let chunks = stream::iter(vec![Ok(vec![7u8; 16]), Err("connection reset".to_string())]);

    let err = block_on(save_stream("b.nitf", chunks, &dest)).unwrap_err();

    assert!(matches!(err, BenchError::StorageError(_)));
    assert!(!dest.exists());
    assert!(!dest.with_extension("part").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
