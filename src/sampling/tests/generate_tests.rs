//! Tests for generating a bounding-box file from rasters

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AccessConfig;
use crate::coordinate::{BoundingBox, GeoTransform};
use crate::errors::{BenchError, BenchResult};
use crate::extractor::{Chip, RasterHandle, RasterInfo, RasterReader};
use crate::sampling::{generate_bounding_boxes, BoundingBoxGenerator};

struct InfoOnly(RasterInfo);

impl RasterHandle for InfoOnly {
    fn info(&self) -> BenchResult<RasterInfo> {
        Ok(self.0)
    }

    fn window(&self, _bbox: &BoundingBox) -> BenchResult<Chip> {
        Err(BenchError::RasterError("not used".to_string()))
    }
}

struct FixedInfoReader;

impl RasterReader for FixedInfoReader {
    type Handle = InfoOnly;

    fn open(&self, url: &str, access: &AccessConfig) -> BenchResult<InfoOnly> {
        assert!(access.gdal_options().is_empty(), "local files need no HTTP options");
        if url.ends_with("missing.nitf") {
            return Err(BenchError::RasterError(format!("cannot open {}", url)));
        }
        Ok(InfoOnly(RasterInfo {
            width: 2048,
            height: 1024,
            bands: 3,
            transform: GeoTransform::from_origin(30.0, -1.0, 0.001, 0.001),
        }))
    }
}

#[test]
fn test_generates_requested_trials_per_raster() {
    let sources = vec![
        ("a".to_string(), PathBuf::from("data/a.nitf")),
        ("b".to_string(), PathBuf::from("data/b.nitf")),
    ];
    let mut rng = StdRng::seed_from_u64(5);
    let file = generate_bounding_boxes(
        &FixedInfoReader,
        &sources,
        &BoundingBoxGenerator::default(),
        3,
        &mut rng,
        false,
    )
    .unwrap();

    assert_eq!(file.len(), 2);
    for (_, boxes) in file.iter() {
        assert_eq!(boxes.len(), 3);
        for bbox in boxes {
            bbox.validate().unwrap();
            assert!(bbox.x_min >= 30.0 && bbox.x_max <= 32.048);
        }
    }
    file.validate().unwrap();
}

#[test]
fn test_open_failure_propagates() {
    let sources = vec![("missing".to_string(), PathBuf::from("data/missing.nitf"))];
    let mut rng = StdRng::seed_from_u64(5);
    let result = generate_bounding_boxes(
        &FixedInfoReader,
        &sources,
        &BoundingBoxGenerator::default(),
        1,
        &mut rng,
        false,
    );
    assert!(result.is_err());
}
