//! Tests for bounding box to pixel window conversion

use crate::coordinate::{BoundingBox, GeoTransform};
use crate::errors::BenchError;
use crate::extractor::Region;
use crate::sampling::BoundingBoxGenerator;

#[test]
fn test_region_from_north_up_bbox() {
    let transform = GeoTransform::from_origin(10.0, 50.0, 0.5, 0.25);
    let bbox = BoundingBox::new(11.0, 49.0, 12.5, 49.75);
    let region = Region::from_bbox(&bbox, &transform, 100, 100).unwrap();
    assert_eq!(region, Region::new(2, 1, 3, 3));
    assert_eq!(region.end_x(), 5);
    assert_eq!(region.end_y(), 4);
}

#[test]
fn test_generated_bbox_round_trips_to_window() {
    let generator = BoundingBoxGenerator::default();
    let transform = GeoTransform::from_origin(-77.2, 39.1, 0.0001, 0.0001);
    let bbox = generator.bbox_for_origin(37, 91, 1200, 800, &transform);

    let region = Region::from_bbox(&bbox, &transform, 1200, 800).unwrap();
    // 1200 / 4 = 300 and 800 / 4 = 200, plus the lower-right pixel
    assert_eq!(region, Region::new(37, 91, 301, 201));
}

#[test]
fn test_window_outside_raster_is_rejected() {
    let transform = GeoTransform::from_origin(0.0, 10.0, 1.0, 1.0);
    let bbox = BoundingBox::new(5.0, 0.0, 12.0, 5.0);
    match Region::from_bbox(&bbox, &transform, 10, 10) {
        Err(BenchError::WindowOutOfBounds { width, raster_width, .. }) => {
            assert_eq!(width, 7);
            assert_eq!(raster_width, 10);
        }
        other => panic!("expected out of bounds, got {:?}", other),
    }
}

#[test]
fn test_inverted_bbox_is_rejected() {
    let transform = GeoTransform::from_origin(0.0, 10.0, 1.0, 1.0);
    let bbox = BoundingBox::new(5.0, 5.0, 1.0, 8.0);
    assert!(matches!(
        Region::from_bbox(&bbox, &transform, 10, 10),
        Err(BenchError::InvalidBoundingBox(_))
    ));
}
