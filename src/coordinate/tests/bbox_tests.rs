//! Tests for bounding box validation and serialization

use crate::coordinate::{BoundingBox, Point};

#[test]
fn test_validate_requires_min_below_max() {
    assert!(BoundingBox::new(0.0, 0.0, 1.0, 1.0).validate().is_ok());
    assert!(BoundingBox::new(1.0, 0.0, 1.0, 1.0).validate().is_err());
    assert!(BoundingBox::new(0.0, 2.0, 1.0, 1.0).validate().is_err());
    assert!(BoundingBox::new(0.0, f64::NAN, 1.0, 1.0).validate().is_err());
}

#[test]
fn test_corners_start_top_left_clockwise() {
    let corners = BoundingBox::new(2.0, -1.0, 5.0, 3.0).corners();
    assert_eq!(
        corners,
        [Point::new(2.0, 3.0), Point::new(5.0, 3.0), Point::new(5.0, -1.0), Point::new(2.0, -1.0)]
    );
}

#[test]
fn test_json_field_names() {
    let bbox: BoundingBox =
        serde_json::from_str(r#"{"x_min":0,"y_min":0,"x_max":1,"y_max":1}"#).unwrap();
    assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 1.0, 1.0));

    let json = serde_json::to_string(&bbox).unwrap();
    assert_eq!(json, r#"{"x_min":0.0,"y_min":0.0,"x_max":1.0,"y_max":1.0}"#);
}
