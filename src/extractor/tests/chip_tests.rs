//! Tests for chip equality and preview export

use crate::extractor::{to_grayscale, Chip, ChipExporter};

#[test]
fn test_chip_shape_is_checked() {
    assert!(Chip::new(2, 2, 1, vec![0.0; 4]).is_some());
    assert!(Chip::new(2, 2, 2, vec![0.0; 4]).is_none());
}

#[test]
fn test_identical_requires_every_sample() {
    let a = Chip::new(2, 2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Chip::new(2, 2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let c = Chip::new(2, 2, 1, vec![1.0, 2.0, 3.0, 5.0]).unwrap();
    assert!(a.is_identical(&b));
    assert!(!a.is_identical(&c));
}

#[test]
fn test_identical_requires_same_shape() {
    let a = Chip::new(4, 1, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Chip::new(2, 2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(!a.is_identical(&b));
}

#[test]
fn test_nan_is_never_identical() {
    let a = Chip::new(1, 1, 1, vec![f64::NAN]).unwrap();
    assert!(!a.is_identical(&a.clone()));
}

#[test]
fn test_band_slices() {
    let chip = Chip::new(2, 1, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(chip.band(1), Some(&[3.0, 4.0][..]));
    assert_eq!(chip.band(2), None);
}

#[test]
fn test_grayscale_stretch() {
    let chip = Chip::new(3, 1, 1, vec![10.0, 15.0, 20.0]).unwrap();
    let image = to_grayscale(&chip).unwrap();
    assert_eq!(image.get_pixel(0, 0).0, [0]);
    assert_eq!(image.get_pixel(1, 0).0, [128]);
    assert_eq!(image.get_pixel(2, 0).0, [255]);
}

#[test]
fn test_exporter_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = ChipExporter::new(dir.path().join("chips")).unwrap();
    let chip = Chip::new(2, 2, 1, vec![0.0, 1.0, 2.0, 3.0]).unwrap();

    let path = exporter.save("img1", 0, "cog", &chip).unwrap();
    assert!(path.ends_with("img1_0_cog.png"));
    assert!(path.exists());
}
