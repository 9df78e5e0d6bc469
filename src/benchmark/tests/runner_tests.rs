//! Tests for the benchmark runner with stub readers and clocks

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use crate::benchmark::{BenchmarkRunner, Clock, SizeLookup};
use crate::config::AccessConfig;
use crate::coordinate::{BoundingBox, GeoTransform};
use crate::errors::{BenchError, BenchResult};
use crate::extractor::{Chip, RasterHandle, RasterInfo, RasterReader};
use crate::records::BoundingBoxFile;
use crate::storage::BucketLayout;

/// Serves fixed chips per URL and records every open
struct StubReader {
    chips: HashMap<String, Chip>,
    opened: RefCell<Vec<String>>,
}

struct StubHandle {
    chip: Option<Chip>,
    url: String,
}

impl RasterHandle for StubHandle {
    fn info(&self) -> BenchResult<RasterInfo> {
        Ok(RasterInfo {
            width: 4,
            height: 4,
            bands: 1,
            transform: GeoTransform::identity(),
        })
    }

    fn window(&self, _bbox: &BoundingBox) -> BenchResult<Chip> {
        self.chip
            .clone()
            .ok_or_else(|| BenchError::RasterError(format!("cannot read {}", self.url)))
    }
}

impl RasterReader for StubReader {
    type Handle = StubHandle;

    fn open(&self, url: &str, _access: &AccessConfig) -> BenchResult<StubHandle> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(StubHandle {
            chip: self.chips.get(url).cloned(),
            url: url.to_string(),
        })
    }
}

struct FrozenClock;

impl Clock for FrozenClock {
    fn now(&self) -> Duration {
        Duration::from_secs(42)
    }
}

/// Advances by a fixed step on every reading
struct SteppingClock {
    ticks: Cell<u64>,
    step_millis: u64,
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let t = self.ticks.get();
        self.ticks.set(t + 1);
        Duration::from_millis(t * self.step_millis)
    }
}

struct FixedSizes(u64);

impl SizeLookup for FixedSizes {
    fn nitf_size(&self, _identifier: &str) -> BenchResult<u64> {
        Ok(self.0)
    }
}

fn layout() -> BucketLayout {
    BucketLayout::new("bucket", "converted_cogs/")
}

fn chip(values: &[f64]) -> Chip {
    Chip::new(values.len(), 1, 1, values.to_vec()).unwrap()
}

fn reader_with(nitf: Chip, cog: Chip) -> StubReader {
    let layout = layout();
    let mut chips = HashMap::new();
    chips.insert(layout.nitf_url("img1"), nitf);
    chips.insert(layout.cog_url("img1"), cog);
    StubReader { chips, opened: RefCell::new(Vec::new()) }
}

fn unit_boxes() -> BoundingBoxFile {
    BoundingBoxFile::from_json_str(r#"{"img1": {"x_min":0,"y_min":0,"x_max":1,"y_max":1}}"#).unwrap()
}

#[test]
fn test_zero_clock_delta_gives_zero_times() {
    let reader = reader_with(chip(&[1.0, 2.0, 3.0]), chip(&[1.0, 2.0, 3.0]));
    let layout = layout();
    let runner = BenchmarkRunner::new(&reader, &FixedSizes(123_456), &FrozenClock, &layout);

    let results = runner.run(&unit_boxes(), &AccessConfig::plain("test")).unwrap();
    let result = results.get("img1").unwrap();

    assert_eq!(result.cog_time, 0.0);
    assert_eq!(result.nitf_time, 0.0);
    assert_eq!(result.nitf_filesize, 123_456);
    assert!(result.has_identical_pixels);
}

#[test]
fn test_one_differing_pixel_is_a_mismatch() {
    let reader = reader_with(chip(&[1.0, 2.0, 3.0, 4.0]), chip(&[1.0, 2.0, 3.5, 4.0]));
    let layout = layout();
    let runner = BenchmarkRunner::new(&reader, &FixedSizes(1), &FrozenClock, &layout);

    let results = runner.run(&unit_boxes(), &AccessConfig::plain("test")).unwrap();
    assert!(!results.get("img1").unwrap().has_identical_pixels);
}

#[test]
fn test_cog_is_read_before_nitf_for_every_box() {
    let reader = reader_with(chip(&[1.0]), chip(&[1.0]));
    let layout = layout();
    let runner = BenchmarkRunner::new(&reader, &FixedSizes(1), &FrozenClock, &layout);

    let boxes = vec![
        BoundingBox::new(0.0, 0.0, 1.0, 1.0),
        BoundingBox::new(1.0, 1.0, 2.0, 2.0),
    ];
    runner
        .run_identifier("img1", &boxes, &AccessConfig::plain("test"))
        .unwrap();

    let cog = layout.cog_url("img1");
    let nitf = layout.nitf_url("img1");
    assert_eq!(*reader.opened.borrow(), vec![cog.clone(), nitf.clone(), cog, nitf]);
}

#[test]
fn test_times_are_averaged_over_boxes() {
    let reader = reader_with(chip(&[1.0]), chip(&[1.0]));
    let layout = layout();
    // Every timed call spans exactly one step of 250 ms
    let clock = SteppingClock { ticks: Cell::new(0), step_millis: 250 };
    let runner = BenchmarkRunner::new(&reader, &FixedSizes(1), &clock, &layout);

    let boxes = vec![BoundingBox::new(0.0, 0.0, 1.0, 1.0); 3];
    let result = runner
        .run_identifier("img1", &boxes, &AccessConfig::plain("test"))
        .unwrap();

    assert!((result.cog_time - 0.25).abs() < 1e-12);
    assert!((result.nitf_time - 0.25).abs() < 1e-12);
}

#[test]
fn test_read_failure_aborts_the_run() {
    let layout = layout();
    let mut chips = HashMap::new();
    chips.insert(layout.cog_url("img1"), chip(&[1.0]));
    let reader = StubReader { chips, opened: RefCell::new(Vec::new()) };
    let runner = BenchmarkRunner::new(&reader, &FixedSizes(1), &FrozenClock, &layout);

    let err = runner.run(&unit_boxes(), &AccessConfig::plain("test")).unwrap_err();
    assert!(matches!(err, BenchError::RasterError(_)));
}

#[test]
fn test_empty_box_list_is_rejected() {
    let reader = reader_with(chip(&[1.0]), chip(&[1.0]));
    let layout = layout();
    let runner = BenchmarkRunner::new(&reader, &FixedSizes(1), &FrozenClock, &layout);

    let err = runner
        .run_identifier("img1", &[], &AccessConfig::plain("test"))
        .unwrap_err();
    assert!(matches!(err, BenchError::NoBoundingBoxes(_)));
}

/// NITF chips differ from COG chips only for boxes starting at `x_min == 1.0`
struct MiddleBoxDiffers;

struct PerBoxHandle {
    is_nitf: bool,
}

impl RasterHandle for PerBoxHandle {
    fn info(&self) -> BenchResult<RasterInfo> {
        Ok(RasterInfo { width: 4, height: 4, bands: 1, transform: GeoTransform::identity() })
    }

    fn window(&self, bbox: &BoundingBox) -> BenchResult<Chip> {
        let value = if self.is_nitf && bbox.x_min == 1.0 { 9.0 } else { 1.0 };
        Ok(chip(&[value, value]))
    }
}

impl RasterReader for MiddleBoxDiffers {
    type Handle = PerBoxHandle;

    fn open(&self, url: &str, _access: &AccessConfig) -> BenchResult<PerBoxHandle> {
        Ok(PerBoxHandle { is_nitf: url.ends_with(".nitf") })
    }
}

#[test]
fn test_mismatch_in_any_box_clears_identical_flag() {
    let layout = layout();
    let runner = BenchmarkRunner::new(&MiddleBoxDiffers, &FixedSizes(1), &FrozenClock, &layout);

    let boxes = vec![
        BoundingBox::new(0.0, 0.0, 1.0, 1.0),
        BoundingBox::new(1.0, 1.0, 2.0, 2.0),
        BoundingBox::new(2.0, 2.0, 3.0, 3.0),
    ];
    let result = runner
        .run_identifier("img1", &boxes, &AccessConfig::plain("test"))
        .unwrap();
    assert!(!result.has_identical_pixels);

    // Without the middle box every pair matches
    let matching = [boxes[0], boxes[2]];
    let result = runner
        .run_identifier("img1", &matching, &AccessConfig::plain("test"))
        .unwrap();
    assert!(result.has_identical_pixels);
}
