//! Write extracted chips to disk as PNG previews

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use log::info;

use crate::errors::{BenchError, BenchResult};

use super::chip::Chip;

/// Saves the first band of each chip as an 8-bit grayscale PNG
///
/// Values are stretched linearly from the band's minimum to its maximum;
/// non-finite samples are written as black.
#[derive(Debug, Clone)]
pub struct ChipExporter {
    dir: PathBuf,
}

impl ChipExporter {
    /// Create an exporter writing into `dir`, creating it if needed
    pub fn new(dir: impl AsRef<Path>) -> BenchResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(ChipExporter { dir })
    }

    /// Write one chip, returning the file path
    ///
    /// Files are named `<identifier>_<trial>_<encoding>.png`.
    pub fn save(&self, identifier: &str, trial: usize, encoding: &str, chip: &Chip) -> BenchResult<PathBuf> {
        let image = to_grayscale(chip)?;
        let path = self.dir.join(format!("{}_{}_{}.png", identifier, trial, encoding));
        image.save(&path)?;
        info!("Saved chip preview {}", path.display());
        Ok(path)
    }
}

/// Linear min/max stretch of the first band into a grayscale image
pub fn to_grayscale(chip: &Chip) -> BenchResult<GrayImage> {
    let band = chip
        .band(0)
        .ok_or_else(|| BenchError::RenderError("Chip has no bands".to_string()))?;

    let (min, max) = band
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = if max > min { max - min } else { 1.0 };

    let width = chip.width() as u32;
    let mut image = GrayImage::new(width, chip.height() as u32);
    for (i, value) in band.iter().enumerate() {
        let level = if value.is_finite() {
            (((value - min) / range) * 255.0).round().clamp(0.0, 255.0) as u8
        } else {
            0
        };
        let x = i as u32 % width;
        let y = i as u32 / width;
        image.put_pixel(x, y, Luma([level]));
    }
    Ok(image)
}
