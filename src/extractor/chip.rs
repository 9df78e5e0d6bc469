//! In-memory pixel data of one extracted chip

/// Pixel values of a chip, band-sequential
///
/// Values are widened to `f64`, which represents every integer sample type
/// up to 32 bits exactly, so equality between two chips is exact equality
/// of the source samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    width: usize,
    height: usize,
    bands: usize,
    data: Vec<f64>,
}

impl Chip {
    /// Create a chip from band-sequential data
    ///
    /// Returns `None` when `data` does not hold `width * height * bands`
    /// values.
    pub fn new(width: usize, height: usize, bands: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != width * height * bands {
            return None;
        }
        Some(Chip { width, height, bands, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bands(&self) -> usize {
        self.bands
    }

    /// All samples, band after band, each band row-major
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Samples of one band (zero-based)
    pub fn band(&self, index: usize) -> Option<&[f64]> {
        if index >= self.bands {
            return None;
        }
        let len = self.width * self.height;
        Some(&self.data[index * len..(index + 1) * len])
    }

    /// Exact element-wise equality, including shape
    ///
    /// NaN samples never compare equal, so two chips holding NaN at the same
    /// position are reported as different.
    pub fn is_identical(&self, other: &Chip) -> bool {
        self == other
    }
}
