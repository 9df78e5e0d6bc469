//! Axis scaling and tick placement

/// Linear mapping from a data interval onto a pixel interval
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A degenerate domain is widened by one unit each side
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if (domain.1 - domain.0).abs() < f64::EPSILON {
            (domain.0 - 1.0, domain.1 + 1.0)
        } else {
            domain
        };
        LinearScale { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Round step sizes of 1, 2, 2.5 or 5 times a power of ten covering `[min, max]`
///
/// The first tick is at or below `min` and the last at or above `max`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return vec![0.0, 1.0];
    }
    let (min, max) = if max - min < f64::EPSILON { (min - 1.0, max + 1.0) } else { (min, max) };

    let step = nice_step((max - min) / target.max(2).saturating_sub(1) as f64);
    let first = (min / step).floor();
    let last = (max / step).ceil();

    let mut ticks = Vec::new();
    let mut i = first;
    while i <= last + 0.5 {
        // Snap away accumulated float noise such as 0.30000000000000004
        let value = (i * step * 1e9).round() / 1e9;
        ticks.push(value);
        i += 1.0;
    }
    ticks
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
