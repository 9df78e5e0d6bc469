//! Comparison plots of a benchmark variant, rendered as SVG

mod axis;
mod bar_chart;
mod frame;
mod scatter_plot;
mod svg;
mod trend;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::BenchResult;
use crate::records::ResultsFile;

pub use self::axis::{nice_ticks, LinearScale};
pub use self::bar_chart::render_timing_bars;
pub use self::scatter_plot::render_size_vs_time;
pub use self::svg::{Anchor, SvgCanvas, TextStyle};
pub use self::trend::{linear_fit, TrendLine};

/// Paths of the two plots written for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotPaths {
    pub timings: PathBuf,
    pub size_vs_time: PathBuf,
}

impl PlotPaths {
    /// File names of a variant's plots inside `dir`
    pub fn for_suffix(dir: &Path, suffix: &str) -> Self {
        PlotPaths {
            timings: dir.join(format!("chipping_times_comparison{}.svg", suffix)),
            size_vs_time: dir.join(format!("nitf_filesize_vs_chipping_time{}.svg", suffix)),
        }
    }
}

/// Render both plots of a variant into `dir`, creating it if needed
pub fn write_plots(results: &ResultsFile, dir: &Path, suffix: &str) -> BenchResult<PlotPaths> {
    fs::create_dir_all(dir)?;
    let paths = PlotPaths::for_suffix(dir, suffix);

    fs::write(&paths.timings, render_timing_bars(results)?)?;
    info!("Plot saved to {}", paths.timings.display());

    fs::write(&paths.size_vs_time, render_size_vs_time(results)?)?;
    info!("Plot saved to {}", paths.size_vs_time.display());

    Ok(paths)
}
