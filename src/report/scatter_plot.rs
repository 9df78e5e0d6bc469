//! NITF file size against NITF chipping time

use super::frame::ChartFrame;
use super::svg::{Anchor, SvgCanvas, TextStyle};
use super::trend::linear_fit;
use crate::errors::BenchResult;
use crate::records::ResultsFile;
use crate::utils::format_utils::bytes_to_mb;

const POINT_COLOR: &str = "#1f77b4";
const TREND_COLOR: &str = "#d62728";

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGINS: (f64, f64, f64, f64) = (60.0, 30.0, 80.0, 80.0);
const POINT_RADIUS: f64 = 4.0;

/// Scatter of size (MB) vs NITF time with a least-squares trend line
///
/// The trend line is drawn only when at least two distinct sizes exist.
pub fn render_size_vs_time(results: &ResultsFile) -> BenchResult<String> {
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT)?;
    let frame = ChartFrame::new(WIDTH, HEIGHT, MARGINS);

    let points: Vec<(f64, f64)> = results
        .iter()
        .map(|(_, r)| (bytes_to_mb(r.nitf_filesize), r.nitf_time))
        .collect();

    let (x_min, x_max) = bounds(points.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (_, y_max) = bounds(points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (x_scale, x_ticks) = frame.x_scale(x_min, x_max);
    let (y_scale, y_ticks) = frame.y_scale(0.0, if y_max > 0.0 { y_max } else { 1.0 });

    frame.draw_y_axis(&mut canvas, &y_scale, &y_ticks)?;
    frame.draw_x_axis(&mut canvas, &x_scale, &x_ticks)?;

    for &(size, time) in &points {
        canvas.circle(x_scale.map(size), y_scale.map(time), POINT_RADIUS, POINT_COLOR)?;
    }

    if let Some(trend) = linear_fit(&points) {
        let (low, high) = x_scale.domain();
        canvas.line(
            (x_scale.map(low), y_scale.map(trend.at(low))),
            (x_scale.map(high), y_scale.map(trend.at(high))),
            TREND_COLOR,
            2.0,
            Some("6 4"),
        )?;
        let label = format!("Trend: y = {:.4}x + {:.4}", trend.slope, trend.intercept);
        canvas.text(frame.left + 10.0, frame.top + 16.0, &label, TextStyle::new(Anchor::Start, 12.0))?;
    }

    frame.draw_labels(
        &mut canvas,
        "NITF File Size vs Chipping Time",
        "NITF File Size (MB)",
        "NITF Chipping Time (seconds)",
    )?;
    canvas.finish()
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
