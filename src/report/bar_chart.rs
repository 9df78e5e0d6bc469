//! Grouped bar chart of per-file chipping times

use super::frame::ChartFrame;
use super::svg::{Anchor, SvgCanvas, TextStyle};
use crate::errors::BenchResult;
use crate::records::ResultsFile;

pub const COG_COLOR: &str = "#1f77b4";
pub const NITF_COLOR: &str = "#ff7f0e";

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
// top, right, bottom, left; the bottom margin holds the rotated file names
const MARGINS: (f64, f64, f64, f64) = (60.0, 30.0, 180.0, 80.0);
const BAR_WIDTH_FRACTION: f64 = 0.35;

/// Render COG and NITF times side by side for every file in the results
pub fn render_timing_bars(results: &ResultsFile) -> BenchResult<String> {
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT)?;
    let frame = ChartFrame::new(WIDTH, HEIGHT, MARGINS);

    let max_time = results
        .iter()
        .flat_map(|(_, r)| [r.cog_time, r.nitf_time])
        .fold(0.0_f64, f64::max);
    let (y_scale, ticks) = frame.y_scale(0.0, if max_time > 0.0 { max_time } else { 1.0 });
    frame.draw_y_axis(&mut canvas, &y_scale, &ticks)?;

    if !results.is_empty() {
        let slot = frame.width() / results.len() as f64;
        let bar_width = slot * BAR_WIDTH_FRACTION;
        let zero = y_scale.map(0.0);

        for (i, (identifier, result)) in results.iter().enumerate() {
            let center = frame.left + slot * (i as f64 + 0.5);
            canvas.rect(center - bar_width, zero, bar_width, y_scale.map(result.cog_time) - zero, COG_COLOR)?;
            canvas.rect(center, zero, bar_width, y_scale.map(result.nitf_time) - zero, NITF_COLOR)?;
            canvas.text(
                center + 4.0,
                frame.bottom + 8.0,
                identifier,
                TextStyle::new(Anchor::End, 11.0).rotated(-90.0),
            )?;
        }
    }

    frame.draw_baseline(&mut canvas)?;
    frame.draw_labels(&mut canvas, "COG vs NITF Chipping Times", "Files", "Chipping Time (seconds)")?;
    draw_legend(&mut canvas, &frame)?;
    canvas.finish()
}

fn draw_legend(canvas: &mut SvgCanvas, frame: &ChartFrame) -> BenchResult<()> {
    let x = frame.right - 130.0;
    let y = frame.top + 12.0;
    canvas.rect(x - 8.0, y - 10.0, 132.0, 48.0, "#ffffff")?;
    for (row, (label, color)) in [("COG Time", COG_COLOR), ("NITF Time", NITF_COLOR)].iter().enumerate() {
        let row_y = y + row as f64 * 20.0;
        canvas.rect(x, row_y - 2.0, 18.0, 12.0, color)?;
        canvas.text(x + 26.0, row_y + 8.0, label, TextStyle::new(Anchor::Start, 12.0))?;
    }
    Ok(())
}
