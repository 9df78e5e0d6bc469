//! Shared chart furniture: plot area, axes, ticks and labels

use super::axis::{nice_ticks, LinearScale};
use super::svg::{Anchor, SvgCanvas, TextStyle};
use crate::errors::BenchResult;
use crate::utils::format_utils::format_tick;

const AXIS_COLOR: &str = "#000000";
const GRID_COLOR: &str = "#e0e0e0";
const TICK_LENGTH: f64 = 5.0;
const TICK_COUNT: usize = 6;

/// Plot area inside a canvas, in pixels
#[derive(Debug, Clone, Copy)]
pub struct ChartFrame {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartFrame {
    /// Plot area of a `width x height` canvas after the given margins
    pub fn new(width: f64, height: f64, margins: (f64, f64, f64, f64)) -> Self {
        let (top, right, bottom, left) = margins;
        ChartFrame {
            left,
            top,
            right: width - right,
            bottom: height - bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical scale covering `[min, max]`, widened to round tick values
    pub fn y_scale(&self, min: f64, max: f64) -> (LinearScale, Vec<f64>) {
        let ticks = nice_ticks(min, max, TICK_COUNT);
        let low = ticks.first().copied().unwrap_or(min);
        let high = ticks.last().copied().unwrap_or(max);
        (LinearScale::new((low, high), (self.bottom, self.top)), ticks)
    }

    /// Horizontal scale covering `[min, max]`, widened to round tick values
    pub fn x_scale(&self, min: f64, max: f64) -> (LinearScale, Vec<f64>) {
        let ticks = nice_ticks(min, max, TICK_COUNT);
        let low = ticks.first().copied().unwrap_or(min);
        let high = ticks.last().copied().unwrap_or(max);
        (LinearScale::new((low, high), (self.left, self.right)), ticks)
    }

    /// Title above the plot area and the two axis labels
    pub fn draw_labels(
        &self,
        canvas: &mut SvgCanvas,
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> BenchResult<()> {
        let center_x = (self.left + self.right) / 2.0;
        canvas.text(center_x, self.top / 2.0 + 6.0, title, TextStyle::new(Anchor::Middle, 18.0).bold())?;
        canvas.text(
            center_x,
            canvas.height() - 14.0,
            x_label,
            TextStyle::new(Anchor::Middle, 14.0),
        )?;
        let center_y = (self.top + self.bottom) / 2.0;
        canvas.text(22.0, center_y, y_label, TextStyle::new(Anchor::Middle, 14.0).rotated(-90.0))
    }

    /// Left axis with grid lines and tick labels
    pub fn draw_y_axis(&self, canvas: &mut SvgCanvas, scale: &LinearScale, ticks: &[f64]) -> BenchResult<()> {
        for &tick in ticks {
            let y = scale.map(tick);
            canvas.line((self.left, y), (self.right, y), GRID_COLOR, 1.0, None)?;
            canvas.line((self.left - TICK_LENGTH, y), (self.left, y), AXIS_COLOR, 1.0, None)?;
            canvas.text(
                self.left - TICK_LENGTH - 3.0,
                y + 4.0,
                &format_tick(tick),
                TextStyle::new(Anchor::End, 11.0),
            )?;
        }
        canvas.line((self.left, self.top), (self.left, self.bottom), AXIS_COLOR, 1.0, None)
    }

    /// Bottom axis with numeric ticks
    pub fn draw_x_axis(&self, canvas: &mut SvgCanvas, scale: &LinearScale, ticks: &[f64]) -> BenchResult<()> {
        for &tick in ticks {
            let x = scale.map(tick);
            canvas.line((x, self.bottom), (x, self.bottom + TICK_LENGTH), AXIS_COLOR, 1.0, None)?;
            canvas.text(
                x,
                self.bottom + TICK_LENGTH + 13.0,
                &format_tick(tick),
                TextStyle::new(Anchor::Middle, 11.0),
            )?;
        }
        self.draw_baseline(canvas)
    }

    /// Bottom axis line without ticks
    pub fn draw_baseline(&self, canvas: &mut SvgCanvas) -> BenchResult<()> {
        canvas.line((self.left, self.bottom), (self.right, self.bottom), AXIS_COLOR, 1.0, None)
    }
}
