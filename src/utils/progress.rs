//! Console progress for the download, generation and benchmark loops
//!
//! The bar currently on screen is registered so the logger can print
//! around it instead of through it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};
use lazy_static::lazy_static;

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

lazy_static! {
    static ref ACTIVE_BAR: Mutex<Option<(u64, ProgressBar)>> = Mutex::new(None);
}

/// One progress bar per pipeline step, advanced once per raster
pub struct ProgressTracker {
    bar: ProgressBar,
    /// Registry id; zero for hidden trackers, which are never registered
    id: u64,
}

impl ProgressTracker {
    /// Create a tracker over `total` rasters
    ///
    /// # Arguments
    /// * `total` - Number of rasters the step will process
    /// * `step` - Shown in front of the bar, e.g. `Downloading`
    /// * `visible` - A hidden tracker draws nothing but accepts every call
    pub fn new(total: u64, step: &str, visible: bool) -> Self {
        if !visible {
            return ProgressTracker { bar: ProgressBar::hidden(), id: 0 };
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_prefix(step.to_string());

        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut active) = ACTIVE_BAR.lock() {
            *active = Some((id, bar.clone()));
        }
        ProgressTracker { bar, id }
    }

    /// Show which raster is being worked on
    pub fn start_item(&self, identifier: &str) {
        self.bar.set_message(identifier.to_string());
    }

    /// Mark the current raster as done
    pub fn finish_item(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Completed");
        self.unregister();
    }

    fn unregister(&self) {
        if self.id == 0 {
            return;
        }
        if let Ok(mut active) = ACTIVE_BAR.lock() {
            if matches!(active.as_ref(), Some((id, _)) if *id == self.id) {
                *active = None;
            }
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// Whether a visible bar is currently registered
pub fn has_active_bar() -> bool {
    ACTIVE_BAR.lock().map(|active| active.is_some()).unwrap_or(false)
}

/// Run `output` with the active bar cleared from the terminal, then redraw it
pub fn suspend_bar<F: FnOnce()>(output: F) {
    let bar = ACTIVE_BAR
        .lock()
        .ok()
        .and_then(|active| active.as_ref().map(|(_, bar)| bar.clone()));
    match bar {
        Some(bar) => bar.suspend(output),
        None => output(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test, since the registry is process-wide
    #[test]
    fn test_visible_bar_is_registered_while_alive() {
        let hidden = ProgressTracker::new(3, "hidden", false);
        assert!(!has_active_bar());
        drop(hidden);

        let tracker = ProgressTracker::new(3, "visible", true);
        assert!(has_active_bar());

        let mut printed = false;
        suspend_bar(|| printed = true);
        assert!(printed);

        tracker.finish();
        assert!(!has_active_bar());

        {
            let _aborted = ProgressTracker::new(1, "aborted", true);
            assert!(has_active_bar());
        }
        assert!(!has_active_bar());

        let mut printed = false;
        suspend_bar(|| printed = true);
        assert!(printed);
    }
}
