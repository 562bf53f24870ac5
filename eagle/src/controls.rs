use anyhow::{Context, Result};
use opencv::highgui::{create_trackbar, get_trackbar_pos, named_window, WINDOW_NORMAL};

use crate::scene::Knobs;

pub const TRACKBAR_WINDOW: &str = "Trackbars";
pub const DIFF_TRACKBAR: &str = "Diff (mm)";
pub const SIZE_TRACKBAR: &str = "Size (mm)";
pub const TRACKBAR_MAX: i32 = 100;

/// The two sliders the user sets the known distance difference and marker
/// size with.
pub struct Trackbars {
    window: String,
}

impl Trackbars {
    pub fn create(window: &str) -> Result<Self> {
        named_window(window, WINDOW_NORMAL).context("creating trackbar window")?;
        for name in [DIFF_TRACKBAR, SIZE_TRACKBAR] {
            create_trackbar(name, window, None, TRACKBAR_MAX, None)
                .with_context(|| format!("creating trackbar '{name}'"))?;
        }
        Ok(Trackbars {
            window: window.to_string(),
        })
    }

    pub fn read(&self) -> Result<Knobs> {
        Ok(Knobs {
            distance_diff_mm: get_trackbar_pos(DIFF_TRACKBAR, &self.window)?,
            size_mm: get_trackbar_pos(SIZE_TRACKBAR, &self.window)?,
        })
    }
}
