use anyhow::{Context, Result};
use log::debug;
use opencv::core::Mat;

use crate::markers::{Marker, MarkerFinder};
use crate::overlay::{draw_distance, draw_focal_length, draw_marker};
use crate::palette::Palette;

/// One frame's reading of the sliders, in millimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Knobs {
    pub distance_diff_mm: i32,
    pub size_mm: i32,
}

pub struct FrameReport {
    pub output: Mat,
    pub first: Option<Marker>,
    pub second: Option<Marker>,
    pub focal_length: Option<f64>,
}

/// Tracks the largest marker of two colors and estimates the focal length
/// from them.
pub struct FocalScene {
    first: MarkerFinder,
    second: MarkerFinder,
}

impl FocalScene {
    pub fn new(first: MarkerFinder, second: MarkerFinder) -> Self {
        FocalScene { first, second }
    }

    pub fn from_palette(palette: &Palette, first: &str, second: &str) -> Result<Self> {
        Ok(Self::new(
            MarkerFinder::from_palette(palette, first)?,
            MarkerFinder::from_palette(palette, second)?,
        ))
    }

    /// Detects, annotates and estimates on a copy of `frame`.
    pub fn process(&self, frame: &Mat, knobs: Knobs) -> Result<FrameReport> {
        let mut output = frame.try_clone().context("copying frame")?;

        let first = self.first.largest_marker(frame)?;
        let second = self.second.largest_marker(frame)?;

        for marker in [&first, &second].into_iter().flatten() {
            draw_marker(&mut output, marker)?;
        }

        let mut focal_length = None;
        if let (Some(m1), Some(m2)) = (&first, &second) {
            let size = knobs.size_mm as f64;
            focal_length = focal::estimate_focal_length(
                m1.pixel_size(),
                m2.pixel_size(),
                knobs.distance_diff_mm as f64,
                size,
            );
            match focal_length {
                Some(f) => {
                    draw_focal_length(&mut output, f)?;
                    for marker in [m1, m2] {
                        if let Some(d) = focal::estimate_distance(f, size, marker.pixel_size()) {
                            draw_distance(&mut output, marker, d)?;
                        }
                    }
                }
                None => debug!("focal length undefined for {knobs:?}"),
            }
        } else {
            debug!(
                "skipping estimate, first marker found: {}, second marker found: {}",
                first.is_some(),
                second.is_some()
            );
        }

        Ok(FrameReport {
            output,
            first,
            second,
            focal_length,
        })
    }
}
