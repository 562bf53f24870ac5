//! Drawing of detected markers and estimates onto an output frame.

use anyhow::{Context, Result};
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc::{circle, ellipse_rotated_rect, put_text, FONT_HERSHEY_PLAIN, LINE_8},
};

use crate::markers::Marker;

// BGR
const OUTLINE_COLOR: Scalar = Scalar::new(0.0, 255.0, 0.0, 0.0);
const LABEL_COLOR: Scalar = Scalar::new(255.0, 0.0, 0.0, 0.0);
const ESTIMATE_COLOR: Scalar = Scalar::new(0.0, 0.0, 255.0, 0.0);

fn label(img: &mut Mat, text: &str, org: Point, scale: f64, color: Scalar) -> Result<()> {
    put_text(img, text, org, FONT_HERSHEY_PLAIN, scale, color, 2, LINE_8, false)
        .with_context(|| format!("drawing label '{text}'"))
}

/// Outline, center dot, center coordinates and pixel size of `marker`.
pub fn draw_marker(img: &mut Mat, marker: &Marker) -> Result<()> {
    let center = marker.center();

    ellipse_rotated_rect(img, marker.to_rotated_rect(), OUTLINE_COLOR, 2, LINE_8)
        .context("drawing marker outline")?;
    circle(img, center, 2, LABEL_COLOR, 2, LINE_8, 0).context("drawing marker center")?;

    label(
        img,
        &format!("({}, {})", center.x, center.y),
        center,
        1.5,
        LABEL_COLOR,
    )?;
    label(
        img,
        &format!("d: {:.2}", marker.pixel_size()),
        Point::new(center.x, center.y + 20),
        1.0,
        LABEL_COLOR,
    )
}

pub fn draw_focal_length(img: &mut Mat, focal_length: f64) -> Result<()> {
    label(
        img,
        &format!("F = {focal_length:5.0}"),
        Point::new(0, 30),
        1.5,
        ESTIMATE_COLOR,
    )
}

/// Estimated distance, printed under the pixel size of `marker`.
pub fn draw_distance(img: &mut Mat, marker: &Marker, distance: f64) -> Result<()> {
    let center = marker.center();
    label(
        img,
        &format!("D: {distance:.1} mm"),
        Point::new(center.x, center.y + 40),
        1.0,
        ESTIMATE_COLOR,
    )
}

#[cfg(test)]
mod tests {
    use opencv::core::{count_non_zero, Rect, CV_8UC3};
    use opencv::prelude::*;

    use super::*;

    fn blank() -> Mat {
        Mat::new_rows_cols_with_default(240, 320, CV_8UC3, Scalar::all(0.0)).unwrap()
    }

    fn lit_pixels(img: &Mat, roi: Rect) -> i32 {
        let patch = Mat::roi(img, roi).unwrap().try_clone().unwrap();
        let mut gray = Mat::default();
        opencv::imgproc::cvt_color_def(&patch, &mut gray, opencv::imgproc::COLOR_BGR2GRAY)
            .unwrap();
        count_non_zero(&gray).unwrap()
    }

    #[test]
    fn marker_is_drawn_around_its_center() {
        let mut img = blank();
        let marker = Marker {
            center_x: 100.0,
            center_y: 120.0,
            major_axis: 60.0,
            minor_axis: 30.0,
            angle: 0.0,
        };
        draw_marker(&mut img, &marker).unwrap();

        assert!(lit_pixels(&img, Rect::new(98, 118, 5, 5)) > 0);
        // Ends of the major axis.
        assert!(lit_pixels(&img, Rect::new(67, 117, 6, 6)) > 0);
        assert!(lit_pixels(&img, Rect::new(127, 117, 6, 6)) > 0);
    }

    #[test]
    fn focal_length_goes_top_left() {
        let mut img = blank();
        draw_focal_length(&mut img, 200.0).unwrap();
        assert!(lit_pixels(&img, Rect::new(0, 0, 160, 32)) > 0);
        assert_eq!(lit_pixels(&img, Rect::new(0, 40, 320, 200)), 0);
    }
}
