use std::f64::consts::PI;

use anyhow::{Context, Result};
use log::trace;
use opencv::{
    core::{in_range, Mat, Point, Point2f, RotatedRect, Size2f, Vector},
    imgproc::{
        cvt_color_def, find_contours_def, fit_ellipse, CHAIN_APPROX_SIMPLE, COLOR_BGR2HSV,
        RETR_EXTERNAL,
    },
};

use crate::palette::{ColorRange, Palette};

/// `fit_ellipse` needs at least this many points.
pub const MIN_ELLIPSE_POINTS: usize = 5;

/// An ellipse fitted to one blob of marker-colored pixels.
///
/// Axis lengths are full lengths in pixels, `angle` is the orientation of the
/// major axis in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center_x: f64,
    pub center_y: f64,
    pub major_axis: f64,
    pub minor_axis: f64,
    pub angle: f64,
}

impl Marker {
    pub fn from_rotated_rect(rect: RotatedRect) -> Self {
        let (width, height) = (rect.size.width as f64, rect.size.height as f64);
        let (major_axis, minor_axis, angle) = if width >= height {
            (width, height, rect.angle as f64)
        } else {
            (height, width, (rect.angle as f64 + 90.0) % 180.0)
        };
        Marker {
            center_x: rect.center.x as f64,
            center_y: rect.center.y as f64,
            major_axis,
            minor_axis,
            angle,
        }
    }

    pub fn to_rotated_rect(&self) -> RotatedRect {
        RotatedRect {
            center: Point2f::new(self.center_x as f32, self.center_y as f32),
            size: Size2f::new(self.major_axis as f32, self.minor_axis as f32),
            angle: self.angle as f32,
        }
    }

    pub fn area(&self) -> f64 {
        self.major_axis * self.minor_axis * PI / 4.0
    }

    pub fn pixel_size(&self) -> f64 {
        focal::pixel_size(self.major_axis, self.minor_axis)
    }

    /// Center truncated to integer pixel coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.center_x as i32, self.center_y as i32)
    }
}

/// Fits an ellipse to every contour that has enough points for it.
///
/// The result is ordered by descending area, ties keep contour order.
pub fn markers_from_contours(contours: &Vector<Vector<Point>>) -> Result<Vec<Marker>> {
    let mut markers = Vec::new();
    for contour in contours.iter() {
        if contour.len() < MIN_ELLIPSE_POINTS {
            continue;
        }
        let rect = fit_ellipse(&contour).context("fitting ellipse to contour")?;
        markers.push(Marker::from_rotated_rect(rect));
    }
    markers.sort_by(|a, b| b.area().total_cmp(&a.area()));
    Ok(markers)
}

/// Finds the ellipses of one color in BGR frames.
#[derive(Clone, Copy, Debug)]
pub struct MarkerFinder {
    range: ColorRange,
}

impl MarkerFinder {
    pub fn new(range: ColorRange) -> Self {
        MarkerFinder { range }
    }

    pub fn from_palette(palette: &Palette, name: &str) -> Result<Self> {
        Ok(Self::new(palette.range(name)?))
    }

    pub fn range(&self) -> ColorRange {
        self.range
    }

    /// Binary mask of the pixels inside the color range.
    pub fn mask(&self, frame: &Mat) -> Result<Mat> {
        let mut hsv = Mat::default();
        cvt_color_def(frame, &mut hsv, COLOR_BGR2HSV).context("converting frame to HSV")?;

        let mut mask = Mat::default();
        in_range(
            &hsv,
            &self.range.min.to_scalar(),
            &self.range.max.to_scalar(),
            &mut mask,
        )
        .context("thresholding HSV frame")?;
        Ok(mask)
    }

    /// All markers of this color in `frame`, largest first.
    pub fn find_markers(&self, frame: &Mat) -> Result<Vec<Marker>> {
        let mask = self.mask(frame)?;

        let mut contours: Vector<Vector<Point>> = Vector::new();
        find_contours_def(&mask, &mut contours, RETR_EXTERNAL, CHAIN_APPROX_SIMPLE)
            .context("finding contours")?;

        let markers = markers_from_contours(&contours)?;
        trace!(
            "{} contours, {} markers for {:?}",
            contours.len(),
            markers.len(),
            self.range
        );
        Ok(markers)
    }

    pub fn largest_marker(&self, frame: &Mat) -> Result<Option<Marker>> {
        Ok(self.find_markers(frame)?.into_iter().next())
    }
}
