#![allow(dead_code)]

use opencv::{
    core::{Mat, Point, Rect, Scalar, Size, CV_8UC3},
    imgproc::{ellipse, rectangle, FILLED, LINE_8},
};

pub const WIDTH: i32 = 640;
pub const HEIGHT: i32 = 480;

// BGR colors that land inside the default green and violet HSV ranges.
pub const GREEN_BGR: Scalar = Scalar::new(40.0, 200.0, 40.0, 0.0);
pub const VIOLET_BGR: Scalar = Scalar::new(200.0, 40.0, 160.0, 0.0);
pub const GRAY_BGR: Scalar = Scalar::new(128.0, 128.0, 128.0, 0.0);

pub fn blank_frame() -> Mat {
    Mat::new_rows_cols_with_default(HEIGHT, WIDTH, CV_8UC3, Scalar::all(0.0)).unwrap()
}

/// Solid ellipse with half axes `(a, b)`.
pub fn fill_ellipse(frame: &mut Mat, center: (i32, i32), half_axes: (i32, i32), angle: f64, color: Scalar) {
    ellipse(
        frame,
        Point::new(center.0, center.1),
        Size::new(half_axes.0, half_axes.1),
        angle,
        0.0,
        360.0,
        color,
        FILLED,
        LINE_8,
        0,
    )
    .unwrap();
}

pub fn fill_rect(frame: &mut Mat, x: i32, y: i32, width: i32, height: i32, color: Scalar) {
    rectangle(frame, Rect::new(x, y, width, height), color, FILLED, LINE_8, 0).unwrap();
}
