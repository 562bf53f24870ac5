mod camera;
mod controls;
mod markers;
mod overlay;
mod palette;
mod scene;

pub use crate::camera::Camera;
pub use crate::controls::{Trackbars, DIFF_TRACKBAR, SIZE_TRACKBAR, TRACKBAR_MAX, TRACKBAR_WINDOW};
pub use crate::markers::{markers_from_contours, Marker, MarkerFinder, MIN_ELLIPSE_POINTS};
pub use crate::overlay::{draw_distance, draw_focal_length, draw_marker};
pub use crate::palette::{ColorRange, HsvBound, Palette, GREEN, VIOLET, YELLOW};
pub use crate::scene::{FocalScene, FrameReport, Knobs};
