#![no_std]
//! Pinhole-camera estimates from two markers of known size.
//!
//! With two markers of the same physical size `S` placed `dD` apart along the
//! camera axis, their measured pixel sizes `px1` and `px2` give
//!
//! ```text
//! F = dD * px1 * px2 / (S * |px1 - px2|)
//! ```
//!
//! and once `F` is known, the distance to any marker of size `S` is
//!
//! ```text
//! D = F * S / px
//! ```
//!
//! Units are whatever the caller uses consistently, usually millimeters for
//! physical quantities and pixels for image measurements.

/// Larger of the two ellipse axes.
pub fn pixel_size(major_axis: f64, minor_axis: f64) -> f64 {
    major_axis.max(minor_axis)
}

/// Focal length from the pixel sizes of two markers of size `known_size`
/// that are `known_distance_diff` apart.
///
/// Returns `None` when the formula is undefined, i.e. `known_size` is zero or
/// both pixel sizes are equal.
pub fn estimate_focal_length(
    px1: f64,
    px2: f64,
    known_distance_diff: f64,
    known_size: f64,
) -> Option<f64> {
    let diff = if px1 > px2 { px1 - px2 } else { px2 - px1 };
    let denominator = known_size * diff;
    if denominator == 0.0 {
        return None;
    }
    Some(known_distance_diff * px1 * px2 / denominator)
}

/// Distance to a marker of size `known_size` that measures `pixel_size`.
pub fn estimate_distance(focal_length: f64, known_size: f64, pixel_size: f64) -> Option<f64> {
    if pixel_size == 0.0 {
        return None;
    }
    Some(focal_length * known_size / pixel_size)
}

/// Pixel size a marker of `known_size` would have at `distance`.
pub fn implied_pixel_size(focal_length: f64, known_size: f64, distance: f64) -> Option<f64> {
    if distance == 0.0 {
        return None;
    }
    Some(focal_length * known_size / distance)
}
