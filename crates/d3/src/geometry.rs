//! Geometry kernel: rotation and reflection of a single point about the origin.
//!
//! Both functions are total. Angles are given in degrees and converted to
//! radians internally.
//!
//! # Example
//!
//! ```
//! use d3::geometry::{reflect, rotate};
//!
//! let (x, y) = rotate((1.0, 0.0), 90.0);
//! assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
//!
//! // A vertical axis negates x exactly.
//! assert_eq!(reflect((0.25, -0.5), 90.0), (-0.25, -0.5));
//! ```

/// Degrees to radians.
#[inline]
#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Rotate `point` counter-clockwise about the origin by `angle_degrees`.
#[must_use]
pub fn rotate(point: (f64, f64), angle_degrees: f64) -> (f64, f64) {
    let (sin, cos) = deg_to_rad(angle_degrees).sin_cos();
    let (px, py) = point;
    (cos * px - sin * py, sin * px + cos * py)
}

/// True when a line at `axis_degrees` through the origin is vertical.
#[inline]
fn is_vertical(axis_degrees: f64) -> bool {
    (axis_degrees - 90.0).rem_euclid(180.0) == 0.0
}

/// Reflect `point` across the line through the origin at `axis_degrees`.
///
/// Uses the slope `m = tan(axis)`; the foot of the perpendicular scaled by
/// two gives the image. A vertical axis has no slope and is reflected
/// exactly by negating x.
#[must_use]
pub fn reflect(point: (f64, f64), axis_degrees: f64) -> (f64, f64) {
    let (px, py) = point;
    if is_vertical(axis_degrees) {
        return (-px, py);
    }
    let m = deg_to_rad(axis_degrees).tan();
    let d = (px + py * m) / (1.0 + m * m);
    (2.0 * d - px, 2.0 * d * m - py)
}
