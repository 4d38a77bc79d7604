//! Scalar helpers: unit conversion and planar length.
//!
//! Thin wrappers over `libm` so every caller in the crate gets the same
//! platform-independent results.

use crate::constants::PI;

/// Converts degrees to radians as `π·deg/180`.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Converts radians to degrees as `180·rad/π`.
#[inline]
pub fn degrees(radians: f64) -> f64 {
    180.0 * radians / PI
}

/// Length of the planar vector `(a, b)`, computed as `sqrt(a² + b²)`.
///
/// Unlike `f64::hypot` this does not rescale to avoid overflow; inputs here
/// are components of unit vectors.
#[inline]
pub fn hypot(a: f64, b: f64) -> f64 {
    libm::sqrt(a * a + b * b)
}

/// Great-circle angle (radians) between two points given by the sines and
/// cosines of their latitudes and their longitude difference.
///
/// Uses the Vincenty form, which stays well conditioned for both tiny and
/// antipodal separations.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}
