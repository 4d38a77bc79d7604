//! Axis-angle rotations.
//!
//! [`rotation_matrix`] builds the classical axis-angle (Rodrigues) matrix for a
//! right-handed rotation of `angle` radians about a unit `axis`. Looking down
//! the axis toward the origin, positive angles turn counterclockwise:
//!
//! ```
//! use celestial_geometry::{rotate, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = rotate(&Vector3::z_axis(), &Vector3::x_axis(), FRAC_PI_2);
//! assert!((v.x).abs() < 1e-15);
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```
//!
//! The axis is used as given. A non-unit axis produces a matrix that is not
//! orthonormal and no error is raised; normalize the axis first when in doubt.

use super::{Matrix3, Vector3};

/// Builds the matrix rotating by `angle` radians about the unit vector `axis`.
///
/// With `c = cos(angle)`, `s = sin(angle)` and axis `(x, y, z)` the stored
/// rows are
///
/// ```text
/// | xx + (1-xx)c    xy(1-c) + zs    xz(1-c) - ys |
/// | xy(1-c) - zs    yy + (1-yy)c    yz(1-c) + xs |
/// | xz(1-c) + ys    yz(1-c) - xs    zz + (1-zz)c |
/// ```
///
/// laid out for [`Matrix3::apply`]'s column-sum convention.
pub fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix3 {
    let (sin_a, cos_a) = libm::sincos(angle);
    let (x, y, z) = (axis.x, axis.y, axis.z);
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let t = 1.0 - cos_a;

    Matrix3::from_array([
        [xx + (1.0 - xx) * cos_a, xy * t + z * sin_a, xz * t - y * sin_a],
        [xy * t - z * sin_a, yy + (1.0 - yy) * cos_a, yz * t + x * sin_a],
        [xz * t + y * sin_a, yz * t - x * sin_a, zz + (1.0 - zz) * cos_a],
    ])
}

/// Rotates `v` by `angle` radians about the unit vector `axis`.
///
/// Same as `rotation_matrix(axis, angle) * v`.
pub fn rotate(axis: &Vector3, v: &Vector3, angle: f64) -> Vector3 {
    rotation_matrix(axis, angle).apply(v)
}

impl Matrix3 {
    /// Associated-function form of [`rotation_matrix`].
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        rotation_matrix(axis, angle)
    }
}
