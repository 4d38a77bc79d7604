//! Free-function interface to the kernel.
//!
//! One function per operation, taking and returning plain values, for callers
//! that prefer `ops::rotate(axis, v, angle)` over method syntax. Each simply
//! forwards to the corresponding method.
//!
//! | Function | Equivalent |
//! |----------|------------|
//! | [`angle`] | [`Vector3::angle`] |
//! | [`distance`] | [`Vector3::distance`] |
//! | [`normalize`] | [`Vector3::normalize`] |
//! | [`mul_matrix_vector`] | [`Matrix3::apply`] |
//! | [`cross`], [`dot`] | [`Vector3::cross`], [`Vector3::dot`] |
//! | [`lonlat_to_xyz`], [`xyz_to_lonlat`] | [`LonLat::to_xyz`], [`LonLat::from_xyz`] |
//! | [`rotation_matrix`], [`rotate`] | [`crate::matrix::rotation`] |
//! | [`determinant`], [`inverse`] | [`Matrix3::determinant`], [`Matrix3::inverse`] |
//! | [`add`], [`negate`], [`scale`] | `a + b`, `-a`, `a * k` |
//!
//! ```
//! use celestial_geometry::ops;
//! use celestial_geometry::{LonLat, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = ops::lonlat_to_xyz(LonLat::new(0.0, 0.0));
//! let w = ops::rotate(Vector3::z_axis(), v, FRAC_PI_2);
//! let ll = ops::xyz_to_lonlat(w);
//! assert!((ll.lon - 90.0).abs() < 1e-12);
//! ```

use crate::{LonLat, Matrix3, Vector3};

pub use crate::math::{degrees, radians};

/// Angle in radians between two unit vectors, `acos(v1 · v2)`.
#[inline]
pub fn angle(v1: Vector3, v2: Vector3) -> f64 {
    v1.angle(&v2)
}

#[inline]
pub fn distance(v1: Vector3, v2: Vector3) -> f64 {
    v1.distance(&v2)
}

/// Unit vector along `v`; NaN components for the zero vector.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    v.normalize()
}

/// Applies `m` to `v` with the column-sum convention of [`Matrix3::apply`].
#[inline]
pub fn mul_matrix_vector(m: Matrix3, v: Vector3) -> Vector3 {
    m.apply(&v)
}

#[inline]
pub fn cross(v1: Vector3, v2: Vector3) -> Vector3 {
    v1.cross(&v2)
}

#[inline]
pub fn dot(v1: Vector3, v2: Vector3) -> f64 {
    v1.dot(&v2)
}

#[inline]
pub fn lonlat_to_xyz(ll: LonLat) -> Vector3 {
    ll.to_xyz()
}

#[inline]
pub fn xyz_to_lonlat(v: Vector3) -> LonLat {
    LonLat::from_xyz(&v)
}

/// Rotation by `angle` radians about the unit vector `axis`.
#[inline]
pub fn rotation_matrix(axis: Vector3, angle: f64) -> Matrix3 {
    crate::matrix::rotation_matrix(&axis, angle)
}

#[inline]
pub fn rotate(axis: Vector3, v: Vector3, angle: f64) -> Vector3 {
    crate::matrix::rotate(&axis, &v, angle)
}

#[inline]
pub fn determinant(m: Matrix3) -> f64 {
    m.determinant()
}

/// Adjugate inverse; infinite/NaN entries for a singular matrix.
#[inline]
pub fn inverse(m: Matrix3) -> Matrix3 {
    m.inverse()
}

#[inline]
pub fn add(v1: Vector3, v2: Vector3) -> Vector3 {
    v1 + v2
}

#[inline]
pub fn negate(v: Vector3) -> Vector3 {
    -v
}

#[inline]
pub fn scale(v: Vector3, k: f64) -> Vector3 {
    v.scale(k)
}
