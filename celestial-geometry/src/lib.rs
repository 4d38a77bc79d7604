//! Small 3D geometry kernel for globe and sky calculations.
//!
//! `celestial-geometry` provides the Euclidean building blocks that sit under
//! longitude/latitude math: vector algebra, 3×3 matrices (determinant and
//! inverse), axis-angle rotations, and conversion between (lon, lat) in
//! degrees and unit vectors. Everything is a pure function over `Copy` values.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`], [`Matrix3`], axis-angle rotations |
//! | [`spherical`] | [`LonLat`] and lon/lat ↔ xyz conversion |
//! | [`ops`] | Free-function form of every operation |
//! | [`math`] | Degree/radian conversion, planar length, angular separation |
//! | [`constants`] | π fractions, pole threshold, lon/lat limits |
//! | [`errors`] | [`GeometryError`] and [`GeometryResult`] |
//!
//! # Example
//!
//! Rotate a point 90° east about the polar axis:
//!
//! ```
//! use celestial_geometry::{rotate, LonLat, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let greenwich = LonLat::new(0.0, 51.48).to_xyz();
//! let moved = rotate(&Vector3::z_axis(), &greenwich, FRAC_PI_2).to_lonlat();
//!
//! assert!((moved.lon - 90.0).abs() < 1e-9);
//! assert!((moved.lat - 51.48).abs() < 1e-9);
//! ```
//!
//! # Design Notes
//!
//! - **Units**: rotation and vector angles are radians; [`LonLat`] components
//!   are degrees. Conversion happens only inside [`LonLat::to_xyz`] and
//!   [`LonLat::from_xyz`].
//!
//! - **Matrix convention**: [`Matrix3::apply`] treats each stored row as the
//!   image of a basis vector (`result[i] = Σ m[j][i]·v[j]`).
//!   [`rotation_matrix`] lays its entries out for that convention.
//!
//! - **Degenerate inputs**: the arithmetic API follows IEEE-754 and lets NaN
//!   and infinity through. [`Vector3::try_normalize`] and
//!   [`Matrix3::try_inverse`] are the checked alternatives.
//!
//! - **Unit axis**: [`rotation_matrix`] and [`rotate`] do not normalize their
//!   axis.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Vector3`], [`Matrix3`] and
//!   [`LonLat`].

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod ops;
pub mod spherical;
pub mod test_helpers;

pub use errors::{GeometryError, GeometryResult, MathErrorKind};
pub use matrix::{rotate, rotation_matrix, Matrix3, Vector3};
pub use spherical::{lonlat_to_xyz, xyz_to_lonlat, LonLat};
