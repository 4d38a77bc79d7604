//! Vectors, matrices and axis-angle rotations.

pub mod matrix3;
pub mod rotation;
pub mod vector3;

pub use matrix3::Matrix3;
pub use rotation::{rotate, rotation_matrix};
pub use vector3::Vector3;
