//! 3D Cartesian vectors.
//!
//! [`Vector3`] is the value every other part of the kernel works in: lon/lat
//! pairs are converted to unit vectors, rotated by [`Matrix3`](super::Matrix3),
//! and converted back.
//!
//! # Arithmetic
//!
//! The component-wise operations are exposed as operators:
//!
//! | Operation | Syntax |
//! |-----------|--------|
//! | add | `a + b` |
//! | subtract | `a - b` |
//! | negate | `-a` |
//! | scale | `a * k`, `k * a` |
//!
//! ```
//! use celestial_geometry::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
//! assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
//! ```
//!
//! # Dot, Cross and Angle
//!
//! For unit vectors `a.dot(&b)` is the cosine of the angle between them, and
//! [`angle`](Vector3::angle) is its arccosine. The cross product follows the
//! right-hand rule:
//!
//! ```
//! use celestial_geometry::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let x = Vector3::x_axis();
//! let y = Vector3::y_axis();
//! assert_eq!(x.dot(&y), 0.0);
//! assert_eq!(x.cross(&y), Vector3::z_axis());
//! assert!((x.angle(&y) - FRAC_PI_2).abs() < 1e-15);
//! ```
//!
//! # Degenerate Inputs
//!
//! [`normalize`](Vector3::normalize) divides by the length without checking
//! it, so the zero vector comes back as NaN in every component. Use
//! [`try_normalize`](Vector3::try_normalize) to get an error instead.

use crate::{GeometryError, GeometryResult, MathErrorKind};
use std::fmt;

/// A 3D Cartesian vector: a point, a direction, or an offset.
///
/// Components are public. Equality is exact and component-wise; compare with
/// a tolerance in tests.
///
/// ```
/// use celestial_geometry::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let from_array = Vector3::from_array([1.0, 2.0, 3.0]);
/// assert_eq!(v, from_array);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`, the origin.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns `[1, 0, 0]`, the direction of lon = 0°, lat = 0°.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns `[0, 1, 0]`, the direction of lon = 90°, lat = 0°.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns `[0, 0, 1]`, the north pole.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> GeometryResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeometryError::math_error(
                "Vector3::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    pub fn set(&mut self, index: usize, value: f64) -> GeometryResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => {
                return Err(GeometryError::math_error(
                    "Vector3::set",
                    MathErrorKind::InvalidInput,
                    &format!("index {} out of bounds (valid range: 0-2)", index),
                ))
            }
        }
        Ok(())
    }

    /// Returns the Euclidean length (L2 norm).
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance between two points. Always `>= 0`.
    ///
    /// ```
    /// use celestial_geometry::Vector3;
    ///
    /// let a = Vector3::new(1.0, 1.0, 1.0);
    /// let b = Vector3::new(4.0, 5.0, 1.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// assert_eq!(a.distance(&a), 0.0);
    /// ```
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        libm::sqrt(dx * dx + dy * dy + dz * dz)
    }

    /// Returns the vector scaled to unit length: `v / |v|`.
    ///
    /// The length is not checked. For the zero vector every component of the
    /// result is NaN (`0 / 0`), matching plain floating-point arithmetic.
    ///
    /// ```
    /// use celestial_geometry::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    ///
    /// let nan = Vector3::zeros().normalize();
    /// assert!(nan.x.is_nan() && nan.y.is_nan() && nan.z.is_nan());
    /// ```
    pub fn normalize(&self) -> Self {
        let d = self.distance(&Self::zeros());
        Self::new(self.x / d, self.y / d, self.z / d)
    }

    /// Checked [`normalize`](Self::normalize).
    ///
    /// Fails with [`MathErrorKind::NotFinite`] if any component is NaN or
    /// infinite, and with [`MathErrorKind::DegenerateInput`] if the length is
    /// zero (including lengths that underflow to zero when squared).
    pub fn try_normalize(&self) -> GeometryResult<Self> {
        if !self.is_finite() {
            tracing::debug!(x = self.x, y = self.y, z = self.z, "rejecting non-finite vector");
            return Err(GeometryError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::NotFinite,
                "vector has a non-finite component",
            ));
        }

        let d = self.magnitude();
        if d == 0.0 {
            tracing::debug!(x = self.x, y = self.y, z = self.z, "rejecting zero-length vector");
            return Err(GeometryError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::DegenerateInput,
                "vector has zero length",
            ));
        }

        Ok(Self::new(self.x / d, self.y / d, self.z / d))
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product `self × other` (right-hand rule).
    ///
    /// Anti-commutative: `a.cross(&b) == -b.cross(&a)`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle in radians between two unit vectors: `acos(a · b)`.
    ///
    /// Neither input is normalized and the dot product is not clamped. If the
    /// vectors are not unit length the dot product can leave `[-1, 1]` and the
    /// result is NaN.
    ///
    /// ```
    /// use celestial_geometry::Vector3;
    ///
    /// let a = Vector3::new(2.0, 0.0, 0.0);
    /// assert!(a.angle(&a).is_nan());
    /// ```
    pub fn angle(&self, other: &Self) -> f64 {
        libm::acos(self.dot(other))
    }

    /// Multiplies every component by `k`. Same as `self * k`.
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        Self::new(k * self.x, k * self.y, k * self.z)
    }

    /// Rotates this vector by `angle` radians about the unit vector `axis`.
    ///
    /// See [`rotate`](super::rotate); the axis is not normalized.
    pub fn rotate_about(&self, axis: &Self, angle: f64) -> Self {
        super::rotate(axis, self, angle)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

/// Component-wise sum.
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Component-wise difference; `b - a` is the offset from `a` to `b`.
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// `v * k`, same as [`Vector3::scale`].
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

/// `k * v`, same as [`Vector3::scale`].
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec.scale(self)
    }
}

/// Antipode of a unit vector: `-v` points through the other side of the sphere.
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// `v[0]`, `v[1]`, `v[2]` for x, y, z. Any other index panics; use
/// [`Vector3::get`] for a checked read.
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
