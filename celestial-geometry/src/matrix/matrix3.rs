//! General 3x3 matrices and the kernel's matrix-vector convention.
//!
//! # Storage Layout
//!
//! Elements are stored as `[[f64; 3]; 3]` and indexed `[row][column]`, so
//! `matrix[(i, j)]` or `matrix.get(i, j)` is row `i`, column `j`.
//!
//! # Applying a Matrix to a Vector
//!
//! [`apply`](Matrix3::apply) (and `matrix * vector`) sums down the columns of
//! the stored rows:
//!
//! ```text
//! result[i] = m[0][i]*v[0] + m[1][i]*v[1] + m[2][i]*v[2]
//! ```
//!
//! In other words each stored *row* is the image of a basis vector. This is
//! the transpose of the textbook `M * v`, and it is the layout
//! [`rotation_matrix`](super::rotation_matrix) writes its entries in. The two
//! only agree with each other; do not swap one without the other.
//!
//! ```
//! use celestial_geometry::{Matrix3, Vector3};
//!
//! let m = Matrix3::from_array([
//!     [0.0, 1.0, 0.0], // image of x
//!     [-1.0, 0.0, 0.0], // image of y
//!     [0.0, 0.0, 1.0], // image of z
//! ]);
//! assert_eq!(m * Vector3::x_axis(), Vector3::y_axis());
//! assert_eq!(m * Vector3::y_axis(), -Vector3::x_axis());
//! ```
//!
//! # Composing Maps
//!
//! Because of the convention above, the plain row-by-column
//! [`multiply`](Matrix3::multiply) composes maps in reverse order. Use
//! [`compose`](Matrix3::compose) or the `*` operator, which are defined so that
//! `(a * b) * v == a * (b * v)`.
//!
//! # Inverse and Determinant
//!
//! [`inverse`](Matrix3::inverse) uses the adjugate built from cross products of
//! the rows, divided by the [`determinant`](Matrix3::determinant). A singular
//! matrix is not detected: its inverse is full of infinities and NaN.
//! [`try_inverse`](Matrix3::try_inverse) reports it as an error instead.

use super::Vector3;
use crate::{GeometryError, GeometryResult, MathErrorKind};
use std::fmt;

/// A 3x3 matrix of `f64`, stored row-major.
///
/// Used both as a general linear map (inverse, determinant) and as the
/// rotation matrix produced by [`rotation_matrix`](super::rotation_matrix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    elements: [[f64; 3]; 3],
}

impl Matrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn zeros() -> Self {
        Self {
            elements: [[0.0; 3]; 3],
        }
    }

    /// Creates a matrix from a row-major array: `elements[i][j]` is row `i`,
    /// column `j`.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Creates a matrix whose rows are the given vectors.
    pub fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Self {
        Self::from_array([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Returns row `i` as a vector. Panics if `i >= 3`.
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from_array(self.elements[i])
    }

    pub fn rows(&self) -> [Vector3; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Applies this matrix to a vector using the column-sum convention
    /// described in the [module docs](self).
    ///
    /// Also available as `matrix * vector`.
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    /// Computes the determinant.
    ///
    /// Equal to the scalar triple product of the rows,
    /// `row0 · (row1 × row2)`.
    ///
    /// ```
    /// use celestial_geometry::Matrix3;
    ///
    /// let m = Matrix3::from_array([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
    /// assert_eq!(m.determinant(), 1.0);
    /// ```
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * m[1][1] * m[2][2] + m[1][0] * m[2][1] * m[0][2] + m[2][0] * m[0][1] * m[1][2]
            - m[2][0] * m[1][1] * m[0][2]
            - m[0][0] * m[2][1] * m[1][2]
            - m[1][0] * m[0][1] * m[2][2]
    }

    /// Returns the inverse, computed from the adjugate.
    ///
    /// The cofactors come from cross products of pairs of rows and are scaled
    /// by `1 / det`. Nothing is checked: for a singular matrix the entries are
    /// infinite or NaN.
    ///
    /// ```
    /// use celestial_geometry::{Matrix3, Vector3};
    ///
    /// let m = Matrix3::from_array([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    /// let inv = m.inverse();
    /// assert_eq!(inv.get(0, 0), 0.5);
    /// assert_eq!(inv.get(1, 1), 0.25);
    /// assert_eq!(inv.get(2, 2), 0.125);
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(inv * (m * v), v);
    /// ```
    pub fn inverse(&self) -> Self {
        let dr = 1.0 / self.determinant();
        self.adjugate_scaled(dr)
    }

    /// Checked [`inverse`](Self::inverse).
    ///
    /// Fails with [`MathErrorKind::NotFinite`] if the matrix holds a NaN or
    /// infinite element, and with [`MathErrorKind::DegenerateInput`] if the
    /// determinant is exactly zero or `1 / det` overflows.
    pub fn try_inverse(&self) -> GeometryResult<Self> {
        if !self.is_finite() {
            tracing::debug!(matrix = ?self.elements, "rejecting non-finite matrix");
            return Err(GeometryError::math_error(
                "Matrix3::try_inverse",
                MathErrorKind::NotFinite,
                "matrix has a non-finite element",
            ));
        }

        let det = self.determinant();
        let dr = 1.0 / det;
        if det == 0.0 || !dr.is_finite() {
            tracing::debug!(det, "rejecting singular matrix");
            return Err(GeometryError::math_error(
                "Matrix3::try_inverse",
                MathErrorKind::DegenerateInput,
                &format!("matrix is singular (determinant {:e})", det),
            ));
        }

        Ok(self.adjugate_scaled(dr))
    }

    fn adjugate_scaled(&self, dr: f64) -> Self {
        let [row0, row1, row2] = self.rows();
        let r0 = row1.cross(&row2);
        let r1 = row2.cross(&row0);
        let r2 = row0.cross(&row1);

        Self::from_array([
            [dr * r0.x, dr * r1.x, dr * r2.x],
            [dr * r0.y, dr * r1.y, dr * r2.y],
            [dr * r0.z, dr * r1.z, dr * r2.z],
        ])
    }

    pub fn is_finite(&self) -> bool {
        self.elements.iter().flatten().all(|e| e.is_finite())
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Plain row-by-column product `self · other`.
    ///
    /// Under the kernel's application convention this is the map that applies
    /// `self` first and `other` second. Most callers want
    /// [`compose`](Self::compose).
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Returns the map that applies `first`, then `self`.
    ///
    /// ```
    /// use celestial_geometry::{rotation_matrix, Vector3};
    ///
    /// let spin = rotation_matrix(&Vector3::z_axis(), 0.3);
    /// let tilt = rotation_matrix(&Vector3::x_axis(), 0.5);
    /// let v = Vector3::new(0.2, -0.4, 0.9);
    ///
    /// let combined = spin.compose(&tilt);
    /// let stepwise = spin * (tilt * v);
    /// assert!((combined * v).distance(&stepwise) < 1e-15);
    /// ```
    pub fn compose(&self, first: &Self) -> Self {
        first.multiply(self)
    }

    /// Checks whether this matrix is a proper rotation within `tolerance`:
    /// determinant +1 and `M · Mᵀ = I`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let det = self.determinant();
        if (det - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Returns the maximum absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(elements: [[f64; 3]; 3]) -> Self {
        Self::from_array(elements)
    }
}

/// `a * b` is the map applying `b` first, then `a`.
impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl std::ops::Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        self.compose(rhs)
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(&vec)
    }
}

impl std::ops::Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(&vec)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
