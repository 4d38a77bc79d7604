//! Error types for the geometry kernel.
//!
//! The arithmetic API never fails: degenerate inputs (a zero-length vector
//! handed to `normalize`, a singular matrix handed to `inverse`, a dot product
//! outside `[-1, 1]` in `angle`) propagate NaN or infinity through IEEE-754
//! arithmetic exactly as the raw formulas would.
//!
//! Callers that would rather stop at the first degenerate value use the
//! checked companions ([`Vector3::try_normalize`](crate::Vector3::try_normalize),
//! [`Matrix3::try_inverse`](crate::Matrix3::try_inverse)), which return
//! [`GeometryResult<T>`] and report [`MathErrorKind::DegenerateInput`].
//!
//! ```
//! use celestial_geometry::{GeometryError, MathErrorKind, Vector3};
//!
//! let err = Vector3::zeros().try_normalize().unwrap_err();
//! assert!(matches!(
//!     err,
//!     GeometryError::MathError { kind: MathErrorKind::DegenerateInput, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of numerical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input has no meaningful result: zero-length vector, singular matrix.
    DegenerateInput,
    /// Input value is invalid for the operation (e.g. index out of range).
    InvalidInput,
    /// Input or intermediate value is NaN or infinite.
    NotFinite,
}

/// Unified error type for geometry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;

impl GeometryError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] carried by this error.
    pub fn kind(&self) -> MathErrorKind {
        match self {
            Self::MathError { kind, .. } => *kind,
        }
    }

    /// Returns `true` for errors caused by a degenerate operand.
    pub fn is_degenerate(&self) -> bool {
        self.kind() == MathErrorKind::DegenerateInput
    }
}
