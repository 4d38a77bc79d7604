//! Assertions shared by unit and integration tests.
//!
//! Step-count (ulp) comparison for scalars that should agree to the last few
//! bits, and absolute-tolerance comparison for vectors, matrices and lon/lat.

use crate::{LonLat, Matrix3, Vector3};

/// Number of representable `f64` values between `a` and `b`.
///
/// Maps the bit patterns onto a monotonic integer line first, so the count is
/// correct across the sign boundary (`-0.0` and `0.0` are one step apart).
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    fn monotonic(x: f64) -> u64 {
        const SIGN: u64 = 1 << 63;
        let bits = x.to_bits();
        if bits & SIGN == 0 {
            bits | SIGN
        } else {
            !bits
        }
    }
    monotonic(a).abs_diff(monotonic(b))
}

/// Asserts `actual` is within `max_ulps` representable steps of `expected`.
/// Two zeros of either sign always pass.
#[track_caller]
pub fn assert_within_ulps(actual: f64, expected: f64, max_ulps: u64, what: &str) {
    if actual == 0.0 && expected == 0.0 {
        return;
    }
    assert!(
        actual.is_finite() && expected.is_finite(),
        "{}: expected finite values, got {} and {}",
        what,
        actual,
        expected
    );
    let steps = ulp_distance(actual, expected);
    assert!(
        steps <= max_ulps,
        "{}: {} is {} ulps from {} (allowed {})",
        what,
        actual,
        steps,
        expected,
        max_ulps
    );
}

#[track_caller]
pub fn assert_vector_close(actual: Vector3, expected: Vector3, tol: f64) {
    let diff = actual.distance(&expected);
    assert!(
        diff <= tol,
        "vectors differ by {:e} (tol {:e}): actual {} expected {}",
        diff,
        tol,
        actual,
        expected
    );
}

#[track_caller]
pub fn assert_matrix_close(actual: Matrix3, expected: Matrix3, tol: f64) {
    let diff = actual.max_difference(&expected);
    assert!(
        diff <= tol,
        "matrices differ by {:e} (tol {:e}):\nactual {}expected {}",
        diff,
        tol,
        actual,
        expected
    );
}

/// Compares both angles in degrees. Longitudes are compared modulo 360°.
#[track_caller]
pub fn assert_lonlat_close(actual: LonLat, expected: LonLat, tol_deg: f64) {
    let dlon = crate::spherical::normalize_longitude(actual.lon - expected.lon).abs();
    let dlat = (actual.lat - expected.lat).abs();
    assert!(
        dlon <= tol_deg && dlat <= tol_deg,
        "lon/lat differ by ({:e}, {:e}) (tol {:e}): actual {} expected {}",
        dlon,
        dlat,
        tol_deg,
        actual,
        expected
    );
}

/// `assert_ulp_lt!(actual, expected, max_ulps)` with an optional format
/// message, forwarding to [`assert_within_ulps`].
#[macro_export]
macro_rules! assert_ulp_lt {
    ($actual:expr, $expected:expr, $max_ulps:expr $(,)?) => {
        $crate::test_helpers::assert_within_ulps(
            $actual,
            $expected,
            $max_ulps,
            concat!(stringify!($actual), " vs ", stringify!($expected)),
        )
    };
    ($actual:expr, $expected:expr, $max_ulps:expr, $($msg:tt)+) => {
        $crate::test_helpers::assert_within_ulps($actual, $expected, $max_ulps, &format!($($msg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lonlat_close_wraps() {
        assert_lonlat_close(LonLat::new(180.0, 0.0), LonLat::new(-180.0, 0.0), 1e-12);
        assert_lonlat_close(LonLat::new(-179.9999999999, 5.0), LonLat::new(180.0, 5.0), 1e-9);
    }

    #[test]
    #[should_panic(expected = "vectors differ")]
    fn test_vector_close_fails() {
        assert_vector_close(Vector3::x_axis(), Vector3::y_axis(), 1e-3);
    }
}
