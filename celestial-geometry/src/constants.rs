//! Numeric constants shared across the kernel.
//!
//! π fractions are written out to more digits than `f64` can hold so the
//! compiler rounds them once, the same way for every target.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

/// Horizontal length `sqrt(x² + y²)` at or below which a unit vector is
/// treated as sitting on a pole and its longitude collapses to 0.
///
/// Output compatibility depends on this exact value.
pub const POLE_HORIZONTAL_THRESHOLD: f64 = 1e-10;

/// Largest longitude in the canonical `(-180°, 180°]` range.
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Latitude of the north pole in degrees.
pub const MAX_LATITUDE_DEG: f64 = 90.0;

pub const DEGREES_PER_TURN: f64 = 360.0;
