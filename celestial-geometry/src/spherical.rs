//! Longitude/latitude pairs and their unit vectors.
//!
//! A [`LonLat`] holds degrees; everything it converts to or from is a unit
//! [`Vector3`] with +X at (0°, 0°), +Y at (90°, 0°) and +Z at the north pole.
//!
//! ```
//! use celestial_geometry::{LonLat, Vector3};
//!
//! let v = LonLat::new(90.0, 0.0).to_xyz();
//! assert!((v.y - 1.0).abs() < 1e-15);
//!
//! let ll = Vector3::new(0.0, 0.0, 1.0).to_lonlat();
//! assert_eq!(ll.lon, 0.0);
//! assert!((ll.lat - 90.0).abs() < 1e-12);
//! ```
//!
//! # Poles
//!
//! Longitude is undefined on the polar axis. When the horizontal length
//! `sqrt(x² + y²)` of the input is at or below
//! [`POLE_HORIZONTAL_THRESHOLD`] (`1e-10`), [`LonLat::from_xyz`] reports
//! longitude 0 instead of failing, so the round trip through a pole is lossy.
//!
//! # Normalization
//!
//! | Function | Input | Output Range |
//! |----------|-------|--------------|
//! | [`normalize_longitude`] | degrees | (-180°, 180°] |
//! | [`normalize_latitude`] | degrees | [-90°, 90°] (clamped) |

use crate::constants::{
    DEGREES_PER_TURN, MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG, POLE_HORIZONTAL_THRESHOLD,
};
use crate::math::{degrees, hypot, radians, vincenty_angular_separation};
use crate::Vector3;
use std::fmt;

/// A point on the unit sphere as (longitude, latitude) in degrees.
///
/// Conventionally `lon ∈ (-180°, 180°]` and `lat ∈ [-90°, 90°]`; values
/// outside those ranges are accepted and can be folded back with
/// [`normalized`](Self::normalized).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates a pair from `[lon, lat]`.
    #[inline]
    pub fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Converts to a unit Cartesian vector:
    /// `x = cos(lat)cos(lon)`, `y = cos(lat)sin(lon)`, `z = sin(lat)`.
    ///
    /// ```
    /// use celestial_geometry::{LonLat, Vector3};
    ///
    /// assert_eq!(LonLat::new(0.0, 0.0).to_xyz(), Vector3::x_axis());
    /// ```
    pub fn to_xyz(&self) -> Vector3 {
        let (sin_lon, cos_lon) = libm::sincos(radians(self.lon));
        let (sin_lat, cos_lat) = libm::sincos(radians(self.lat));
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Converts a unit vector back to (longitude, latitude).
    ///
    /// The input is expected to be on or near the unit sphere and is neither
    /// normalized nor validated. Latitude is `asin(z)`. Longitude is the
    /// azimuth of `(x, y)`, i.e. `acos(x / hypot(x, y))` carrying the sign of
    /// `y`, in `[-180°, 180°]`; it is 0 when `hypot(x, y)` does not exceed
    /// [`POLE_HORIZONTAL_THRESHOLD`].
    ///
    /// The older formulation `sign(y)·acos(x)` skips the division by
    /// `hypot(x, y)`. The two agree on the equator only: for
    /// `(0.5, 0.5, √½)` that form reports 60° where this one reports 45°, the
    /// longitude [`to_xyz`](Self::to_xyz) started from.
    ///
    /// ```
    /// use celestial_geometry::{LonLat, Vector3};
    ///
    /// let ll = LonLat::from_xyz(&Vector3::new(0.0, -1.0, 0.0));
    /// assert!((ll.lon + 90.0).abs() < 1e-12);
    /// assert_eq!(ll.lat, 0.0);
    /// ```
    pub fn from_xyz(v: &Vector3) -> Self {
        let lat = degrees(libm::asin(v.z));
        let lon = if hypot(v.x, v.y) > POLE_HORIZONTAL_THRESHOLD {
            degrees(libm::atan2(v.y, v.x))
        } else {
            0.0
        };
        Self::new(lon, lat)
    }

    /// Returns the pair with longitude wrapped into `(-180°, 180°]` and
    /// latitude clamped to `[-90°, 90°]`.
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_longitude(self.lon),
            normalize_latitude(self.lat),
        )
    }

    /// Great-circle angle to `other`, in radians.
    ///
    /// ```
    /// use celestial_geometry::LonLat;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let equator = LonLat::new(30.0, 0.0);
    /// let pole = LonLat::new(-120.0, 90.0);
    /// assert!((equator.separation(&pole) - FRAC_PI_2).abs() < 1e-15);
    /// ```
    pub fn separation(&self, other: &Self) -> f64 {
        let (sin_lat1, cos_lat1) = libm::sincos(radians(self.lat));
        let (sin_lat2, cos_lat2) = libm::sincos(radians(other.lat));
        let delta_lon = radians(other.lon - self.lon);
        vincenty_angular_separation(sin_lat1, cos_lat1, sin_lat2, cos_lat2, delta_lon)
    }
}

impl From<[f64; 2]> for LonLat {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(ll: LonLat) -> Self {
        ll.to_array()
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LonLat({:.9}°, {:.9}°)", self.lon, self.lat)
    }
}

impl Vector3 {
    /// Same as [`LonLat::to_xyz`].
    pub fn from_lonlat(ll: &LonLat) -> Self {
        ll.to_xyz()
    }

    /// Same as [`LonLat::from_xyz`].
    pub fn to_lonlat(&self) -> LonLat {
        LonLat::from_xyz(self)
    }
}

/// Converts (longitude, latitude) in degrees to a unit vector.
pub fn lonlat_to_xyz(ll: &LonLat) -> Vector3 {
    ll.to_xyz()
}

/// Converts a unit vector to (longitude, latitude) in degrees.
pub fn xyz_to_lonlat(v: &Vector3) -> LonLat {
    LonLat::from_xyz(v)
}

/// Wraps longitude into `(-180°, 180°]`.
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    let mut normalized = lon % DEGREES_PER_TURN;
    if normalized > MAX_LONGITUDE_DEG {
        normalized -= DEGREES_PER_TURN;
    } else if normalized <= -MAX_LONGITUDE_DEG {
        normalized += DEGREES_PER_TURN;
    }
    normalized
}

/// Clamps latitude to `[-90°, 90°]`.
#[inline]
pub fn normalize_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
}
