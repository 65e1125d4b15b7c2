//! Spherical Geometry
//!
//! Great-circle distance (haversine) and initial bearing between two
//! positions on a spherical earth.
//!
//! # Example
//!
//! ```rust
//! use navgeo_core::geo::{bearing, distance, GeoPoint};
//!
//! // One degree of longitude along the equator
//! let d = distance(0.0, 0.0, 0.0, 1.0);
//! assert!(d > 60.0 && d < 60.1);
//!
//! let a = GeoPoint::new(0.0, 0.0);
//! let b = GeoPoint::new(0.0, 1.0);
//! assert!((a.bearing_to(&b) - 90.0).abs() < 1e-9);
//! assert_eq!(bearing(0.0, 0.0, 1.0, 0.0), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Mean earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.0;

/// Nautical miles per degree of latitude (one minute of arc = one nm)
pub const NM_PER_DEGREE_LATITUDE: f64 = 60.0;

/// A position on the earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a position without any range checks
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Create a position, rejecting non-finite or out-of-range coordinates
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(GeoPoint::new(latitude, longitude))
    }

    /// Great-circle distance to `other` in nautical miles
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Initial bearing towards `other` in degrees, [0, 360)
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        bearing(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Great-circle distance between two positions in nautical miles
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_NM`].
/// Inputs are not range checked.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    central_angle(a) * EARTH_RADIUS_NM
}

/// Central angle in radians from the haversine term `a`
///
/// Rounding can push `a` just past 1.0 for near-antipodal points, which would
/// make `asin` return NaN.
fn central_angle(a: f64) -> f64 {
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Initial bearing (forward azimuth) from the first to the second position
///
/// Returns degrees clockwise from true north in [0, 360). Coincident
/// positions yield 0.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Normalize an angle in degrees to [0, 360)
pub fn normalize_bearing(degrees: f64) -> f64 {
    // The outer remainder folds a rounded 360.0 (e.g. from -1e-15) back to 0
    (degrees % 360.0 + 360.0) % 360.0
}
