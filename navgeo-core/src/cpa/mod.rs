//! CPA/TCPA Calculation
//!
//! Computes Closest Point of Approach (CPA) and Time to CPA (TCPA) between
//! two vessels moving at constant course and speed.
//!
//! Both vessels are projected into a local flat-earth frame centred on the
//! first vessel: one degree of latitude is 60 nm and one degree of longitude
//! is `60 * cos(mean latitude)` nm. The approximation is good for the tens of
//! nautical miles that matter for collision avoidance at mid latitudes; it is
//! not a spherical CPA solver.
//!
//! # Example
//!
//! ```rust
//! use navgeo_core::{cpa, DangerLimits, GeoPoint, VesselState};
//!
//! let own = VesselState::new(GeoPoint::new(50.0, -4.0), 90.0, 12.0);
//! let target = VesselState::new(GeoPoint::new(50.1, -3.8), 200.0, 8.0);
//!
//! let result = cpa(&own, &target);
//! if result.is_dangerous(&DangerLimits::default()) {
//!     println!("CPA {:.2} nm in {:.0} min", result.distance, result.time_minutes());
//! }
//! ```

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo::{GeoPoint, NM_PER_DEGREE_LATITUDE};

mod danger;

pub use danger::DangerLimits;

/// Below this squared relative speed (kn²) the vessels are treated as having
/// no relative motion and TCPA is 0
pub const MIN_RELATIVE_SPEED_SQUARED: f64 = 1e-4;

/// Position and motion of a vessel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VesselState {
    pub position: GeoPoint,
    /// Course over ground in degrees true, [0, 360)
    pub course: f64,
    /// Speed over ground in knots
    pub speed: f64,
}

impl VesselState {
    pub const fn new(position: GeoPoint, course: f64, speed: f64) -> Self {
        VesselState {
            position,
            course,
            speed,
        }
    }

    /// Create a vessel state, rejecting invalid position, course or speed
    pub fn try_new(position: GeoPoint, course: f64, speed: f64) -> Result<Self, GeoError> {
        let position = GeoPoint::try_new(position.latitude, position.longitude)?;
        if !course.is_finite() || !speed.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(0.0..360.0).contains(&course) {
            return Err(GeoError::CourseOutOfRange(course));
        }
        if speed < 0.0 {
            return Err(GeoError::NegativeSpeed(speed));
        }
        Ok(VesselState::new(position, course, speed))
    }

    /// Velocity in knots as (east, north)
    pub fn velocity(&self) -> Vector2<f64> {
        let course = self.course.to_radians();
        Vector2::new(self.speed * course.sin(), self.speed * course.cos())
    }
}

/// Result of CPA/TCPA calculation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CpaResult {
    /// Distance at closest approach in nautical miles
    pub distance: f64,
    /// Time until closest approach in hours, never negative
    pub time: f64,
}

impl CpaResult {
    /// Time until closest approach in minutes
    pub fn time_minutes(&self) -> f64 {
        self.time * 60.0
    }
}

impl From<CpaResult> for (f64, f64) {
    fn from(result: CpaResult) -> Self {
        (result.distance, result.time)
    }
}

/// Position of `to` relative to `from` in nautical miles as (east, north)
///
/// Flat-earth approximation scaled at the mean latitude of both points.
pub fn local_offset(from: &GeoPoint, to: &GeoPoint) -> Vector2<f64> {
    let mean_latitude = ((from.latitude + to.latitude) / 2.0).to_radians();
    let nm_per_lon = NM_PER_DEGREE_LATITUDE * mean_latitude.cos();

    Vector2::new(
        (to.longitude - from.longitude) * nm_per_lon,
        (to.latitude - from.latitude) * NM_PER_DEGREE_LATITUDE,
    )
}

/// Calculate CPA and TCPA of `other` relative to `own`
///
/// Uses the relative velocity method:
/// 1. Place `own` at the origin and `other` at its flat-earth offset
/// 2. Compute the relative velocity (other - own)
/// 3. Find the time that minimizes the separation, clamped to the future
///
/// If the vessels are diverging, or have (almost) no relative motion, the
/// current separation is returned with a time of 0.
pub fn cpa(own: &VesselState, other: &VesselState) -> CpaResult {
    let position = local_offset(&own.position, &other.position);
    let velocity = other.velocity() - own.velocity();

    // TCPA = -(r · v) / |v|²
    let v_sq = velocity.norm_squared();
    let mut tcpa = if v_sq < MIN_RELATIVE_SPEED_SQUARED {
        log::trace!("relative speed² {v_sq} below threshold, using current separation");
        0.0
    } else {
        -position.dot(&velocity) / v_sq
    };

    if tcpa < 0.0 {
        log::trace!("vessels diverging (tcpa {tcpa:.3} h), clamping to now");
        tcpa = 0.0;
    }

    // Position at TCPA: r + v * tcpa
    let closest = position + velocity * tcpa;

    CpaResult {
        distance: closest.norm(),
        time: tcpa,
    }
}

/// CPA and TCPA from raw components, returned as `(distance nm, time h)`
#[allow(clippy::too_many_arguments)]
pub fn cpa_components(
    lat1: f64,
    lon1: f64,
    course1: f64,
    speed1: f64,
    lat2: f64,
    lon2: f64,
    course2: f64,
    speed2: f64,
) -> (f64, f64) {
    let own = VesselState::new(GeoPoint::new(lat1, lon1), course1, speed1);
    let other = VesselState::new(GeoPoint::new(lat2, lon2), course2, speed2);
    cpa(&own, &other).into()
}
