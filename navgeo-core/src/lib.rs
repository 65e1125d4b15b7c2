//! Maritime Navigation Geometry
//!
//! Platform-independent navigation primitives for vessel tracking and
//! collision avoidance. Everything here is a pure computation on plain value
//! types: no I/O, no allocation, no shared state.
//!
//! # Modules
//!
//! - **geo**: Great-circle distance and initial bearing between positions
//! - **cpa**: Closest Point of Approach (CPA) and Time to CPA (TCPA)
//!
//! # Units
//!
//! Latitude, longitude and course are decimal degrees, speed is knots,
//! distances are nautical miles and times are hours.
//!
//! # Example
//!
//! ```rust
//! use navgeo_core::{cpa, GeoPoint, VesselState};
//!
//! let own = VesselState::new(GeoPoint::new(0.0, 0.0), 0.0, 10.0);
//! let target = VesselState::new(GeoPoint::new(1.0, 0.0), 180.0, 10.0);
//!
//! let result = cpa(&own, &target);
//! assert!((result.time - 3.0).abs() < 1e-9);
//! assert!(result.distance < 1e-9);
//! ```

pub mod cpa;
mod error;
pub mod geo;

pub use cpa::{
    cpa, cpa_components, local_offset, CpaResult, DangerLimits, VesselState,
    MIN_RELATIVE_SPEED_SQUARED,
};
pub use error::GeoError;
pub use geo::{
    bearing, distance, normalize_bearing, GeoPoint, EARTH_RADIUS_NM, NM_PER_DEGREE_LATITUDE,
};
