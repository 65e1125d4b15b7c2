//! Validation errors for geographic and kinematic inputs.
//!
//! The geometry functions themselves accept any number; these errors are only
//! produced by the opt-in `try_new` constructors.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("non-finite coordinate or kinematic value")]
    NonFinite,
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("course {0} is outside [0, 360)")]
    CourseOutOfRange(f64),
    #[error("speed {0} is negative")]
    NegativeSpeed(f64),
}
