use std::{error::Error, fmt::Display};

use crate::{Point2, TrowelNum};

/// The error type used when checking points for triangulation suitability.
///
/// [triangulate](crate::triangulate) itself never validates its input - a
/// non-finite coordinate silently degenerates as described in
/// [Triangle::new](crate::Triangle::new). Callers that accept points from an
/// uncontrolled source (e.g. user input) can use [validate_point] to reject
/// such coordinates up front.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum ValidationError {
    /// A coordinate value was NaN.
    NaN,
    /// A coordinate value was positive or negative infinity.
    Infinite,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for ValidationError {}

/// Checks if a coordinate value is finite.
///
/// Will return an error if and only if the coordinate is NaN or infinite.
pub fn validate_coordinate<S: TrowelNum>(value: S) -> Result<(), ValidationError> {
    let as_f64: f64 = value.into();
    if as_f64.is_nan() {
        Err(ValidationError::NaN)
    } else if as_f64.is_infinite() {
        Err(ValidationError::Infinite)
    } else {
        Ok(())
    }
}

/// Checks if both coordinates of a point are finite.
///
/// See [validate_coordinate] for more information.
pub fn validate_point<S: TrowelNum>(point: Point2<S>) -> Result<(), ValidationError> {
    validate_coordinate(point.x)?;
    validate_coordinate(point.y)?;
    Ok(())
}
