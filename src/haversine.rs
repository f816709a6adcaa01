//! Great-circle distance via the Haversine formula.
//!
//! The formula treats Earth as a sphere of mean radius and computes the
//! central angle between two points from their latitudes and the difference
//! of their longitudes:
//!
//! ```text
//! h = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! c = 2·asin(√h)
//! d = R·c
//! ```
//!
//! `h` is mathematically confined to [0, 1] for valid coordinates, so the
//! `asin` is always defined. Results are rounded to two decimals in the
//! requested unit.

use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};
use crate::unit::Unit;

/// Computes the great-circle distance between two coordinates.
///
/// Pure function of its arguments: no hidden state, fully deterministic.
/// The result is rounded to two decimal places in the given unit.
///
/// # Example
///
/// ```
/// use geo_distance::{haversine_distance, Coordinate, Unit};
///
/// let new_york = Coordinate::new(40.7128, -74.0060)?;
/// let london = Coordinate::new(51.5074, -0.1278)?;
///
/// assert_eq!(haversine_distance(new_york, london, Unit::Miles)?, 3461.39);
/// assert_eq!(haversine_distance(new_york, new_york, Unit::Miles)?, 0.0);
/// # Ok::<(), geo_distance::GeoError>(())
/// ```
///
/// # Errors
///
/// Returns [`GeoError::CalculationError`] if the arithmetic produces a
/// non-finite value. Not reachable for validated coordinates.
pub fn haversine_distance(a: Coordinate, b: Coordinate, unit: Unit) -> GeoResult<f64> {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    // Float drift can push h a hair past 1.0 for near-antipodal points,
    // which would put the asin argument outside its domain.
    let central_angle = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    let distance = unit.earth_radius() * central_angle;
    if !distance.is_finite() {
        return Err(GeoError::calculation_error(format!(
            "non-finite distance between {} and {}",
            a, b
        )));
    }

    Ok(round_to_hundredths(distance))
}

/// Rounds to two decimal places.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
