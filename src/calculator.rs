//! Distance calculator holding two coordinates and a unit.
//!
//! [`DistanceCalculator`] is the stateful entry point of the crate: it owns
//! two validated [`Coordinate`]s and a [`Unit`], recomputes the great-circle
//! distance on demand (nothing is cached), and keeps a convenience copy of
//! the most recent validation failure for hosts that read errors out of band.
//!
//! # Mutation Contract
//!
//! Every validating setter checks its input before touching state. On
//! failure the stored value is left unchanged, the error is returned, and a
//! clone is retained as the last error. Pure queries ([`distance`],
//! [`is_within_radius`]) never mutate anything, including the last error.
//!
//! [`distance`]: DistanceCalculator::distance
//! [`is_within_radius`]: DistanceCalculator::is_within_radius
//!
//! # Thread Safety
//!
//! Setters mutate fields without internal locking. Share a calculator across
//! threads only behind external synchronization.

use crate::coordinate::{validate_point, Coordinate};
use crate::errors::{GeoError, GeoResult};
use crate::haversine::haversine_distance;
use crate::unit::Unit;

/// Computes great-circle distances between a stored pair of coordinates.
///
/// # Examples
///
/// ```
/// use geo_distance::{Coordinate, DistanceCalculator, Unit};
///
/// let new_york = Coordinate::new(40.7128, -74.0060)?;
/// let london = Coordinate::new(51.5074, -0.1278)?;
///
/// let mut calc = DistanceCalculator::new(new_york, london);
/// assert_eq!(calc.unit(), Unit::Miles);
/// assert_eq!(calc.distance()?, 3461.39);
///
/// calc.set_unit(Unit::Kilometers);
/// assert_eq!(calc.distance()?, 5570.22);
/// # Ok::<(), geo_distance::GeoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DistanceCalculator {
    point_a: Coordinate,
    point_b: Coordinate,
    unit: Unit,
    last_error: Option<GeoError>,
}

impl DistanceCalculator {
    /// Creates a calculator measuring in miles (the default unit).
    pub fn new(point_a: Coordinate, point_b: Coordinate) -> Self {
        Self::with_unit(point_a, point_b, Unit::default())
    }

    /// Creates a calculator with an explicit unit.
    pub fn with_unit(point_a: Coordinate, point_b: Coordinate, unit: Unit) -> Self {
        Self {
            point_a,
            point_b,
            unit,
            last_error: None,
        }
    }

    /// Creates a calculator from raw degree values, validating both points.
    ///
    /// The unit defaults to miles; call [`set_unit`](Self::set_unit) to
    /// change it. On validation failure no calculator is produced.
    ///
    /// ```
    /// use geo_distance::{DistanceCalculator, GeoError};
    ///
    /// let calc = DistanceCalculator::from_degrees(40.7128, -74.0060, 51.5074, -0.1278)?;
    /// assert_eq!(calc.distance()?, 3461.39);
    ///
    /// // Longitude 200 is rejected before any state exists
    /// let err = DistanceCalculator::from_degrees(40.0, 200.0, 51.0, 0.0).unwrap_err();
    /// assert!(matches!(err, GeoError::InvalidLongitude { .. }));
    /// # Ok::<(), geo_distance::GeoError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidLatitude`] or [`GeoError::InvalidLongitude`]
    /// naming the offending point ("point A" / "point B").
    pub fn from_degrees(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> GeoResult<Self> {
        let point_a = validate_point(lat_a, lon_a, "point A")?;
        let point_b = validate_point(lat_b, lon_b, "point B")?;
        Ok(Self::new(point_a, point_b))
    }

    /// Returns the first stored coordinate.
    pub fn point_a(&self) -> Coordinate {
        self.point_a
    }

    /// Returns the second stored coordinate.
    pub fn point_b(&self) -> Coordinate {
        self.point_b
    }

    /// Returns the current unit of measurement.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Replaces the first coordinate after validating the new value.
    ///
    /// # Errors
    ///
    /// On validation failure the stored coordinate is unchanged; the error is
    /// returned and retained as [`last_error`](Self::last_error).
    pub fn set_point_a(&mut self, latitude: f64, longitude: f64) -> GeoResult<()> {
        match validate_point(latitude, longitude, "point A") {
            Ok(point) => {
                self.point_a = point;
                self.last_error = None;
                Ok(())
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Replaces the second coordinate after validating the new value.
    ///
    /// Same contract as [`set_point_a`](Self::set_point_a).
    pub fn set_point_b(&mut self, latitude: f64, longitude: f64) -> GeoResult<()> {
        match validate_point(latitude, longitude, "point B") {
            Ok(point) => {
                self.point_b = point;
                self.last_error = None;
                Ok(())
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Replaces the unit. Infallible: invalid units are unrepresentable
    /// past [`Unit::from_str`](std::str::FromStr).
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        self.last_error = None;
    }

    /// Replaces the unit from a raw string.
    ///
    /// For hosts holding unvalidated input. On parse failure the current
    /// unit is unchanged; the error is returned and retained as
    /// [`last_error`](Self::last_error).
    pub fn set_unit_str(&mut self, unit: &str) -> GeoResult<()> {
        match unit.parse::<Unit>() {
            Ok(unit) => {
                self.set_unit(unit);
                Ok(())
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Computes the great-circle distance between the stored points.
    ///
    /// Recomputed on every call; rounded to two decimals in the current
    /// unit. Pure query: stored state, including the last error, is not
    /// touched.
    ///
    /// # Errors
    ///
    /// [`GeoError::CalculationError`] on a non-finite arithmetic result,
    /// which validated coordinates cannot actually produce.
    pub fn distance(&self) -> GeoResult<f64> {
        haversine_distance(self.point_a, self.point_b, self.unit)
    }

    /// Checks whether a target point lies within `radius` of point A.
    ///
    /// The candidate point is validated, then the distance from point A to
    /// it is computed as a local two-point calculation; the stored point B
    /// is never substituted or mutated. The comparison uses the rounded
    /// two-decimal distance and interprets `radius` in the current unit.
    ///
    /// ```
    /// use geo_distance::{Coordinate, DistanceCalculator};
    ///
    /// let central_park = Coordinate::new(40.7829, -73.9654)?;
    /// let harlem = Coordinate::new(40.8116, -73.9465)?;
    /// let calc = DistanceCalculator::new(central_park, harlem);
    ///
    /// // Times Square is 2.02 miles from Central Park
    /// assert!(calc.is_within_radius(40.7580, -73.9855, 2.5)?);
    /// assert!(!calc.is_within_radius(40.7580, -73.9855, 1.5)?);
    /// # Ok::<(), geo_distance::GeoError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Validation failure on the target point is returned without mutating
    /// any stored state.
    pub fn is_within_radius(&self, latitude: f64, longitude: f64, radius: f64) -> GeoResult<bool> {
        let target = validate_point(latitude, longitude, "target point")?;
        let distance = haversine_distance(self.point_a, target, self.unit)?;
        Ok(distance <= radius)
    }

    /// The most recent validating mutator's error, if it failed.
    ///
    /// Convenience mirror for hosts that read errors out of band: set when a
    /// setter rejects its input, cleared when one succeeds. Not an
    /// independent state machine — the returned error always matches the
    /// `Err` the failing call itself produced.
    pub fn last_error(&self) -> Option<&GeoError> {
        self.last_error.as_ref()
    }
}
