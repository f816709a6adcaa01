//! Geographic coordinates on Earth's surface.
//!
//! Provides the [`Coordinate`] type: a WGS84 latitude/longitude pair in
//! degrees. Values are validated on construction so that every `Coordinate`
//! held by the rest of the crate is known to be on the globe.
//!
//! # Coordinate System
//!
//! - **Latitude**: angular distance north or south of the equator, -90° to +90°
//! - **Longitude**: angular distance east or west of the prime meridian, -180° to +180°
//!
//! Degrees are stored as given, so reading a coordinate back returns exactly
//! the value that was set. Conversion to radians happens inside the distance
//! formula.
//!
//! # Validation Order
//!
//! Checks run existence → numeric → range. For `f64` inputs the first two
//! legs collapse into a finiteness check (NaN and ±∞ stand in for
//! "non-numeric"); the string parser additionally rejects pairs missing a
//! component before looking at the numbers.

use std::fmt;
use std::str::FromStr;

use crate::errors::{GeoError, GeoResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use geo_distance::Coordinate;
///
/// let new_york = Coordinate::new(40.7128, -74.0060)?;
/// assert_eq!(new_york.latitude, 40.7128);
///
/// // Out-of-range values are rejected, not clamped
/// assert!(Coordinate::new(95.0, 0.0).is_err());
/// # Ok::<(), geo_distance::GeoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees (positive north).
    pub latitude: f64,
    /// Longitude in degrees (positive east).
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate after validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidLatitude`] if the latitude is non-finite or
    /// outside [-90, 90], and [`GeoError::InvalidLongitude`] if the longitude
    /// is non-finite or outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        validate_point(latitude, longitude, "coordinate")
    }
}

/// Validates a latitude/longitude pair, labeling errors with the point name.
///
/// The label ("point A", "point B", "target point") ends up in the error
/// message so callers can tell which input failed.
pub(crate) fn validate_point(latitude: f64, longitude: f64, label: &str) -> GeoResult<Coordinate> {
    if !latitude.is_finite() {
        return Err(GeoError::invalid_latitude(format!(
            "{}: latitude must be a finite number, got {}",
            label, latitude
        )));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoError::invalid_latitude(format!(
            "{}: latitude {}° outside valid range [-90, 90]",
            label, latitude
        )));
    }
    if !longitude.is_finite() {
        return Err(GeoError::invalid_longitude(format!(
            "{}: longitude must be a finite number, got {}",
            label, longitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoError::invalid_longitude(format!(
            "{}: longitude {}° outside valid range [-180, 180]",
            label, longitude
        )));
    }

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parses a `"lat,lon"` decimal-degree string.
    ///
    /// ```
    /// use geo_distance::Coordinate;
    ///
    /// let greenwich: Coordinate = "51.4769, 0.0".parse()?;
    /// assert_eq!(greenwich.latitude, 51.4769);
    /// # Ok::<(), geo_distance::GeoError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let lat_part = parts.next().map(str::trim).filter(|p| !p.is_empty());
        let lon_part = parts.next().map(str::trim).filter(|p| !p.is_empty());

        let (lat_part, lon_part) = match (lat_part, lon_part) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(GeoError::invalid_coordinates(format!(
                    "expected \"lat,lon\", got '{}'",
                    s
                )))
            }
        };

        let latitude = lat_part.parse::<f64>().map_err(|_| {
            GeoError::invalid_latitude(format!("latitude '{}' is not a number", lat_part))
        })?;
        let longitude = lon_part.parse::<f64>().map_err(|_| {
            GeoError::invalid_longitude(format!("longitude '{}' is not a number", lon_part))
        })?;

        validate_point(latitude, longitude, "coordinate")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°, {}°)", self.latitude, self.longitude)
    }
}
