//! Distance units and their Earth-radius bindings.

use std::fmt;
use std::str::FromStr;

use crate::constants::{EARTH_RADIUS_KILOMETERS, EARTH_RADIUS_MILES};
use crate::errors::GeoError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of measurement for computed distances.
///
/// Each unit is bound to the mean Earth radius used by the Haversine
/// formula: 3959 for miles, 6371 for kilometers. Miles is the default.
///
/// ```
/// use geo_distance::Unit;
///
/// assert_eq!(Unit::default(), Unit::Miles);
/// assert_eq!("kilometers".parse::<Unit>()?, Unit::Kilometers);
/// assert!("furlongs".parse::<Unit>().is_err());
/// # Ok::<(), geo_distance::GeoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Unit {
    #[default]
    Miles,
    Kilometers,
}

impl Unit {
    /// Mean Earth radius in this unit.
    pub const fn earth_radius(self) -> f64 {
        match self {
            Self::Miles => EARTH_RADIUS_MILES,
            Self::Kilometers => EARTH_RADIUS_KILOMETERS,
        }
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Kilometers => "kilometers",
        }
    }
}

impl FromStr for Unit {
    type Err = GeoError;

    /// Parses `"miles"` or `"kilometers"` (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "miles" => Ok(Self::Miles),
            "kilometers" => Ok(Self::Kilometers),
            _ => Err(GeoError::invalid_unit(format!(
                "unknown unit '{}', expected one of: miles, kilometers",
                s
            ))),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
