//! Physical constants used by the distance formula.

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KILOMETERS: f64 = 6371.0;
