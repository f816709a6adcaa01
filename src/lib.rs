//! Great-circle distance between geographic coordinates.
//!
//! This crate computes the shortest distance along Earth's surface between two
//! WGS84 latitude/longitude points using the Haversine formula, in miles or
//! kilometers. Inputs are validated up front; every failure is a typed
//! [`GeoError`] rather than a panic.
//!
//! # Quick Start
//!
//! ```
//! use geo_distance::{Coordinate, DistanceCalculator, Unit};
//!
//! let new_york = Coordinate::new(40.7128, -74.0060)?;
//! let london = Coordinate::new(51.5074, -0.1278)?;
//!
//! let calc = DistanceCalculator::with_unit(new_york, london, Unit::Kilometers);
//! assert_eq!(calc.distance()?, 5570.22);
//! # Ok::<(), geo_distance::GeoError>(())
//! ```

pub mod calculator;
pub mod constants;
pub mod coordinate;
pub mod errors;
pub mod haversine;
pub mod unit;

pub use calculator::DistanceCalculator;
pub use coordinate::Coordinate;
pub use errors::{GeoError, GeoResult};
pub use haversine::haversine_distance;
pub use unit::Unit;
