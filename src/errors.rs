//! Error types for coordinate validation and distance computation.
//!
//! A single [`GeoError`] enum covers every failure mode in the crate. Callers
//! distinguish failures by matching on the variant; hosts that translate
//! errors into an error-object convention can use [`GeoError::kind`] for a
//! stable machine-readable tag.
//!
//! | Variant | Condition |
//! |---------|-----------|
//! | [`InvalidCoordinates`](GeoError::InvalidCoordinates) | Coordinate pair structurally incomplete |
//! | [`InvalidLatitude`](GeoError::InvalidLatitude) | Latitude non-numeric or outside [-90°, 90°] |
//! | [`InvalidLongitude`](GeoError::InvalidLongitude) | Longitude non-numeric or outside [-180°, 180°] |
//! | [`InvalidUnit`](GeoError::InvalidUnit) | Unit string not miles or kilometers |
//! | [`CalculationError`](GeoError::CalculationError) | Non-finite arithmetic result |
//!
//! None of these are transient: every variant is a caller input error except
//! `CalculationError`, which guards against arithmetic faults that validated
//! inputs cannot actually produce.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type GeoResult<T> = Result<T, GeoError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeoError {
    /// Coordinate pair missing its latitude or longitude component.
    #[error("Invalid coordinates: {message}")]
    InvalidCoordinates { message: String },

    /// Latitude is non-numeric or outside [-90°, 90°].
    #[error("Invalid latitude: {message}")]
    InvalidLatitude { message: String },

    /// Longitude is non-numeric or outside [-180°, 180°].
    #[error("Invalid longitude: {message}")]
    InvalidLongitude { message: String },

    /// Unit string outside the supported set (miles, kilometers).
    #[error("Invalid unit: {message}")]
    InvalidUnit { message: String },

    /// Arithmetic produced a non-finite result.
    ///
    /// Not reachable for inputs that passed coordinate validation, but
    /// reported as a typed error rather than propagated as a raw fault.
    #[error("Calculation error: {message}")]
    CalculationError { message: String },
}

impl GeoError {
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates {
            message: message.into(),
        }
    }

    pub fn invalid_latitude(message: impl Into<String>) -> Self {
        Self::InvalidLatitude {
            message: message.into(),
        }
    }

    pub fn invalid_longitude(message: impl Into<String>) -> Self {
        Self::InvalidLongitude {
            message: message.into(),
        }
    }

    pub fn invalid_unit(message: impl Into<String>) -> Self {
        Self::InvalidUnit {
            message: message.into(),
        }
    }

    pub fn calculation_error(message: impl Into<String>) -> Self {
        Self::CalculationError {
            message: message.into(),
        }
    }

    /// Machine-readable tag for the error category.
    ///
    /// Stable across message wording changes. Intended for host bindings
    /// that report failures as `{ kind, message }` objects instead of
    /// matching on the enum.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCoordinates { .. } => "invalid_coordinates",
            Self::InvalidLatitude { .. } => "invalid_latitude",
            Self::InvalidLongitude { .. } => "invalid_longitude",
            Self::InvalidUnit { .. } => "invalid_unit",
            Self::CalculationError { .. } => "calculation_error",
        }
    }

    /// Message without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidCoordinates { message }
            | Self::InvalidLatitude { message }
            | Self::InvalidLongitude { message }
            | Self::InvalidUnit { message }
            | Self::CalculationError { message } => message,
        }
    }
}
