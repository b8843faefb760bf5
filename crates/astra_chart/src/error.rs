//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use astra_ephemeris::EphemerisError;

/// Errors from natal chart computation.
///
/// Geographic coordinates are deliberately never a failure source: the
/// calculator accepts any float latitude/longitude and produces a formally
/// valid result. Only the ephemeris itself can fail.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the ephemeris layer.
    Ephemeris(EphemerisError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
