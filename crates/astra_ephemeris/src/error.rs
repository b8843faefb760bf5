//! Error types for ephemeris evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch is not a finite number.
    InvalidEpoch(&'static str),
    /// Requested instant lies outside the series' validity window.
    EpochOutOfRange { jd_tt: f64 },
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch(msg) => write!(f, "invalid epoch: {msg}"),
            Self::EpochOutOfRange { jd_tt } => {
                write!(f, "epoch out of range: JD {jd_tt}")
            }
        }
    }
}

impl Error for EphemerisError {}
