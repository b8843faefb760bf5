//! Geocentric ecliptic longitudes of the Sun and Moon.
//!
//! This crate provides the ephemeris capability the chart layer consumes:
//! the [`Ephemeris`] trait (ecliptic longitude of a body at a TT instant)
//! and [`AnalyticEphemeris`], a built-in closed-form implementation with no
//! data files — Meeus solar theory and truncated ELP lunar theory.
//!
//! All implementations are clean-room, from public astronomical formulas.

pub mod error;
pub mod lunar;
pub mod nutation;
pub mod solar;

use astra_time::jd_to_centuries;

pub use error::EphemerisError;

/// Bodies a natal chart needs positions for.
///
/// The Ascendant is not listed here: it is a derived point computed from
/// sidereal time and the observer's location, not an ephemeris body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementors must be pure: the result depends only on `(body, jd_tt)`,
/// so a shared reference can be used from any number of threads.
pub trait Ephemeris {
    /// Apparent geocentric ecliptic longitude of `body` at a TT Julian
    /// Date, degrees in [0, 360).
    fn ecliptic_longitude_deg(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError>;
}

/// Earliest instant the analytic series are trusted at (1600-Jan-01).
pub const MIN_JD_TT: f64 = 2_305_447.5;

/// First instant past the trusted window (2200-Jan-01).
pub const MAX_JD_TT: f64 = 2_524_593.5;

/// Built-in analytic ephemeris: Meeus solar theory plus the truncated
/// ELP-2000/82 lunar longitude series.
///
/// Accuracy within the validity window: ~0.01° for the Sun, ~0.005° for
/// the Moon — roughly an arcminute of zodiac degree at worst. Instants
/// outside the [`MIN_JD_TT`]..[`MAX_JD_TT`] window are rejected with
/// [`EphemerisError::EpochOutOfRange`] rather than extrapolated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn ecliptic_longitude_deg(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::InvalidEpoch("jd_tt must be finite"));
        }
        if !(MIN_JD_TT..MAX_JD_TT).contains(&jd_tt) {
            return Err(EphemerisError::EpochOutOfRange { jd_tt });
        }

        let t = jd_to_centuries(jd_tt);
        let lon = match body {
            Body::Sun => solar::apparent_longitude_deg(t),
            Body::Moon => lunar::apparent_longitude_deg(t),
        };
        Ok(lon)
    }
}
