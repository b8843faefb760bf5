//! Natal chart assembly.
//!
//! Maps a birth moment (UTC timestamp + geographic location) to the
//! zodiac positions of the Sun, Moon, and Ascendant. Pure value in, pure
//! value out: no caching, no ambient clock, no side effects.

use astra_ephemeris::{Body, Ephemeris};
use astra_time::UtcMoment;

use crate::ascendant::ascendant_longitude_deg;
use crate::error::ChartError;
use crate::location::GeoLocation;
use crate::zodiac::{ZodiacPosition, zodiac_position};

/// Birth data for a chart: when (UTC) and where.
///
/// The timestamp must already be UTC — converting a wall-clock birth time
/// with the birth place's timezone is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub utc: UtcMoment,
    pub location: GeoLocation,
}

impl BirthMoment {
    pub fn new(utc: UtcMoment, location: GeoLocation) -> Self {
        Self { utc, location }
    }
}

/// A computed natal chart.
///
/// Plain immutable value: two charts from identical inputs and the same
/// ephemeris are identical. Longitudes are the full ecliptic values the
/// zodiac positions were derived from, kept for callers that need the raw
/// angles (aspect math, wheel rendering).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalChart {
    pub sun: ZodiacPosition,
    pub moon: ZodiacPosition,
    pub ascendant: ZodiacPosition,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    pub ascendant_longitude_deg: f64,
}

/// Compute a natal chart for a birth moment.
///
/// The Sun and Moon are looked up in the ephemeris at the TT instant; the
/// Ascendant comes from sidereal time at the UT instant and the observer's
/// coordinates. Coordinates are never validated — any float produces a
/// formally valid chart — so the only failure source is an ephemeris
/// instant outside the implementation's validity window.
pub fn compute_natal_chart<E: Ephemeris + ?Sized>(
    eph: &E,
    birth: &BirthMoment,
) -> Result<NatalChart, ChartError> {
    let jd_utc = birth.utc.to_jd();
    let jd_tt = birth.utc.to_jd_tt();

    let sun_longitude_deg = eph.ecliptic_longitude_deg(Body::Sun, jd_tt)?;
    let moon_longitude_deg = eph.ecliptic_longitude_deg(Body::Moon, jd_tt)?;
    let ascendant_longitude_deg = ascendant_longitude_deg(jd_utc, &birth.location);

    Ok(NatalChart {
        sun: zodiac_position(sun_longitude_deg),
        moon: zodiac_position(moon_longitude_deg),
        ascendant: zodiac_position(ascendant_longitude_deg),
        sun_longitude_deg,
        moon_longitude_deg,
        ascendant_longitude_deg,
    })
}
