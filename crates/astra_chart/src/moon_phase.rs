//! Lunar phase classification.
//!
//! The phase angle is the Sun→Moon elongation in ecliptic longitude,
//! bucketed into the eight named phases at 45-degree boundaries. Time is
//! always an explicit parameter — nothing here reads a wall clock.

use astra_ephemeris::{Body, Ephemeris};
use astra_time::UtcMoment;

use crate::error::ChartError;
use crate::zodiac::normalize_360;

/// Width of each phase bucket, degrees.
const PHASE_SEGMENT_DEG: f64 = 45.0;

/// The eight lunar phases in cycle order.
///
/// Each phase owns the half-open interval
/// `[index*45, (index+1)*45)` of phase angle: New Moon = [0, 45),
/// Waxing Crescent = [45, 90), ... Waning Crescent = [315, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All eight phases in cycle order (0 = New Moon).
pub const ALL_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// English name of the phase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Display glyph for the phase (northern-hemisphere orientation).
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::NewMoon => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::FullMoon => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
        }
    }

    /// 0-based cycle index (New Moon = 0 .. Waning Crescent = 7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Classify a phase angle into its bucket.
    ///
    /// The input is normalized first, so any float angle is accepted.
    pub fn from_angle(phase_angle_deg: f64) -> Self {
        let angle = normalize_360(phase_angle_deg);
        let idx = (angle / PHASE_SEGMENT_DEG).floor() as usize;
        ALL_PHASES[idx.min(7)]
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Illuminated fraction of the Moon's disk from a phase angle, [0, 1].
///
/// `(1 - cos(angle)) / 2`: 0 at New, 1 at Full.
pub fn illuminated_fraction(phase_angle_deg: f64) -> f64 {
    (1.0 - phase_angle_deg.to_radians().cos()) / 2.0
}

/// Sun→Moon elongation in ecliptic longitude at a UTC moment, degrees in
/// [0, 360). 0 = New Moon, 180 = Full Moon.
pub fn moon_phase_angle<E: Ephemeris + ?Sized>(
    eph: &E,
    utc: &UtcMoment,
) -> Result<f64, ChartError> {
    let jd_tt = utc.to_jd_tt();
    let sun = eph.ecliptic_longitude_deg(Body::Sun, jd_tt)?;
    let moon = eph.ecliptic_longitude_deg(Body::Moon, jd_tt)?;
    Ok(normalize_360(moon - sun))
}

/// Lunar phase bucket at a UTC moment.
pub fn moon_phase<E: Ephemeris + ?Sized>(
    eph: &E,
    utc: &UtcMoment,
) -> Result<MoonPhase, ChartError> {
    Ok(MoonPhase::from_angle(moon_phase_angle(eph, utc)?))
}
