//! Time scales and Earth rotation for natal chart computation.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Date conversions
//! - ΔT estimation and the UTC → TT conversion for ephemeris lookup
//! - Earth Rotation Angle / GMST / LST
//! - [`UtcMoment`], the canonical civil UTC timestamp type
//!
//! All implementations are clean-room, from public astronomical formulas
//! (Meeus, IERS Conventions, Espenak & Meeus).

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_seconds, jd_tt_from_jd_utc};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_deg, gmst_rad, lst_deg};

/// Civil UTC timestamp with sub-second precision.
///
/// The timestamp is UTC by contract: callers converting a local birth time
/// must apply the birth location's timezone offset before constructing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date (UTC) of this moment.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date (TT) of this moment, for ephemeris queries.
    pub fn to_jd_tt(&self) -> f64 {
        jd_tt_from_jd_utc(self.to_jd())
    }

    /// Reconstruct a calendar moment from a Julian Date (UTC).
    pub fn from_jd(jd_utc: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_utc);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
