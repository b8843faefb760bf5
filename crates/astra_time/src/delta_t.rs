//! ΔT (TT − UT1) estimation.
//!
//! Ephemeris series are polynomials in Terrestrial Time, while the civil
//! timestamps this library receives are UTC. The difference is a slowly
//! drifting offset (leap seconds plus the unpredictable part of Earth's
//! rotation) that this module estimates with the Espenak & Meeus (2006)
//! piecewise polynomials.
//!
//! UT1 ≈ UTC here (|UT1 − UTC| < 0.9 s by definition), so the same offset
//! serves for both the UTC→TT conversion and for treating the incoming
//! timestamp as UT when computing sidereal time.
//!
//! Source: Espenak & Meeus, "Five Millennium Canon of Solar Eclipses",
//! NASA/TP-2006-214141, §polynomial expressions for ΔT. Public domain.

use crate::julian::{J2000_JD, SECONDS_PER_DAY, jd_to_calendar};

/// ΔT in seconds for a decimal year.
///
/// Piecewise polynomial fit, valid (to a few seconds) for 1600–2150;
/// outside that span the long-term parabola is used.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1600.0..1700.0).contains(&year) {
        let t = year - 1600.0;
        120.0 - 0.9808 * t - 0.01532 * t * t + t * t * t / 7129.0
    } else if (1700.0..1800.0).contains(&year) {
        let t = year - 1700.0;
        8.83 + 0.1603 * t - 0.0059285 * t * t + 0.00013336 * t * t * t
            - t * t * t * t / 1_174_000.0
    } else if (1800.0..1860.0).contains(&year) {
        let t = year - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t * t + 0.0041116 * t * t * t
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if (1860.0..1900.0).contains(&year) {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t * t + 0.01680668 * t * t * t
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t - 0.000197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t * t * t + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        // Long-term parabola, valid far outside the fitted span.
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Decimal year for a Julian Date (UTC), at mid-month resolution.
///
/// ΔT drifts by well under a second per month, so `year + (month−0.5)/12`
/// is the resolution the polynomials were fitted at.
fn decimal_year(jd_utc: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_utc);
    year as f64 + (month as f64 - 0.5) / 12.0
}

/// Convert a Julian Date in UTC to a Julian Date in TT.
pub fn jd_tt_from_jd_utc(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds(decimal_year(jd_utc)) / SECONDS_PER_DAY
}
