//! Truncated nutation in longitude.
//!
//! Four-term approximation of Δψ, accurate to ~0.5″ — more than enough to
//! turn mean longitudes into apparent ones for a chart whose smallest unit
//! of interest is an arcsecond of zodiac degree.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22
//! (low-accuracy variant). Public domain.

/// Nutation in longitude Δψ, in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    // Longitude of the Moon's ascending node.
    let omega = (125.04452 - 1934.136_261 * t).to_radians();
    // Mean longitudes of the Sun and Moon.
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();

    dpsi_arcsec / 3600.0
}
