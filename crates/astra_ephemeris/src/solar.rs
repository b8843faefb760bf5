//! Geocentric ecliptic longitude of the Sun.
//!
//! Low-accuracy solar theory: mean longitude plus the equation of center,
//! then aberration and nutation for the apparent longitude. Accuracy is
//! about 0.01°, i.e. ~1″ of zodiac degree error — invisible at chart
//! precision.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.
//! Public domain.

use crate::nutation::nutation_in_longitude_deg;

/// Constant aberration correction for the Sun, degrees.
const ABERRATION_DEG: f64 = 0.005_69;

/// Geometric (true) geocentric longitude of the Sun, mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0. Returns degrees in [0, 360).
pub fn geometric_longitude_deg(t: f64) -> f64 {
    // Mean longitude and mean anomaly (Meeus 25.2, 25.3).
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m_deg = 357.52911 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let m = m_deg.to_radians();

    // Equation of center.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    (l0 + c).rem_euclid(360.0)
}

/// Apparent geocentric longitude of the Sun (geometric + aberration +
/// nutation), degrees in [0, 360).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    (geometric_longitude_deg(t) - ABERRATION_DEG + nutation_in_longitude_deg(t)).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meeus ex. 25.a: 1992 Oct 13.0 TT, T = -0.072183436.
    const T_25A: f64 = -0.072_183_436;

    #[test]
    fn meeus_example_25a_geometric() {
        // Book value: true longitude = 199.90988°.
        let lon = geometric_longitude_deg(T_25A);
        assert!((lon - 199.90988).abs() < 0.0005, "⊙ = {lon}°");
    }

    #[test]
    fn meeus_example_25a_apparent() {
        // Book value (low-accuracy method): λ = 199.90895°.
        let lon = apparent_longitude_deg(T_25A);
        assert!((lon - 199.90895).abs() < 0.002, "λ = {lon}°");
    }

    #[test]
    fn longitude_at_j2000() {
        // The Sun's apparent longitude at J2000.0 is ~280.37° (Capricorn).
        let lon = apparent_longitude_deg(0.0);
        assert!((lon - 280.37).abs() < 0.02, "λ = {lon}°");
    }

    #[test]
    fn always_normalized() {
        for i in -40..40 {
            let t = i as f64 / 10.0;
            let lon = apparent_longitude_deg(t);
            assert!((0.0..360.0).contains(&lon), "λ({t}) = {lon}");
        }
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let day = 1.0 / 36_525.0;
        let l1 = apparent_longitude_deg(0.10);
        let l2 = apparent_longitude_deg(0.10 + day);
        let advance = (l2 - l1).rem_euclid(360.0);
        assert!(
            advance > 0.9 && advance < 1.1,
            "daily advance = {advance}°"
        );
    }
}
