//! Golden-value tests for natal chart computation.
//!
//! Charts are pinned to the built-in analytic ephemeris; reference
//! positions cross-checked against USNO/JPL published data. Tolerances
//! reflect the series' documented accuracy (~0.01° Sun, ~0.005° Moon).

use astra_chart::{
    AnalyticEphemeris, BirthMoment, ChartError, GeoLocation, MoonPhase, UtcMoment, ZodiacSign,
    compute_natal_chart, moon_phase, moon_phase_angle,
};

const EPH: AnalyticEphemeris = AnalyticEphemeris::new();

/// 2024-Jan-25 14:30 UTC at (0, 0): Sun ~5.1° Aquarius, Moon ~3.5° Leo
/// (a few hours before the January full moon), Sagittarius rising.
#[test]
fn chart_2024_jan_25_equator() {
    let birth = BirthMoment::new(
        UtcMoment::new(2024, 1, 25, 14, 30, 0.0),
        GeoLocation::new(0.0, 0.0),
    );
    let chart = compute_natal_chart(&EPH, &birth).unwrap();

    assert_eq!(chart.sun.sign, ZodiacSign::Aquarius);
    assert!(
        (chart.sun.degrees_in_sign - 5.11).abs() < 0.05,
        "Sun at {}° {}",
        chart.sun.degrees_in_sign,
        chart.sun.sign
    );

    assert_eq!(chart.moon.sign, ZodiacSign::Leo);
    assert!(
        chart.moon.degrees_in_sign > 2.5 && chart.moon.degrees_in_sign < 4.5,
        "Moon at {}° {}",
        chart.moon.degrees_in_sign,
        chart.moon.sign
    );

    assert_eq!(chart.ascendant.sign, ZodiacSign::Sagittarius);
    assert!(
        (chart.ascendant.degrees_in_sign - 13.4).abs() < 0.5,
        "Asc at {}° {}",
        chart.ascendant.degrees_in_sign,
        chart.ascendant.sign
    );
}

/// J2000.0 epoch chart: Sun ~10.37° Capricorn, Moon ~13.3° Scorpio.
#[test]
fn chart_j2000() {
    let birth = BirthMoment::new(
        UtcMoment::new(2000, 1, 1, 12, 0, 0.0),
        GeoLocation::new(0.0, 0.0),
    );
    let chart = compute_natal_chart(&EPH, &birth).unwrap();

    assert_eq!(chart.sun.sign, ZodiacSign::Capricorn);
    assert!(
        (chart.sun.degrees_in_sign - 10.37).abs() < 0.05,
        "Sun at {}°",
        chart.sun.degrees_in_sign
    );

    assert_eq!(chart.moon.sign, ZodiacSign::Scorpio);
    assert!(
        chart.moon.degrees_in_sign > 13.1 && chart.moon.degrees_in_sign < 13.5,
        "Moon at {}°",
        chart.moon.degrees_in_sign
    );
}

/// Charts at longitudes 360° apart are the same chart.
#[test]
fn ascendant_longitude_periodicity() {
    let utc = UtcMoment::new(1994, 3, 12, 6, 45, 0.0);
    let a = compute_natal_chart(&EPH, &BirthMoment::new(utc, GeoLocation::new(0.0, 77.2))).unwrap();
    let b =
        compute_natal_chart(&EPH, &BirthMoment::new(utc, GeoLocation::new(0.0, 437.2))).unwrap();

    assert_eq!(a.sun_longitude_deg.to_bits(), b.sun_longitude_deg.to_bits());
    assert_eq!(
        a.moon_longitude_deg.to_bits(),
        b.moon_longitude_deg.to_bits()
    );
    assert_eq!(a.ascendant.sign, b.ascendant.sign);
    assert!(
        (a.ascendant_longitude_deg - b.ascendant_longitude_deg).abs() < 1e-9,
        "{} vs {}",
        a.ascendant_longitude_deg,
        b.ascendant_longitude_deg
    );
}

/// Due north/south latitude flips the rising hemisphere but never breaks
/// the decomposition invariant.
#[test]
fn chart_high_latitudes_stay_valid() {
    let utc = UtcMoment::new(2024, 6, 20, 20, 51, 0.0);
    for &lat in &[-89.9, -66.5, 66.5, 89.9] {
        let chart =
            compute_natal_chart(&EPH, &BirthMoment::new(utc, GeoLocation::new(lat, 18.95)))
                .unwrap();
        assert!((0.0..30.0).contains(&chart.ascendant.degrees_in_sign), "lat {lat}");
        assert!((0.0..360.0).contains(&chart.ascendant_longitude_deg), "lat {lat}");
    }
}

/// USNO: New Moon 2024-Jan-11 11:57 UTC. An hour later the elongation is
/// just past zero — the New Moon bucket.
#[test]
fn phase_just_after_new_moon() {
    let utc = UtcMoment::new(2024, 1, 11, 13, 0, 0.0);
    let angle = moon_phase_angle(&EPH, &utc).unwrap();
    assert!(angle > 0.0 && angle < 2.0, "angle = {angle}°");
    assert_eq!(moon_phase(&EPH, &utc).unwrap(), MoonPhase::NewMoon);
}

/// USNO: Full Moon 2024-Jan-25 17:54 UTC. An hour later the elongation is
/// just past 180 — the Full Moon bucket.
#[test]
fn phase_just_after_full_moon() {
    let utc = UtcMoment::new(2024, 1, 25, 19, 0, 0.0);
    let angle = moon_phase_angle(&EPH, &utc).unwrap();
    assert!((angle - 180.0).abs() < 2.0 && angle >= 180.0, "angle = {angle}°");
    assert_eq!(moon_phase(&EPH, &utc).unwrap(), MoonPhase::FullMoon);
}

/// USNO: First Quarter 2024-Jan-18 03:53 UTC.
#[test]
fn phase_at_first_quarter() {
    let utc = UtcMoment::new(2024, 1, 18, 5, 0, 0.0);
    let angle = moon_phase_angle(&EPH, &utc).unwrap();
    assert!((angle - 90.0).abs() < 2.0, "angle = {angle}°");
    assert_eq!(moon_phase(&EPH, &utc).unwrap(), MoonPhase::FirstQuarter);
}

/// A birth date before the ephemeris window surfaces the range error.
#[test]
fn out_of_window_birth_date() {
    let birth = BirthMoment::new(
        UtcMoment::new(1215, 6, 15, 12, 0, 0.0),
        GeoLocation::new(51.2, -0.55),
    );
    let err = compute_natal_chart(&EPH, &birth).unwrap_err();
    let ChartError::Ephemeris(inner) = err else {
        panic!("expected ephemeris error");
    };
    assert!(inner.to_string().contains("out of range"), "{inner}");
}
