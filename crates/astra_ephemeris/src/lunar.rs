//! Geocentric ecliptic longitude of the Moon.
//!
//! Truncated ELP-2000/82 theory as tabulated by Meeus: the full 59-term
//! longitude column of Table 47.A plus the Venus/Jupiter/flattening
//! additive terms, then nutation for the apparent longitude. Accuracy is
//! about 0.005° against the full theory.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47.
//! Public domain.

use crate::nutation::nutation_in_longitude_deg;

/// Longitude periodic terms from Meeus Table 47.A.
///
/// Each row: `[D, M, M', F, Σl]` — multiples of the mean elongation, Sun
/// anomaly, Moon anomaly, and argument of latitude, with the sine amplitude
/// in 1e-6 degree. Rows with `M = ±1` are scaled by E, `M = ±2` by E².
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i64; 5]; 59] = [
    //  D   M   M'  F        Σl
    [   0,  0,  1,  0,  6_288_774],
    [   2,  0, -1,  0,  1_274_027],
    [   2,  0,  0,  0,    658_314],
    [   0,  0,  2,  0,    213_618],
    [   0,  1,  0,  0,   -185_116],
    [   0,  0,  0,  2,   -114_332],
    [   2,  0, -2,  0,     58_793],
    [   2, -1, -1,  0,     57_066],
    [   2,  0,  1,  0,     53_322],
    [   2, -1,  0,  0,     45_758],
    [   0,  1, -1,  0,    -40_923],
    [   1,  0,  0,  0,    -34_720],
    [   0,  1,  1,  0,    -30_383],
    [   2,  0,  0, -2,     15_327],
    [   0,  0,  1,  2,    -12_528],
    [   0,  0,  1, -2,     10_980],
    [   4,  0, -1,  0,     10_675],
    [   0,  0,  3,  0,     10_034],
    [   4,  0, -2,  0,      8_548],
    [   2,  1, -1,  0,     -7_888],
    [   2,  1,  0,  0,     -6_766],
    [   1,  0, -1,  0,     -5_163],
    [   1,  1,  0,  0,      4_987],
    [   2, -1,  1,  0,      4_036],
    [   2,  0,  2,  0,      3_994],
    [   4,  0,  0,  0,      3_861],
    [   2,  0, -3,  0,      3_665],
    [   0,  1, -2,  0,     -2_689],
    [   2,  0, -1,  2,     -2_602],
    [   2, -1, -2,  0,      2_390],
    [   1,  0,  1,  0,     -2_348],
    [   2, -2,  0,  0,      2_236],
    [   0,  1,  2,  0,     -2_120],
    [   0,  2,  0,  0,     -2_069],
    [   2, -2, -1,  0,      2_048],
    [   2,  0,  1, -2,     -1_773],
    [   2,  0,  0,  2,     -1_595],
    [   4, -1, -1,  0,      1_215],
    [   0,  0,  2,  2,     -1_110],
    [   3,  0, -1,  0,       -892],
    [   2,  1,  1,  0,       -810],
    [   4, -1, -2,  0,        759],
    [   0,  2, -1,  0,       -713],
    [   2,  2, -1,  0,       -700],
    [   2,  1, -2,  0,        691],
    [   2, -1,  0, -2,        596],
    [   4,  0,  1,  0,        549],
    [   0,  0,  4,  0,        537],
    [   4, -1,  0,  0,        520],
    [   1,  0, -2,  0,       -487],
    [   2,  1,  0, -2,       -399],
    [   0,  0,  2, -2,       -381],
    [   1,  1,  1,  0,        351],
    [   3,  0, -2,  0,       -340],
    [   4,  0, -3,  0,        330],
    [   2, -1,  2,  0,        327],
    [   0,  2,  1,  0,       -323],
    [   1,  1, -1,  0,        299],
    [   2,  0,  3,  0,        294],
];

/// Fundamental arguments of the lunar theory, degrees (un-normalized).
///
/// Returns `(L', D, M, M', F)` — Moon mean longitude, mean elongation,
/// Sun mean anomaly, Moon mean anomaly, argument of latitude.
/// Polynomials from Meeus 47.1–47.5.
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    (lp, d, m, mp, f)
}

/// Mean-equinox geocentric longitude of the Moon, degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_longitude_deg(t: f64) -> f64 {
    let (lp, d, m, mp, f) = fundamental_arguments(t);

    // Eccentricity factor for terms involving the Sun's anomaly (47.6).
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e2 = e * e;

    let mut sum_l = 0.0;
    for row in &LONGITUDE_TERMS {
        let (cd, cm, cmp, cf, amp) = (row[0], row[1], row[2], row[3], row[4]);
        let arg = (cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f).to_radians();
        let scale = match cm.abs() {
            1 => e,
            2 => e2,
            _ => 1.0,
        };
        sum_l += amp as f64 * scale * arg.sin();
    }

    // Additive terms: Venus (A1), Jupiter (A2), and Earth flattening (47.*).
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    (lp + sum_l / 1e6).rem_euclid(360.0)
}

/// Apparent geocentric longitude of the Moon (mean + nutation), degrees in
/// [0, 360).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    (mean_longitude_deg(t) + nutation_in_longitude_deg(t)).rem_euclid(360.0)
}
