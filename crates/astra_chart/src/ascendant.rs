//! Ascendant (rising point) computation.
//!
//! The Ascendant is the ecliptic longitude on the eastern horizon at a
//! given instant and location, from the classical spherical astronomy
//! formula over local sidereal time.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use astra_time::{gmst_deg, lst_deg};

use crate::location::GeoLocation;
use crate::zodiac::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
///
/// Held constant rather than evaluated per date: the secular drift is
/// ~47″/century, under 0.02° across the supported window.
pub const OBLIQUITY_DEG: f64 = 23.439_291_1;

/// Mean obliquity of the ecliptic at J2000.0, radians.
pub const OBLIQUITY_RAD: f64 = OBLIQUITY_DEG * std::f64::consts::PI / 180.0;

/// Ecliptic longitude of the Ascendant from a local sidereal time.
///
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`
///
/// Total over any float latitude (tan(±90°) saturates, atan2 stays
/// defined). Returns degrees in [0, 360).
pub fn ascendant_from_lst_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        -lst.cos(),
        lst.sin() * OBLIQUITY_RAD.cos() + phi.tan() * OBLIQUITY_RAD.sin(),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the Ascendant at a UTC Julian Date and location,
/// degrees in [0, 360).
pub fn ascendant_longitude_deg(jd_utc: f64, location: &GeoLocation) -> f64 {
    let lst = lst_deg(gmst_deg(jd_utc), location.longitude_deg);
    ascendant_from_lst_deg(lst, location.latitude_deg)
}
