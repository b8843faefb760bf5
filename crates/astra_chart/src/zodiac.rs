//! Zodiac sign and degree-within-sign decomposition.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg (the vernal equinox direction). Given any
//! ecliptic longitude we identify the sign and the position within it,
//! both as a raw float and as degrees-minutes-seconds for display.

/// The 12 zodiac signs in ecliptic order, starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign from a 0-based index.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_SIGNS[index as usize])
        } else {
            None
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Position of a point on the zodiac circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacPosition {
    /// The sign the point falls in.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Raw decimal degrees within the sign, [0.0, 30.0).
    ///
    /// Never rounded here: presentation layers floor or format as needed.
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS, for display.
    pub dms: Dms,
}

/// Normalize an ecliptic longitude to [0, 360).
///
/// Handles negative input and is idempotent. `rem_euclid` alone can round
/// up to exactly 360.0 for tiny negative inputs, so that edge is folded
/// back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking the absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Decompose an ecliptic longitude into a zodiac position.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// and so on. Any float longitude is accepted; it is normalized first.
pub fn zodiac_position(longitude_deg: f64) -> ZodiacPosition {
    let lon = normalize_360(longitude_deg);
    let sign_index = (lon / 30.0).floor() as u8;
    // Clamp in case of floating point edge (exactly 360.0 after rounding).
    let sign_index = sign_index.min(11);
    let degrees_in_sign = lon - sign_index as f64 * 30.0;
    ZodiacPosition {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(ZodiacSign::from_index(i as u8), Some(*s));
        }
        assert_eq!(ZodiacSign::from_index(12), None);
    }

    #[test]
    fn normalize_negative() {
        assert_eq!(normalize_360(-10.0), 350.0);
        assert_eq!(normalize_360(-370.0), 350.0);
    }

    #[test]
    fn normalize_above_360() {
        assert_eq!(normalize_360(365.0), 5.0);
        assert_eq!(normalize_360(725.0), 5.0);
    }

    #[test]
    fn normalize_tiny_negative_folds_to_zero() {
        // -1e-15 rem_euclid 360 rounds to 360.0 in f64; must come back as 0.
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "r = {r}");
        assert_eq!(r, 0.0);
    }

    #[test]
    fn normalize_idempotent() {
        for &lon in &[-1234.5, -10.0, 0.0, 45.5, 359.999, 361.0, 7200.25] {
            let once = normalize_360(lon);
            assert_eq!(normalize_360(once), once, "lon = {lon}");
        }
    }

    #[test]
    fn aries_at_zero() {
        let p = zodiac_position(0.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert_eq!(p.sign_index, 0);
        assert_eq!(p.degrees_in_sign, 0.0);
    }

    #[test]
    fn boundary_90_is_cancer_zero() {
        let p = zodiac_position(90.0);
        assert_eq!(p.sign, ZodiacSign::Cancer);
        assert_eq!(p.sign_index, 3);
        assert_eq!(p.degrees_in_sign, 0.0);
    }

    #[test]
    fn just_below_90_is_late_gemini() {
        let p = zodiac_position(89.999_999);
        assert_eq!(p.sign, ZodiacSign::Gemini);
        assert!(p.degrees_in_sign > 29.999_99 && p.degrees_in_sign < 30.0);
    }

    #[test]
    fn negative_longitude_wraps() {
        let p = zodiac_position(-10.0);
        assert_eq!(p.sign, ZodiacSign::Pisces); // 350 deg
        assert!((p.degrees_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn degree_always_in_range() {
        for i in -720..720 {
            let p = zodiac_position(i as f64 * 0.7);
            assert!(
                (0.0..30.0).contains(&p.degrees_in_sign),
                "lon = {}, degree = {}",
                i as f64 * 0.7,
                p.degrees_in_sign
            );
            assert!(p.sign_index < 12);
        }
    }

    #[test]
    fn decomposition_recomposes() {
        // sign_index*30 + degrees_in_sign == normalize(L)
        for &lon in &[-400.0, -90.5, 0.0, 89.999, 90.0, 181.25, 359.9, 1000.0] {
            let p = zodiac_position(lon);
            let recomposed = p.sign_index as f64 * 30.0 + p.degrees_in_sign;
            assert!(
                (recomposed - normalize_360(lon)).abs() < 1e-9,
                "lon = {lon}: {recomposed} != {}",
                normalize_360(lon)
            );
        }
    }

    #[test]
    fn deg_to_dms_known() {
        // 15.5042 deg = 15 deg 30' 15.1"
        let d = deg_to_dms(15.5042);
        assert_eq!(d.degrees, 15);
        assert_eq!(d.minutes, 30);
        assert!((d.seconds - 15.12).abs() < 0.01);
    }

    #[test]
    fn dms_round_trip() {
        let deg = 23.853;
        let back = dms_to_deg(&deg_to_dms(deg));
        assert!((back - deg).abs() < 1e-10);
    }

    #[test]
    fn display_names() {
        assert_eq!(ZodiacSign::Capricorn.to_string(), "Capricorn");
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
        }
    }
}
