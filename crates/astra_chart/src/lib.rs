//! Natal chart computation over an ephemeris capability.
//!
//! This crate provides:
//! - Zodiac sign / degree-in-sign decomposition of ecliptic longitudes
//! - The Ascendant (rising point) from sidereal time and location
//! - [`compute_natal_chart`]: birth moment → Sun/Moon/Ascendant positions
//! - Lunar phase angle and its eight-bucket classification
//!
//! Everything is a pure function of its inputs; "now" is always supplied
//! by the caller.

pub mod ascendant;
pub mod error;
pub mod location;
pub mod moon_phase;
pub mod natal;
pub mod zodiac;

pub use ascendant::{OBLIQUITY_DEG, OBLIQUITY_RAD, ascendant_from_lst_deg, ascendant_longitude_deg};
pub use error::ChartError;
pub use location::GeoLocation;
pub use moon_phase::{
    ALL_PHASES, MoonPhase, illuminated_fraction, moon_phase, moon_phase_angle,
};
pub use natal::{BirthMoment, NatalChart, compute_natal_chart};
pub use zodiac::{
    ALL_SIGNS, Dms, ZodiacPosition, ZodiacSign, deg_to_dms, dms_to_deg, normalize_360,
    zodiac_position,
};

// Re-export the layers below so callers need only one dependency.
pub use astra_ephemeris::{AnalyticEphemeris, Body, Ephemeris, EphemerisError};
pub use astra_time::UtcMoment;
