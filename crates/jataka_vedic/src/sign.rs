//! Zodiac sign decomposition.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! A longitude exactly on a sign boundary belongs to the next sign
//! (floor semantics): 30.0 is 0° Taurus, not 30° Aries.

use jataka_time::angle::{Dms, deg_to_dms, normalize_360};

/// The 12 zodiac signs starting from Aries at 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
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
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Name of the sign.
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

    /// 0-based index (Aries=0 .. Pisces=11).
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
}

/// Full sign position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    /// The sign.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Determine sign and degree-in-sign from an ecliptic longitude.
pub fn sign_of(longitude_deg: f64) -> SignInfo {
    let lon = normalize_360(longitude_deg);
    // Clamp for the floating edge at exactly 360.0.
    let sign_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_sign = lon - (sign_idx as f64) * 30.0;
    SignInfo {
        sign: ALL_SIGNS[sign_idx as usize],
        sign_index: sign_idx,
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}
