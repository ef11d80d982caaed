//! Zodiac, nakshatra, lordship, ayanamsa, and house-placement engines.
//!
//! This crate holds the pure astrological math shared by the chart
//! assembler and the dasha generator:
//! - the 9 planets and the Vimsottari lordship table (single source of truth)
//! - sign and nakshatra decomposition with the proportional sub-lord algorithm
//! - ayanamsa values for 6 sidereal reference systems
//! - the 14-entry house-system table and wraparound-aware house placement
//!
//! Everything here is stateless and safe for unrestricted concurrent use.

pub mod ayanamsa;
pub mod bhava;
pub mod error;
pub mod nakshatra;
pub mod planet;
pub mod sign;
pub mod vimshottari;

pub use ayanamsa::{ALL_AYANAMSAS, Ayanamsa, apply_ayanamsa, ayanamsa_deg};
pub use bhava::{ALL_HOUSE_SYSTEMS, HouseSystem, house_of, sidereal_cusps};
pub use error::VedicError;
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_info,
    sub_lord_of,
};
pub use planet::{ALL_PLANETS, Planet};
pub use sign::{ALL_SIGNS, Sign, SignInfo, sign_of};
pub use vimshottari::{DASHA_ORDER, TOTAL_DASHA_YEARS, dasha_position, dasha_years};
