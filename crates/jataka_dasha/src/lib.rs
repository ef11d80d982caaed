//! Vimsottari dasha timeline generation.
//!
//! The five-level recursive period generator: 9 Mahadashas from the
//! Moon's nakshatra at birth, each subdivided into Antardasha,
//! Pratyantar, Sookshma, and Prana periods with exact integer-minute
//! bookkeeping. Pure math over explicit inputs; safe for unrestricted
//! concurrent use.

pub mod engine;
pub mod error;
pub mod types;

pub use engine::{vimshottari_dashas, vimshottari_hierarchy};
pub use error::DashaError;
pub use types::{DashaLevel, DashaPeriod, DurationParts, MINUTES_PER_YEAR};
