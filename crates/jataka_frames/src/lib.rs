//! Earth-orientation quantities: precession, nutation, obliquity.
//!
//! These feed the ayanamsa engine (accumulated precession since J2000,
//! plus nutation for true-equinox systems) and the chart metadata
//! (mean obliquity of the ecliptic).

pub mod nutation;
pub mod obliquity;
pub mod precession;

pub use nutation::nutation_longitude_arcsec;
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
