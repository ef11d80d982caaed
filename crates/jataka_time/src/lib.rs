//! Calendar/Julian-day conversions, Delta-T, angles, and sidereal time.
//!
//! This crate provides:
//! - `UtcDateTime`, the validated UTC calendar type used throughout the engine
//! - Julian Date ↔ calendar conversions (Meeus, ch. 7)
//! - The Delta-T polynomial approximation for ephemeris time
//! - Signed degrees-minutes-seconds conversion and angle normalization
//! - Greenwich mean sidereal time and local sidereal time

pub mod angle;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use angle::{Dms, deg_to_dms, dms_to_deg, normalize_360};
pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{J2000_JD, MINUTES_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries};
pub use sidereal::{gmst_hours, local_sidereal_hours};
pub use utc_time::UtcDateTime;
