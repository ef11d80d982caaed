//! Greenwich mean sidereal time and local sidereal time.
//!
//! GMST from Meeus, "Astronomical Algorithms" (2nd ed), eq. 12.4.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich mean sidereal time in hours [0, 24) for a JD in UT.
pub fn gmst_hours(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    let deg = theta.rem_euclid(360.0);
    deg / 15.0
}

/// Local mean sidereal time in hours [0, 24).
///
/// East longitudes are positive: `lst = (gmst + lon/15) mod 24`.
pub fn local_sidereal_hours(gmst_hours: f64, longitude_deg: f64) -> f64 {
    (gmst_hours + longitude_deg / 15.0).rem_euclid(24.0)
}
