//! Ephemeris adapter contract.
//!
//! The chart assembler never talks to an ephemeris backend directly; it
//! goes through the [`Ephemeris`] trait defined here. The contract is
//! deliberately stateless: the observer (geocentric/topocentric) is an
//! explicit per-call parameter, and positions are always **tropical** —
//! sidereal correction is the zodiac engine's job. Backends that wrap a
//! library with process-wide mutable state (topocentric observer,
//! sidereal mode) must perform their set-state-then-query sequence inside
//! each method; [`SharedEphemeris`] serializes whole calls for such
//! backends when one instance is shared across threads.

pub mod error;
pub mod fixed;
pub mod shared;

pub use error::EphemerisError;
pub use fixed::FixedEphemeris;
pub use shared::SharedEphemeris;

use jataka_frames::mean_obliquity_deg;
use jataka_time::{gmst_hours, jd_to_centuries};
use jataka_vedic::{Ayanamsa, ayanamsa_deg};

/// Bodies an ephemeris backend can be asked for.
///
/// Ketu is deliberately absent: it is always derived as the point
/// opposite Rahu and never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean lunar ascending node.
    MeanNode,
    /// True (osculating) lunar ascending node.
    TrueNode,
}

impl BodyId {
    /// Numeric body code in the Swiss Ephemeris convention.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::MeanNode => 10,
            Self::TrueNode => 11,
        }
    }

    /// Display name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
            Self::TrueNode => "True Node",
        }
    }
}

/// Geographic observer position for topocentric queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above sea level in meters.
    pub altitude_m: f64,
}

/// Where the observer sits for a position query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Centering {
    /// Earth's center.
    Geocentric,
    /// A point on Earth's surface.
    Topocentric(GeoPoint),
}

/// Ecliptic position and motion of one body at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Tropical ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in AU.
    pub distance: f64,
    /// Longitude speed in degrees/day; negative while retrograde.
    pub speed_longitude: f64,
}

/// Raw house output from the backend: 12 tropical cusps plus the four
/// angles (ascendant, MC, ARMC, vertex).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHouses {
    pub cusps: [f64; 12],
    pub angles: [f64; 4],
}

impl RawHouses {
    /// Tropical ascendant (first angle).
    pub fn ascendant(&self) -> f64 {
        self.angles[0]
    }
}

/// Contract between the calculation engine and an ephemeris backend.
///
/// One adapter instance must not be used by concurrent chart calculations
/// unless the implementation is internally synchronized: either give each
/// calculation its own instance, or wrap a shared one in
/// [`SharedEphemeris`].
///
/// The provided methods default to the analytic formulas used throughout
/// the engine; backends with their own (typically more precise) values
/// should override them.
pub trait Ephemeris {
    /// Tropical position of a body at a Julian Date in ephemeris time.
    fn position_of(
        &self,
        jd_et: f64,
        body: BodyId,
        centering: Centering,
    ) -> Result<BodyPosition, EphemerisError>;

    /// Tropical house cusps and angles for a Julian Date in UT and a
    /// geographic location, using the backend algorithm selected by
    /// `system_code` (see `jataka_vedic::HouseSystem::code`).
    fn houses_of(
        &self,
        jd_ut: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system_code: char,
    ) -> Result<RawHouses, EphemerisError>;

    /// Greenwich mean sidereal time in hours for a Julian Date in UT.
    fn sidereal_time_of(&self, jd_ut: f64) -> f64 {
        gmst_hours(jd_ut)
    }

    /// Mean obliquity of the ecliptic in degrees.
    fn obliquity_of(&self, jd_et: f64) -> f64 {
        mean_obliquity_deg(jd_to_centuries(jd_et))
    }

    /// Ayanamsa value in degrees for a sidereal reference system.
    fn ayanamsa_of(&self, jd_et: f64, system: Ayanamsa) -> f64 {
        ayanamsa_deg(system, jd_to_centuries(jd_et))
    }
}
