//! Chart result types.

use jataka_time::UtcDateTime;
use jataka_vedic::{Nakshatra, Planet, Sign};

use crate::settings::ChartSettings;

/// One computed point: a planet or the Ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialPoint {
    /// Display name ("Sun" .. "Ketu", "Ascendant").
    pub name: &'static str,
    /// Longitude in degrees [0, 360), in the chart's zodiac.
    pub longitude: f64,
    /// Ecliptic latitude in degrees (0 for the Ascendant).
    pub latitude: f64,
    /// Longitude speed in degrees/day (0 for the Ascendant).
    pub speed: f64,
    /// Zodiac sign.
    pub sign: Sign,
    /// Decimal degrees within the sign [0, 30).
    pub degree_in_sign: f64,
    /// House placement, 1-12. The Ascendant is house 1 by definition.
    pub house: u8,
    /// Nakshatra at the point's longitude.
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Ruling planet of the nakshatra.
    pub star_lord: Planet,
    /// Ruling planet of the proportional sub-segment.
    pub sub_lord: Planet,
    /// Whether the longitude speed is negative.
    pub is_retrograde: bool,
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub index: u8,
    /// Cusp longitude in degrees [0, 360), in the chart's zodiac.
    pub longitude: f64,
    /// Zodiac sign at the cusp.
    pub sign: Sign,
    /// Decimal degrees within the sign [0, 30).
    pub degree_in_sign: f64,
    /// Star lord at the cusp longitude.
    pub star_lord: Planet,
    /// Sub-lord at the cusp longitude.
    pub sub_lord: Planet,
}

/// Settings and derived time quantities for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMeta {
    pub settings: ChartSettings,
    pub birth_utc: UtcDateTime,
    /// Observer latitude in degrees.
    pub latitude: f64,
    /// Observer longitude in degrees, east positive.
    pub longitude: f64,
    /// Julian Date (UT) of the birth instant.
    pub julian_day: f64,
    /// Delta-T in seconds at the birth epoch.
    pub delta_t: f64,
    /// Julian Date in ephemeris time: `julian_day + delta_t/86400`.
    pub ephemeris_time: f64,
    /// Mean obliquity of the ecliptic in degrees.
    pub obliquity: f64,
    /// Greenwich sidereal time in hours.
    pub sidereal_time: f64,
    /// Local sidereal time in hours: `(gst + lon/15) mod 24`.
    pub local_sidereal_time: f64,
    /// Ayanamsa value in degrees (0 for tropical charts).
    pub ayanamsa_value: f64,
}

/// A complete assembled chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// The 9 planets plus the Ascendant, Ascendant first.
    pub points: Vec<CelestialPoint>,
    /// The 12 house cusps in order.
    pub houses: [HouseCusp; 12],
}

impl ChartResult {
    /// Look up a point by name.
    pub fn point(&self, name: &str) -> Option<&CelestialPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    /// Look up a house cusp by number (1-12).
    pub fn house(&self, index: u8) -> Option<&HouseCusp> {
        self.houses.iter().find(|h| h.index == index)
    }
}
