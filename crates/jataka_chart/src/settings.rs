//! Per-calculation settings.
//!
//! Settings are plain values passed into each call. There is no global
//! or instance-level default state: two concurrent calculations with
//! different settings cannot contaminate each other.

use jataka_vedic::{Ayanamsa, HouseSystem};

/// Observer model for position queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcMode {
    Geocentric,
    Topocentric,
}

/// Which zodiac longitudes are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zodiac {
    Tropical,
    Sidereal,
}

/// Which lunar node model serves Rahu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMode {
    True,
    Mean,
}

/// Complete settings for one chart calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSettings {
    pub calc_mode: CalcMode,
    pub zodiac: Zodiac,
    pub ayanamsa: Ayanamsa,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
}

impl Default for ChartSettings {
    /// Topocentric sidereal Lahiri with Placidus houses and true nodes.
    fn default() -> Self {
        Self {
            calc_mode: CalcMode::Topocentric,
            zodiac: Zodiac::Sidereal,
            ayanamsa: Ayanamsa::Lahiri,
            house_system: HouseSystem::Placidus,
            node_mode: NodeMode::True,
        }
    }
}
