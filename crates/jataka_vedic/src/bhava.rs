//! House-system selection and house placement.
//!
//! Cusp computation itself is delegated to the ephemeris backend; this
//! module owns the authoritative table of the 14 named systems and their
//! backend codes, the sidereal correction of a cusp set, and the
//! wraparound-aware placement test.

use std::str::FromStr;

use jataka_time::angle::normalize_360;

use crate::error::VedicError;

/// The 14 named house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseSystem {
    Placidus,
    Koch,
    EqualAsc,
    EqualMc,
    WholeSign,
    Campanus,
    Regiomontanus,
    Porphyry,
    Morinus,
    Meridian,
    Alcabitius,
    Azimuthal,
    Topocentric,
    VehlowEqual,
}

/// All 14 house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 14] = [
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::EqualAsc,
    HouseSystem::EqualMc,
    HouseSystem::WholeSign,
    HouseSystem::Campanus,
    HouseSystem::Regiomontanus,
    HouseSystem::Porphyry,
    HouseSystem::Morinus,
    HouseSystem::Meridian,
    HouseSystem::Alcabitius,
    HouseSystem::Azimuthal,
    HouseSystem::Topocentric,
    HouseSystem::VehlowEqual,
];

impl HouseSystem {
    /// Display name, as used in settings surfaces.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::EqualAsc => "Equal (Asc)",
            Self::EqualMc => "Equal (MC)",
            Self::WholeSign => "Whole Sign",
            Self::Campanus => "Campanus",
            Self::Regiomontanus => "Regiomontanus",
            Self::Porphyry => "Porphyry",
            Self::Morinus => "Morinus",
            Self::Meridian => "Meridian",
            Self::Alcabitius => "Alcabitius",
            Self::Azimuthal => "Azimuthal",
            Self::Topocentric => "Polich/Page (Topocentric)",
            Self::VehlowEqual => "Vehlow Equal",
        }
    }

    /// Single-character code understood by the ephemeris backend.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::Koch => 'K',
            Self::EqualAsc => 'E',
            Self::EqualMc => 'X',
            Self::WholeSign => 'W',
            Self::Campanus => 'C',
            Self::Regiomontanus => 'R',
            Self::Porphyry => 'O',
            Self::Morinus => 'M',
            Self::Meridian => 'A',
            Self::Alcabitius => 'B',
            Self::Azimuthal => 'H',
            Self::Topocentric => 'T',
            Self::VehlowEqual => 'V',
        }
    }
}

impl FromStr for HouseSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_HOUSE_SYSTEMS
            .iter()
            .copied()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| VedicError::UnknownHouseSystem(s.to_string()))
    }
}

/// Apply the same ayanamsa subtraction to all 12 cusps.
pub fn sidereal_cusps(tropical_cusps: &[f64; 12], ayanamsa_value_deg: f64) -> [f64; 12] {
    let mut out = [0.0; 12];
    for (i, &cusp) in tropical_cusps.iter().enumerate() {
        out[i] = normalize_360(cusp - ayanamsa_value_deg);
    }
    out
}

/// House placement for a longitude against 12 cusp longitudes.
///
/// House `i` (1-indexed) spans `cusp[i-1]` inclusive up to the next cusp
/// exclusive, under modulo-360 arithmetic: when a house spans 0° the
/// membership test becomes `lon >= start || lon < end`. House 12 is the
/// fallback, guarding against floating-point edge misses at 360°/0°.
pub fn house_of(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(longitude_deg);

    for i in 0..11 {
        let start = normalize_360(cusps[i]);
        let end = normalize_360(cusps[i + 1]);
        if start <= end {
            if start <= lon && lon < end {
                return (i + 1) as u8;
            }
        } else if lon >= start || lon < end {
            // House spans the 0° point.
            return (i + 1) as u8;
        }
    }
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(asc: f64) -> [f64; 12] {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_360(asc + i as f64 * 30.0);
        }
        cusps
    }

    #[test]
    fn all_house_systems_count() {
        assert_eq!(ALL_HOUSE_SYSTEMS.len(), 14);
    }

    #[test]
    fn codes_unique() {
        for (i, a) in ALL_HOUSE_SYSTEMS.iter().enumerate() {
            for b in &ALL_HOUSE_SYSTEMS[i + 1..] {
                assert_ne!(a.code(), b.code(), "{} vs {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn parse_known_names() {
        assert_eq!(
            "Placidus".parse::<HouseSystem>().unwrap(),
            HouseSystem::Placidus
        );
        assert_eq!(
            "Equal (Asc)".parse::<HouseSystem>().unwrap(),
            HouseSystem::EqualAsc
        );
        assert_eq!(
            "Polich/Page (Topocentric)".parse::<HouseSystem>().unwrap(),
            HouseSystem::Topocentric
        );
    }

    #[test]
    fn parse_unknown_name_is_error() {
        let err = "Heliocentric".parse::<HouseSystem>().unwrap_err();
        assert!(matches!(err, VedicError::UnknownHouseSystem(_)));
    }

    #[test]
    fn sidereal_correction_uniform() {
        let tropical = equal_cusps(100.0);
        let sidereal = sidereal_cusps(&tropical, 24.0);
        for i in 0..12 {
            assert!(
                (sidereal[i] - normalize_360(tropical[i] - 24.0)).abs() < 1e-12,
                "cusp {i}"
            );
        }
    }

    #[test]
    fn placement_simple() {
        let cusps = equal_cusps(0.0);
        assert_eq!(house_of(15.0, &cusps), 1);
        assert_eq!(house_of(45.0, &cusps), 2);
        assert_eq!(house_of(345.0, &cusps), 12);
    }

    #[test]
    fn placement_on_cusp_belongs_to_that_house() {
        let cusps = equal_cusps(10.0);
        for i in 0..12 {
            assert_eq!(house_of(cusps[i], &cusps), (i + 1) as u8, "cusp {i}");
        }
    }

    #[test]
    fn placement_just_past_and_before_cusps() {
        let eps = 1e-6;
        let cusps = equal_cusps(17.3);
        for i in 0..12 {
            let after = house_of(cusps[i] + eps, &cusps);
            assert_eq!(after, (i + 1) as u8, "just past cusp {i}");
            let before = house_of(cusps[i] - eps, &cusps);
            let expected = if i == 0 { 12 } else { i as u8 };
            assert_eq!(before, expected, "just before cusp {i}");
        }
    }

    #[test]
    fn placement_wraparound_house() {
        // Ascendant at 340°: house 1 spans [340°, 10°) across 0°.
        let cusps = equal_cusps(340.0);
        assert_eq!(house_of(350.0, &cusps), 1);
        assert_eq!(house_of(0.0, &cusps), 1);
        assert_eq!(house_of(5.0, &cusps), 1);
        assert_eq!(house_of(10.0, &cusps), 2);
    }

    #[test]
    fn placement_unequal_cusps() {
        // Placidus-like unequal cusps.
        let cusps = [
            283.5, 320.2, 355.9, 26.1, 51.8, 75.3, 103.5, 140.2, 175.9, 206.1, 231.8, 255.3,
        ];
        assert_eq!(house_of(300.0, &cusps), 1);
        assert_eq!(house_of(0.0, &cusps), 3);
        assert_eq!(house_of(30.0, &cusps), 4);
        assert_eq!(house_of(280.0, &cusps), 12);
    }
}
