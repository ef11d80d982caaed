//! Nakshatra (lunar mansion) index, pada, star lord, and sub-lord.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13°20'
//! (13.3333... deg) each, each with 4 padas of 3°20'. The star lord
//! follows the 9-lord Vimsottari cycle repeated three times; the sub-lord
//! comes from the proportional subdivision of a nakshatra into 9 unequal
//! segments sized by each lord's dasha years.
//!
//! This is the single implementation used for both planet positions and
//! house cusps.

use jataka_time::angle::normalize_360;

use crate::planet::Planet;
use crate::vimshottari::{DASHA_ORDER, TOTAL_DASHA_YEARS, dasha_position, dasha_years};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Star lord: the Vimsottari cycle repeated 3× over the 27 nakshatras.
    pub fn star_lord(self) -> Planet {
        DASHA_ORDER[self.index() as usize % 9]
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Ruling planet of the nakshatra.
    pub star_lord: Planet,
    /// Ruling planet of the proportional sub-segment.
    pub sub_lord: Planet,
}

/// Sub-lord for a position within a nakshatra ruled by `star_lord`.
///
/// The nakshatra is divided into 9 unequal segments proportional to each
/// lord's dasha years (not equal ninths), walked in cycle order starting
/// from the star lord itself. A position exactly on a segment boundary
/// belongs to the earlier (already accumulated) lord.
pub fn sub_lord_of(position_in_nakshatra: f64, star_lord: Planet) -> Planet {
    let start = dasha_position(star_lord);
    let mut cumulative = 0.0;
    for i in 0..DASHA_ORDER.len() {
        let lord = DASHA_ORDER[(start + i) % DASHA_ORDER.len()];
        let segment = (dasha_years(lord) as f64 / TOTAL_DASHA_YEARS as f64) * NAKSHATRA_SPAN;
        if position_in_nakshatra <= cumulative + segment {
            return lord;
        }
        cumulative += segment;
    }
    // Floating-point edge at the very end of the nakshatra: last segment.
    DASHA_ORDER[(start + DASHA_ORDER.len() - 1) % DASHA_ORDER.len()]
}

/// Determine nakshatra, pada, star lord, and sub-lord from a longitude.
///
/// The longitude is interpreted in whatever zodiac the caller works in
/// (sidereal for the usual chart flow); it is normalized to [0, 360).
pub fn nakshatra_info(longitude_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(longitude_deg);
    // Clamp for the floating edge at exactly 360.0.
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;

    let nakshatra = ALL_NAKSHATRAS[nak_idx as usize];
    let star_lord = nakshatra.star_lord();
    let sub_lord = sub_lord_of(degrees_in_nakshatra, star_lord);

    NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        pada,
        degrees_in_nakshatra,
        star_lord,
        sub_lord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn span_constants() {
        assert!((NAKSHATRA_SPAN - 13.333_333_333_333_334).abs() < 1e-10);
        assert!((PADA_SPAN - 3.333_333_333_333_333_5).abs() < 1e-10);
    }

    #[test]
    fn star_lords_cycle_three_times() {
        // Ashwini/Magha/Mula share Ketu; Bharani/P.Phalguni/P.Ashadha share Venus.
        assert_eq!(Nakshatra::Ashwini.star_lord(), Planet::Ketu);
        assert_eq!(Nakshatra::Magha.star_lord(), Planet::Ketu);
        assert_eq!(Nakshatra::Mula.star_lord(), Planet::Ketu);
        assert_eq!(Nakshatra::Bharani.star_lord(), Planet::Venus);
        assert_eq!(Nakshatra::Revati.star_lord(), Planet::Mercury);
    }

    #[test]
    fn info_at_zero() {
        let info = nakshatra_info(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.star_lord, Planet::Ketu);
        // Position 0 falls in the first segment, which is the star lord's own.
        assert_eq!(info.sub_lord, Planet::Ketu);
    }

    #[test]
    fn ascendant_scenario() {
        // 17.524833° (17°31'29.4") → Bharani, pada 2, star lord Venus
        let info = nakshatra_info(17.524833);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.nakshatra_index, 1);
        assert_eq!(info.pada, 2);
        assert_eq!(info.star_lord, Planet::Venus);
    }

    #[test]
    fn all_boundaries_start_pada_one() {
        for i in 0..27u8 {
            let info = nakshatra_info(i as f64 * NAKSHATRA_SPAN);
            assert_eq!(info.nakshatra_index, i, "boundary of nakshatra {i}");
            assert_eq!(info.pada, 1);
        }
    }

    #[test]
    fn padas_progress() {
        assert_eq!(nakshatra_info(PADA_SPAN + 0.1).pada, 2);
        assert_eq!(nakshatra_info(2.0 * PADA_SPAN + 0.1).pada, 3);
        assert_eq!(nakshatra_info(3.0 * PADA_SPAN + 0.1).pada, 4);
    }

    #[test]
    fn wrap_and_negative() {
        assert_eq!(nakshatra_info(361.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_info(-1.0).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn index_in_range_for_all_longitudes() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let info = nakshatra_info(lon);
            assert!(info.nakshatra_index <= 26);
            assert!((1..=4).contains(&info.pada));
            lon += 0.1;
        }
    }

    #[test]
    fn sub_lord_segments_sum_to_span() {
        // The 9 proportional segments must tile the nakshatra exactly.
        for &star in DASHA_ORDER.iter() {
            let start = dasha_position(star);
            let total: f64 = (0..9)
                .map(|i| {
                    let lord = DASHA_ORDER[(start + i) % 9];
                    (dasha_years(lord) as f64 / TOTAL_DASHA_YEARS as f64) * NAKSHATRA_SPAN
                })
                .sum();
            assert!(
                (total - NAKSHATRA_SPAN).abs() < 1e-9,
                "segments for {} sum to {total}",
                star.name()
            );
        }
    }

    #[test]
    fn sub_lord_first_segment_is_star_lord() {
        // Ashwini (Ketu): Ketu's own segment spans 7/120 of the nakshatra.
        let ketu_segment = 7.0 / 120.0 * NAKSHATRA_SPAN;
        assert_eq!(sub_lord_of(0.0, Planet::Ketu), Planet::Ketu);
        assert_eq!(sub_lord_of(ketu_segment - 1e-9, Planet::Ketu), Planet::Ketu);
    }

    #[test]
    fn sub_lord_boundary_belongs_to_earlier_lord() {
        // Exactly at the end of Ketu's segment: still Ketu (inclusive bound).
        let ketu_segment = 7.0 / 120.0 * NAKSHATRA_SPAN;
        assert_eq!(sub_lord_of(ketu_segment, Planet::Ketu), Planet::Ketu);
        // Just past it: Venus.
        assert_eq!(sub_lord_of(ketu_segment + 1e-9, Planet::Ketu), Planet::Venus);
    }

    #[test]
    fn sub_lord_last_segment() {
        // End of Ashwini: the last rotated lord is Mercury.
        assert_eq!(
            sub_lord_of(NAKSHATRA_SPAN - 1e-12, Planet::Ketu),
            Planet::Mercury
        );
    }

    #[test]
    fn sub_lord_rotation_starts_at_star_lord() {
        // In a Venus nakshatra the first segment is Venus's 20/120 share.
        let venus_segment = 20.0 / 120.0 * NAKSHATRA_SPAN;
        assert_eq!(sub_lord_of(0.0, Planet::Venus), Planet::Venus);
        assert_eq!(
            sub_lord_of(venus_segment + 1e-9, Planet::Venus),
            Planet::Sun
        );
    }

    #[test]
    fn ascendant_scenario_sub_lord() {
        // 17.524833° in Bharani: offset 4.1915° of a Venus nakshatra.
        // Venus 2.222°, Sun 0.667° (cum 2.889°), Moon 1.111° (cum 4.0°),
        // Mars 0.778° (cum 4.778°) → sub-lord Mars.
        let info = nakshatra_info(17.524833);
        assert_eq!(info.sub_lord, Planet::Mars);
    }
}
