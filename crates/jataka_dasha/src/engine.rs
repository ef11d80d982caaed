//! The recursive Vimsottari period generator.

use jataka_time::UtcDateTime;
use jataka_vedic::nakshatra::NAKSHATRA_SPAN;
use jataka_vedic::{DASHA_ORDER, Planet, dasha_position, dasha_years};

use crate::error::DashaError;
use crate::types::{DashaLevel, DashaPeriod, DurationParts, MINUTES_PER_YEAR};

/// Full Vimsottari period for a lord, in minutes.
fn full_period_minutes(lord: Planet) -> i64 {
    dasha_years(lord) as i64 * MINUTES_PER_YEAR
}

/// Generate the sub-periods of one parent period.
///
/// The 9-lord rotation starts at the parent's own lord; each child gets
/// `parent_minutes × years/120` minutes, integer-truncated, chained
/// gaplessly from the parent's start. The cumulative truncation of the 9
/// divisions leaves the last child ending up to 8 minutes before the
/// parent — the acknowledged slack of exact-minute bookkeeping.
fn children_of(
    parent_lord: Planet,
    parent_label: &str,
    start: UtcDateTime,
    parent_minutes: i64,
    level: DashaLevel,
    max_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let rotation = dasha_position(parent_lord);
    let mut children = Vec::with_capacity(DASHA_ORDER.len());
    let mut cursor = start;

    for i in 0..DASHA_ORDER.len() {
        let lord = DASHA_ORDER[(rotation + i) % DASHA_ORDER.len()];
        let minutes = parent_minutes * dasha_years(lord) as i64 / 120;
        let end = cursor.add_minutes(minutes);
        let label = format!("{parent_label}-{}", lord.name());

        let grandchildren = match level.child() {
            Some(next) if level < max_level => {
                children_of(lord, &label, cursor, minutes, next, max_level)
            }
            _ => Vec::new(),
        };

        children.push(DashaPeriod {
            lord,
            label,
            level,
            start: cursor,
            end,
            minutes,
            duration: DurationParts::from_minutes(minutes),
            children: grandchildren,
        });
        cursor = end;
    }

    children
}

/// Generate the Vimsottari timeline down to `max_level`.
///
/// Nine Mahadashas cover the cycle from birth onward. The birth-active
/// Mahadasha is the star lord of the Moon's nakshatra; its start date is
/// retrojected by the elapsed fraction of the nakshatra, its reported
/// duration is the balance remaining from birth, and its children
/// partition its full span. The 8 following Mahadashas carry full
/// durations in cyclic lord order.
pub fn vimshottari_hierarchy(
    birth_utc: UtcDateTime,
    moon_sidereal_lon: f64,
    max_level: DashaLevel,
) -> Result<Vec<DashaPeriod>, DashaError> {
    if !(0.0..360.0).contains(&moon_sidereal_lon) {
        return Err(DashaError::InvalidMoonLongitude(moon_sidereal_lon));
    }

    let nakshatra_index = ((moon_sidereal_lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let start_lord_index = nakshatra_index % 9;
    let elapsed_fraction = (moon_sidereal_lon % NAKSHATRA_SPAN) / NAKSHATRA_SPAN;

    let birth_lord = DASHA_ORDER[start_lord_index];
    let total = full_period_minutes(birth_lord);
    let elapsed = (total as f64 * elapsed_fraction).floor() as i64;
    let remaining = total - elapsed;

    let mut dashas = Vec::with_capacity(DASHA_ORDER.len());

    // Birth-active Mahadasha: dated over its full span, reported by its
    // remaining balance.
    let start = birth_utc.add_minutes(-elapsed);
    let end = start.add_minutes(total);
    let children = match DashaLevel::Mahadasha.child() {
        Some(next) if DashaLevel::Mahadasha < max_level => children_of(
            birth_lord,
            birth_lord.name(),
            start,
            total,
            next,
            max_level,
        ),
        _ => Vec::new(),
    };
    dashas.push(DashaPeriod {
        lord: birth_lord,
        label: birth_lord.name().to_string(),
        level: DashaLevel::Mahadasha,
        start,
        end,
        minutes: remaining,
        duration: DurationParts::from_minutes(remaining),
        children,
    });

    // The 8 following Mahadashas in cyclic order, full durations.
    let mut cursor = end;
    for i in 1..DASHA_ORDER.len() {
        let lord = DASHA_ORDER[(start_lord_index + i) % DASHA_ORDER.len()];
        let minutes = full_period_minutes(lord);
        let end = cursor.add_minutes(minutes);
        let children = match DashaLevel::Mahadasha.child() {
            Some(next) if DashaLevel::Mahadasha < max_level => {
                children_of(lord, lord.name(), cursor, minutes, next, max_level)
            }
            _ => Vec::new(),
        };
        dashas.push(DashaPeriod {
            lord,
            label: lord.name().to_string(),
            level: DashaLevel::Mahadasha,
            start: cursor,
            end,
            minutes,
            duration: DurationParts::from_minutes(minutes),
            children,
        });
        cursor = end;
    }

    Ok(dashas)
}

/// Generate the complete five-level Vimsottari timeline.
pub fn vimshottari_dashas(
    birth_utc: UtcDateTime,
    moon_sidereal_lon: f64,
) -> Result<Vec<DashaPeriod>, DashaError> {
    vimshottari_hierarchy(birth_utc, moon_sidereal_lon, DashaLevel::Prana)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> UtcDateTime {
        UtcDateTime::new(2020, 9, 23, 19, 49, 20.0).unwrap()
    }

    #[test]
    fn moon_at_zero_starts_full_ketu_dasha() {
        // Start of Ashwini: Ketu, no elapsed fraction, 7 full years.
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Mahadasha).unwrap();
        assert_eq!(dashas.len(), 9);
        let first = &dashas[0];
        assert_eq!(first.lord, Planet::Ketu);
        assert_eq!(first.minutes, 3_679_200); // 7 × 525 600
        assert_eq!(first.start, birth());
        assert_eq!(first.duration.to_string(), "7y");
    }

    #[test]
    fn mahadasha_sequence_rotates_from_birth_lord() {
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Mahadasha).unwrap();
        let lords: Vec<Planet> = dashas.iter().map(|d| d.lord).collect();
        assert_eq!(lords, DASHA_ORDER.to_vec());
    }

    #[test]
    fn mid_nakshatra_splits_balance() {
        // Middle of Rohini (Moon's own nakshatra): half of 10 years left.
        let mid_rohini = 3.0 * NAKSHATRA_SPAN + NAKSHATRA_SPAN / 2.0;
        let dashas = vimshottari_hierarchy(birth(), mid_rohini, DashaLevel::Mahadasha).unwrap();
        let first = &dashas[0];
        assert_eq!(first.lord, Planet::Moon);
        let half = 10 * MINUTES_PER_YEAR / 2;
        assert!((first.minutes - half).abs() <= 1, "balance = {}", first.minutes);
        // Start is retrojected by the elapsed half.
        assert_eq!(first.start, birth().add_minutes(-(10 * MINUTES_PER_YEAR - first.minutes)));
    }

    #[test]
    fn mahadashas_chain_without_gaps() {
        let dashas = vimshottari_hierarchy(birth(), 123.456, DashaLevel::Mahadasha).unwrap();
        for pair in dashas.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn full_cycle_spans_120_years() {
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Mahadasha).unwrap();
        let total: i64 = dashas.iter().map(|d| d.minutes).sum();
        assert_eq!(total, 120 * MINUTES_PER_YEAR);
    }

    #[test]
    fn antardashas_rotate_from_parent_lord() {
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Antardasha).unwrap();
        let ketu = &dashas[0];
        assert_eq!(ketu.children.len(), 9);
        assert_eq!(ketu.children[0].lord, Planet::Ketu);
        assert_eq!(ketu.children[1].lord, Planet::Venus);
        assert_eq!(ketu.children[8].lord, Planet::Mercury);
    }

    #[test]
    fn antardasha_minutes_sum_within_truncation_slack() {
        let dashas = vimshottari_hierarchy(birth(), 200.0, DashaLevel::Antardasha).unwrap();
        for maha in &dashas[1..] {
            // Full mahadashas: 9 integer-truncated divisions lose < 9 min.
            let child_sum: i64 = maha.children.iter().map(|c| c.minutes).sum();
            let slack = maha.minutes - child_sum;
            assert!((0..=8).contains(&slack), "{}: slack = {slack}", maha.label);
        }
    }

    #[test]
    fn children_partition_parent_span() {
        let dashas = vimshottari_hierarchy(birth(), 40.0, DashaLevel::Antardasha).unwrap();
        for maha in &dashas {
            assert_eq!(maha.children[0].start, maha.start, "{}", maha.label);
            for pair in maha.children.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn birth_mahadasha_children_cover_full_span() {
        // Children subdivide the full retrojected span, not just the balance.
        let mid_rohini = 3.0 * NAKSHATRA_SPAN + NAKSHATRA_SPAN / 2.0;
        let dashas = vimshottari_hierarchy(birth(), mid_rohini, DashaLevel::Antardasha).unwrap();
        let first = &dashas[0];
        let child_sum: i64 = first.children.iter().map(|c| c.minutes).sum();
        let full = 10 * MINUTES_PER_YEAR;
        assert!((0..=8).contains(&(full - child_sum)), "sum = {child_sum}");
        assert_eq!(first.children[0].start, first.start);
    }

    #[test]
    fn known_antardasha_allocation() {
        // Ketu-Venus: 3 679 200 × 20 / 120 = 613 200 minutes.
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Antardasha).unwrap();
        let ketu_venus = &dashas[0].children[1];
        assert_eq!(ketu_venus.lord, Planet::Venus);
        assert_eq!(ketu_venus.minutes, 613_200);
    }

    #[test]
    fn labels_compound_down_the_levels() {
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Pratyantar).unwrap();
        let maha = &dashas[0];
        assert_eq!(maha.label, "Ketu");
        let antar = &maha.children[1];
        assert_eq!(antar.label, "Ketu-Venus");
        let praty = &antar.children[0];
        assert_eq!(praty.label, "Ketu-Venus-Venus");
        assert_eq!(praty.level, DashaLevel::Pratyantar);
    }

    #[test]
    fn prana_is_leaf() {
        let dashas = vimshottari_dashas(birth(), 0.0).unwrap();
        let mut period = &dashas[0];
        for expected in [
            DashaLevel::Mahadasha,
            DashaLevel::Antardasha,
            DashaLevel::Pratyantar,
            DashaLevel::Sookshma,
            DashaLevel::Prana,
        ] {
            assert_eq!(period.level, expected);
            if expected == DashaLevel::Prana {
                assert!(period.children.is_empty());
            } else {
                assert_eq!(period.children.len(), 9);
                period = &period.children[0];
            }
        }
    }

    #[test]
    fn depth_cap_respected() {
        let dashas = vimshottari_hierarchy(birth(), 0.0, DashaLevel::Antardasha).unwrap();
        assert!(dashas[0].children[0].children.is_empty());
    }

    #[test]
    fn invalid_moon_longitude_rejected() {
        assert_eq!(
            vimshottari_hierarchy(birth(), 360.0, DashaLevel::Mahadasha),
            Err(DashaError::InvalidMoonLongitude(360.0))
        );
        assert_eq!(
            vimshottari_hierarchy(birth(), -0.1, DashaLevel::Mahadasha),
            Err(DashaError::InvalidMoonLongitude(-0.1))
        );
    }

    #[test]
    fn bharani_moon_starts_venus_dasha() {
        // 17.524833° → Bharani, lord Venus, ~31.4% elapsed.
        let dashas = vimshottari_hierarchy(birth(), 17.524833, DashaLevel::Mahadasha).unwrap();
        let first = &dashas[0];
        assert_eq!(first.lord, Planet::Venus);
        let total = 20 * MINUTES_PER_YEAR;
        let elapsed_fraction = (17.524833 % NAKSHATRA_SPAN) / NAKSHATRA_SPAN;
        let expected_remaining = total - (total as f64 * elapsed_fraction).floor() as i64;
        assert_eq!(first.minutes, expected_remaining);
    }
}
