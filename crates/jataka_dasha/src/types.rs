//! Core types for dasha periods.

use jataka_time::UtcDateTime;
use jataka_vedic::Planet;

/// Minutes in one dasha year (365.25 days).
pub const MINUTES_PER_YEAR: i64 = 525_600;

/// Minutes in one dasha month (30.4167 days).
pub const MINUTES_PER_MONTH: i64 = 43_800;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 1_440;

/// The 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantar = 2,
    Sookshma = 3,
    Prana = 4,
}

impl DashaLevel {
    /// Create from raw depth (0-4).
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantar),
            3 => Some(Self::Sookshma),
            4 => Some(Self::Prana),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantar => "Pratyantar",
            Self::Sookshma => "Sookshma",
            Self::Prana => "Prana",
        }
    }

    /// Next deeper level; `None` at Prana (the leaf).
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantar),
            Self::Pratyantar => Some(Self::Sookshma),
            Self::Sookshma => Some(Self::Prana),
            Self::Prana => None,
        }
    }
}

/// A duration broken into calendar-style components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl DurationParts {
    /// Break total minutes into years/months/days/hours/minutes using the
    /// dasha divisors (525 600, 43 800, 1 440, 60).
    pub fn from_minutes(total_minutes: i64) -> Self {
        let years = total_minutes / MINUTES_PER_YEAR;
        let rem = total_minutes % MINUTES_PER_YEAR;
        let months = rem / MINUTES_PER_MONTH;
        let rem = rem % MINUTES_PER_MONTH;
        let days = rem / MINUTES_PER_DAY;
        let rem = rem % MINUTES_PER_DAY;
        Self {
            years,
            months,
            days,
            hours: rem / 60,
            minutes: rem % 60,
        }
    }
}

impl std::fmt::Display for DurationParts {
    /// Largest applicable units down to minutes, omitting zero components
    /// ("7y", "2y 4m 27d", "0min" when everything is zero).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let components = [
            (self.years, "y"),
            (self.months, "m"),
            (self.days, "d"),
            (self.hours, "h"),
            (self.minutes, "min"),
        ];
        let mut wrote = false;
        for (value, unit) in components {
            if value > 0 {
                if wrote {
                    write!(f, " ")?;
                }
                write!(f, "{value}{unit}")?;
                wrote = true;
            }
        }
        if !wrote {
            write!(f, "0min")?;
        }
        Ok(())
    }
}

/// A single dasha period at any level.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaPeriod {
    /// The lord of this period at its own level.
    pub lord: Planet,
    /// Compound lord name from Mahadasha down ("Mars-Rahu-Jupiter").
    pub label: String,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// Period start.
    pub start: UtcDateTime,
    /// Period end.
    pub end: UtcDateTime,
    /// Reported duration in minutes. For the birth Mahadasha this is the
    /// balance remaining from birth; for every other period it equals the
    /// full start-to-end span.
    pub minutes: i64,
    /// `minutes` broken into display components.
    pub duration: DurationParts,
    /// Sub-periods at the next level; empty at Prana.
    pub children: Vec<DashaPeriod>,
}
