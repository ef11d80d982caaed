//! UTC calendar date/time, validated at construction.
//!
//! `UtcDateTime` is the canonical input type for chart and dasha
//! calculations. Timezone conversion is the caller's responsibility:
//! every value here is already UTC.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Days in a month, accounting for Gregorian leap years.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

impl UtcDateTime {
    /// Create a date-time, validating all calendar components.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of range")));
        }
        let max_day = days_in_month(year, month);
        if day < 1 || day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range for {year}-{month:02}"
            )));
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate(format!("hour {hour} out of range")));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "minute {minute} out of range"
            )));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!(
                "second {second} out of range"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Convert to Julian Date (UT).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a Julian Date, rounding to the nearest whole second.
    pub fn from_jd(jd: f64) -> Self {
        // Bias by half a second so second-level truncation rounds to nearest.
        let (year, month, day_frac) = jd_to_calendar(jd + 0.5 / 86_400.0);
        let day = day_frac.floor() as u32;
        let total_seconds = (day_frac - day as f64) * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = (total_seconds % 60.0).floor();
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Add (or subtract) an exact number of minutes.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self::from_jd(self.to_jd() + minutes as f64 / MINUTES_PER_DAY)
    }
}

impl std::fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

impl FromStr for UtcDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s:?}"));
        let rest = s.strip_suffix('Z').ok_or_else(err)?;
        let (date, time) = rest.split_once('T').ok_or_else(err)?;

        let mut date_parts = date.split('-');
        let year: i32 = date_parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let month: u32 = date_parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let day: u32 = date_parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if date_parts.next().is_some() {
            return Err(err());
        }

        let mut time_parts = time.split(':');
        let hour: u32 = time_parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let minute: u32 = time_parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let second: f64 = time_parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if time_parts.next().is_some() {
            return Err(err());
        }

        Self::new(year, month, day, hour, minute, second)
    }
}
