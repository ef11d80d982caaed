//! Error types for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::EphemerisError;
use jataka_time::TimeError;
use jataka_vedic::Planet;

/// Errors from a chart calculation.
///
/// Per-body ephemeris failures abort the whole calculation: every failed
/// body is collected into one `Ephemeris` error rather than being
/// silently omitted from the result.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A coordinate or other numeric input is out of range.
    InvalidInput(&'static str),
    /// The birth date/time is invalid.
    Time(TimeError),
    /// The backend could not compute house cusps.
    Houses(EphemerisError),
    /// One or more bodies could not be resolved.
    Ephemeris {
        failures: Vec<(Planet, EphemerisError)>,
    },
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Time(e) => write!(f, "invalid birth time: {e}"),
            Self::Houses(e) => write!(f, "house computation failed: {e}"),
            Self::Ephemeris { failures } => {
                write!(f, "ephemeris failed for ")?;
                for (i, (planet, e)) in failures.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} ({e})", planet.name())?;
                }
                Ok(())
            }
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
