//! Error types for dasha generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from dasha timeline generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DashaError {
    /// The Moon's sidereal longitude is outside [0, 360).
    InvalidMoonLongitude(f64),
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMoonLongitude(lon) => {
                write!(f, "moon longitude {lon} outside [0, 360)")
            }
        }
    }
}

impl Error for DashaError {}
