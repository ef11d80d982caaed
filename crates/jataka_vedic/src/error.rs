//! Error types for the vedic calculation engines.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from configuration lookup or input validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// An ayanamsa name did not match any known system.
    UnknownAyanamsa(String),
    /// A house-system name did not match any known system.
    UnknownHouseSystem(String),
    /// A numeric input is outside its documented domain.
    InvalidInput(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAyanamsa(name) => write!(f, "unknown ayanamsa: {name:?}"),
            Self::UnknownHouseSystem(name) => write!(f, "unknown house system: {name:?}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {}
