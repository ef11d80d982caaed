//! Error types for ephemeris adapters.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::BodyId;

/// Errors an ephemeris backend can surface.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backend cannot resolve a body (e.g. missing data files).
    BodyUnavailable(BodyId),
    /// The backend cannot compute houses for the requested system code.
    HousesUnavailable(char),
    /// Backend-specific failure.
    Backend(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyUnavailable(body) => write!(f, "ephemeris unavailable for {}", body.name()),
            Self::HousesUnavailable(code) => {
                write!(f, "houses unavailable for system code {code:?}")
            }
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
