//! Table-driven ephemeris adapter for tests and offline use.

use std::collections::HashMap;

use jataka_time::angle::normalize_360;

use crate::{BodyId, BodyPosition, Centering, Ephemeris, EphemerisError, RawHouses};

/// An adapter that serves positions from an explicit table.
///
/// Positions are tropical, as the [`Ephemeris`] contract requires.
/// Houses are served as twelve equal 30° divisions from a configured
/// ascendant (the backend house algorithm is out of scope for a fixture;
/// the engine's system-code selection and placement logic are exercised
/// all the same). Bodies or houses that were never configured yield the
/// corresponding `EphemerisError`.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    positions: HashMap<i32, BodyPosition>,
    ascendant: Option<f64>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body's tropical position.
    pub fn with_position(
        mut self,
        body: BodyId,
        longitude: f64,
        latitude: f64,
        distance: f64,
        speed_longitude: f64,
    ) -> Self {
        self.positions.insert(
            body.code(),
            BodyPosition {
                longitude: normalize_360(longitude),
                latitude,
                distance,
                speed_longitude,
            },
        );
        self
    }

    /// Register the tropical ascendant used to derive equal-house cusps.
    pub fn with_ascendant(mut self, ascendant: f64) -> Self {
        self.ascendant = Some(normalize_360(ascendant));
        self
    }
}

impl Ephemeris for FixedEphemeris {
    fn position_of(
        &self,
        _jd_et: f64,
        body: BodyId,
        _centering: Centering,
    ) -> Result<BodyPosition, EphemerisError> {
        self.positions
            .get(&body.code())
            .copied()
            .ok_or(EphemerisError::BodyUnavailable(body))
    }

    fn houses_of(
        &self,
        _jd_ut: f64,
        _latitude_deg: f64,
        _longitude_deg: f64,
        system_code: char,
    ) -> Result<RawHouses, EphemerisError> {
        let asc = self
            .ascendant
            .ok_or(EphemerisError::HousesUnavailable(system_code))?;
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_360(asc + i as f64 * 30.0);
        }
        let mc = normalize_360(asc + 270.0);
        Ok(RawHouses {
            cusps,
            angles: [asc, mc, 0.0, 0.0],
        })
    }
}
