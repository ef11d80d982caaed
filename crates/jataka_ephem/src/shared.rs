//! Mutex-guarded adapter sharing.

use std::sync::Mutex;

use crate::{BodyId, BodyPosition, Centering, Ephemeris, EphemerisError, RawHouses};
use jataka_vedic::Ayanamsa;

/// Wraps an adapter in a mutex held for each full call.
///
/// Backends built on libraries with process-wide mutable state (observer
/// position, sidereal mode) must not interleave their set-state-then-query
/// sequences across threads. Sharing one such adapter through
/// `SharedEphemeris` makes every trait call atomic with respect to other
/// callers.
#[derive(Debug)]
pub struct SharedEphemeris<E> {
    inner: Mutex<E>,
}

impl<E> SharedEphemeris<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}

impl<E: Ephemeris> Ephemeris for SharedEphemeris<E> {
    fn position_of(
        &self,
        jd_et: f64,
        body: BodyId,
        centering: Centering,
    ) -> Result<BodyPosition, EphemerisError> {
        match self.inner.lock() {
            Ok(guard) => guard.position_of(jd_et, body, centering),
            Err(poisoned) => Err(EphemerisError::Backend(poisoned.to_string())),
        }
    }

    fn houses_of(
        &self,
        jd_ut: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system_code: char,
    ) -> Result<RawHouses, EphemerisError> {
        match self.inner.lock() {
            Ok(guard) => guard.houses_of(jd_ut, latitude_deg, longitude_deg, system_code),
            Err(poisoned) => Err(EphemerisError::Backend(poisoned.to_string())),
        }
    }

    fn sidereal_time_of(&self, jd_ut: f64) -> f64 {
        match self.inner.lock() {
            Ok(guard) => guard.sidereal_time_of(jd_ut),
            Err(_) => jataka_time::gmst_hours(jd_ut),
        }
    }

    fn obliquity_of(&self, jd_et: f64) -> f64 {
        match self.inner.lock() {
            Ok(guard) => guard.obliquity_of(jd_et),
            Err(_) => jataka_frames::mean_obliquity_deg(jataka_time::jd_to_centuries(jd_et)),
        }
    }

    fn ayanamsa_of(&self, jd_et: f64, system: Ayanamsa) -> f64 {
        match self.inner.lock() {
            Ok(guard) => guard.ayanamsa_of(jd_et, system),
            Err(_) => jataka_vedic::ayanamsa_deg(system, jataka_time::jd_to_centuries(jd_et)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedEphemeris;
    use std::sync::Arc;

    #[test]
    fn shared_adapter_queries_across_threads() {
        let fixed = FixedEphemeris::new()
            .with_position(BodyId::Sun, 180.0, 0.0, 1.0, 0.9856)
            .with_ascendant(100.0);
        let shared = Arc::new(SharedEphemeris::new(fixed));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let pos = shared
                        .position_of(2_451_545.0, BodyId::Sun, Centering::Geocentric)
                        .unwrap();
                    assert!((pos.longitude - 180.0).abs() < 1e-12);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }

    // Compile-time assertion: a shared adapter over a Send backend is Send + Sync.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<SharedEphemeris<FixedEphemeris>>();
        }
    };
}
