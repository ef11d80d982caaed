//! Truncated nutation in longitude (Δψ).
//!
//! Principal-term series from Meeus, "Astronomical Algorithms" (2nd ed),
//! chapter 22 (the four largest lunisolar terms), accurate to ~0.5″.
//! Only true-equinox ayanamsa systems consume this; the full IAU 2000B
//! series would buy nothing visible at chart precision.

/// Nutation in longitude in arcseconds for `t` Julian centuries since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    // Longitude of the Moon's ascending node, mean longitudes of Sun and Moon.
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_bounded() {
        // |Δψ| never exceeds ~19″
        let mut t = -2.0;
        while t <= 2.0 {
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() < 19.0, "t = {t}, Δψ = {dpsi}");
            t += 0.01;
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-04-10: Δψ ≈ −3.788″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_longitude_arcsec(t);
        assert!((dpsi + 3.788).abs() < 0.6, "Δψ = {dpsi}");
    }
}
