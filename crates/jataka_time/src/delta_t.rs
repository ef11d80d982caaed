//! Delta-T (TT − UT) polynomial approximation.

/// Delta-T in seconds for a given calendar year and month.
///
/// Polynomial fit from Meeus-style published expressions:
/// `62.92 + 0.32217·t + 0.005589·t²` with `t = (year + (month − 0.5)/12) − 2000`.
///
/// The fit is valid for the years 2005–2050. Outside that window the same
/// polynomial is evaluated as a smooth extrapolation; accuracy degrades the
/// further the epoch is from the fit interval, but no error is raised —
/// this is an approximation, not exact physics.
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    let y = year as f64 + (month as f64 - 0.5) / 12.0;
    let t = y - 2000.0;
    62.92 + 0.32217 * t + 0.005589 * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_window_value() {
        // 2020: t ≈ 20.2, ΔT ≈ 71.7 s
        let dt = delta_t_seconds(2020, 9);
        assert!((69.0..75.0).contains(&dt), "ΔT(2020-09) = {dt}");
    }

    #[test]
    fn monotonic_within_window() {
        let a = delta_t_seconds(2005, 1);
        let b = delta_t_seconds(2050, 12);
        assert!(b > a);
    }

    #[test]
    fn month_granularity() {
        let jan = delta_t_seconds(2030, 1);
        let dec = delta_t_seconds(2030, 12);
        assert!(dec > jan);
        assert!(dec - jan < 0.5, "within-year spread = {}", dec - jan);
    }

    #[test]
    fn extrapolates_outside_window() {
        // 1900 is far outside the fit window; the polynomial still evaluates.
        let dt = delta_t_seconds(1900, 1);
        assert!(dt.is_finite());
    }
}
