//! Lahiri (Chitrapaksha) ayanamsha.
//!
//! `ayanamsha(T) = 23.853° + p_A(T)`, where p_A is the IAU 2006 general
//! precession in ecliptic longitude and T is Julian centuries of TT since
//! J2000.0. Mean equinox; no nutation term.

/// Lahiri ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// Source: Capitaine et al. 2003, Eq. 39.
pub fn general_precession_arcsec(t: f64) -> f64 {
    t * (5_028.796_195
        + t * (1.105_434_8 + t * (0.000_079_64 + t * (-0.000_023_857 - t * 0.000_000_038_3))))
}

/// Lahiri ayanamsha in degrees.
pub fn lahiri_deg(t_centuries: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_arcsec(t_centuries) / 3600.0
}

/// Tropical longitude of date to sidereal, both in degrees [0, 360).
pub fn tropical_to_sidereal(tropical_deg: f64, t_centuries: f64) -> f64 {
    (tropical_deg - lahiri_deg(t_centuries)).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value_at_epoch() {
        assert_eq!(lahiri_deg(0.0), LAHIRI_J2000_DEG);
    }

    #[test]
    fn precession_one_century() {
        let p = general_precession_arcsec(1.0);
        assert!((p - 5029.90).abs() < 0.1, "p_A(1) = {p}");
    }

    #[test]
    fn lahiri_2024_near_24_19() {
        let t = 24.04 / 100.0;
        let a = lahiri_deg(t);
        assert!((a - 24.19).abs() < 0.01, "ayanamsha 2024 = {a}");
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let s = tropical_to_sidereal(10.0, 0.0);
        assert!((s - (360.0 + 10.0 - LAHIRI_J2000_DEG)).abs() < 1e-12);
    }
}
