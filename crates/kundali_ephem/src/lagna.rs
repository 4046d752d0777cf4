//! Ascendant (Lagna) longitude.
//!
//! The ascendant is the ecliptic point rising on the eastern horizon:
//!
//! `λ = atan2(cos θ, −(sin θ · cos ε + tan φ · sin ε))`
//!
//! with θ the local sidereal time, ε the obliquity, φ the geographic
//! latitude (Meeus, *Astronomical Algorithms*, ch. 14, quadrant-resolved).

use std::f64::consts::TAU;

use kundali_time::local_sidereal_time_rad;

/// Mean obliquity of the ecliptic of date in radians (IAU 2006).
pub fn mean_obliquity_rad(t: f64) -> f64 {
    let arcsec = 84_381.406
        + t * (-46.836_769
            + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-0.000_000_576 - t * 0.000_000_043_4))));
    (arcsec / 3600.0).to_radians()
}

/// Ecliptic longitude of the ascendant for a local sidereal time, radians [0, 2π).
pub fn ascendant_from_lst_rad(lst_rad: f64, obliquity_rad: f64, latitude_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * obliquity_rad.cos() + phi.tan() * obliquity_rad.sin()),
    );
    asc.rem_euclid(TAU)
}

/// Tropical ascendant of date in degrees [0, 360).
pub fn tropical_ascendant_deg(jd_ut: f64, t_tt: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_rad(jd_ut, longitude_deg);
    ascendant_from_lst_rad(lst, mean_obliquity_rad(t_tt), latitude_deg).to_degrees()
}
