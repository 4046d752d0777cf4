//! Greenwich and local mean sidereal time.
//!
//! Input is a UT Julian Date; the difference between UT1 and UTC (below one
//! second) is ignored at the precision the ascendant needs.
//!
//! Sources:
//! - Earth Rotation Angle: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / 648_000.0;

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let poly = 0.014_506
        + t * (4_612.156_534
            + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 - t * 0.000_000_036_8))));
    (earth_rotation_angle_rad(jd_ut) + poly * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time in radians for an east-positive longitude in degrees.
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}
