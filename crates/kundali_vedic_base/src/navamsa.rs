//! Navamsa (D9) sign derivation.
//!
//! Each rashi is split into 9 parts of 3°20′. The navamsa sign is the
//! part number counted from a start sign fixed by the rashi's modality:
//! movable → Mesha, fixed → Simha, dual → Dhanu.

use crate::rashi::{Modality, Rashi, rashi_from_longitude};
use crate::util::floor_div_mod;

/// Width of one navamsa part.
pub const NAVAMSA_SPAN: f64 = 30.0 / 9.0;

/// Start sign index for a modality.
pub const fn navamsa_start(modality: Modality) -> u8 {
    match modality {
        Modality::Movable => 0,
        Modality::Fixed => 4,
        Modality::Dual => 8,
    }
}

/// Navamsa sign index [0, 12) of a sidereal longitude.
pub fn navamsa_index(sidereal_lon_deg: f64) -> u8 {
    let info = rashi_from_longitude(sidereal_lon_deg);
    let (part, _) = floor_div_mod(info.degrees_in_rashi, NAVAMSA_SPAN);
    let part = part.clamp(0.0, 8.0) as u8;
    (navamsa_start(info.rashi.modality()) + part) % 12
}

/// Navamsa sign of a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    Rashi::from_index(navamsa_index(sidereal_lon_deg))
}
