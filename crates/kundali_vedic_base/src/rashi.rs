//! Rashi (zodiac sign) classification and DMS formatting.
//!
//! The sidereal ecliptic is divided into 12 signs of 30° each starting from
//! Mesha at 0°. Each sign has a modality (movable, fixed, dual) repeating in
//! blocks of three, used for navamsa.

use crate::graha::{Graha, rashi_lord};
use crate::util::{normalize_360, sector_index};

/// The 12 rashis starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Sign modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Chara.
    Movable,
    /// Sthira.
    Fixed,
    /// Dwiswabhava.
    Dual,
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Movable => "movable",
            Self::Fixed => "fixed",
            Self::Dual => "dual",
        }
    }
}

impl Rashi {
    /// Canonical name, used as the chart label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrishchika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for an index, wrapping modulo 12.
    pub const fn from_index(idx: u8) -> Rashi {
        ALL_RASHIS[(idx % 12) as usize]
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds, truncated toward zero at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}° {:02}' {:02}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Split a non-negative angle into truncated degrees, minutes, seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.trunc();
    let minutes_full = (d - degrees) * 60.0;
    let minutes = minutes_full.trunc();
    let seconds = ((minutes_full - minutes) * 60.0).trunc();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: seconds as u8,
    }
}

/// `{d}° {mm}' {ss}″`.
pub fn format_dms(deg: f64) -> String {
    deg_to_dms(deg).to_string()
}

/// Rashi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Decimal degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

impl RashiInfo {
    pub fn dms(&self) -> Dms {
        deg_to_dms(self.degrees_in_rashi)
    }
}

/// Rashi index of a sidereal longitude; equal for `L` and `L + 360k`.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    sector_index(normalize_360(sidereal_lon_deg), 30.0, 12)
}

/// Determine the rashi from a sidereal longitude in degrees.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = sector_index(lon, 30.0, 12);
    RashiInfo {
        rashi: Rashi::from_index(idx),
        degrees_in_rashi: lon % 30.0,
    }
}
