//! Vedic planet (graha) enum, rashi lordship, and Vimshottari periods.
//!
//! The 9 grahas in chart order: Sun, Moon, Mercury, Venus, Mars, Jupiter,
//! Saturn, Rahu, Ketu. Lord names used in output are the English ones.

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Buddh,
    Shukra,
    Mangal,
    Guru,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart placement order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Vimshottari cycle: also the nakshatra-lord order, three nakshatras each.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Total Vimshottari cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Buddh => "Buddh",
            Self::Shukra => "Shukra",
            Self::Mangal => "Mangal",
            Self::Guru => "Guru",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name, as used for lords in chart output.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Buddh => "Mercury",
            Self::Shukra => "Venus",
            Self::Mangal => "Mars",
            Self::Guru => "Jupiter",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in chart order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Buddh => 2,
            Self::Shukra => 3,
            Self::Mangal => 4,
            Self::Guru => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Vimshottari mahadasha length in years.
    pub const fn vimshottari_years(self) -> f64 {
        match self {
            Self::Ketu => 7.0,
            Self::Shukra => 20.0,
            Self::Surya => 6.0,
            Self::Chandra => 10.0,
            Self::Mangal => 7.0,
            Self::Rahu => 18.0,
            Self::Guru => 16.0,
            Self::Shani => 19.0,
            Self::Buddh => 17.0,
        }
    }

    /// Position in [`VIMSHOTTARI_SEQUENCE`].
    pub const fn vimshottari_index(self) -> usize {
        match self {
            Self::Ketu => 0,
            Self::Shukra => 1,
            Self::Surya => 2,
            Self::Chandra => 3,
            Self::Mangal => 4,
            Self::Rahu => 5,
            Self::Guru => 6,
            Self::Shani => 7,
            Self::Buddh => 8,
        }
    }

    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

/// Ruling graha of a rashi.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrishchika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}
