//! Rotating anga labels for the daily almanac.
//!
//! These are not lunar computations: each anga is read from a fixed list
//! at `(ordinal + offset) mod len`, where `ordinal` counts days from
//! 0001-01-01 = 1.

use chrono::NaiveDate;
use kundali_time::day_ordinal;

pub const TITHIS: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima/Amavasya",
];

pub const NAKSHATRAS: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashirsha",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purvashada",
    "Uttarashada",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

pub const YOGAS: [&str; 8] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
];

pub const KARANAS: [&str; 10] = [
    "Bava",
    "Balava",
    "Kaulava",
    "Taitila",
    "Garaja",
    "Vanija",
    "Vishti",
    "Shakuni",
    "Chatushpada",
    "Naga",
];

/// The four rotated angas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anga {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

impl Anga {
    pub const fn table(self) -> &'static [&'static str] {
        match self {
            Self::Tithi => &TITHIS,
            Self::Nakshatra => &NAKSHATRAS,
            Self::Yoga => &YOGAS,
            Self::Karana => &KARANAS,
        }
    }

    pub const fn offset(self) -> i64 {
        match self {
            Self::Tithi => 0,
            Self::Nakshatra => 3,
            Self::Yoga => 5,
            Self::Karana => 7,
        }
    }

    /// Label for `date`.
    pub fn name_on(self, date: NaiveDate) -> &'static str {
        let table = self.table();
        let idx = (day_ordinal(date) + self.offset()).rem_euclid(table.len() as i64);
        table[idx as usize]
    }
}
