//! Nakshatra (lunar mansion) and pada classification, 27-fold scheme.
//!
//! Each nakshatra spans 13°20′ and has 4 padas of 3°20′. Lordship follows
//! the Vimshottari cycle, each lord taking three consecutive nakshatras.

use crate::graha::{Graha, VIMSHOTTARI_SEQUENCE};
use crate::util::{floor_div_mod, normalize_360};

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Display name (Tamil-tradition transliteration).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krithika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshta",
            Self::Mula => "Moola",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (0 = Ashwini).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ashwini, Bharani, Krittika → Ketu; Rohini, Mrigashira, Ardra → Venus; …
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_SEQUENCE[(self.index() / 3) as usize]
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Result of a 27-nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN_27
    }
}

/// Determine nakshatra and pada from a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let (q, degrees_in_nakshatra) = floor_div_mod(lon, NAKSHATRA_SPAN_27);
    let idx = (q as i64).rem_euclid(27) as usize;
    let (pada_q, _) = floor_div_mod(degrees_in_nakshatra, PADA_SPAN);
    let pada = (pada_q.clamp(0.0, 3.0) as u8) + 1;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[idx],
        pada,
        degrees_in_nakshatra,
    }
}
