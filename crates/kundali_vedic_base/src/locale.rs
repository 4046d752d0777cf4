//! Localized labels for charts, birth details, and weekdays.
//!
//! Three languages are supported: English, Tamil, Hindi. Every table is an
//! exhaustive match, so a missing entry is a compile error rather than a
//! runtime fallback.

use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::Rashi;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
    Hi,
}

pub const ALL_LANGUAGES: [Language; 3] = [Language::En, Language::Ta, Language::Hi];

impl Language {
    /// Lowercase ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ta => "ta",
            Self::Hi => "hi",
        }
    }

    /// Lenient parse for optional locales: unknown or absent → English.
    pub fn from_locale(locale: Option<&str>) -> Language {
        locale.and_then(|l| l.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = VedicError;

    /// Case-insensitive; an empty string means English.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "en" => Ok(Self::En),
            "ta" => Ok(Self::Ta),
            "hi" => Ok(Self::Hi),
            _ => Err(VedicError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Full rashi name. English uses the canonical Sanskrit transliteration.
pub const fn rashi_name(rashi: Rashi, lang: Language) -> &'static str {
    use Rashi::*;
    match lang {
        Language::En => rashi.name(),
        Language::Ta => match rashi {
            Mesha => "மேஷம்",
            Vrishabha => "ரிஷபம்",
            Mithuna => "மிதுனம்",
            Karka => "கடகம்",
            Simha => "சிம்மம்",
            Kanya => "கன்னி",
            Tula => "துலாம்",
            Vrishchika => "விருச்சிகம்",
            Dhanu => "தனுசு",
            Makara => "மகரம்",
            Kumbha => "கும்பம்",
            Meena => "மீனம்",
        },
        Language::Hi => match rashi {
            Mesha => "मेष",
            Vrishabha => "वृषभ",
            Mithuna => "मिथुन",
            Karka => "कर्क",
            Simha => "सिंह",
            Kanya => "कन्या",
            Tula => "तुला",
            Vrishchika => "वृश्चिक",
            Dhanu => "धनु",
            Makara => "मकर",
            Kumbha => "कुंभ",
            Meena => "मीन",
        },
    }
}

/// Abbreviated rashi name.
pub const fn rashi_abbr(rashi: Rashi, lang: Language) -> &'static str {
    use Rashi::*;
    match lang {
        Language::En => match rashi {
            Mesha => "Ar",
            Vrishabha => "Ta",
            Mithuna => "Ge",
            Karka => "Ca",
            Simha => "Le",
            Kanya => "Vi",
            Tula => "Li",
            Vrishchika => "Sc",
            Dhanu => "Sg",
            Makara => "Cp",
            Kumbha => "Aq",
            Meena => "Pi",
        },
        Language::Ta => match rashi {
            Mesha => "மே",
            Vrishabha => "ரி",
            Mithuna => "மி",
            Karka => "க",
            Simha => "சி",
            Kanya => "கந்",
            Tula => "து",
            Vrishchika => "வி",
            Dhanu => "த",
            Makara => "ம",
            Kumbha => "கு",
            Meena => "மீ",
        },
        Language::Hi => match rashi {
            Mesha => "मे",
            Vrishabha => "वृ",
            Mithuna => "मि",
            Karka => "क",
            Simha => "सिं",
            Kanya => "कन",
            Tula => "तु",
            Vrishchika => "वृश",
            Dhanu => "ध",
            Makara => "मक",
            Kumbha => "कुं",
            Meena => "मीन",
        },
    }
}

/// A point that appears in a chart: one of the grahas or the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    Graha(Graha),
    Ascendant,
}

impl ChartPoint {
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Ascendant => "Ascendant",
        }
    }
}

/// Abbreviated body label used in charts, placements, and dasha names.
pub const fn point_abbr(point: ChartPoint, lang: Language) -> &'static str {
    use Graha::*;
    let graha = match point {
        ChartPoint::Ascendant => {
            return match lang {
                Language::En => "Asc",
                Language::Ta => "லக",
                Language::Hi => "लग",
            };
        }
        ChartPoint::Graha(g) => g,
    };
    match lang {
        Language::En => match graha {
            Surya => "Su",
            Chandra => "Mo",
            Buddh => "Me",
            Shukra => "Ve",
            Mangal => "Ma",
            Guru => "Ju",
            Shani => "Sa",
            Rahu => "Ra",
            Ketu => "Ke",
        },
        Language::Ta => match graha {
            Surya => "சூ",
            Chandra => "சந்",
            Buddh => "பு",
            Shukra => "வி",
            Mangal => "செ",
            Guru => "கு",
            Shani => "சன",
            Rahu => "ரா",
            Ketu => "கே",
        },
        Language::Hi => match graha {
            Surya => "सू",
            Chandra => "चं",
            Buddh => "बु",
            Shukra => "शु",
            Mangal => "मं",
            Guru => "गु",
            Shani => "श",
            Rahu => "रा",
            Ketu => "के",
        },
    }
}

/// Abbreviated graha label.
pub const fn graha_abbr(graha: Graha, lang: Language) -> &'static str {
    point_abbr(ChartPoint::Graha(graha), lang)
}

/// Weekday name.
pub const fn weekday_name(day: Weekday, lang: Language) -> &'static str {
    use Weekday::*;
    match lang {
        Language::En => match day {
            Mon => "Monday",
            Tue => "Tuesday",
            Wed => "Wednesday",
            Thu => "Thursday",
            Fri => "Friday",
            Sat => "Saturday",
            Sun => "Sunday",
        },
        Language::Ta => match day {
            Mon => "திங்கள்",
            Tue => "செவ்வாய்",
            Wed => "புதன்",
            Thu => "வியாழன்",
            Fri => "வெள்ளி",
            Sat => "சனி",
            Sun => "ஞாயிறு",
        },
        Language::Hi => match day {
            Mon => "सोमवार",
            Tue => "मंगलवार",
            Wed => "बुधवार",
            Thu => "गुरुवार",
            Fri => "शुक्रवार",
            Sat => "शनिवार",
            Sun => "रविवार",
        },
    }
}

/// Rows of the birth-detail summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailLabel {
    Ascendant,
    AscendantLord,
    Weekday,
    Nakshatra,
    NakshatraLord,
    Rasi,
    RasiLord,
}

/// Display order of the birth details.
pub const DETAIL_ORDER: [DetailLabel; 7] = [
    DetailLabel::Ascendant,
    DetailLabel::AscendantLord,
    DetailLabel::Weekday,
    DetailLabel::Nakshatra,
    DetailLabel::NakshatraLord,
    DetailLabel::Rasi,
    DetailLabel::RasiLord,
];

impl DetailLabel {
    pub const fn text(self, lang: Language) -> &'static str {
        use DetailLabel::*;
        match (self, lang) {
            (Ascendant, Language::En) => "Ascendant",
            (Ascendant, Language::Ta) => "லக்கணம்",
            (Ascendant, Language::Hi) => "लग्न",
            (AscendantLord, Language::En) => "Ascendant Lord",
            (AscendantLord, Language::Ta) => "லக்கண அதிபதி",
            (AscendantLord, Language::Hi) => "लग्नेश",
            (Weekday, Language::En) => "Weekday",
            (Weekday, Language::Ta) => "கிழமை",
            (Weekday, Language::Hi) => "वार",
            (Nakshatra, Language::En) => "Nakshatra",
            (Nakshatra, Language::Ta) => "நட்சத்திரம்",
            (Nakshatra, Language::Hi) => "नक्षत्र",
            (NakshatraLord, Language::En) => "Nakshatra Lord",
            (NakshatraLord, Language::Ta) => "நட்சத்திர அதிபதி",
            (NakshatraLord, Language::Hi) => "नक्षत्र स्वामी",
            (Rasi, Language::En) => "Rasi",
            (Rasi, Language::Ta) => "ராசி",
            (Rasi, Language::Hi) => "राशि",
            (RasiLord, Language::En) => "Rasi Lord",
            (RasiLord, Language::Ta) => "ராசி அதிபதி",
            (RasiLord, Language::Hi) => "राशि स्वामी",
        }
    }
}

/// One-line horoscope summary.
pub fn horoscope_summary(lang: Language, date: &str, time: &str, place: &str, tz: &str) -> String {
    match lang {
        Language::En => format!("Horoscope generated for {date} {time} @ {place} ({tz}) [en]"),
        Language::Ta => format!("{date} {time} @ {place} ({tz}) - ஜாதகம் உருவாக்கப்பட்டது"),
        Language::Hi => format!("{date} {time} @ {place} ({tz}) - कुंडली तैयार की गई"),
    }
}
