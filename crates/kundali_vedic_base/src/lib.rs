//! Vedic astrology primitives for chart construction.
//!
//! This crate provides:
//! - Rashi (sign) classification, modality, lordship, and DMS formatting
//! - Nakshatra and pada classification with Vimshottari lordship
//! - Navamsa (D9) derivation
//! - Vimshottari mahadasha/bhukti timelines
//! - English, Tamil, and Hindi label tables
//!
//! All functions are pure; longitudes are sidereal degrees.

pub mod dasha;
pub mod error;
pub mod graha;
pub mod locale;
pub mod nakshatra;
pub mod navamsa;
pub mod rashi;
pub mod util;

pub use dasha::{
    BhuktiOrder, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaVariation, Mahadasha,
    nakshatra_birth_balance, vimshottari_timeline,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, rashi_lord};
pub use locale::{
    ALL_LANGUAGES, ChartPoint, DETAIL_ORDER, DetailLabel, Language, graha_abbr, horoscope_summary,
    point_abbr, rashi_abbr, rashi_name, weekday_name,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use navamsa::{navamsa_index, navamsa_rashi};
pub use rashi::{
    ALL_RASHIS, Dms, Modality, Rashi, RashiInfo, deg_to_dms, format_dms, rashi_from_longitude,
    rashi_index,
};
pub use util::normalize_360;
