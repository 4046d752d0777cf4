//! Types for horoscope requests and results.

use kundali_vedic_base::{ChartPoint, Language, NakshatraInfo, Rashi, RashiInfo};
use serde::{Deserialize, Serialize};

/// Birth data for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Local clock time `H:M[:S]`.
    pub time: String,
    pub lat: f64,
    pub lon: f64,
    /// IANA zone identifier.
    pub tz: String,
    #[serde(default)]
    pub place_name: Option<String>,
    /// `en`, `ta` or `hi`; empty means `en`.
    #[serde(default)]
    pub language: String,
}

/// One body (or the ascendant) placed in the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub point: ChartPoint,
    /// Sidereal longitude in degrees [0, 360).
    pub longitude: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    pub navamsa: Rashi,
}

/// A chart cell: one sign and the bodies it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCell {
    pub label: String,
    pub short_label: String,
    pub bodies: String,
}

/// Twelve sign cells as 3 rows of 4, Mesha first.
pub type ChartGrid = [[ChartCell; 4]; 3];

/// Display form of a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: String,
    pub position: String,
    pub degree: String,
    pub rasi: String,
    pub rasi_lord: String,
    pub nakshatra: String,
    pub nakshatra_lord: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pada: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeMeta {
    pub methodology: String,
    pub ayanamsa: String,
    pub house_system: String,
    pub tz: String,
    pub lat: f64,
    pub lon: f64,
    pub place_name: String,
    pub ascendant: String,
    pub ascendant_en: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BhuktiEntry {
    pub name: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MahadasaEntry {
    pub name: String,
    pub start: String,
    pub end: String,
    pub bhuktis: Vec<BhuktiEntry>,
}

/// Complete horoscope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeResult {
    pub summary: String,
    pub rasi_chart: ChartGrid,
    pub navamsa_chart: ChartGrid,
    pub planet_positions: Vec<PlanetPosition>,
    pub birth_details: Vec<BirthDetail>,
    pub meta: HoroscopeMeta,
    pub mahadasas: Vec<MahadasaEntry>,
    /// Numeric placements behind `planet_positions`, in the same order.
    #[serde(skip)]
    pub placements: Vec<Placement>,
}
