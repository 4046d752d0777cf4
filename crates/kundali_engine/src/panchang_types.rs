//! Types for daily Panchangam requests and results.

use serde::{Deserialize, Serialize};

use crate::windows::Phase;

/// Inputs for one day's almanac.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub lat: f64,
    pub lon: f64,
    /// Timezone as supplied by the caller, before resolution.
    pub tz: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Auspicious,
    Avoid,
    Neutral,
}

/// A rendered time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingWindow {
    pub start: String,
    pub end: String,
    pub label: String,
    pub kind: WindowKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMeta {
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangMeta {
    pub date: String,
    /// Identifier as requested.
    pub timezone: String,
    /// IANA zone actually used.
    pub resolved_timezone: String,
    pub location: LocationMeta,
    pub hindu_day: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub next_sunrise: String,
    pub day_length_minutes: i64,
    pub night_length_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vara {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngaEntry {
    pub name: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanchangElements {
    pub vara: Vara,
    pub tithi: Vec<AngaEntry>,
    pub nakshatra: Vec<AngaEntry>,
    pub yoga: Vec<AngaEntry>,
    pub karana: Vec<AngaEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    pub rahu_kalam: Vec<TimingWindow>,
    pub yamagandam: Vec<TimingWindow>,
    pub gulikai: Vec<TimingWindow>,
    pub durmuhurtam: Vec<TimingWindow>,
    pub varjyam: Vec<TimingWindow>,
    pub brahma_muhurta: Vec<TimingWindow>,
    pub abhijit_muhurta: Vec<TimingWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub code: String,
    pub text: String,
}

/// Complete daily almanac.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangResult {
    pub meta: PanchangMeta,
    pub astronomy: Astronomy,
    pub panchang: PanchangElements,
    pub timings: Timings,
    pub notes: Vec<Note>,
}
