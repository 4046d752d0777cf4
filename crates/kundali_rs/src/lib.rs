//! Convenience facade for the kundali crates.
//!
//! A [`Kundali`] holds an ephemeris and the location collaborators, and
//! exposes async entry points that accept plain request structs.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundali_rs::*;
//!
//! let kundali = Kundali::from_settings(&Settings::from_env()?)?;
//! let chart = kundali
//!     .horoscope(HoroscopeRequest {
//!         date: "2024-01-15".into(),
//!         time: "06:30".into(),
//!         lat: 13.0827,
//!         lon: 80.2707,
//!         tz: "Asia/Kolkata".into(),
//!         place_name: Some("Chennai".into()),
//!         language: "en".into(),
//!     })
//!     .await?;
//! println!("{}", chart.summary);
//! ```

pub mod context;
pub mod error;

pub use context::{Kundali, KundaliBuilder, panchang_cache_key};
pub use error::{ErrorKind, KundaliError};

// Re-export request and result types so callers need only this crate.
pub use kundali_config::{Settings, TracingConfig};
pub use kundali_engine::{
    EngineError, HoroscopeRequest, HoroscopeResult, MahadasaEntry, PanchangRequest,
    PanchangResult,
};
pub use kundali_ephem::{Body, Ephemeris, MeanElementsEphemeris};
pub use kundali_locate::{
    AliasRecord, AliasStore, GeoPlace, Geocoder, KvCache, LocateError, MemoryAliasStore,
    MemoryCache, ResolvedBy, ResolvedPlace, TimezoneGuesser,
};
pub use kundali_vedic_base::{BhuktiOrder, DashaVariation, Language};
