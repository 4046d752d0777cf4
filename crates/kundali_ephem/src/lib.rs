//! Sidereal ephemeris contract and providers.
//!
//! Every provider answers in sidereal ecliptic longitude (Lahiri
//! ayanamsha), degrees in [0, 360). [`MeanElementsEphemeris`] is an
//! analytic provider that works without kernel files.

pub mod ayanamsha;
pub mod body;
pub mod delta_t;
pub mod error;
pub mod kepler;
pub mod lagna;
pub mod mean_elements;
pub mod moon;
pub mod nodes;
pub mod time;

pub use ayanamsha::{LAHIRI_J2000_DEG, lahiri_deg, tropical_to_sidereal};
pub use body::{ALL_BODIES, Body};
pub use error::EphemError;
pub use mean_elements::MeanElementsEphemeris;
pub use time::AstroTime;

/// Source of sidereal longitudes.
pub trait Ephemeris: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Sidereal longitude of `body` in degrees [0, 360).
    fn longitude(&self, body: Body, t: AstroTime) -> Result<f64, EphemError>;

    /// Sidereal ascendant for a geographic latitude and east longitude.
    fn ascendant(&self, t: AstroTime, lat: f64, lon: f64) -> Result<f64, EphemError>;
}

/// Reject non-finite output and fold the value into [0, 360).
pub fn checked_longitude(label: &'static str, value: f64) -> Result<f64, EphemError> {
    if !value.is_finite() {
        return Err(EphemError::Malformed { body: label, value });
    }
    let r = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negatives.
    Ok(if r >= 360.0 { 0.0 } else { r })
}
