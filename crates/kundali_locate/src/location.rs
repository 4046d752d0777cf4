//! Resolve a place name or coordinates to coordinates, a label, and a zone.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::alias::{AliasRecord, AliasStore};
use crate::error::LocateResult;
use crate::geocoder::{GeoPlace, Geocoder};
use crate::guesser::TimezoneGuesser;

/// A located place. Coordinates can be missing for a cached name alias
/// that was stored without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub tz: String,
    pub name: String,
}

/// Coordinate key used for alias lookups: four decimals.
pub fn coord_key(v: f64) -> String {
    format!("{v:.4}")
}

#[derive(Clone)]
pub struct LocationResolver {
    aliases: Arc<dyn AliasStore>,
    geocoder: Arc<dyn Geocoder>,
    guesser: Arc<dyn TimezoneGuesser>,
    fallback_timezone: String,
}

impl LocationResolver {
    pub fn new(
        aliases: Arc<dyn AliasStore>,
        geocoder: Arc<dyn Geocoder>,
        guesser: Arc<dyn TimezoneGuesser>,
        fallback_timezone: impl Into<String>,
    ) -> Self {
        Self {
            aliases,
            geocoder,
            guesser,
            fallback_timezone: fallback_timezone.into(),
        }
    }

    async fn zone_for(&self, place: &GeoPlace) -> String {
        self.guesser
            .guess_from_coordinates(place.lat, place.lon)
            .await
            .unwrap_or_else(|| self.fallback_timezone.clone())
    }

    /// Look up a place by name.
    #[instrument(skip(self))]
    pub async fn resolve_place(&self, place: &str) -> LocateResult<Option<ResolvedPlace>> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(None);
        }
        if let Some(hit) = self.aliases.lookup(place).await.filter(|r| !r.timezone.is_empty()) {
            debug!(title = %hit.title, "place alias hit");
            return Ok(Some(ResolvedPlace {
                lat: hit.lat.as_deref().and_then(|s| s.parse().ok()),
                lon: hit.lon.as_deref().and_then(|s| s.parse().ok()),
                name: if hit.title.is_empty() { place.to_string() } else { hit.title },
                tz: hit.timezone,
            }));
        }

        let Some(found) = self.geocoder.search(place).await? else {
            return Ok(None);
        };
        let tz = self.zone_for(&found).await;
        let name = if found.label.is_empty() { place.to_string() } else { found.label };
        self.aliases
            .upsert(
                AliasRecord::new(name.clone(), tz.clone())
                    .with_coords(found.lat.to_string(), found.lon.to_string()),
            )
            .await;
        Ok(Some(ResolvedPlace {
            lat: Some(found.lat),
            lon: Some(found.lon),
            tz,
            name,
        }))
    }

    /// Look up the place at a coordinate pair.
    #[instrument(skip(self))]
    pub async fn resolve_coords(&self, lat: f64, lon: f64) -> LocateResult<Option<ResolvedPlace>> {
        let (lat_key, lon_key) = (coord_key(lat), coord_key(lon));
        if let Some(hit) = self
            .aliases
            .lookup_by_coords(&lat_key, &lon_key)
            .await
            .filter(|r| !r.timezone.is_empty())
        {
            debug!(title = %hit.title, "coordinate alias hit");
            return Ok(Some(ResolvedPlace {
                lat: Some(hit.lat.as_deref().and_then(|s| s.parse().ok()).unwrap_or(lat)),
                lon: Some(hit.lon.as_deref().and_then(|s| s.parse().ok()).unwrap_or(lon)),
                tz: hit.timezone,
                name: hit.title,
            }));
        }

        let Some(found) = self.geocoder.reverse(lat, lon).await? else {
            return Ok(None);
        };
        let tz = self.zone_for(&found).await;
        self.aliases
            .upsert(AliasRecord::new(found.label.clone(), tz.clone()).with_coords(lat_key, lon_key))
            .await;
        Ok(Some(ResolvedPlace {
            lat: Some(found.lat),
            lon: Some(found.lon),
            tz,
            name: found.label,
        }))
    }
}
