//! The [`Kundali`] context: engines plus their injected collaborators.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use kundali_config::Settings;
use kundali_engine::{
    EngineError, HoroscopeRequest, HoroscopeResult, MahadasaEntry, PanchangRequest,
    PanchangResult, check_coordinates, daily_panchangam, generate_horoscope, mahadasa_entries,
};
use kundali_ephem::{Ephemeris, MeanElementsEphemeris};
use kundali_locate::{
    AliasStore, Geocoder, KvCache, LocateError, LocationResolver, MemoryAliasStore, MemoryCache,
    NominatimGeocoder, NoopGeocoder, NoopGuesser, OpenAiTimezoneGuesser, ResolvedBy,
    ResolvedPlace, TimezoneGuesser, TimezoneResolver,
};
use kundali_time::Tz;
use kundali_vedic_base::{DashaVariation, Language, vimshottari_timeline};
use tracing::{debug, info, instrument, warn};

use crate::error::KundaliError;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// Cache key for a panchangam request.
pub fn panchang_cache_key(request: &PanchangRequest) -> String {
    let locale = Language::from_locale(request.locale.as_deref());
    format!(
        "panchang:{}:{:.4}:{:.4}:{}:{}",
        request.date.trim(),
        request.lat,
        request.lon,
        request.tz.trim(),
        locale.code()
    )
}

/// Shared entry point. Cheap to clone; collaborators are reference counted.
#[derive(Clone)]
pub struct Kundali {
    ephemeris: Option<Arc<dyn Ephemeris>>,
    timezones: TimezoneResolver,
    locations: LocationResolver,
    cache: Arc<dyn KvCache>,
    cache_ttl: Duration,
    variation: DashaVariation,
}

impl std::fmt::Debug for Kundali {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kundali")
            .field("ephemeris", &self.ephemeris.as_ref().map(|e| e.name().to_string()))
            .field("cache_ttl", &self.cache_ttl)
            .field("variation", &self.variation)
            .finish_non_exhaustive()
    }
}

impl Kundali {
    pub fn builder() -> KundaliBuilder {
        KundaliBuilder::default()
    }

    /// Wire up the network collaborators described by `settings`.
    ///
    /// The AI guesser is only enabled when an API key is present.
    pub fn from_settings(settings: &Settings) -> Result<Self, KundaliError> {
        settings.validate()?;
        let timeout = settings.external_timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LocateError::from)?;

        let guesser: Arc<dyn TimezoneGuesser> = if settings.ai_enabled() {
            Arc::new(OpenAiTimezoneGuesser::new(
                client.clone(),
                settings.openai_base_url.clone(),
                settings.openai_api_key.clone(),
                settings.openai_model.clone(),
                timeout,
            ))
        } else {
            Arc::new(NoopGuesser)
        };
        let geocoder = NominatimGeocoder::new(
            client,
            settings.geocoder_base_url.clone(),
            settings.user_agent.clone(),
            timeout,
        );
        info!(ai_guesser = settings.ai_enabled(), "kundali context configured");

        Ok(Self::builder()
            .ephemeris(Arc::new(MeanElementsEphemeris::new()))
            .guesser(guesser)
            .geocoder(Arc::new(geocoder))
            .cache_ttl(settings.panchang_cache_ttl())
            .fallback_timezone(settings.fallback_timezone.clone())
            .build())
    }

    /// Same collaborators, different dasha rules.
    pub fn with_variation(mut self, variation: DashaVariation) -> Self {
        self.variation = variation;
        self
    }

    pub fn timezones(&self) -> &TimezoneResolver {
        &self.timezones
    }

    pub fn variation(&self) -> DashaVariation {
        self.variation
    }

    /// Birth chart. Runs on the blocking pool.
    #[instrument(skip(self, request), fields(date = %request.date, tz = %request.tz))]
    pub async fn horoscope(&self, request: HoroscopeRequest) -> Result<HoroscopeResult, KundaliError> {
        let ephemeris = self.ephemeris.clone();
        let variation = self.variation;
        let result = tokio::task::spawn_blocking(move || {
            generate_horoscope(ephemeris.as_deref(), &request, variation)
        })
        .await??;
        Ok(result)
    }

    /// Resolve a timezone identifier, falling back to a guess from the
    /// coordinates.
    pub async fn resolve_timezone(&self, identifier: &str, lat: f64, lon: f64) -> Option<(Tz, ResolvedBy)> {
        self.timezones.resolve_or_locate(identifier, lat, lon).await
    }

    /// Daily almanac, memoized per date, location, zone, and locale.
    #[instrument(skip(self, request), fields(date = %request.date, tz = %request.tz))]
    pub async fn panchangam(&self, request: PanchangRequest) -> Result<PanchangResult, KundaliError> {
        check_coordinates(request.lat, request.lon)?;
        let key = panchang_cache_key(&request);
        if let Some(hit) = self.cache.get(&key).await {
            match serde_json::from_str::<PanchangResult>(&hit) {
                Ok(mut cached) => {
                    debug!(%key, "panchangam cache hit");
                    cached.meta.location.lat = request.lat;
                    cached.meta.location.lon = request.lon;
                    cached.meta.location.name = request.location_name.clone();
                    return Ok(cached);
                }
                Err(err) => warn!(%key, %err, "discarding unreadable cache entry"),
            }
        }

        let (zone, by) = self
            .resolve_timezone(&request.tz, request.lat, request.lon)
            .await
            .ok_or_else(|| EngineError::InvalidTimezone(request.tz.clone()))?;
        debug!(zone = zone.name(), ?by, "timezone resolved");

        let result = daily_panchangam(&request, zone)?;
        match serde_json::to_string(&result) {
            Ok(json) => self.cache.put(&key, json, self.cache_ttl).await,
            Err(err) => warn!(%key, %err, "panchangam not cached"),
        }
        Ok(result)
    }

    /// Coordinates, label, and zone for a place name.
    pub async fn locate_place(&self, place: &str) -> Result<Option<ResolvedPlace>, KundaliError> {
        Ok(self.locations.resolve_place(place).await?)
    }

    /// Label and zone for a coordinate pair.
    pub async fn locate_coords(&self, lat: f64, lon: f64) -> Result<Option<ResolvedPlace>, KundaliError> {
        Ok(self.locations.resolve_coords(lat, lon).await?)
    }

    /// Vimshottari timeline from a sidereal Moon longitude, without a chart.
    pub fn dasha(&self, moon_sidereal_lon: f64, birth: DateTime<Utc>, lang: Language) -> Vec<MahadasaEntry> {
        let timeline = vimshottari_timeline(moon_sidereal_lon, birth, self.variation);
        mahadasa_entries(&timeline, lang)
    }
}

/// Builder for [`Kundali`]. Unset collaborators fall back to in-memory or
/// no-op implementations; an unset ephemeris stays absent.
#[derive(Default)]
pub struct KundaliBuilder {
    ephemeris: Option<Arc<dyn Ephemeris>>,
    aliases: Option<Arc<dyn AliasStore>>,
    guesser: Option<Arc<dyn TimezoneGuesser>>,
    geocoder: Option<Arc<dyn Geocoder>>,
    cache: Option<Arc<dyn KvCache>>,
    cache_ttl: Option<Duration>,
    fallback_timezone: Option<String>,
    variation: DashaVariation,
}

impl KundaliBuilder {
    pub fn ephemeris(mut self, ephemeris: Arc<dyn Ephemeris>) -> Self {
        self.ephemeris = Some(ephemeris);
        self
    }

    pub fn aliases(mut self, aliases: Arc<dyn AliasStore>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    pub fn guesser(mut self, guesser: Arc<dyn TimezoneGuesser>) -> Self {
        self.guesser = Some(guesser);
        self
    }

    pub fn geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    pub fn cache(mut self, cache: Arc<dyn KvCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn fallback_timezone(mut self, tz: impl Into<String>) -> Self {
        self.fallback_timezone = Some(tz.into());
        self
    }

    pub fn variation(mut self, variation: DashaVariation) -> Self {
        self.variation = variation;
        self
    }

    pub fn build(self) -> Kundali {
        let aliases = self
            .aliases
            .unwrap_or_else(|| Arc::new(MemoryAliasStore::new()));
        let guesser = self.guesser.unwrap_or_else(|| Arc::new(NoopGuesser));
        let geocoder = self.geocoder.unwrap_or_else(|| Arc::new(NoopGeocoder));
        Kundali {
            ephemeris: self.ephemeris,
            timezones: TimezoneResolver::new(aliases.clone(), guesser.clone()),
            locations: LocationResolver::new(
                aliases,
                geocoder,
                guesser,
                self.fallback_timezone.unwrap_or_else(|| "UTC".to_string()),
            ),
            cache: self.cache.unwrap_or_else(|| Arc::new(MemoryCache::new())),
            cache_ttl: self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
            variation: self.variation,
        }
    }
}
