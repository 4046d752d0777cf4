//! Place-name and coordinate lookup against a Nominatim-compatible service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::error::{LocateError, LocateResult};

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPlace {
    pub lat: f64,
    pub lon: f64,
    /// `city, state, country`, whichever parts are known.
    pub label: String,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, place: &str) -> LocateResult<Option<GeoPlace>>;

    async fn reverse(&self, lat: f64, lon: f64) -> LocateResult<Option<GeoPlace>>;
}

/// Finds nothing. Used when no geocoder is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGeocoder;

#[async_trait]
impl Geocoder for NoopGeocoder {
    async fn search(&self, _place: &str) -> LocateResult<Option<GeoPlace>> {
        Ok(None)
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> LocateResult<Option<GeoPlace>> {
        Ok(None)
    }
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimPlace {
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lon: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<Address>,
}

/// Nominatim sends coordinates as strings; accept numbers too.
fn coordinate(v: Option<&Value>) -> Option<f64> {
    match v? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

fn place_label(place: &NominatimPlace) -> String {
    let empty = Address::default();
    let addr = place.address.as_ref().unwrap_or(&empty);
    let locality = non_empty(&addr.city)
        .or(non_empty(&addr.town))
        .or(non_empty(&addr.village))
        .or(non_empty(&place.name));
    let region = non_empty(&addr.state).or(non_empty(&addr.region));
    [locality, region, non_empty(&addr.country)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert a raw Nominatim object, falling back to the queried coordinates.
fn to_geo_place(value: Value, fallback: (f64, f64)) -> LocateResult<GeoPlace> {
    let place: NominatimPlace = serde_json::from_value(value).map_err(|e| LocateError::Decode {
        service: "nominatim",
        detail: e.to_string(),
    })?;
    Ok(GeoPlace {
        lat: coordinate(place.lat.as_ref()).unwrap_or(fallback.0),
        lon: coordinate(place.lon.as_ref()).unwrap_or(fallback.1),
        label: place_label(&place),
    })
}

/// First result of a search answer, which is a list or `{"results": [...]}`.
fn first_result(data: Value) -> Option<Value> {
    match data {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items.into_iter().next(),
            _ => None,
        },
        _ => None,
    }
}

/// HTTP client for Nominatim `search` and `reverse`.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl NominatimGeocoder {
    pub fn new(client: Client, base_url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn search_url(&self, place: &str) -> String {
        format!(
            "{}/search?format=jsonv2&limit=1&q={}",
            self.base_url.trim_end_matches('/'),
            encode(place)
        )
    }

    pub fn reverse_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/reverse?format=jsonv2&lat={lat}&lon={lon}&zoom=10",
            self.base_url.trim_end_matches('/')
        )
    }

    async fn get_json(&self, url: String) -> LocateResult<Value> {
        let call = async {
            let response = self
                .client
                .get(&url)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LocateError::Status {
                    service: "nominatim",
                    status: status.as_u16(),
                });
            }
            Ok::<_, LocateError>(response.json::<Value>().await?)
        };
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| LocateError::Timeout("nominatim", self.timeout))?
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn search(&self, place: &str) -> LocateResult<Option<GeoPlace>> {
        let data = self.get_json(self.search_url(place)).await?;
        let Some(first) = first_result(data) else {
            debug!("no search results");
            return Ok(None);
        };
        to_geo_place(first, (0.0, 0.0)).map(Some)
    }

    #[instrument(skip(self))]
    async fn reverse(&self, lat: f64, lon: f64) -> LocateResult<Option<GeoPlace>> {
        let data = self.get_json(self.reverse_url(lat, lon)).await?;
        if data.get("error").is_some() {
            debug!("reverse lookup found nothing");
            return Ok(None);
        }
        to_geo_place(data, (lat, lon)).map(Some)
    }
}
