//! Runtime settings for the external collaborators.
//!
//! Values come from serde defaults, then an optional JSON file, then the
//! process environment. The environment always wins.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const ENV_GEOCODER_URL: &str = "KUNDALI_GEOCODER_URL";
pub const ENV_EXTERNAL_TIMEOUT: &str = "KUNDALI_EXTERNAL_TIMEOUT_SECS";
pub const ENV_PANCHANG_CACHE_TTL: &str = "KUNDALI_PANCHANG_CACHE_TTL_SECS";
pub const ENV_LOG: &str = "KUNDALI_LOG";
pub const ENV_LOG_JSON: &str = "KUNDALI_LOG_JSON";

#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Empty disables the AI timezone guesser.
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub geocoder_base_url: String,
    /// Sent on every geocoder request.
    pub user_agent: String,
    /// Bound on each external call.
    pub external_timeout_secs: u64,
    pub panchang_cache_ttl_secs: u64,
    /// Zone used when a located place cannot be mapped to one.
    pub fallback_timezone: String,
    pub log_directives: Option<String>,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4.1".to_string(),
            geocoder_base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "astrozone/1.0 (panchang)".to_string(),
            external_timeout_secs: 8,
            panchang_cache_ttl_secs: 86_400,
            fallback_timezone: "UTC".to_string(),
            log_directives: None,
            log_json: false,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("ai_guesser", &self.ai_enabled())
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field("user_agent", &self.user_agent)
            .field("external_timeout_secs", &self.external_timeout_secs)
            .field("panchang_cache_ttl_secs", &self.panchang_cache_ttl_secs)
            .field("fallback_timezone", &self.fallback_timezone)
            .field("log_directives", &self.log_directives)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl Settings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// File values, then environment overrides.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_json_str(&text)?;
        debug!(path = %path.display(), "settings file read");
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Overwrite fields from a variable lookup. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get(ENV_OPENAI_API_KEY) {
            self.openai_api_key = v;
        }
        if let Some(v) = get(ENV_OPENAI_BASE_URL) {
            self.openai_base_url = v;
        }
        if let Some(v) = get(ENV_OPENAI_MODEL) {
            self.openai_model = v;
        }
        if let Some(v) = get(ENV_GEOCODER_URL) {
            self.geocoder_base_url = v;
        }
        if let Some(v) = get(ENV_EXTERNAL_TIMEOUT) {
            self.external_timeout_secs = parse_secs("external_timeout_secs", &v)?;
        }
        if let Some(v) = get(ENV_PANCHANG_CACHE_TTL) {
            self.panchang_cache_ttl_secs = parse_secs("panchang_cache_ttl_secs", &v)?;
        }
        if let Some(v) = get(ENV_LOG) {
            self.log_directives = Some(v);
        }
        if let Some(v) = get(ENV_LOG_JSON) {
            self.log_json = parse_flag(&v);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.external_timeout_secs == 0 {
            return Err(ConfigError::invalid("external_timeout_secs", "must be positive"));
        }
        for (field, url) in [
            ("openai_base_url", &self.openai_base_url),
            ("geocoder_base_url", &self.geocoder_base_url),
        ] {
            if url.trim().is_empty() {
                return Err(ConfigError::invalid(field, "empty URL"));
            }
        }
        if self.fallback_timezone.trim().is_empty() {
            return Err(ConfigError::invalid("fallback_timezone", "empty"));
        }
        Ok(())
    }

    pub fn ai_enabled(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }

    pub fn external_timeout(&self) -> Duration {
        Duration::from_secs(self.external_timeout_secs)
    }

    pub fn panchang_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.panchang_cache_ttl_secs)
    }
}

fn parse_secs(field: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::invalid(field, format!("not a whole number of seconds: {raw:?}")))
}

fn parse_flag(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert!(!s.ai_enabled());
        assert_eq!(s.external_timeout(), Duration::from_secs(8));
        assert_eq!(s.panchang_cache_ttl(), Duration::from_secs(86_400));
    }

    #[test]
    fn flags() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn debug_hides_the_key() {
        let s = Settings {
            openai_api_key: "sk-secret".into(),
            ..Settings::default()
        };
        let shown = format!("{s:?}");
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains("ai_guesser: true"));
    }
}
