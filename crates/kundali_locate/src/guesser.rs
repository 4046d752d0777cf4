//! Best-effort timezone guessing through an OpenAI-compatible responses API.
//!
//! A guess is optional by nature: transport errors, timeouts, empty
//! answers, and `UNKNOWN` all come back as `None`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

const IDENTIFIER_PROMPT: &str = "You are a helper that maps informal or abbreviated timezone names to canonical IANA timezone identifiers. Return only the IANA timezone string if you are confident. Examples: IST->Asia/Kolkata, PST->America/Los_Angeles. If you cannot map, respond with 'UNKNOWN'.";

const COORDINATES_PROMPT: &str = "You map latitude/longitude to an IANA timezone id. Given numeric lat and lon, respond ONLY with the timezone string. If unsure, respond UNKNOWN.";

pub const MAX_OUTPUT_TOKENS: u32 = 16;

/// Source of timezone guesses for names or coordinates.
#[async_trait]
pub trait TimezoneGuesser: Send + Sync {
    async fn guess_identifier(&self, key: &str) -> Option<String>;

    async fn guess_from_coordinates(&self, lat: f64, lon: f64) -> Option<String>;
}

/// Guesser that never guesses; used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGuesser;

#[async_trait]
impl TimezoneGuesser for NoopGuesser {
    async fn guess_identifier(&self, _key: &str) -> Option<String> {
        None
    }

    async fn guess_from_coordinates(&self, _lat: f64, _lon: f64) -> Option<String> {
        None
    }
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [Message<'a>; 2],
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsesBody {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Option<Vec<ContentSegment>>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentSegment {
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesBody {
    /// All text segments of all output items, concatenated.
    pub fn text(&self) -> String {
        self.output
            .iter()
            .filter_map(|item| item.content.as_ref())
            .flatten()
            .filter_map(|seg| seg.text.as_deref())
            .collect()
    }
}

/// First token of a model answer, or `None` for empty or `UNKNOWN`.
pub fn parse_guess(text: &str) -> Option<String> {
    let guess = text.trim();
    if guess.is_empty() || guess.to_uppercase().contains("UNKNOWN") {
        return None;
    }
    guess.split_whitespace().next().map(str::to_string)
}

/// Guesser backed by `POST {base_url}/responses`.
#[derive(Clone)]
pub struct OpenAiTimezoneGuesser {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiTimezoneGuesser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTimezoneGuesser")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiTimezoneGuesser {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }

    async fn ask(&self, system: &str, user: &str) -> Option<String> {
        let body = ResponsesRequest {
            model: &self.model,
            input: [
                Message { role: "system", content: system },
                Message { role: "user", content: user },
            ],
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };
        let call = async {
            let response = self
                .client
                .post(self.endpoint())
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?
                .error_for_status()?;
            response.json::<ResponsesBody>().await
        };
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(parsed)) => {
                let guess = parse_guess(&parsed.text());
                debug!(?guess, "timezone guess");
                guess
            }
            Ok(Err(e)) => {
                warn!(error = %e, "timezone guess request failed");
                None
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "timezone guess timed out");
                None
            }
        }
    }
}

#[async_trait]
impl TimezoneGuesser for OpenAiTimezoneGuesser {
    #[instrument(skip(self))]
    async fn guess_identifier(&self, key: &str) -> Option<String> {
        self.ask(IDENTIFIER_PROMPT, &format!("Input: {key}")).await
    }

    #[instrument(skip(self))]
    async fn guess_from_coordinates(&self, lat: f64, lon: f64) -> Option<String> {
        self.ask(COORDINATES_PROMPT, &format!("lat={lat}, lon={lon}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_takes_first_token() {
        assert_eq!(parse_guess("  Asia/Kolkata\n"), Some("Asia/Kolkata".into()));
        assert_eq!(parse_guess("Europe/Paris (CET)"), Some("Europe/Paris".into()));
    }

    #[test]
    fn unknown_or_empty_is_none() {
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("   "), None);
        assert_eq!(parse_guess("'UNKNOWN'"), None);
        assert_eq!(parse_guess("unknown zone"), None);
    }

    #[test]
    fn text_concatenates_segments() {
        let body: ResponsesBody = serde_json::from_str(
            r#"{"output":[
                {"type":"reasoning"},
                {"type":"message","content":[{"type":"output_text","text":"America/"},{"text":"New_York"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.text(), "America/New_York");
    }

    #[test]
    fn request_body_shape() {
        let body = ResponsesRequest {
            model: "gpt-4.1",
            input: [
                Message { role: "system", content: "s" },
                Message { role: "user", content: "Input: IST" },
            ],
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["max_output_tokens"], 16);
        assert_eq!(json["input"][1]["content"], "Input: IST");
    }

    #[test]
    fn debug_hides_key() {
        let g = OpenAiTimezoneGuesser::new(Client::new(), "http://x", "sk-secret", "m", Duration::from_secs(1));
        assert!(!format!("{g:?}").contains("sk-secret"));
    }
}
