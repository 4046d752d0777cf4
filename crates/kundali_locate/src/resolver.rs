//! Timezone resolution chain.
//!
//! An identifier is tried against, in order: the alias store, a direct IANA
//! parse, the static guess table, and the guesser. Answers from the last two
//! are written back to the alias store under the trimmed identifier.

use std::sync::Arc;

use kundali_time::{Tz, alias_key, guess_alias, parse_timezone};
use tracing::{debug, instrument};

use crate::alias::{AliasRecord, AliasStore};
use crate::guesser::TimezoneGuesser;

/// Where a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    Alias,
    Direct,
    StaticGuess,
    Guesser,
    Coordinates,
}

#[derive(Clone)]
pub struct TimezoneResolver {
    aliases: Arc<dyn AliasStore>,
    guesser: Arc<dyn TimezoneGuesser>,
}

impl TimezoneResolver {
    pub fn new(aliases: Arc<dyn AliasStore>, guesser: Arc<dyn TimezoneGuesser>) -> Self {
        Self { aliases, guesser }
    }

    pub async fn alias_lookup(&self, key: &str) -> Option<String> {
        self.aliases.lookup(key).await.map(|r| r.timezone)
    }

    pub async fn alias_upsert(&self, key: &str, timezone: &str) {
        self.aliases.upsert(AliasRecord::new(key.trim(), timezone)).await;
    }

    /// Resolve an identifier to a zone, or `None` when every step misses.
    #[instrument(skip(self))]
    pub async fn resolve(&self, identifier: &str) -> Option<(Tz, ResolvedBy)> {
        let key = identifier.trim();

        if let Some(zone) = self
            .alias_lookup(key)
            .await
            .and_then(|id| parse_timezone(&id).ok())
        {
            return Some((zone, ResolvedBy::Alias));
        }

        if let Ok(zone) = parse_timezone(key) {
            return Some((zone, ResolvedBy::Direct));
        }

        if let Some(guess) = guess_alias(&alias_key(key)) {
            if let Ok(zone) = parse_timezone(guess) {
                self.alias_upsert(key, guess).await;
                return Some((zone, ResolvedBy::StaticGuess));
            }
        }

        if let Some(guess) = self.guesser.guess_identifier(key).await {
            if let Ok(zone) = parse_timezone(&guess) {
                self.alias_upsert(key, &guess).await;
                return Some((zone, ResolvedBy::Guesser));
            }
            debug!(%guess, "guessed identifier is not a zone");
        }

        None
    }

    /// Zone identifier for a coordinate pair, from the guesser only.
    pub async fn resolve_from_coordinates(&self, lat: f64, lon: f64) -> Option<String> {
        self.guesser.guess_from_coordinates(lat, lon).await
    }

    /// [`resolve`](Self::resolve), then once more with a coordinate guess.
    pub async fn resolve_or_locate(&self, identifier: &str, lat: f64, lon: f64) -> Option<(Tz, ResolvedBy)> {
        if let Some(found) = self.resolve(identifier).await {
            return Some(found);
        }
        let guess = self.resolve_from_coordinates(lat, lon).await?;
        debug!(%guess, "falling back to coordinate guess");
        self.resolve(&guess)
            .await
            .map(|(zone, _)| (zone, ResolvedBy::Coordinates))
    }
}
