//! Collaborators around the engines: where a place is, and which zone
//! it keeps.
//!
//! - [`AliasStore`]: informal timezone names and places already resolved
//! - [`TimezoneResolver`]: alias → IANA → static table → guesser chain
//! - [`TimezoneGuesser`]: optional model-backed guesses, `None` on any failure
//! - [`Geocoder`]: Nominatim search and reverse lookup
//! - [`KvCache`]: TTL cache for finished results

pub mod alias;
pub mod cache;
pub mod error;
pub mod geocoder;
pub mod guesser;
pub mod location;
pub mod resolver;

pub use alias::{AliasRecord, AliasStore, MemoryAliasStore};
pub use cache::{KvCache, MemoryCache};
pub use error::{LocateError, LocateResult};
pub use geocoder::{GeoPlace, Geocoder, NominatimGeocoder, NoopGeocoder};
pub use guesser::{NoopGuesser, OpenAiTimezoneGuesser, TimezoneGuesser, parse_guess};
pub use location::{LocationResolver, ResolvedPlace, coord_key};
pub use resolver::{ResolvedBy, TimezoneResolver};
