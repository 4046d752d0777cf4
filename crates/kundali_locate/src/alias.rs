//! Timezone alias records: informal names mapped to IANA identifiers.
//!
//! Keys are compared lowercased and trimmed. Writes are last-writer-wins;
//! nothing is ever evicted.

use std::collections::HashMap;

use async_trait::async_trait;
use kundali_time::alias_key;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A stored alias. Coordinates are kept as the strings they were written
/// with (four decimals for coordinate lookups).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    pub title: String,
    pub timezone: String,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
}

impl AliasRecord {
    pub fn new(title: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timezone: timezone.into(),
            lat: None,
            lon: None,
        }
    }

    pub fn with_coords(mut self, lat: impl Into<String>, lon: impl Into<String>) -> Self {
        self.lat = Some(lat.into());
        self.lon = Some(lon.into());
        self
    }
}

/// Persistent alias cache.
#[async_trait]
pub trait AliasStore: Send + Sync {
    async fn lookup(&self, key: &str) -> Option<AliasRecord>;

    /// Exact match on the stored coordinate strings.
    async fn lookup_by_coords(&self, lat: &str, lon: &str) -> Option<AliasRecord>;

    /// Insert or replace. Records with an empty title or timezone are ignored.
    async fn upsert(&self, record: AliasRecord);
}

/// In-process alias store.
#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    records: RwLock<HashMap<String, AliasRecord>>,
}

impl MemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with records.
    pub fn with_records(records: impl IntoIterator<Item = AliasRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (alias_key(&r.title), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl AliasStore for MemoryAliasStore {
    async fn lookup(&self, key: &str) -> Option<AliasRecord> {
        let key = alias_key(key);
        if key.is_empty() {
            return None;
        }
        self.records.read().get(&key).cloned()
    }

    async fn lookup_by_coords(&self, lat: &str, lon: &str) -> Option<AliasRecord> {
        if lat.is_empty() || lon.is_empty() {
            return None;
        }
        self.records
            .read()
            .values()
            .find(|r| r.lat.as_deref() == Some(lat) && r.lon.as_deref() == Some(lon))
            .cloned()
    }

    async fn upsert(&self, record: AliasRecord) {
        let key = alias_key(&record.title);
        if key.is_empty() || record.timezone.trim().is_empty() {
            return;
        }
        self.records.write().insert(key, record);
    }
}
