//! Timezone resolution chain with a scripted guesser.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kundali_locate::{
    AliasRecord, AliasStore, MemoryAliasStore, NoopGuesser, ResolvedBy, TimezoneGuesser,
    TimezoneResolver,
};

/// Answers from fixed tables and counts calls.
#[derive(Default)]
struct ScriptedGuesser {
    names: Vec<(&'static str, &'static str)>,
    coords: Option<&'static str>,
    calls: AtomicUsize,
}

#[async_trait]
impl TimezoneGuesser for ScriptedGuesser {
    async fn guess_identifier(&self, key: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }

    async fn guess_from_coordinates(&self, _lat: f64, _lon: f64) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.coords.map(str::to_string)
    }
}

fn resolver(guesser: Arc<ScriptedGuesser>) -> (TimezoneResolver, Arc<MemoryAliasStore>) {
    let store = Arc::new(MemoryAliasStore::new());
    (TimezoneResolver::new(store.clone(), guesser), store)
}

#[tokio::test]
async fn alias_lookup_ignores_case_and_whitespace() {
    let r = TimezoneResolver::new(Arc::new(MemoryAliasStore::new()), Arc::new(NoopGuesser));
    r.alias_upsert("IST", "Asia/Kolkata").await;
    assert_eq!(r.alias_lookup("ist").await.as_deref(), Some("Asia/Kolkata"));
    assert_eq!(r.alias_lookup(" ist ").await.as_deref(), Some("Asia/Kolkata"));
}

#[tokio::test]
async fn direct_zone_is_not_written_back() {
    let (r, store) = resolver(Arc::new(ScriptedGuesser::default()));
    let (zone, by) = r.resolve(" Asia/Kolkata ").await.unwrap();
    assert_eq!(zone.name(), "Asia/Kolkata");
    assert_eq!(by, ResolvedBy::Direct);
    assert!(store.is_empty());
}

#[tokio::test]
async fn static_guess_is_written_back() {
    let guesser = Arc::new(ScriptedGuesser::default());
    let (r, store) = resolver(guesser.clone());
    let (zone, by) = r.resolve("Asia/Chennai").await.unwrap();
    assert_eq!(zone.name(), "Asia/Kolkata");
    assert_eq!(by, ResolvedBy::StaticGuess);
    assert_eq!(store.lookup("asia/chennai").await.unwrap().timezone, "Asia/Kolkata");
    assert_eq!(guesser.calls.load(Ordering::SeqCst), 0);

    let (_, by) = r.resolve("ASIA/CHENNAI").await.unwrap();
    assert_eq!(by, ResolvedBy::Alias);
}

#[tokio::test]
async fn guesser_answer_is_validated_and_cached() {
    let guesser = Arc::new(ScriptedGuesser {
        names: vec![("Bharat time", "Asia/Kolkata"), ("Atlantis", "Atlantis/Capital")],
        ..Default::default()
    });
    let (r, store) = resolver(guesser.clone());

    let (zone, by) = r.resolve("Bharat time").await.unwrap();
    assert_eq!((zone.name(), by), ("Asia/Kolkata", ResolvedBy::Guesser));
    assert!(store.lookup("bharat time").await.is_some());

    assert!(r.resolve("Atlantis").await.is_none());
    assert!(store.lookup("atlantis").await.is_none());

    let before = guesser.calls.load(Ordering::SeqCst);
    r.resolve("Bharat time").await.unwrap();
    assert_eq!(guesser.calls.load(Ordering::SeqCst), before);
}

#[tokio::test]
async fn stale_alias_falls_through() {
    let store = Arc::new(MemoryAliasStore::with_records([AliasRecord::new("UTC", "Not/AZone")]));
    let r = TimezoneResolver::new(store, Arc::new(NoopGuesser));
    let (zone, by) = r.resolve("UTC").await.unwrap();
    assert_eq!((zone.name(), by), ("UTC", ResolvedBy::Direct));
}

#[tokio::test]
async fn coordinates_are_a_last_resort() {
    let guesser = Arc::new(ScriptedGuesser {
        coords: Some("Asia/Kolkata"),
        ..Default::default()
    });
    let (r, _) = resolver(guesser);
    let (zone, by) = r.resolve_or_locate("somewhere", 13.08, 80.27).await.unwrap();
    assert_eq!((zone.name(), by), ("Asia/Kolkata", ResolvedBy::Coordinates));

    let (r, _) = resolver(Arc::new(ScriptedGuesser::default()));
    assert!(r.resolve_or_locate("somewhere", 13.08, 80.27).await.is_none());
}
