use std::collections::HashMap;

use kundali_config::{ConfigError, Settings};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn partial_json_keeps_defaults() {
    let s = Settings::from_json_str(r#"{"user_agent": "tests/1.0", "panchang_cache_ttl_secs": 60}"#)
        .unwrap();
    assert_eq!(s.user_agent, "tests/1.0");
    assert_eq!(s.panchang_cache_ttl_secs, 60);
    assert_eq!(s.openai_model, "gpt-4.1");
    assert_eq!(s.geocoder_base_url, "https://nominatim.openstreetmap.org");
    assert_eq!(s.fallback_timezone, "UTC");
}

#[test]
fn environment_overrides_file_values() {
    let mut s = Settings::from_json_str(r#"{"openai_model": "from-file", "log_json": false}"#).unwrap();
    s.apply_overrides(lookup(&[
        ("OPENAI_MODEL", "from-env"),
        ("OPENAI_API_KEY", "sk-test"),
        ("KUNDALI_EXTERNAL_TIMEOUT_SECS", " 3 "),
        ("KUNDALI_LOG", "kundali_locate=debug"),
        ("KUNDALI_LOG_JSON", "1"),
        ("KUNDALI_GEOCODER_URL", ""),
    ]))
    .unwrap();
    assert_eq!(s.openai_model, "from-env");
    assert!(s.ai_enabled());
    assert_eq!(s.external_timeout_secs, 3);
    assert_eq!(s.log_directives.as_deref(), Some("kundali_locate=debug"));
    assert!(s.log_json);
    // Blank values do not clobber.
    assert_eq!(s.geocoder_base_url, "https://nominatim.openstreetmap.org");
}

#[test]
fn malformed_numbers_are_rejected() {
    let mut s = Settings::default();
    let err = s
        .apply_overrides(lookup(&[("KUNDALI_PANCHANG_CACHE_TTL_SECS", "a day")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "panchang_cache_ttl_secs", .. }));
}

#[test]
fn validation() {
    let zero = Settings {
        external_timeout_secs: 0,
        ..Settings::default()
    };
    assert!(matches!(
        zero.validate(),
        Err(ConfigError::Invalid { field: "external_timeout_secs", .. })
    ));

    let no_url = Settings {
        geocoder_base_url: "  ".into(),
        ..Settings::default()
    };
    assert!(matches!(
        no_url.validate(),
        Err(ConfigError::Invalid { field: "geocoder_base_url", .. })
    ));
}

#[test]
fn file_loading() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("kundali_settings_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"user_agent": "file-agent", "fallback_timezone": "Asia/Kolkata"}"#)
        .unwrap();
    let s = Settings::from_json_file(&path).unwrap();
    assert_eq!(s.user_agent, "file-agent");
    assert_eq!(s.fallback_timezone, "Asia/Kolkata");
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(Settings::from_json_file(&path), Err(ConfigError::Io { .. })));

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Settings::from_json_file(&path), Err(ConfigError::Parse(_))));
    std::fs::remove_file(&path).unwrap();
}
