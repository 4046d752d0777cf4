//! Static table of informal timezone names.

/// Canonical IANA zone for a common abbreviation or legacy name.
///
/// `key` must already be lowercased and trimmed.
pub fn guess_alias(key: &str) -> Option<&'static str> {
    let zone = match key {
        "asia/chennai" | "asia/calcutta" | "ist" => "Asia/Kolkata",
        "pst" | "pdt" => "America/Los_Angeles",
        "est" | "edt" => "America/New_York",
        "cst" | "cdt" => "America/Chicago",
        "mst" | "mdt" => "America/Denver",
        "bst" => "Europe/London",
        "cet" | "cest" => "Europe/Berlin",
        "aest" | "aedt" => "Australia/Sydney",
        "nzst" => "Pacific/Auckland",
        "hkt" => "Asia/Hong_Kong",
        "sgt" => "Asia/Singapore",
        "wib" => "Asia/Jakarta",
        _ => return None,
    };
    Some(zone)
}

/// Normalize an alias key: trimmed and lowercased.
pub fn alias_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
