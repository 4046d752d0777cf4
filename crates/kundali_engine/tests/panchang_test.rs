//! Daily Panchangam against reference wall-clock output.

use chrono::NaiveDate;
use kundali_engine::{
    EngineError, PanchangRequest, Phase, WindowKind, daily_panchangam, day_length_hours,
    seasonal_factor,
};
use kundali_time::Tz;

fn request(date: &str, lat: f64, tz: &str) -> PanchangRequest {
    PanchangRequest {
        date: date.into(),
        lat,
        lon: 80.2707,
        tz: tz.into(),
        locale: None,
        location_name: Some("Chennai".into()),
    }
}

fn zone(name: &str) -> Tz {
    name.parse().unwrap()
}

#[test]
fn chennai_monday() {
    let result = daily_panchangam(&request("2024-01-15", 13.0827, "Asia/Kolkata"), zone("Asia/Kolkata")).unwrap();

    assert_eq!(result.astronomy.sunrise, "2024-01-15T07:06:07.642440+05:30");
    assert_eq!(result.astronomy.sunset, "2024-01-15T16:53:52.357560+05:30");
    assert_eq!(result.astronomy.next_sunrise, "2024-01-16T07:06:07.642440+05:30");
    assert_eq!(result.astronomy.day_length_minutes, 587);
    assert_eq!(result.astronomy.night_length_minutes, 852);

    // Monday → Rahu Kalam is the second eighth of the day.
    let rahu = &result.timings.rahu_kalam[0];
    assert_eq!(rahu.start, "2024-01-15T08:19:35.731830+05:30");
    assert_eq!(rahu.end, "2024-01-15T09:33:03.821220+05:30");
    assert_eq!(rahu.label, "Rahu Kalam");
    assert_eq!(rahu.kind, WindowKind::Avoid);

    let abhijit = &result.timings.abhijit_muhurta[0];
    assert_eq!(abhijit.start, "2024-01-15T11:40:24.509496+05:30");
    assert_eq!(abhijit.end, "2024-01-15T12:19:35.490504+05:30");
    assert_eq!(abhijit.kind, WindowKind::Auspicious);

    assert_eq!(result.panchang.vara.name, "Monday");
    assert_eq!(result.panchang.tithi[0].name, "Pratipada");
    assert_eq!(result.panchang.tithi[0].start, result.astronomy.sunrise);
    assert_eq!(result.panchang.karana[0].end, result.astronomy.sunset);

    assert_eq!(result.meta.hindu_day.start, result.astronomy.sunrise);
    assert_eq!(result.meta.hindu_day.end, result.astronomy.next_sunrise);
    assert_eq!(result.meta.location.name.as_deref(), Some("Chennai"));

    let dur = &result.timings.durmuhurtam;
    assert_eq!(dur.len(), 2);
    assert!(dur.iter().all(|w| w.phase == Some(Phase::Day)));
    assert_eq!(result.timings.varjyam[0].nakshatra.as_deref(), Some("Varjyam"));
    assert_eq!(result.notes[0].code, "N_WEDDING_SCOPE");
}

#[test]
fn sunday_rahu_is_last_segment() {
    let result = daily_panchangam(&request("2024-01-14", 13.0827, "Asia/Kolkata"), zone("Asia/Kolkata")).unwrap();
    assert_eq!(result.panchang.vara.name, "Sunday");
    let rahu = &result.timings.rahu_kalam[0];
    assert_eq!(rahu.start, "2024-01-14T15:40:00.659482+05:30");
    assert_eq!(rahu.end, "2024-01-14T16:53:20.879310+05:30");
    assert_eq!(result.timings.durmuhurtam.len(), 1);
}

#[test]
fn rahu_segment_depends_only_on_weekday() {
    let a = daily_panchangam(&request("2024-01-15", 13.0, "Asia/Kolkata"), zone("Asia/Kolkata")).unwrap();
    let b = daily_panchangam(&request("2024-01-22", 51.5, "Asia/Kolkata"), zone("Asia/Kolkata")).unwrap();
    let seg_of = |r: &kundali_engine::PanchangResult| {
        let t = |s: &str| chrono::DateTime::parse_from_rfc3339(s).unwrap();
        let sunrise = t(&r.astronomy.sunrise);
        let start = t(&r.timings.rahu_kalam[0].start);
        let eighth = (t(&r.astronomy.sunset) - sunrise) / 8;
        ((start - sunrise).num_microseconds().unwrap() as f64 / eighth.num_microseconds().unwrap() as f64).round() as i64 + 1
    };
    assert_eq!(seg_of(&a), 2);
    assert_eq!(seg_of(&b), 2);
}

#[test]
fn spring_forward_day_uses_post_transition_offset() {
    let result = daily_panchangam(&request("2024-03-10", 40.7128, "EST"), zone("America/New_York")).unwrap();
    assert_eq!(result.meta.timezone, "EST");
    assert_eq!(result.meta.resolved_timezone, "America/New_York");
    assert_eq!(result.astronomy.sunrise, "2024-03-10T06:10:27.608969-04:00");
    assert_eq!(result.astronomy.next_sunrise, "2024-03-11T06:10:27.608969-04:00");
    assert_eq!(result.astronomy.day_length_minutes, 699);
    assert_eq!(result.astronomy.night_length_minutes, 740);
}

#[test]
fn fall_back_day() {
    let result = daily_panchangam(&request("2024-11-03", 40.7128, "America/New_York"), zone("America/New_York")).unwrap();
    assert_eq!(result.astronomy.sunrise, "2024-11-03T06:39:35.303698-05:00");
    assert_eq!(result.timings.rahu_kalam[0].end, "2024-11-03T17:20:24.696306-05:00");
}

#[test]
fn peak_day_gives_longest_day() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    assert_eq!(seasonal_factor(172), 1.0);
    let h = day_length_hours(date, 13.0);
    assert!(h < 16.0 && h > 14.4, "{h}");
    let result = daily_panchangam(&request("2024-06-20", 13.0, "Asia/Kolkata"), zone("Asia/Kolkata")).unwrap();
    assert_eq!(result.astronomy.sunrise, "2024-06-20T04:46:55.334708+05:30");
    assert_eq!(result.astronomy.day_length_minutes, 866);
}

#[test]
fn json_field_names() {
    let result = daily_panchangam(&request("2024-01-15", 13.0827, "Asia/Kolkata"), zone("Asia/Kolkata")).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["meta"]["hinduDay"]["start"].is_string());
    assert!(json["meta"]["resolvedTimezone"].is_string());
    assert!(json["astronomy"]["dayLengthMinutes"].is_i64());
    assert!(json["timings"]["rahuKalam"].is_array());
    assert!(json["timings"]["brahmaMuhurta"].is_array());
    assert_eq!(json["timings"]["durmuhurtam"][0]["phase"], "day");
    assert!(json["timings"]["rahuKalam"][0].get("phase").is_none());

    let back: kundali_engine::PanchangResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.timings, result.timings);
    assert_eq!(back.astronomy, result.astronomy);
}

#[test]
fn invalid_date() {
    let err = daily_panchangam(&request("2024-02-30", 13.0, "UTC"), zone("UTC")).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDate(_)));
}
