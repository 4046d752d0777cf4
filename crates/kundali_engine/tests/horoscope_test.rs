//! Horoscope engine against fixed and analytic ephemerides.

use kundali_engine::{EngineError, HoroscopeRequest, generate_horoscope};
use kundali_ephem::{AstroTime, Body, EphemError, Ephemeris, MeanElementsEphemeris};
use kundali_vedic_base::{ChartPoint, DashaVariation, Graha};

/// Returns the same longitudes at every instant.
struct FixedEphemeris;

impl Ephemeris for FixedEphemeris {
    fn name(&self) -> &str {
        "fixed"
    }

    fn longitude(&self, body: Body, _t: AstroTime) -> Result<f64, EphemError> {
        Ok(match body {
            Body::Sun => 270.5,
            Body::Moon => 0.0,
            Body::Mercury => 255.0,
            Body::Venus => 230.0,
            Body::Mars => 254.3,
            Body::Jupiter => 11.5,
            Body::Saturn => 309.9,
            Body::MeanNode => 350.0,
        })
    }

    fn ascendant(&self, _t: AstroTime, _lat: f64, _lon: f64) -> Result<f64, EphemError> {
        Ok(275.0)
    }
}

struct BrokenEphemeris;

impl Ephemeris for BrokenEphemeris {
    fn name(&self) -> &str {
        "broken"
    }

    fn longitude(&self, _body: Body, _t: AstroTime) -> Result<f64, EphemError> {
        Ok(f64::NAN)
    }

    fn ascendant(&self, _t: AstroTime, _lat: f64, _lon: f64) -> Result<f64, EphemError> {
        Ok(0.0)
    }
}

fn chennai(language: &str) -> HoroscopeRequest {
    HoroscopeRequest {
        date: "2024-01-15".into(),
        time: "06:30".into(),
        lat: 13.0827,
        lon: 80.2707,
        tz: "Asia/Kolkata".into(),
        place_name: None,
        language: language.into(),
    }
}

#[test]
fn fixed_chart_layout() {
    let eph = FixedEphemeris;
    let result = generate_horoscope(Some(&eph), &chennai("en"), DashaVariation::default()).unwrap();

    let planets: Vec<&str> = result.planet_positions.iter().map(|p| p.planet.as_str()).collect();
    assert_eq!(planets, ["Su", "Mo", "Me", "Ve", "Ma", "Ju", "Sa", "Ra", "Ke", "Asc"]);

    // Ketu opposite Rahu: 350 + 180 = 170 → Kanya.
    assert_eq!(result.planet_positions[8].rasi, "Kanya");
    assert_eq!(result.planet_positions[8].position, "170° 00' 00″");

    // Mesha holds the Moon and Jupiter; Makara the Sun and the ascendant.
    assert_eq!(result.rasi_chart[0][0].bodies, "Mo, Ju");
    assert_eq!(result.rasi_chart[2][1].label, "Makara");
    assert_eq!(result.rasi_chart[2][1].bodies, "Su, Asc");

    assert_eq!(result.summary, "Horoscope generated for 2024-01-15 06:30 @ Lat 13.0827, Lon 80.2707 (Asia/Kolkata) [en]");
    assert_eq!(result.meta.ascendant_en, "Makara");
    assert_eq!(result.meta.house_system, "Whole Sign");

    let details: Vec<(&str, &str)> = result
        .birth_details
        .iter()
        .map(|d| (d.label.as_str(), d.value.as_str()))
        .collect();
    assert_eq!(
        details,
        [
            ("Ascendant", "Makara"),
            ("Ascendant Lord", "Sa"),
            ("Weekday", "Monday"),
            ("Nakshatra", "Ashwini 1 Pada"),
            ("Nakshatra Lord", "Ke"),
            ("Rasi", "Makara"),
            ("Rasi Lord", "Sa"),
        ]
    );

    // Moon at 0° starts a full Ketu mahadasha at birth (01:00 UTC).
    assert_eq!(result.mahadasas.len(), 9);
    assert_eq!(result.mahadasas[0].name, "Ke");
    assert_eq!(result.mahadasas[0].start, "2024-01-15");
    assert_eq!(result.mahadasas[0].bhuktis[0].name, "Ke / Ke");
    assert_eq!(result.mahadasas[1].name, "Ve");
}

#[test]
fn ketu_is_always_opposite_rahu() {
    let eph = MeanElementsEphemeris::new();
    for date in ["1950-03-01", "1987-11-30", "2024-01-15", "2049-07-04"] {
        let mut req = chennai("en");
        req.date = date.into();
        let result = generate_horoscope(Some(&eph), &req, DashaVariation::default()).unwrap();
        let rahu = result.placements[Graha::Rahu.index() as usize];
        let ketu = result.placements[Graha::Ketu.index() as usize];
        assert_eq!(rahu.point, ChartPoint::Graha(Graha::Rahu));
        let diff = (ketu.longitude - rahu.longitude).rem_euclid(360.0);
        assert!((diff - 180.0).abs() < 1e-9, "{date}: {diff}");
    }
}

#[test]
fn chennai_scenario_is_reproducible() {
    let eph = MeanElementsEphemeris::new();
    let a = generate_horoscope(Some(&eph), &chennai("en"), DashaVariation::default()).unwrap();
    let b = generate_horoscope(Some(&eph), &chennai("en"), DashaVariation::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(a.placements.len(), 10);
    assert_eq!(a.planet_positions[1].pada, Some(a.placements[1].nakshatra.pada));
}

#[test]
fn tamil_and_hindi_labels() {
    let eph = FixedEphemeris;
    let ta = generate_horoscope(Some(&eph), &chennai("TA"), DashaVariation::default()).unwrap();
    assert!(ta.summary.ends_with("ஜாதகம் உருவாக்கப்பட்டது"));
    assert_eq!(ta.birth_details[2].value, "திங்கள்");
    assert_eq!(ta.meta.ascendant, "மகரம்");
    assert_eq!(ta.mahadasas[0].bhuktis[1].name, "கே / வி");

    let hi = generate_horoscope(Some(&eph), &chennai("hi"), DashaVariation::default()).unwrap();
    assert_eq!(hi.birth_details[0].label, "लग्न");
    assert_eq!(hi.planet_positions[9].planet, "लग");
}

#[test]
fn place_name_replaces_coordinates() {
    let eph = FixedEphemeris;
    let mut req = chennai("en");
    req.place_name = Some("Chennai".into());
    let result = generate_horoscope(Some(&eph), &req, DashaVariation::default()).unwrap();
    assert!(result.summary.contains("@ Chennai (Asia/Kolkata)"));
    assert_eq!(result.meta.place_name, "Chennai");
}

#[test]
fn json_shape() {
    let eph = FixedEphemeris;
    let result = generate_horoscope(Some(&eph), &chennai("en"), DashaVariation::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    for key in ["summary", "rasiChart", "navamsaChart", "planetPositions", "birthDetails", "meta", "mahadasas"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json.get("placements").is_none());
    assert_eq!(json["rasiChart"].as_array().unwrap().len(), 3);
    assert_eq!(json["rasiChart"][0].as_array().unwrap().len(), 4);
    assert_eq!(json["rasiChart"][0][0]["shortLabel"], "Ar");
    assert_eq!(json["planetPositions"][1]["pada"], 1);
    assert!(json["planetPositions"][0].get("pada").is_none());
    assert_eq!(json["meta"]["ascendantEn"], "Makara");
    assert_eq!(json["meta"]["language"], "en");
}

#[test]
fn errors_by_class() {
    let eph = FixedEphemeris;
    let err = generate_horoscope(Some(&eph), &chennai("fr"), DashaVariation::default()).unwrap_err();
    assert_eq!(err, EngineError::UnsupportedLanguage("fr".into()));

    let err = generate_horoscope(None, &chennai("en"), DashaVariation::default()).unwrap_err();
    assert!(matches!(err, EngineError::EphemerisUnavailable(_)));

    let mut req = chennai("en");
    req.tz = "Asia/Chennai".into();
    let err = generate_horoscope(Some(&eph), &req, DashaVariation::default()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTimezone(_)));

    let mut req = chennai("en");
    req.time = "25:00".into();
    let err = generate_horoscope(Some(&eph), &req, DashaVariation::default()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTime(_)));

    let err = generate_horoscope(Some(&BrokenEphemeris), &chennai("en"), DashaVariation::default()).unwrap_err();
    assert!(matches!(err, EngineError::Ephemeris(EphemError::Malformed { .. })));
}
