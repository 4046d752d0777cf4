//! Horoscope engine: placements, rasi and navamsa charts, birth details,
//! and the Vimshottari timeline for one birth moment.
//!
//! Houses are whole-sign: the sign holding the ascendant is the first
//! house, so the birth "Rasi" row repeats the ascendant sign.

use chrono::{DateTime, Datelike, Utc};
use kundali_ephem::{AstroTime, Body, Ephemeris, checked_longitude};
use kundali_time::{parse_clock_time, parse_date, parse_timezone, utc_to_wall, wall_to_utc};
use kundali_vedic_base::{
    ALL_GRAHAS, ChartPoint, DashaVariation, DetailLabel, Graha, Language, Mahadasha, Rashi,
    format_dms, graha_abbr, horoscope_summary, nakshatra_from_longitude, navamsa_rashi,
    normalize_360, point_abbr, rashi_abbr, rashi_from_longitude, rashi_name, vimshottari_timeline,
    weekday_name,
};
use tracing::debug;

use crate::error::{EngineError, check_coordinates};
use crate::horoscope_types::{
    BhuktiEntry, BirthDetail, ChartCell, ChartGrid, HoroscopeMeta, HoroscopeRequest,
    HoroscopeResult, MahadasaEntry, Placement, PlanetPosition,
};

/// Ephemeris body queried for a graha; Ketu is derived from Rahu.
fn graha_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Shukra => Some(Body::Venus),
        Graha::Mangal => Some(Body::Mars),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu => Some(Body::MeanNode),
        Graha::Ketu => None,
    }
}

impl Placement {
    pub fn new(point: ChartPoint, longitude: f64) -> Self {
        let longitude = normalize_360(longitude);
        Self {
            point,
            longitude,
            rashi: rashi_from_longitude(longitude),
            nakshatra: nakshatra_from_longitude(longitude),
            navamsa: navamsa_rashi(longitude),
        }
    }
}

/// Sidereal longitudes of the nine grahas in chart order.
///
/// Ketu is always Rahu + 180°.
pub fn graha_longitudes(eph: &dyn Ephemeris, t: AstroTime) -> Result<[f64; 9], EngineError> {
    let mut out = [0.0; 9];
    for graha in ALL_GRAHAS {
        let idx = graha.index() as usize;
        out[idx] = match graha_body(graha) {
            Some(body) => checked_longitude(body.name(), eph.longitude(body, t)?)?,
            None => normalize_360(out[Graha::Rahu.index() as usize] + 180.0),
        };
    }
    Ok(out)
}

/// Shortest round-trip rendering with at least one decimal digit.
fn float_label(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

fn build_chart(placements: &[Placement], lang: Language, sign_of: impl Fn(&Placement) -> Rashi) -> ChartGrid {
    let mut buckets: [Vec<&str>; 12] = Default::default();
    for p in placements {
        buckets[sign_of(p).index() as usize].push(point_abbr(p.point, lang));
    }
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let rashi = Rashi::from_index((row * 4 + col) as u8);
            ChartCell {
                label: rashi.name().to_string(),
                short_label: rashi_abbr(rashi, lang).to_string(),
                bodies: buckets[rashi.index() as usize].join(", "),
            }
        })
    })
}

fn planet_position(p: &Placement, lang: Language) -> PlanetPosition {
    let rashi = p.rashi.rashi;
    PlanetPosition {
        planet: point_abbr(p.point, lang).to_string(),
        position: format_dms(p.longitude),
        degree: format_dms(p.rashi.degrees_in_rashi),
        rasi: rashi_name(rashi, lang).to_string(),
        rasi_lord: rashi.lord().english_name().to_string(),
        nakshatra: p.nakshatra.nakshatra.name().to_string(),
        nakshatra_lord: p.nakshatra.nakshatra.lord().english_name().to_string(),
        pada: (p.point == ChartPoint::Graha(Graha::Chandra)).then_some(p.nakshatra.pada),
    }
}

fn birth_details(asc: &Placement, moon: &Placement, birth_wall_weekday: chrono::Weekday, lang: Language) -> Vec<BirthDetail> {
    let asc_rashi = asc.rashi.rashi;
    let asc_name = rashi_name(asc_rashi, lang).to_string();
    let asc_lord = graha_abbr(asc_rashi.lord(), lang).to_string();
    let nak = &moon.nakshatra;
    let row = |label: DetailLabel, value: String| BirthDetail {
        label: label.text(lang).to_string(),
        value,
    };
    vec![
        row(DetailLabel::Ascendant, asc_name.clone()),
        row(DetailLabel::AscendantLord, asc_lord.clone()),
        row(DetailLabel::Weekday, weekday_name(birth_wall_weekday, lang).to_string()),
        row(DetailLabel::Nakshatra, format!("{} {} Pada", nak.nakshatra.name(), nak.pada)),
        row(DetailLabel::NakshatraLord, graha_abbr(nak.nakshatra.lord(), lang).to_string()),
        row(DetailLabel::Rasi, asc_name),
        row(DetailLabel::RasiLord, asc_lord),
    ]
}

fn utc_date(t: &DateTime<Utc>) -> String {
    t.date_naive().format("%Y-%m-%d").to_string()
}

/// Localized, date-only rendering of a Vimshottari timeline.
pub fn mahadasa_entries(timeline: &[Mahadasha], lang: Language) -> Vec<MahadasaEntry> {
    timeline
        .iter()
        .map(|maha| {
            let maha_name = graha_abbr(maha.period.lord, lang);
            MahadasaEntry {
                name: maha_name.to_string(),
                start: utc_date(&maha.period.start),
                end: utc_date(&maha.period.end),
                bhuktis: maha
                    .bhuktis
                    .iter()
                    .map(|b| BhuktiEntry {
                        name: format!("{maha_name} / {}", graha_abbr(b.lord, lang)),
                        start: utc_date(&b.start),
                        end: utc_date(&b.end),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Generate a horoscope.
///
/// Fails with `UnsupportedLanguage` before consulting the ephemeris, and
/// with `EphemerisUnavailable` when `ephemeris` is `None`.
pub fn generate_horoscope(
    ephemeris: Option<&dyn Ephemeris>,
    request: &HoroscopeRequest,
    variation: DashaVariation,
) -> Result<HoroscopeResult, EngineError> {
    let lang: Language = request.language.parse()?;
    let eph = ephemeris.ok_or_else(|| {
        EngineError::EphemerisUnavailable("no ephemeris provider configured".to_string())
    })?;

    check_coordinates(request.lat, request.lon)?;
    let date = parse_date(&request.date)?;
    let clock = parse_clock_time(&request.time)?;
    let tz = parse_timezone(&request.tz)?;
    let birth = wall_to_utc(tz, date.and_time(clock))?;
    let t = AstroTime::from_utc(&birth);
    debug!(provider = eph.name(), %birth, jd_ut = t.jd_ut(), "generating horoscope");

    let asc_lon = checked_longitude("Ascendant", eph.ascendant(t, request.lat, request.lon)?)?;
    let lons = graha_longitudes(eph, t)?;

    let mut placements: Vec<Placement> = ALL_GRAHAS
        .iter()
        .map(|&g| Placement::new(ChartPoint::Graha(g), lons[g.index() as usize]))
        .collect();
    let asc = Placement::new(ChartPoint::Ascendant, asc_lon);
    placements.push(asc);
    let moon = placements[Graha::Chandra.index() as usize];

    let rasi_chart = build_chart(&placements, lang, |p| p.rashi.rashi);
    let navamsa_chart = build_chart(&placements, lang, |p| p.navamsa);

    let place = match request.place_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Lat {}, Lon {}", float_label(request.lat), float_label(request.lon)),
    };
    let summary = horoscope_summary(lang, &request.date, &request.time, &place, &request.tz);

    let weekday = utc_to_wall(tz, &birth).weekday();
    let details = birth_details(&asc, &moon, weekday, lang);

    let timeline = vimshottari_timeline(moon.longitude, birth, variation);
    debug!(mahadasas = timeline.len(), "dasha timeline built");

    let asc_rashi = asc.rashi.rashi;
    Ok(HoroscopeResult {
        summary,
        rasi_chart,
        navamsa_chart,
        planet_positions: placements.iter().map(|p| planet_position(p, lang)).collect(),
        birth_details: details,
        meta: HoroscopeMeta {
            methodology: "tamil".to_string(),
            ayanamsa: "Lahiri".to_string(),
            house_system: "Whole Sign".to_string(),
            tz: request.tz.clone(),
            lat: request.lat,
            lon: request.lon,
            place_name: request.place_name.clone().unwrap_or_default(),
            ascendant: rashi_name(asc_rashi, lang).to_string(),
            ascendant_en: asc_rashi.name().to_string(),
            language: lang,
        },
        mahadasas: mahadasa_entries(&timeline, lang),
        placements,
    })
}
