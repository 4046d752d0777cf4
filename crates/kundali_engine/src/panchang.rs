//! Daily Panchangam: approximate sunrise and sunset, weekday windows, and
//! rotating angas.
//!
//! Day length is a seasonal curve, not a solar-position calculation:
//! `12 + 2.5·cos(lat)·cos(2π(doy − 172)/365)` hours, clamped to [8, 16].

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use kundali_time::wall::floor_minutes;
use kundali_time::{Tz, day_of_year, format_wall, parse_date};
use kundali_vedic_base::{Language, weekday_name};
use tracing::debug;

use crate::angas::Anga;
use crate::error::{EngineError, check_coordinates};
use crate::panchang_types::{
    AngaEntry, Astronomy, LocationMeta, Note, PanchangElements, PanchangMeta, PanchangRequest,
    PanchangResult, Span, TimingWindow, Timings, Vara, WindowKind,
};
use crate::windows::{
    DayFrame, Window, abhijit_muhurta, brahma_muhurta, dur_muhurtam, gulikai_segment,
    rahu_segment, segment, varjyam, yamagandam_segment,
};

pub const MIN_DAY_HOURS: f64 = 8.0;
pub const MAX_DAY_HOURS: f64 = 16.0;

/// Day of year at which the seasonal term peaks.
pub const SEASONAL_PEAK_DAY: f64 = 172.0;

pub const WEDDING_SCOPE_NOTE: &str =
    "Phase 1 provides time windows only; wedding suitability is evaluated in a later phase.";

/// Seasonal factor in [-1, 1]; exactly 1 on day 172.
pub fn seasonal_factor(day_of_year: u32) -> f64 {
    (TAU * (day_of_year as f64 - SEASONAL_PEAK_DAY) / 365.0).cos()
}

/// Approximate hours of daylight.
pub fn day_length_hours(date: NaiveDate, lat_deg: f64) -> f64 {
    let raw = 12.0 + 2.5 * lat_deg.to_radians().cos() * seasonal_factor(day_of_year(date));
    // A NaN latitude yields the maximum.
    raw.min(MAX_DAY_HOURS).max(MIN_DAY_HOURS)
}

fn render(tz: Tz, wall: NaiveDateTime) -> Result<String, EngineError> {
    Ok(format_wall(tz, wall)?)
}

fn timing(tz: Tz, windows: &[Window], label: &str, kind: WindowKind) -> Result<Vec<TimingWindow>, EngineError> {
    windows
        .iter()
        .map(|w| {
            Ok(TimingWindow {
                start: render(tz, w.start)?,
                end: render(tz, w.end)?,
                label: label.to_string(),
                kind,
                phase: w.phase,
                nakshatra: None,
            })
        })
        .collect()
}

/// Build the almanac for a date in an already-resolved zone.
///
/// `request.tz` is echoed as given; `zone` is what the arithmetic uses.
pub fn daily_panchangam(request: &PanchangRequest, zone: Tz) -> Result<PanchangResult, EngineError> {
    check_coordinates(request.lat, request.lon)?;
    let date = parse_date(&request.date)?;
    let lang = Language::from_locale(request.locale.as_deref());
    let weekday: Weekday = date.weekday();

    let hours = day_length_hours(date, request.lat);
    let frame = DayFrame::centered(date, hours);
    debug!(%date, tz = zone.name(), day_hours = hours, "computing panchangam");

    let sunrise = render(zone, frame.sunrise)?;
    let sunset = render(zone, frame.sunset)?;
    let next_sunrise = render(zone, frame.next_sunrise)?;

    let mut varjyam_rows = timing(zone, &[varjyam(&frame, day_of_year(date))], "Varjyam", WindowKind::Avoid)?;
    for row in &mut varjyam_rows {
        row.nakshatra = Some("Varjyam".to_string());
    }

    let timings = Timings {
        rahu_kalam: timing(zone, &[segment(&frame, rahu_segment(weekday))], "Rahu Kalam", WindowKind::Avoid)?,
        yamagandam: timing(zone, &[segment(&frame, yamagandam_segment(weekday))], "Yamagandam", WindowKind::Avoid)?,
        gulikai: timing(zone, &[segment(&frame, gulikai_segment(weekday))], "Gulikai", WindowKind::Avoid)?,
        durmuhurtam: timing(zone, &dur_muhurtam(&frame, weekday), "Dur Muhurtam", WindowKind::Avoid)?,
        varjyam: varjyam_rows,
        brahma_muhurta: timing(zone, &[brahma_muhurta(&frame)], "Brahma Muhurta", WindowKind::Auspicious)?,
        abhijit_muhurta: timing(zone, &[abhijit_muhurta(&frame)], "Abhijit Muhurta", WindowKind::Auspicious)?,
    };

    let anga = |a: Anga| {
        vec![AngaEntry {
            name: a.name_on(date).to_string(),
            start: sunrise.clone(),
            end: sunset.clone(),
        }]
    };
    let panchang = PanchangElements {
        vara: Vara {
            name: weekday_name(weekday, lang).to_string(),
        },
        tithi: anga(Anga::Tithi),
        nakshatra: anga(Anga::Nakshatra),
        yoga: anga(Anga::Yoga),
        karana: anga(Anga::Karana),
    };

    Ok(PanchangResult {
        meta: PanchangMeta {
            date: date.format("%Y-%m-%d").to_string(),
            timezone: request.tz.clone(),
            resolved_timezone: zone.name().to_string(),
            location: LocationMeta {
                lat: request.lat,
                lon: request.lon,
                name: request.location_name.clone(),
            },
            hindu_day: Span {
                start: sunrise.clone(),
                end: next_sunrise.clone(),
            },
        },
        astronomy: Astronomy {
            sunrise,
            sunset,
            next_sunrise,
            day_length_minutes: floor_minutes(frame.day_length()),
            night_length_minutes: floor_minutes(frame.night_length()),
        },
        panchang,
        timings,
        notes: vec![Note {
            code: "N_WEDDING_SCOPE".to_string(),
            text: WEDDING_SCOPE_NOTE.to_string(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasonal_peak_on_day_172() {
        assert_eq!(seasonal_factor(172), 1.0);
        assert!(seasonal_factor(172 + 182) < -0.99);
    }

    #[test]
    fn equator_day_length_at_peak() {
        // 2024 is a leap year: June 20 is day 172.
        let date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        assert_eq!(day_of_year(date), 172);
        assert!((day_length_hours(date, 0.0) - 14.5).abs() < 1e-12);
    }

    #[test]
    fn day_length_is_bounded() {
        for lat in [-90.0, -66.5, -13.0, 0.0, 13.0827, 51.5, 89.9] {
            for doy in [1, 60, 172, 200, 355, 366] {
                let date = NaiveDate::from_yo_opt(2024, doy).unwrap();
                let h = day_length_hours(date, lat);
                assert!((MIN_DAY_HOURS..=MAX_DAY_HOURS).contains(&h), "{lat} {doy}: {h}");
            }
        }
    }

    #[test]
    fn locale_picks_vara_language() {
        let zone: Tz = "Asia/Kolkata".parse().unwrap();
        let mut req = PanchangRequest {
            date: "2024-01-15".into(),
            lat: 13.0827,
            lon: 80.2707,
            tz: "Asia/Kolkata".into(),
            locale: Some("ta".into()),
            location_name: None,
        };
        assert_eq!(daily_panchangam(&req, zone).unwrap().panchang.vara.name, "திங்கள்");
        req.locale = Some("xx".into());
        assert_eq!(daily_panchangam(&req, zone).unwrap().panchang.vara.name, "Monday");
    }

    #[test]
    fn bad_date_is_rejected() {
        let zone: Tz = "UTC".parse().unwrap();
        let req = PanchangRequest {
            date: "15/01/2024".into(),
            lat: 0.0,
            lon: 0.0,
            tz: "UTC".into(),
            locale: None,
            location_name: None,
        };
        assert!(matches!(daily_panchangam(&req, zone), Err(EngineError::InvalidDate(_))));
    }

    #[test]
    fn nan_latitude_still_gives_a_bounded_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        assert_eq!(day_length_hours(date, f64::NAN), MAX_DAY_HOURS);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let zone: Tz = "UTC".parse().unwrap();
        for (lat, lon) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (91.0, 0.0)] {
            let req = PanchangRequest {
                date: "2024-01-15".into(),
                lat,
                lon,
                tz: "UTC".into(),
                locale: None,
                location_name: None,
            };
            assert!(
                matches!(daily_panchangam(&req, zone), Err(EngineError::InvalidCoordinates(_))),
                "{lat} {lon}"
            );
        }
    }
}
