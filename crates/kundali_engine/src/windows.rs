//! Daily time windows on the local wall clock.
//!
//! Everything here is naive wall-clock arithmetic at microsecond
//! resolution; offsets are attached only when a window is rendered.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use kundali_time::wall::{div_round_even, hours};
use serde::{Deserialize, Serialize};

/// Sunrise, sunset, and the following sunrise for one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFrame {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub next_sunrise: NaiveDateTime,
}

impl DayFrame {
    /// Center a day of `day_length_hours` on local noon.
    pub fn centered(date: NaiveDate, day_length_hours: f64) -> Self {
        let noon = date.and_time(NaiveTime::MIN) + TimeDelta::hours(12);
        let half = hours(day_length_hours / 2.0);
        let sunrise = noon - half;
        Self {
            sunrise,
            sunset: noon + half,
            next_sunrise: sunrise + TimeDelta::days(1),
        }
    }

    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }

    pub fn night_length(&self) -> TimeDelta {
        self.next_sunrise - self.sunset
    }
}

/// Day or night half of the Hindu day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Day,
    Night,
}

/// A wall-clock interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub phase: Option<Phase>,
}

impl Window {
    fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end, phase: None }
    }
}

/// Rahu Kalam segment (1-8) by weekday.
pub const fn rahu_segment(day: Weekday) -> i32 {
    match day {
        Weekday::Mon => 2,
        Weekday::Tue => 7,
        Weekday::Wed => 5,
        Weekday::Thu => 6,
        Weekday::Fri => 4,
        Weekday::Sat => 3,
        Weekday::Sun => 8,
    }
}

/// Yamagandam segment (1-8) by weekday.
pub const fn yamagandam_segment(day: Weekday) -> i32 {
    match day {
        Weekday::Mon => 4,
        Weekday::Tue => 3,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Fri => 7,
        Weekday::Sat => 6,
        Weekday::Sun => 5,
    }
}

/// Gulikai Kalam segment (1-8) by weekday.
pub const fn gulikai_segment(day: Weekday) -> i32 {
    match day {
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
        Weekday::Sun => 7,
    }
}

/// The `index`-th (1-based) eighth of daylight.
pub fn segment(frame: &DayFrame, index: i32) -> Window {
    let seg = div_round_even(frame.day_length(), 8);
    let start = frame.sunrise + seg * (index - 1);
    Window::new(start, start + seg)
}

/// 96 to 48 minutes before sunrise.
pub fn brahma_muhurta(frame: &DayFrame) -> Window {
    Window::new(
        frame.sunrise - TimeDelta::minutes(96),
        frame.sunrise - TimeDelta::minutes(48),
    )
}

/// Middle fifteenth of daylight, centered on solar noon.
pub fn abhijit_muhurta(frame: &DayFrame) -> Window {
    let length = frame.day_length();
    let half = div_round_even(length, 30);
    let mid = frame.sunrise + div_round_even(length, 2);
    Window::new(mid - half, mid + half)
}

/// One Dur Muhurtam entry, in ghatis from sunrise (day) or sunset (night).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhatiRule {
    pub offset: i32,
    pub duration: i32,
    pub phase: Phase,
}

const fn day(offset: i32, duration: i32) -> GhatiRule {
    GhatiRule { offset, duration, phase: Phase::Day }
}

const fn night(offset: i32, duration: i32) -> GhatiRule {
    GhatiRule { offset, duration, phase: Phase::Night }
}

const SUN_SAT: &[GhatiRule] = &[day(0, 4)];
const MON: &[GhatiRule] = &[day(16, 2), day(22, 2)];
const TUE: &[GhatiRule] = &[day(6, 2), night(14, 2)];
const WED: &[GhatiRule] = &[day(14, 2)];
const THU: &[GhatiRule] = &[day(10, 2), day(22, 2)];
const FRI: &[GhatiRule] = &[day(6, 2), day(22, 2)];

/// Dur Muhurtam rules by weekday.
pub const fn dur_muhurtam_rules(weekday: Weekday) -> &'static [GhatiRule] {
    match weekday {
        Weekday::Sun | Weekday::Sat => SUN_SAT,
        Weekday::Mon => MON,
        Weekday::Tue => TUE,
        Weekday::Wed => WED,
        Weekday::Thu => THU,
        Weekday::Fri => FRI,
    }
}

/// Dur Muhurtam windows; a ghati is 1/30 of the day or night.
pub fn dur_muhurtam(frame: &DayFrame, weekday: Weekday) -> Vec<Window> {
    let day_ghati = div_round_even(frame.day_length(), 30);
    let night_ghati = div_round_even(frame.night_length(), 30);
    dur_muhurtam_rules(weekday)
        .iter()
        .map(|rule| {
            let (base, ghati) = match rule.phase {
                Phase::Day => (frame.sunrise, day_ghati),
                Phase::Night => (frame.sunset, night_ghati),
            };
            let start = base + ghati * rule.offset;
            Window {
                start,
                end: start + ghati * rule.duration,
                phase: Some(rule.phase),
            }
        })
        .collect()
}

pub const VARJYAM_MINUTES: i64 = 50;

/// Placeholder Varjyam: 50 minutes starting `60 + (day_of_year % 120)`
/// minutes after sunrise.
pub fn varjyam(frame: &DayFrame, day_of_year: u32) -> Window {
    let start = frame.sunrise + TimeDelta::minutes(60 + (day_of_year % 120) as i64);
    Window::new(start, start + TimeDelta::minutes(VARJYAM_MINUTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(h: f64) -> DayFrame {
        DayFrame::centered(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), h)
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn twelve_hour_day_runs_six_to_six() {
        let f = frame(12.0);
        assert_eq!(f.sunrise, at(6, 0, 0));
        assert_eq!(f.sunset, at(18, 0, 0));
        assert_eq!(f.night_length(), TimeDelta::hours(12));
    }

    #[test]
    fn segments_tile_daylight() {
        let f = frame(12.0);
        assert_eq!(segment(&f, 1).start, f.sunrise);
        assert_eq!(segment(&f, 2), Window::new(at(7, 30, 0), at(9, 0, 0)));
        assert_eq!(segment(&f, 8).end, f.sunset);
    }

    #[test]
    fn each_weekday_table_is_a_permutation_of_segments() {
        use Weekday::*;
        for table in [rahu_segment, yamagandam_segment, gulikai_segment] {
            let mut seen: Vec<i32> = [Mon, Tue, Wed, Thu, Fri, Sat, Sun].map(table).to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 7);
            assert!(seen.iter().all(|s| (1..=8).contains(s)));
        }
    }

    #[test]
    fn abhijit_is_centered() {
        let f = frame(12.0);
        let w = abhijit_muhurta(&f);
        assert_eq!(w.start, at(11, 36, 0));
        assert_eq!(w.end, at(12, 24, 0));
    }

    #[test]
    fn brahma_before_sunrise() {
        let w = brahma_muhurta(&frame(12.0));
        assert_eq!((w.start, w.end), (at(4, 24, 0), at(5, 12, 0)));
    }

    #[test]
    fn tuesday_has_a_night_window() {
        let f = frame(12.0);
        let ws = dur_muhurtam(&f, Weekday::Tue);
        assert_eq!(ws.len(), 2);
        assert_eq!(ws[0].phase, Some(Phase::Day));
        assert_eq!(ws[0].start, at(8, 24, 0));
        assert_eq!(ws[1].phase, Some(Phase::Night));
        // 14 night ghatis of 24 minutes after 18:00.
        assert_eq!(ws[1].start, at(18, 0, 0) + TimeDelta::minutes(14 * 24));
        assert_eq!(ws[1].end - ws[1].start, TimeDelta::minutes(48));
    }

    #[test]
    fn sunday_single_four_ghati_window() {
        let ws = dur_muhurtam(&frame(12.0), Weekday::Sun);
        assert_eq!(ws.len(), 1);
        assert_eq!((ws[0].start, ws[0].end), (at(6, 0, 0), at(7, 36, 0)));
    }

    #[test]
    fn dur_muhurtam_tables_cover_every_weekday() {
        use Weekday::*;
        let tables: Vec<&'static [GhatiRule]> = [Mon, Tue, Wed, Thu, Fri, Sat, Sun]
            .map(dur_muhurtam_rules)
            .to_vec();
        assert!(tables.iter().all(|t| !t.is_empty()));
        assert_eq!(dur_muhurtam_rules(Sat), dur_muhurtam_rules(Sun));
        let nights = tables
            .iter()
            .flat_map(|t| t.iter())
            .filter(|r| r.phase == Phase::Night)
            .count();
        assert_eq!(nights, 1);
        assert_eq!(dur_muhurtam(&frame(12.0), Sat).len(), 1);
    }

    #[test]
    fn varjyam_offset_wraps_every_120_days() {
        let f = frame(12.0);
        assert_eq!(varjyam(&f, 15).start, at(7, 15, 0));
        assert_eq!(varjyam(&f, 135).start, at(7, 15, 0));
        assert_eq!(varjyam(&f, 15).end, at(8, 5, 0));
    }
}
