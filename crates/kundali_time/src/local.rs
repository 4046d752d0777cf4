//! Civil date and clock parsing, and wall-clock localization.
//!
//! Localization follows the `fold = 0` convention: an ambiguous wall time
//! (clocks set back) takes the earlier offset, and a wall time that falls
//! in a gap (clocks set forward) is read with the offset in force before
//! the gap.

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Parse `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Result<NaiveDate, TimeError> {
    let trimmed = text.trim();
    let mut parts = trimmed.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TimeError::InvalidDate(text.to_string()));
    };
    let year = y.trim().parse::<i32>().ok();
    let month = m.trim().parse::<u32>().ok();
    let day = d.trim().parse::<u32>().ok();
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) if (1..=9999).contains(&y) => NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| TimeError::InvalidDate(text.to_string())),
        _ => Err(TimeError::InvalidDate(text.to_string())),
    }
}

/// Parse a clock time `H:M[:S]`; fields past the seconds are ignored.
pub fn parse_clock_time(text: &str) -> Result<NaiveTime, TimeError> {
    let bad = || TimeError::InvalidTime(text.to_string());
    let fields: Vec<&str> = text.trim().split(':').collect();
    if fields.len() < 2 {
        return Err(bad());
    }
    let num = |s: &str| s.trim().parse::<u32>().map_err(|_| bad());
    let hour = num(fields[0])?;
    let minute = num(fields[1])?;
    let second = match fields.get(2) {
        Some(s) => num(s)?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(bad)
}

/// Parse an IANA zone identifier exactly as written (after trimming).
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// UTC offset that applies to a wall-clock time under `fold = 0`.
pub fn wall_offset(tz: Tz, wall: NaiveDateTime) -> Result<FixedOffset, TimeError> {
    match tz.offset_from_local_datetime(&wall) {
        LocalResult::Single(off) => Ok(off.fix()),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier.fix()),
        LocalResult::None => {
            // Gap: the offset a day earlier is the one before the transition.
            let before = wall - TimeDelta::days(1);
            tz.offset_from_local_datetime(&before)
                .earliest()
                .map(|off| off.fix())
                .ok_or_else(|| TimeError::Unmappable(wall.to_string(), tz.name().to_string()))
        }
    }
}

/// Wall-clock time in `tz` to its UTC instant.
pub fn wall_to_utc(tz: Tz, wall: NaiveDateTime) -> Result<DateTime<Utc>, TimeError> {
    let offset = wall_offset(tz, wall)?;
    let utc = wall - TimeDelta::seconds(offset.local_minus_utc() as i64);
    Ok(Utc.from_utc_datetime(&utc))
}

/// UTC instant to the wall-clock date and time in `tz`.
pub fn utc_to_wall(tz: Tz, utc: &DateTime<Utc>) -> NaiveDateTime {
    utc.with_timezone(&tz).naive_local()
}

/// Day of year, 1-based.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Proleptic Gregorian ordinal, 0001-01-01 = 1.
pub fn day_ordinal(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64
}

/// Weekday index with Monday = 0 … Sunday = 6.
pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}
