//! ISO-8601 rendering of wall-clock times with a fixed UTC offset.

use chrono::{FixedOffset, NaiveDateTime, Timelike};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::local::wall_offset;

/// Render `YYYY-MM-DDTHH:MM:SS[.ffffff]+HH:MM`.
///
/// Microseconds appear only when non-zero; offset seconds only when the
/// offset is not a whole minute.
pub fn format_iso(wall: NaiveDateTime, offset: FixedOffset) -> String {
    let mut out = wall.format("%Y-%m-%dT%H:%M:%S").to_string();
    let us = wall.nanosecond() / 1_000;
    if us != 0 {
        out.push_str(&format!(".{us:06}"));
    }
    let total = offset.local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let abs = total.unsigned_abs();
    out.push_str(&format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60));
    if abs % 60 != 0 {
        out.push_str(&format!(":{:02}", abs % 60));
    }
    out
}

/// Render a wall-clock time in `tz` with its `fold = 0` offset.
pub fn format_wall(tz: Tz, wall: NaiveDateTime) -> Result<String, TimeError> {
    Ok(format_iso(wall, wall_offset(tz, wall)?))
}
