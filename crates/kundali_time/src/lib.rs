//! Civil-time handling for chart and almanac computation.
//!
//! This crate provides:
//! - `YYYY-MM-DD` and `HH:MM[:SS]` parsing
//! - IANA zone parsing and `fold = 0` wall-clock localization
//! - Julian Date conversion and mean sidereal time
//! - Microsecond wall-clock durations and ISO-8601 rendering
//! - A static table of informal zone abbreviations

pub mod error;
pub mod iso;
pub mod julian;
pub mod local;
pub mod sidereal;
pub mod wall;
pub mod zone;

pub use chrono_tz::Tz;
pub use error::TimeError;
pub use iso::{format_iso, format_wall};
pub use julian::{
    calendar_to_jd, centuries_since_j2000, jd_to_calendar, utc_to_jd, DAYS_PER_CENTURY, J2000_JD,
    SECONDS_PER_DAY,
};
pub use local::{
    day_of_year, day_ordinal, parse_clock_time, parse_date, parse_timezone, utc_to_wall,
    wall_offset, wall_to_utc, weekday_index,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use zone::{alias_key, guess_alias};
