//! Astronomical time passed to ephemeris providers.

use chrono::{DateTime, Utc};
use kundali_time::{J2000_JD, SECONDS_PER_DAY, centuries_since_j2000, jd_to_calendar, utc_to_jd};

use crate::delta_t::delta_t_seconds;

/// An instant as a Julian Date on the UT scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AstroTime {
    jd_ut: f64,
}

impl AstroTime {
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    /// From a UTC instant, using whole seconds.
    pub fn from_utc(utc: &DateTime<Utc>) -> Self {
        Self::from_jd_ut(utc_to_jd(utc))
    }

    pub const fn j2000() -> Self {
        Self::from_jd_ut(J2000_JD)
    }

    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Decimal year, used to pick the ΔT model.
    pub fn decimal_year(self) -> f64 {
        let (year, month, _) = jd_to_calendar(self.jd_ut);
        year as f64 + (month as f64 - 0.5) / 12.0
    }

    /// Julian Date on the Terrestrial Time scale.
    pub fn jd_tt(self) -> f64 {
        self.jd_ut + delta_t_seconds(self.decimal_year()) / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        centuries_since_j2000(self.jd_tt())
    }
}
