//! Core types for Vimshottari dasha periods.

use chrono::{DateTime, TimeDelta, Utc};

use crate::graha::Graha;

/// Year length used for period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Depth of a period in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DashaLevel {
    Mahadasha,
    /// Bhukti.
    Antardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }
}

/// Where each mahadasha's bhukti sequence begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BhuktiOrder {
    /// Every mahadasha's bhuktis run Ketu, Venus, Sun, … from the cycle start.
    #[default]
    CycleStart,
    /// Bhuktis start at the mahadasha's own lord (classical).
    MahaLord,
}

/// Rule choices for building a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DashaVariation {
    pub bhukti_order: BhuktiOrder,
}

/// A single period attributed to a lord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
}

impl DashaPeriod {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in (fractional) days.
    pub fn duration_days(&self) -> f64 {
        self.duration().num_microseconds().unwrap_or(i64::MAX) as f64 / 86_400_000_000.0
    }
}

/// A mahadasha with its nine bhuktis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mahadasha {
    pub period: DashaPeriod,
    pub bhuktis: Vec<DashaPeriod>,
}
