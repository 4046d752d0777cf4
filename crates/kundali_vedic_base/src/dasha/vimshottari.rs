//! Vimshottari mahadasha and bhukti timeline.
//!
//! The cycle starts at the lord of the Moon's nakshatra. The first
//! mahadasha is shortened by the part of the nakshatra the Moon has already
//! crossed; each later one runs its full `years × 365.25` days. Bhuktis
//! split their mahadasha in proportion `sub_years / 120`.

use chrono::{DateTime, TimeDelta, Utc};

use super::balance::nakshatra_birth_balance;
use super::types::{BhuktiOrder, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaVariation, Mahadasha};
use crate::graha::{Graha, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS};

/// Fractional days to a duration, rounded half-even to the microsecond.
pub fn days_to_duration(days: f64) -> TimeDelta {
    TimeDelta::microseconds((days * 86_400_000_000.0).round_ties_even() as i64)
}

fn advance(t: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    t.checked_add_signed(days_to_duration(days))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Ordered bhukti lords for a mahadasha.
pub fn bhukti_sequence(maha_lord: Graha, order: BhuktiOrder) -> [Graha; 9] {
    let start = match order {
        BhuktiOrder::CycleStart => 0,
        BhuktiOrder::MahaLord => maha_lord.vimshottari_index(),
    };
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

fn bhuktis(maha_lord: Graha, start: DateTime<Utc>, days: f64, order: BhuktiOrder) -> Vec<DashaPeriod> {
    let mut cursor = start;
    bhukti_sequence(maha_lord, order)
        .iter()
        .enumerate()
        .map(|(i, &sub)| {
            let sub_days = days * (sub.vimshottari_years() / VIMSHOTTARI_TOTAL_YEARS);
            let end = advance(cursor, sub_days);
            let period = DashaPeriod {
                lord: sub,
                level: DashaLevel::Antardasha,
                order: i as u16 + 1,
                start: cursor,
                end,
            };
            cursor = end;
            period
        })
        .collect()
}

/// Build the nine-mahadasha timeline from the Moon's sidereal longitude.
///
/// Returns an empty timeline when the Moon's longitude is not finite, as
/// its nakshatra lord cannot be determined.
pub fn vimshottari_timeline(
    moon_sidereal_lon: f64,
    birth: DateTime<Utc>,
    variation: DashaVariation,
) -> Vec<Mahadasha> {
    if !moon_sidereal_lon.is_finite() {
        return Vec::new();
    }
    let (nakshatra, _, elapsed) = nakshatra_birth_balance(moon_sidereal_lon, 0.0);
    let first = nakshatra.lord().vimshottari_index();

    let mut cursor = birth;
    let mut remaining = 1.0 - elapsed;
    (0..9)
        .map(|i| {
            let lord = VIMSHOTTARI_SEQUENCE[(first + i) % 9];
            let days = lord.vimshottari_years() * DAYS_PER_YEAR * remaining;
            let end = advance(cursor, days);
            let maha = Mahadasha {
                period: DashaPeriod {
                    lord,
                    level: DashaLevel::Mahadasha,
                    order: i as u16 + 1,
                    start: cursor,
                    end,
                },
                bhuktis: bhuktis(lord, cursor, days, variation.bhukti_order),
            };
            cursor = end;
            remaining = 1.0;
            maha
        })
        .collect()
}
