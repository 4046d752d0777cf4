//! Birth balance of the first mahadasha.
//!
//! The Moon's progress through its nakshatra is the fraction of the first
//! lord's period already consumed at birth.

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

/// Compute the nakshatra birth balance.
///
/// Returns `(nakshatra, balance_days, elapsed_fraction)` where
/// `balance_days = entry_period_days × (1 − elapsed_fraction)`.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (Nakshatra, f64, f64) {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = info.elapsed_fraction();
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (info.nakshatra, balance_days, elapsed_fraction)
}
