//! Vimshottari dasha: mahadasha and bhukti scheduling from the Moon.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use types::{BhuktiOrder, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaVariation, Mahadasha};
pub use vimshottari::{bhukti_sequence, days_to_duration, vimshottari_timeline};
