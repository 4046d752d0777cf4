//! Horoscope and Panchangam engines.
//!
//! Both engines are synchronous and hold no state between calls:
//! - [`generate_horoscope`] queries an [`Ephemeris`](kundali_ephem::Ephemeris)
//!   and derives placements, charts, birth details, and the dasha timeline
//! - [`daily_panchangam`] builds the day's windows from a resolved zone
//!
//! Timezone resolution and caching belong to the caller.

pub mod angas;
pub mod error;
pub mod horoscope;
pub mod horoscope_types;
pub mod panchang;
pub mod panchang_types;
pub mod windows;

pub use angas::Anga;
pub use error::{EngineError, check_coordinates};
pub use horoscope::{generate_horoscope, graha_longitudes, mahadasa_entries};
pub use horoscope_types::{
    BhuktiEntry, BirthDetail, ChartCell, ChartGrid, HoroscopeMeta, HoroscopeRequest,
    HoroscopeResult, MahadasaEntry, Placement, PlanetPosition,
};
pub use panchang::{daily_panchangam, day_length_hours, seasonal_factor};
pub use panchang_types::{
    AngaEntry, Astronomy, LocationMeta, Note, PanchangElements, PanchangMeta, PanchangRequest,
    PanchangResult, Span, TimingWindow, Timings, Vara, WindowKind,
};
pub use windows::{DayFrame, Phase, Window};
