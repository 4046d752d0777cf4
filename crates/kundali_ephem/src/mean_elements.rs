//! Analytic sidereal ephemeris from mean elements.
//!
//! Planets come from Keplerian elements in the J2000 ecliptic, made
//! geocentric by subtracting the Earth–Moon barycenter. Because the Lahiri
//! ayanamsha is anchored at J2000 and then carried by general precession,
//! a J2000 longitude becomes sidereal by subtracting the J2000 anchor alone.
//! The Moon, node, and ascendant are computed in the equinox of date and
//! use the full ayanamsha.

use tracing::trace;

use crate::ayanamsha::{LAHIRI_J2000_DEG, tropical_to_sidereal};
use crate::body::Body;
use crate::error::EphemError;
use crate::kepler::{self, EARTH_MOON, JUPITER, MARS, MERCURY, OrbitalElements, SATURN, VENUS};
use crate::lagna::tropical_ascendant_deg;
use crate::moon::moon_longitude_deg;
use crate::nodes::mean_node_deg;
use crate::time::AstroTime;
use crate::Ephemeris;

/// Validity span of the Keplerian mean elements, as decimal years [start, end).
const SUPPORTED_YEARS: (f64, f64) = (1800.0, 2050.0);

/// Sidereal ephemeris needing no data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementsEphemeris;

impl MeanElementsEphemeris {
    pub const fn new() -> Self {
        Self
    }

    fn check_range(t: AstroTime) -> Result<(), EphemError> {
        let year = t.decimal_year();
        if year < SUPPORTED_YEARS.0 || year >= SUPPORTED_YEARS.1 {
            return Err(EphemError::OutOfRange(t.jd_ut()));
        }
        Ok(())
    }

    fn geocentric_j2000(planet: &OrbitalElements, t: f64) -> f64 {
        let p = planet.position(t);
        let earth = EARTH_MOON.position(t);
        kepler::longitude_deg([p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]])
    }
}

impl Ephemeris for MeanElementsEphemeris {
    fn name(&self) -> &str {
        "mean-elements"
    }

    fn longitude(&self, body: Body, t: AstroTime) -> Result<f64, EphemError> {
        Self::check_range(t)?;
        let tc = t.centuries_tt();
        let j2000_to_sidereal = |lon: f64| (lon - LAHIRI_J2000_DEG).rem_euclid(360.0);
        let lon = match body {
            Body::Sun => {
                let earth = EARTH_MOON.position(tc);
                j2000_to_sidereal(kepler::longitude_deg([-earth[0], -earth[1], -earth[2]]))
            }
            Body::Mercury => j2000_to_sidereal(Self::geocentric_j2000(&MERCURY, tc)),
            Body::Venus => j2000_to_sidereal(Self::geocentric_j2000(&VENUS, tc)),
            Body::Mars => j2000_to_sidereal(Self::geocentric_j2000(&MARS, tc)),
            Body::Jupiter => j2000_to_sidereal(Self::geocentric_j2000(&JUPITER, tc)),
            Body::Saturn => j2000_to_sidereal(Self::geocentric_j2000(&SATURN, tc)),
            Body::Moon => tropical_to_sidereal(moon_longitude_deg(tc), tc),
            Body::MeanNode => tropical_to_sidereal(mean_node_deg(tc), tc),
        };
        trace!(body = body.name(), jd_ut = t.jd_ut(), lon, "sidereal longitude");
        crate::checked_longitude(body.name(), lon)
    }

    fn ascendant(&self, t: AstroTime, lat: f64, lon: f64) -> Result<f64, EphemError> {
        Self::check_range(t)?;
        let tc = t.centuries_tt();
        let tropical = tropical_ascendant_deg(t.jd_ut(), tc, lat, lon);
        crate::checked_longitude("Ascendant", tropical_to_sidereal(tropical, tc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::calendar_to_jd;

    fn at(y: i32, m: u32, d: f64) -> AstroTime {
        AstroTime::from_jd_ut(calendar_to_jd(y, m, d))
    }

    #[test]
    fn sun_enters_sidereal_capricorn_mid_january() {
        // Makara Sankranti falls on 14/15 January in the 2020s.
        let before = MeanElementsEphemeris.longitude(Body::Sun, at(2024, 1, 13.0)).unwrap();
        let after = MeanElementsEphemeris.longitude(Body::Sun, at(2024, 1, 17.0)).unwrap();
        assert!((265.0..270.0).contains(&before), "sun before = {before}");
        assert!((270.0..275.0).contains(&after), "sun after = {after}");
    }

    #[test]
    fn mercury_and_venus_stay_near_sun() {
        let t = at(2024, 5, 1.0);
        let sun = MeanElementsEphemeris.longitude(Body::Sun, t).unwrap();
        for (body, max) in [(Body::Mercury, 29.0), (Body::Venus, 48.0)] {
            let lon = MeanElementsEphemeris.longitude(body, t).unwrap();
            let sep = (lon - sun + 540.0).rem_euclid(360.0) - 180.0;
            assert!(sep.abs() <= max, "{body} elongation {sep}");
        }
    }

    #[test]
    fn all_bodies_in_range() {
        let t = at(2024, 1, 15.042);
        for &body in Body::all() {
            let lon = MeanElementsEphemeris.longitude(body, t).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body} = {lon}");
        }
    }

    #[test]
    fn rejects_far_epochs() {
        let err = MeanElementsEphemeris
            .longitude(Body::Sun, AstroTime::from_jd_ut(1_000_000.0))
            .unwrap_err();
        assert!(matches!(err, EphemError::OutOfRange(_)));
    }

    #[test]
    fn supported_span_is_1800_to_2050() {
        assert!(MeanElementsEphemeris.longitude(Body::Sun, at(1800, 1, 2.0)).is_ok());
        assert!(MeanElementsEphemeris.longitude(Body::Moon, at(2049, 12, 30.0)).is_ok());
        for t in [at(1799, 12, 30.0), at(2050, 1, 2.0), at(2100, 6, 1.0)] {
            let err = MeanElementsEphemeris.longitude(Body::Sun, t).unwrap_err();
            assert!(matches!(err, EphemError::OutOfRange(_)));
            let err = MeanElementsEphemeris.ascendant(t, 13.0, 80.0).unwrap_err();
            assert!(matches!(err, EphemError::OutOfRange(_)));
        }
    }

    #[test]
    fn ascendant_changes_sign_within_day() {
        let mut signs = std::collections::BTreeSet::new();
        for h in 0..24 {
            let t = at(2024, 1, 15.0 + h as f64 / 24.0);
            let asc = MeanElementsEphemeris.ascendant(t, 13.0827, 80.2707).unwrap();
            signs.insert((asc / 30.0) as u8);
        }
        assert_eq!(signs.len(), 12, "signs seen: {signs:?}");
    }
}
