//! Keplerian mean orbital elements for the major planets.
//!
//! Elements and rates are from Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL), Table 1, valid
//! 1800 AD – 2050 AD, referred to the mean ecliptic and equinox of J2000.

use std::f64::consts::TAU;

/// Heliocentric orbit with linear secular rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (au) and rate.
    pub a: (f64, f64),
    /// Eccentricity and rate.
    pub e: (f64, f64),
    /// Inclination (deg) and rate.
    pub i: (f64, f64),
    /// Mean longitude (deg) and rate.
    pub l: (f64, f64),
    /// Longitude of perihelion (deg) and rate.
    pub peri: (f64, f64),
    /// Longitude of ascending node (deg) and rate.
    pub node: (f64, f64),
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

pub const VENUS: OrbitalElements = OrbitalElements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

/// Earth–Moon barycenter.
pub const EARTH_MOON: OrbitalElements = OrbitalElements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

pub const MARS: OrbitalElements = OrbitalElements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

pub const JUPITER: OrbitalElements = OrbitalElements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

pub const SATURN: OrbitalElements = OrbitalElements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

const KEPLER_TOL: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 30;

/// Solve Kepler's equation `M = E − e sin E` by Newton iteration (radians).
pub fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let m = (mean_anomaly + std::f64::consts::PI).rem_euclid(TAU) - std::f64::consts::PI;
    let mut ecc = m + e * m.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < KEPLER_TOL {
            break;
        }
    }
    ecc
}

impl OrbitalElements {
    /// Heliocentric J2000 ecliptic position in au at `t` centuries of TT.
    pub fn position(&self, t: f64) -> [f64; 3] {
        let lin = |(v, rate): (f64, f64)| v + rate * t;
        let a = lin(self.a);
        let e = lin(self.e);
        let inc = lin(self.i).to_radians();
        let l = lin(self.l);
        let peri = lin(self.peri);
        let node = lin(self.node);

        let arg_peri = (peri - node).to_radians();
        let node = node.to_radians();
        let ecc = eccentric_anomaly((l - peri).to_radians(), e);

        let xp = a * (ecc.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

        let (sw, cw) = arg_peri.sin_cos();
        let (sn, cn) = node.sin_cos();
        let (si, ci) = inc.sin_cos();

        [
            (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp,
            (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        ]
    }
}

/// Ecliptic longitude in degrees [0, 360) of a rectangular vector.
pub fn longitude_deg(v: [f64; 3]) -> f64 {
    v[1].atan2(v[0]).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_orbit_anomaly_is_identity() {
        let e = eccentric_anomaly(1.234, 0.0);
        assert!((e - 1.234).abs() < 1e-14);
    }

    #[test]
    fn kepler_residual_small() {
        for &(m, e) in &[(0.3, 0.2056), (2.9, 0.0934), (-1.0, 0.0484), (6.0, 0.0167)] {
            let ecc = eccentric_anomaly(m, e);
            let wrapped = (m + std::f64::consts::PI).rem_euclid(TAU) - std::f64::consts::PI;
            let residual = ecc - e * ecc.sin() - wrapped;
            assert!(residual.abs() < 1e-10, "M={m} e={e} residual={residual}");
        }
    }

    #[test]
    fn earth_distance_about_one_au() {
        let p = EARTH_MOON.position(0.24);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 1.0).abs() < 0.02, "r = {r}");
    }

    #[test]
    fn jupiter_stays_near_ecliptic() {
        let p = JUPITER.position(0.1);
        let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
        assert!((p[2] / r).abs() < 0.03, "z/r = {}", p[2] / r);
    }
}
