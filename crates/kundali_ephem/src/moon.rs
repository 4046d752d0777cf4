//! Geocentric lunar longitude.
//!
//! Mean arguments and the periodic terms in longitude of Meeus,
//! *Astronomical Algorithms* (2nd ed.), ch. 47, Table 47.A (an abridgement
//! of ELP-2000/82). Accuracy is about 10″ in longitude over 1900–2100.
//! The result is referred to the mean equinox of date.

/// Multiples of (D, M, M′, F) and the sine coefficient in 1e-6 degrees.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 59] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
    (2, -2, -1, 0, 2_048.0),
    (2, 0, 1, -2, -1_773.0),
    (2, 0, 0, 2, -1_595.0),
    (4, -1, -1, 0, 1_215.0),
    (0, 0, 2, 2, -1_110.0),
    (3, 0, -1, 0, -892.0),
    (2, 1, 1, 0, -810.0),
    (4, -1, -2, 0, 759.0),
    (0, 2, -1, 0, -713.0),
    (2, 2, -1, 0, -700.0),
    (2, 1, -2, 0, 691.0),
    (2, -1, 0, -2, 596.0),
    (4, 0, 1, 0, 549.0),
    (0, 0, 4, 0, 537.0),
    (4, -1, 0, 0, 520.0),
    (1, 0, -2, 0, -487.0),
    (2, 1, 0, -2, -399.0),
    (0, 0, 2, -2, -381.0),
    (1, 1, 1, 0, 351.0),
    (3, 0, -2, 0, -340.0),
    (4, 0, -3, 0, 330.0),
    (2, -1, 2, 0, 327.0),
    (0, 2, 1, 0, -323.0),
    (1, 1, -1, 0, 299.0),
    (2, 0, 3, 0, 294.0),
];

/// Mean arguments of the lunar theory in degrees at `t` centuries of TT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L′.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_arg: f64,
}

impl LunarArguments {
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_arg: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Geocentric ecliptic longitude of the Moon, mean equinox of date, degrees [0, 360).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_arg.to_radians();
    // Eccentricity of Earth's orbit scales the terms that contain M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sigma: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, coeff)| {
            let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
            let scale = match cm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            coeff * scale * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sigma += 3_958.0 * a1.sin()
        + 1_962.0 * (args.mean_longitude - args.latitude_arg).to_radians().sin()
        + 318.0 * a2.sin();

    (args.mean_longitude + sigma / 1_000_000.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::calendar_to_jd;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: λ = 133.162655° (before nutation, Σl applied)
        let t = (calendar_to_jd(1992, 4, 12.0) - 2_451_545.0) / 36_525.0;
        let lon = moon_longitude_deg(t);
        assert!((lon - 133.162_655).abs() < 0.01, "λ = {lon}");
    }

    #[test]
    fn moves_about_13_degrees_per_day() {
        let a = moon_longitude_deg(0.0);
        let b = moon_longitude_deg(1.0 / 36_525.0);
        let step = (b - a).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&step), "daily motion = {step}");
    }
}
