//! Mean lunar node.
//!
//! The mean longitude of the Moon's ascending node is the fifth Delaunay
//! argument Ω (IERS Conventions 2010, Eq. 5.43), referred to the mean
//! equinox of date.

/// Mean ascending node longitude, tropical of date, degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    let arcsec = 450_160.398_036
        + t * (-6_962_890.543_1 + t * (7.472_2 + t * (0.007_702 - t * 0.000_059_39)));
    (arcsec / 3600.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_value() {
        let n = mean_node_deg(0.0);
        assert!((n - 125.044_555).abs() < 1e-5, "Ω(J2000) = {n}");
    }

    #[test]
    fn regresses_about_19_3_degrees_per_year() {
        let a = mean_node_deg(0.0);
        let b = mean_node_deg(0.01);
        let step = (a - b).rem_euclid(360.0);
        assert!((step - 19.34).abs() < 0.05, "yearly regression = {step}");
    }
}
