//! Shared angle arithmetic.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Floored quotient and remainder of `a / b` for positive `b`.
///
/// The remainder is taken first with `fmod` and the quotient derived from
/// it, so a value that sits a rounding error below a sector boundary stays
/// in the lower sector and quotient and remainder always agree.
pub fn floor_div_mod(a: f64, b: f64) -> (f64, f64) {
    let mut m = a % b;
    let mut div = (a - m) / b;
    if m < 0.0 {
        m += b;
        div -= 1.0;
    }
    let mut q = div.floor();
    if div - q > 0.5 {
        q += 1.0;
    }
    (q, m)
}

/// Index of the equal-width sector containing `lon`, clamped to `count - 1`.
pub fn sector_index(lon: f64, width: f64, count: u8) -> u8 {
    let (q, _) = floor_div_mod(lon, width);
    (q.max(0.0) as u8).min(count - 1)
}
