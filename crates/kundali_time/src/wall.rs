//! Microsecond-resolution durations for wall-clock arithmetic.
//!
//! Durations built from fractional hours round to the nearest microsecond,
//! and division by an integer rounds half to even, so the same inputs
//! always land on the same microsecond.

use chrono::TimeDelta;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Duration of a fractional number of hours, rounded to whole microseconds.
pub fn hours(h: f64) -> TimeDelta {
    TimeDelta::microseconds((h * MICROS_PER_HOUR).round_ties_even() as i64)
}

/// Whole microseconds in a duration.
pub fn micros(d: TimeDelta) -> i64 {
    d.num_microseconds().unwrap_or(i64::MAX)
}

/// Divide a duration by a positive integer, rounding half to even.
pub fn div_round_even(d: TimeDelta, divisor: i64) -> TimeDelta {
    let us = micros(d);
    let q = us.div_euclid(divisor);
    let r = us.rem_euclid(divisor);
    let twice = 2 * r;
    let q = if twice > divisor || (twice == divisor && q % 2 != 0) {
        q + 1
    } else {
        q
    };
    TimeDelta::microseconds(q)
}

/// Whole minutes in a duration, floored.
pub fn floor_minutes(d: TimeDelta) -> i64 {
    micros(d).div_euclid(60_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_hours_round_to_micros() {
        assert_eq!(hours(6.0), TimeDelta::hours(6));
        assert_eq!(micros(hours(1.0 / 3.0)), 1_200_000_000);
    }

    #[test]
    fn division_rounds_half_to_even() {
        assert_eq!(micros(div_round_even(TimeDelta::microseconds(5), 2)), 2);
        assert_eq!(micros(div_round_even(TimeDelta::microseconds(7), 2)), 4);
        assert_eq!(micros(div_round_even(TimeDelta::microseconds(10), 4)), 2);
        assert_eq!(micros(div_round_even(TimeDelta::microseconds(11), 4)), 3);
        assert_eq!(micros(div_round_even(TimeDelta::hours(12), 8)), 5_400_000_000);
    }

    #[test]
    fn minutes_floor() {
        assert_eq!(floor_minutes(TimeDelta::seconds(119)), 1);
        assert_eq!(floor_minutes(TimeDelta::hours(12)), 720);
    }
}
