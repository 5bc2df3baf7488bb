//! Core units, constants, and shared primitives for the VNAV calculator workspace.
//!
//! Altitudes are feet (MSL), speeds are knots, distances are nautical miles and
//! vertical rates are feet per minute throughout the workspace.

/// Fixed flight-planning constants.
pub mod constants {
    /// Minutes per hour.
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Feet per "thousand feet" block used by descent heuristics.
    pub const FEET_PER_THOUSAND: f64 = 1_000.0;
    /// Nautical miles of travel per 1,000 ft of altitude loss under the 3:1 rule.
    pub const THREE_TO_ONE_NM_PER_THOUSAND_FT: f64 = 3.0;
}

/// Basic unit helpers.
pub mod units {
    use super::constants::FEET_PER_THOUSAND;

    /// Convert feet to thousands of feet.
    #[inline]
    pub fn ft_to_thousands(v: f64) -> f64 {
        v / FEET_PER_THOUSAND
    }
}

/// Time-to-travel helpers shared across crates.
pub mod time {
    use super::constants::MINUTES_PER_HOUR;

    /// Convert hours to minutes.
    #[inline]
    pub fn hours_to_minutes(hours: f64) -> f64 {
        hours * MINUTES_PER_HOUR
    }

    /// Minutes needed to cover `distance_nm` at `ground_speed_kt`.
    ///
    /// Callers guarantee a strictly positive ground speed.
    #[inline]
    pub fn time_to_travel_minutes(distance_nm: f64, ground_speed_kt: f64) -> f64 {
        hours_to_minutes(distance_nm / ground_speed_kt)
    }
}

/// Rounding conventions.
pub mod rounding {
    /// Round to the nearest integer, sending exact halves toward positive infinity.
    ///
    /// `2.5` rounds to `3` while `-2.5` rounds to `-2`. Values beyond the `i64`
    /// range, infinities included, saturate to `i64::MAX` / `i64::MIN`. NaN maps to `0`.
    pub fn round_half_up(value: f64) -> i64 {
        let floor = value.floor();
        let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
        if rounded >= i64::MAX as f64 {
            i64::MAX
        } else if rounded <= i64::MIN as f64 {
            i64::MIN
        } else {
            rounded as i64
        }
    }

    #[cfg(test)]
    mod tests {
        use super::round_half_up;

        #[test]
        fn halves_go_toward_positive_infinity() {
            assert_eq!(round_half_up(2.5), 3);
            assert_eq!(round_half_up(-2.5), -2);
            assert_eq!(round_half_up(-0.5), 0);
        }

        #[test]
        fn non_halves_go_to_nearest() {
            assert_eq!(round_half_up(799.9999999), 800);
            assert_eq!(round_half_up(-799.9999999), -800);
            assert_eq!(round_half_up(-800.4), -800);
            assert_eq!(round_half_up(-800.6), -801);
            assert_eq!(round_half_up(0.499_999_999_999_999_94), 0);
        }

        #[test]
        fn out_of_range_values_saturate() {
            assert_eq!(round_half_up(1e300), i64::MAX);
            assert_eq!(round_half_up(f64::INFINITY), i64::MAX);
            assert_eq!(round_half_up(-1e300), i64::MIN);
            assert_eq!(round_half_up(f64::NEG_INFINITY), i64::MIN);
        }
    }
}
