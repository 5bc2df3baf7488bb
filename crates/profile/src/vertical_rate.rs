//! Required vertical speed to change altitude over a fixed distance.

use tracing::debug;
use vnav_core::rounding::round_half_up;
use vnav_core::time::time_to_travel_minutes;
use vnav_validation::{Validate, ValidationError, VerticalRateInput};

/// Compute the vertical rate (feet per minute) needed to reach the target altitude
/// over `distance` nautical miles at `ground_speed` knots.
///
/// The result is signed: positive for a climb, negative for a descent. It is rounded
/// to the nearest whole foot per minute with exact halves rounded up.
///
/// Extreme but valid inputs can make the leg time underflow to zero or the rate exceed
/// the `i64` range; the rate then saturates to `i64::MAX` for a climb and `i64::MIN`
/// for a descent.
pub fn vertical_rate(input: &VerticalRateInput) -> Result<i64, ValidationError> {
    let input = input.validate().inspect_err(|err| {
        debug!(field = %err.field(), constraint = ?err.constraint(), "vertical rate input rejected");
    })?;

    let altitude_change_ft = input.target_altitude - input.current_altitude;
    let minutes = time_to_travel_minutes(input.distance, input.ground_speed);
    let raw_fpm = altitude_change_ft / minutes;
    let rate_fpm = round_half_up(raw_fpm);
    if rate_fpm == i64::MAX || rate_fpm == i64::MIN {
        debug!(raw_fpm, rate_fpm, "vertical rate saturated to i64 range");
    }

    debug!(
        current_ft = input.current_altitude,
        target_ft = input.target_altitude,
        ground_speed_kt = input.ground_speed,
        distance_nm = input.distance,
        minutes,
        rate_fpm,
        "vertical rate computed"
    );
    Ok(rate_fpm)
}
