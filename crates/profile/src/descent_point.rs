//! Descent-point distance from the 3:1 rule of thumb.

use thiserror::Error;
use tracing::debug;
use vnav_core::constants::THREE_TO_ONE_NM_PER_THOUSAND_FT;
use vnav_core::units::ft_to_thousands;
use vnav_validation::{ThreeToOneRuleInput, Validate, ValidationError};

/// Domain rule violated after the input passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LogicError {
    #[error("For descent calculations, current altitude must be greater than target altitude")]
    NotADescent {
        current_altitude: f64,
        target_altitude: f64,
    },
}

/// Failure modes of [`descent_point`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DescentPointError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Logic(#[from] LogicError),
}

/// Distance (nautical miles) before the target at which to begin descent:
/// 3 NM per 1,000 ft of altitude to lose. The value is not rounded.
///
/// Equal altitudes are rejected by validation; a target above the current
/// altitude is rejected with [`LogicError::NotADescent`].
pub fn descent_point(input: &ThreeToOneRuleInput) -> Result<f64, DescentPointError> {
    let input = input.validate().inspect_err(|err| {
        debug!(field = %err.field(), constraint = ?err.constraint(), "3:1 input rejected");
    })?;

    if input.current_altitude <= input.target_altitude {
        debug!(
            current_ft = input.current_altitude,
            target_ft = input.target_altitude,
            "descent point requested for a climb"
        );
        return Err(LogicError::NotADescent {
            current_altitude: input.current_altitude,
            target_altitude: input.target_altitude,
        }
        .into());
    }

    let loss_thousands = ft_to_thousands(input.current_altitude - input.target_altitude);
    let distance_nm = loss_thousands * THREE_TO_ONE_NM_PER_THOUSAND_FT;

    debug!(
        current_ft = input.current_altitude,
        target_ft = input.target_altitude,
        distance_nm,
        "descent point computed"
    );
    Ok(distance_nm)
}
