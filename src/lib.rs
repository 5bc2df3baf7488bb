//! Vertical navigation planning calculations.
//!
//! The arithmetic lives in the workspace crates; this crate re-exports them and
//! offers the positional entry points plus a dispatcher for parsed requests, so
//! that front-ends (the `vnav` CLI, tests, embedding applications) share one
//! surface.

use thiserror::Error;
use tracing::debug;

pub use vnav_config as config;
pub use vnav_core as common;
pub use vnav_export as export;
pub use vnav_profile as profile;
pub use vnav_validation as validation;

pub use vnav_config::CalculationRequest;
pub use vnav_profile::{DescentPointError, LogicError};
pub use vnav_validation::{
    Constraint, Field, ThreeToOneRuleInput, Validate, ValidationError, VerticalRateInput,
};

use vnav_export::{CalculationReport, InputValue, ReportValue};

/// Required vertical rate in feet per minute; positive climbs, negative descends.
pub fn calculate_vertical_rate(
    current_altitude: f64,
    target_altitude: f64,
    ground_speed: f64,
    distance: f64,
) -> Result<i64, ValidationError> {
    vnav_profile::vertical_rate(&VerticalRateInput {
        current_altitude,
        target_altitude,
        ground_speed,
        distance,
    })
}

/// Distance in nautical miles at which to start descending under the 3:1 rule.
pub fn calculate_descent_point_using_3_to_1_rule(
    current_altitude: f64,
    target_altitude: f64,
) -> Result<f64, DescentPointError> {
    vnav_profile::descent_point(&ThreeToOneRuleInput {
        current_altitude,
        target_altitude,
    })
}

/// Any failure raised by [`calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Logic(#[from] LogicError),
}

impl From<DescentPointError> for CalculationError {
    fn from(value: DescentPointError) -> Self {
        match value {
            DescentPointError::Validation(err) => CalculationError::Validation(err),
            DescentPointError::Logic(err) => CalculationError::Logic(err),
        }
    }
}

/// Result of a dispatched request, carrying the inputs it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationOutcome {
    VerticalRate {
        input: VerticalRateInput,
        rate_fpm: i64,
    },
    DescentPoint {
        input: ThreeToOneRuleInput,
        distance_nm: f64,
    },
}

impl CalculationOutcome {
    /// Build an exportable report for this outcome.
    pub fn report(&self) -> CalculationReport {
        match *self {
            CalculationOutcome::VerticalRate { input, rate_fpm } => CalculationReport {
                kind: "vertical_rate",
                inputs: vec![
                    altitude("currentAltitude", input.current_altitude),
                    altitude("targetAltitude", input.target_altitude),
                    InputValue {
                        name: "groundSpeed",
                        value: input.ground_speed,
                        unit: "kt",
                    },
                    InputValue {
                        name: "distance",
                        value: input.distance,
                        unit: "NM",
                    },
                ],
                value: ReportValue::Integer(rate_fpm),
                unit: "fpm",
            },
            CalculationOutcome::DescentPoint { input, distance_nm } => CalculationReport {
                kind: "three_to_one",
                inputs: vec![
                    altitude("currentAltitude", input.current_altitude),
                    altitude("targetAltitude", input.target_altitude),
                ],
                value: ReportValue::Real(distance_nm),
                unit: "NM",
            },
        }
    }
}

fn altitude(name: &'static str, value: f64) -> InputValue {
    InputValue {
        name,
        value,
        unit: "ft",
    }
}

/// Run the calculator selected by a parsed request.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationOutcome, CalculationError> {
    debug!(kind = request.kind(), "dispatching request");
    let outcome = match *request {
        CalculationRequest::VerticalRate(input) => CalculationOutcome::VerticalRate {
            input,
            rate_fpm: vnav_profile::vertical_rate(&input)?,
        },
        CalculationRequest::ThreeToOne(input) => CalculationOutcome::DescentPoint {
            input,
            distance_nm: vnav_profile::descent_point(&input)?,
        },
    };
    Ok(outcome)
}
