//! Input records for the VNAV calculators and the checks they must pass before any
//! arithmetic runs.
//!
//! Checks run in field order and stop at the first violation. The cross-field
//! altitude check only runs once every individual field is acceptable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields that can be named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CurrentAltitude,
    TargetAltitude,
    GroundSpeed,
    Distance,
}

impl Field {
    /// Wire name as used in request files.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::CurrentAltitude => "currentAltitude",
            Field::TargetAltitude => "targetAltitude",
            Field::GroundSpeed => "groundSpeed",
            Field::Distance => "distance",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::CurrentAltitude => "Current altitude",
            Field::TargetAltitude => "Target altitude",
            Field::GroundSpeed => "Ground speed",
            Field::Distance => "Distance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraint violated by a rejected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Value must be a finite number (not NaN or infinite).
    Finite,
    /// Value must be `>= 0`.
    NonNegative,
    /// Value must be `> 0`.
    Positive,
    /// Current and target altitude must differ.
    DistinctAltitudes,
}

/// Rejection of an input record, naming the offending field and the rule it broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", describe(.field, .constraint))]
pub struct ValidationError {
    field: Field,
    constraint: Constraint,
}

impl ValidationError {
    /// Build an error for `field` breaking `constraint`.
    pub fn new(field: Field, constraint: Constraint) -> Self {
        Self { field, constraint }
    }

    /// Field that failed; [`Field::TargetAltitude`] for the altitude comparison.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Rule the field broke.
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }
}

fn describe(field: &Field, constraint: &Constraint) -> String {
    match constraint {
        Constraint::Finite => format!("{} must be a finite number", field.label()),
        Constraint::NonNegative => format!("{} must be non-negative", field.label()),
        Constraint::Positive => format!("{} must be positive", field.label()),
        Constraint::DistinctAltitudes => {
            "Current altitude must be different from target altitude".to_string()
        }
    }
}

/// Records that can check their own preconditions.
pub trait Validate: Sized {
    /// Return the record unchanged when every constraint holds.
    fn validate(self) -> Result<Self, ValidationError>;
}

/// Parameters for a climb or descent rate calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalRateInput {
    /// Current altitude, feet MSL.
    pub current_altitude: f64,
    /// Altitude to reach at the end of the leg, feet MSL.
    pub target_altitude: f64,
    /// Ground speed, knots.
    pub ground_speed: f64,
    /// Distance available for the altitude change, nautical miles.
    pub distance: f64,
}

impl Validate for VerticalRateInput {
    fn validate(self) -> Result<Self, ValidationError> {
        non_negative(Field::CurrentAltitude, self.current_altitude)?;
        non_negative(Field::TargetAltitude, self.target_altitude)?;
        positive(Field::GroundSpeed, self.ground_speed)?;
        positive(Field::Distance, self.distance)?;
        distinct_altitudes(self.current_altitude, self.target_altitude)?;
        Ok(self)
    }
}

/// Parameters for a 3:1 rule descent-point calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeToOneRuleInput {
    /// Current altitude, feet MSL.
    pub current_altitude: f64,
    /// Altitude to descend to, feet MSL.
    pub target_altitude: f64,
}

impl Validate for ThreeToOneRuleInput {
    fn validate(self) -> Result<Self, ValidationError> {
        non_negative(Field::CurrentAltitude, self.current_altitude)?;
        non_negative(Field::TargetAltitude, self.target_altitude)?;
        distinct_altitudes(self.current_altitude, self.target_altitude)?;
        Ok(self)
    }
}

fn finite(field: Field, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new(field, Constraint::Finite))
    }
}

fn non_negative(field: Field, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::new(field, Constraint::NonNegative));
    }
    Ok(())
}

fn positive(field: Field, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::new(field, Constraint::Positive));
    }
    Ok(())
}

// Reported against the target altitude.
fn distinct_altitudes(current: f64, target: f64) -> Result<(), ValidationError> {
    if current == target {
        return Err(ValidationError::new(
            Field::TargetAltitude,
            Constraint::DistinctAltitudes,
        ));
    }
    Ok(())
}
