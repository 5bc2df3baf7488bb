//! Vertical profile calculators: required climb/descent rate and 3:1 rule descent point.

pub mod descent_point;
pub mod vertical_rate;

pub use descent_point::{DescentPointError, LogicError, descent_point};
pub use vertical_rate::vertical_rate;
pub use vnav_validation::{ThreeToOneRuleInput, Validate, ValidationError, VerticalRateInput};
