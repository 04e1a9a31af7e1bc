//! # Domain Checks
//!
//! Optional constraint checks on a [`WallInput`].
//!
//! [`crate::evaluate`] never calls these. Out-of-domain input still evaluates
//! and may produce non-finite results; hosts that want to refuse such input
//! run [`check_domain`] first (or use [`evaluate_strict`]).

use crate::{StabilityResult, WallError, WallField, WallInput, evaluate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainWarning {
    /// Offending field, or `None` for constraints spanning several fields.
    pub field: Option<WallField>,
    pub value: f64,
    pub message: String,
}

impl DomainWarning {
    fn new(field: WallField, value: f64, message: &str) -> Self {
        Self {
            field: Some(field),
            value,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{} = {}: {}", field, self.value, self.message),
            None => write!(f, "{}: {}", self.value, self.message),
        }
    }
}

/// List every constraint `input` violates, in field order.
pub fn check_domain(input: &WallInput) -> Vec<DomainWarning> {
    let mut warnings = Vec::new();

    let fields = [
        (WallField::Height, input.height),
        (WallField::SoilUnitWeight, input.soil_unit_weight),
        (WallField::FrictionAngle, input.friction_angle),
        (WallField::Cohesion, input.cohesion),
        (WallField::Surcharge, input.surcharge),
        (WallField::InnerBase, input.inner_base),
        (WallField::OuterBase, input.outer_base),
        (WallField::HigherFooting, input.higher_footing),
        (WallField::LowerFooting, input.lower_footing),
        (WallField::TopWidth, input.top_width),
        (WallField::StemBaseWidth, input.stem_base_width),
        (WallField::ConcreteUnitWeight, input.concrete_unit_weight),
        (WallField::BaseFriction, input.base_friction),
        (WallField::AllowableBearing, input.allowable_bearing),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            warnings.push(DomainWarning::new(field, value, "must be a finite number"));
            continue;
        }
        let violation = match field {
            WallField::Height
            | WallField::SoilUnitWeight
            | WallField::ConcreteUnitWeight
            | WallField::AllowableBearing => (value <= 0.0).then_some("must be positive"),
            WallField::FrictionAngle => {
                (!(0.0..90.0).contains(&value)).then_some("must lie in [0, 90) degrees")
            }
            WallField::BaseFriction => {
                (!(0.0..=1.0).contains(&value)).then_some("is outside the typical range [0, 1]")
            }
            _ => (value < 0.0).then_some("must not be negative"),
        };
        if let Some(message) = violation {
            warnings.push(DomainWarning::new(field, value, message));
        }
    }

    let base_width = input.inner_base + input.outer_base;
    if base_width == 0.0 {
        warnings.push(DomainWarning {
            field: None,
            value: base_width,
            message: "total base width is zero; bearing pressure is undefined".to_string(),
        });
    }

    warnings
}

/// Evaluate only if `input` passes every domain check.
pub fn evaluate_strict(input: &WallInput) -> Result<StabilityResult, WallError> {
    let warnings = check_domain(input);
    if !warnings.is_empty() {
        return Err(WallError::DomainCheckFailed(warnings.len()));
    }
    Ok(evaluate(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wall_is_in_domain() {
        assert!(check_domain(&WallInput::default()).is_empty());
    }

    #[test]
    fn ninety_degree_friction_flagged() {
        let input = WallInput {
            friction_angle: 90.0,
            ..WallInput::default()
        };
        let warnings = check_domain(&input);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, Some(WallField::FrictionAngle));
    }

    #[test]
    fn zero_base_flagged_once_per_rule() {
        let input = WallInput {
            inner_base: 0.0,
            outer_base: 0.0,
            ..WallInput::default()
        };
        let warnings = check_domain(&input);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, None);
    }

    #[test]
    fn non_finite_reported_before_range() {
        let input = WallInput {
            height: f64::NAN,
            cohesion: -1.0,
            ..WallInput::default()
        };
        let warnings = check_domain(&input);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message, "must be a finite number");
        assert_eq!(warnings[1].field, Some(WallField::Cohesion));
    }

    #[test]
    fn strict_evaluation_refuses_warnings() {
        let input = WallInput {
            height: 0.0,
            ..WallInput::default()
        };
        assert!(matches!(
            evaluate_strict(&input),
            Err(WallError::DomainCheckFailed(1))
        ));
        assert!(evaluate_strict(&WallInput::default()).is_ok());
    }

    #[test]
    fn warning_display_names_field() {
        let warning = DomainWarning::new(WallField::Height, -2.0, "must be positive");
        assert_eq!(warning.to_string(), "height = -2: must be positive");
    }
}
