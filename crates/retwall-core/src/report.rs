//! # Stability Report
//!
//! Display rounding of a [`StabilityResult`].
//!
//! Rounding is presentation only. Verdicts are copied from the unrounded
//! result, never recomputed from the rounded text.

use crate::primitives::{
    ECCENTRICITY_DECIMALS, FACTOR_DECIMALS, FORCE_DECIMALS, KA_DECIMALS, PRESSURE_DECIMALS,
};
use crate::{StabilityResult, WallProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format `value` with a fixed number of decimals.
///
/// Exact halfway cases round away from zero (`0.125` → `"0.13"`), unlike
/// `format!`, which rounds them to even. Non-finite values render as
/// `Infinity`, `-Infinity` and `NaN`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if is_exact_tie(value, decimals) {
        // next float away from zero
        let nudged = f64::from_bits(value.to_bits() + 1);
        format!("{:.*}", decimals, nudged)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Whether `value` lies exactly halfway between two `decimals`-place numbers.
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let tail = exact
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(decimals..));
    match tail.and_then(|t| t.strip_prefix('5')) {
        Some(rest) => rest.bytes().all(|b| b == b'0'),
        None => false,
    }
}

/// Rounded, display-ready view of a stability result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityReport {
    pub ka: String,
    pub active_thrust: String,
    pub self_weight: String,
    pub sliding_factor: String,
    pub overturning_factor: String,
    pub eccentricity: String,
    pub max_bearing_pressure: String,
    pub sliding_ok: bool,
    pub overturning_ok: bool,
    pub bearing_ok: bool,
}

impl StabilityReport {
    /// Whether every check passed.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.sliding_ok && self.overturning_ok && self.bearing_ok
    }

    /// Render the report under a heading naming the wall.
    #[must_use]
    pub fn render_for(&self, profile: &WallProfile) -> String {
        format!(
            "Wall {} ({}, {})\n{}",
            profile.name, profile.shape, profile.concrete_type, self
        )
    }
}

impl From<&StabilityResult> for StabilityReport {
    fn from(result: &StabilityResult) -> Self {
        Self {
            ka: to_fixed(result.ka, KA_DECIMALS),
            active_thrust: to_fixed(result.active_thrust, FORCE_DECIMALS),
            self_weight: to_fixed(result.self_weight, FORCE_DECIMALS),
            sliding_factor: to_fixed(result.sliding_factor, FACTOR_DECIMALS),
            overturning_factor: to_fixed(result.overturning_factor, FACTOR_DECIMALS),
            eccentricity: to_fixed(result.eccentricity, ECCENTRICITY_DECIMALS),
            max_bearing_pressure: to_fixed(result.max_bearing_pressure, PRESSURE_DECIMALS),
            sliding_ok: result.sliding_ok,
            overturning_ok: result.overturning_ok,
            bearing_ok: result.bearing_ok,
        }
    }
}

fn badge(ok: bool) -> &'static str {
    if ok { "OK" } else { "FAIL" }
}

impl fmt::Display for StabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Thrust")?;
        writeln!(f, "  Ka = {}", self.ka)?;
        writeln!(f, "  Pa = {} kN/m", self.active_thrust)?;
        writeln!(f, "Weights")?;
        writeln!(f, "  W  = {} kN/m", self.self_weight)?;
        writeln!(f, "  e  = {} m", self.eccentricity)?;
        writeln!(
            f,
            "Bearing      σ_max = {} kN/m²  {}",
            self.max_bearing_pressure,
            badge(self.bearing_ok)
        )?;
        writeln!(
            f,
            "Sliding      F.S.  = {}  {}",
            self.sliding_factor,
            badge(self.sliding_ok)
        )?;
        write!(
            f,
            "Overturning  F.S.  = {}  {}",
            self.overturning_factor,
            badge(self.overturning_ok)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WallInput, evaluate};

    #[test]
    fn to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(2.0, 2), "2.00");
        assert_eq!(to_fixed(0.918_75, 2), "0.92");
        assert_eq!(to_fixed(1.234_56, 3), "1.235");
    }

    #[test]
    fn to_fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(58.125, 2), "58.13");
        assert_eq!(to_fixed(36.25, 1), "36.3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.375, 3), "0.375");
    }

    #[test]
    fn halfway_weight_renders_like_the_form() {
        let result = evaluate(&WallInput {
            height: 3.25,
            higher_footing: 0.5,
            lower_footing: 0.5,
            top_width: 0.375,
            stem_base_width: 0.5,
            ..WallInput::default()
        });
        assert_eq!(result.self_weight, 58.125);
        assert_eq!(StabilityReport::from(&result).self_weight, "58.13");
    }

    #[test]
    fn to_fixed_names_non_finite_values() {
        assert_eq!(to_fixed(f64::INFINITY, 1), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 1), "-Infinity");
        assert_eq!(to_fixed(f64::NAN, 1), "NaN");
    }

    #[test]
    fn default_wall_report() {
        let report = StabilityReport::from(&evaluate(&WallInput::default()));
        assert_eq!(report.ka, "0.333");
        assert_eq!(report.active_thrust, "32.00");
        assert_eq!(report.self_weight, "58.80");
        assert_eq!(report.sliding_factor, "0.92");
        assert_eq!(report.overturning_factor, "2.25");
        assert_eq!(report.eccentricity, "0.681");
        assert_eq!(report.max_bearing_pressure, "89.4");
        assert!(!report.all_ok());
    }

    #[test]
    fn display_shows_badges() {
        let report = StabilityReport::from(&evaluate(&WallInput::default()));
        let text = report.render_for(&WallProfile::default());
        assert!(text.starts_with("Wall M1 (Cantilever, Reinforced concrete)"));
        assert!(text.contains("Sliding      F.S.  = 0.92  FAIL"));
        assert!(text.contains("Overturning  F.S.  = 2.25  OK"));
        assert!(text.contains("σ_max = 89.4 kN/m²  FAIL"));
    }
}
