//! # Stability Calculator
//!
//! Rankine active earth pressure on a vertical back, horizontal backfill,
//! checked for sliding, overturning and bearing pressure.
//!
//! ## Model
//!
//! - Thrust: `Pa = ½·γs·H²·Ka + q·H·Ka`, acting at `H/3`
//! - Base thickness and stem thickness are averages of their two samples
//! - The stem is a rectangle over the full height (batter ignored)
//! - The weight acts at `outer_base + t_stem/2` from the toe
//! - Bearing pressure uses the trapezoidal distribution `W/B·(1 + 6e/B)`
//!
//! No input is validated. Zero base width, zero weight or zero thrust
//! propagate as infinities or NaN.

use crate::primitives::{
    MIDDLE_THIRD_DIVISOR, MIN_OVERTURNING_FACTOR, MIN_SLIDING_FACTOR, RANKINE_BASE_ANGLE_DEG,
    THRUST_ARM_DIVISOR,
};
use crate::{StabilityResult, WallInput};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Degrees to radians as `deg·π/180`.
///
/// Kept as a plain product and division so results match the reference
/// arithmetic bit for bit (`f64::to_radians` multiplies by a rounded constant).
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

// =============================================================================
// FORCE BREAKDOWN
// =============================================================================

/// Intermediate quantities of one evaluation, per meter of wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    /// Friction angle in radians.
    pub friction_angle_rad: f64,
    /// Rankine active coefficient Ka.
    pub ka: f64,
    /// Active thrust Pa (kN/m).
    pub active_thrust: f64,
    /// Overturning moment about the toe Mo (kN·m/m).
    pub overturning_moment: f64,
    /// Total base width B (m).
    pub base_width: f64,
    /// Average base thickness (m).
    pub base_thickness: f64,
    /// Average stem thickness (m).
    pub stem_thickness: f64,
    /// Base volume (m³/m).
    pub base_volume: f64,
    /// Stem volume (m³/m).
    pub stem_volume: f64,
    /// Self-weight W (kN/m).
    pub self_weight: f64,
    /// Lever arm of W from the toe (m).
    pub weight_arm: f64,
    /// Resisting moment Mr (kN·m/m).
    pub resisting_moment: f64,
    /// Sliding resistance (kN/m).
    pub sliding_resistance: f64,
}

/// Run the force and moment sequence for `input`.
pub fn breakdown(input: &WallInput) -> ForceBreakdown {
    let h = input.height;

    let friction_angle_rad = deg2rad(input.friction_angle);
    let ka = deg2rad(RANKINE_BASE_ANGLE_DEG - input.friction_angle / 2.0)
        .tan()
        .powi(2);
    let active_thrust =
        0.5 * input.soil_unit_weight * h.powi(2) * ka + input.surcharge * h * ka;
    let overturning_moment = active_thrust * h / THRUST_ARM_DIVISOR;

    let base_width = input.inner_base + input.outer_base;
    let base_thickness = (input.higher_footing + input.lower_footing) / 2.0;
    let stem_thickness = (input.top_width + input.stem_base_width) / 2.0;

    let base_volume = base_width * base_thickness;
    // constant-thickness stem
    let stem_volume = stem_thickness * h;
    let self_weight = input.concrete_unit_weight * (base_volume + stem_volume);
    let weight_arm = input.outer_base + stem_thickness / 2.0;
    let resisting_moment = self_weight * weight_arm;

    let sliding_resistance = self_weight * input.base_friction + input.cohesion * base_width;

    ForceBreakdown {
        friction_angle_rad,
        ka,
        active_thrust,
        overturning_moment,
        base_width,
        base_thickness,
        stem_thickness,
        base_volume,
        stem_volume,
        self_weight,
        weight_arm,
        resisting_moment,
        sliding_resistance,
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Whether an eccentricity lies within the middle third of a base of width `b`.
///
/// The bound is inclusive: `e == b/6` passes.
#[inline]
pub fn within_middle_third(eccentricity: f64, base_width: f64) -> bool {
    eccentricity.abs() <= base_width / MIDDLE_THIRD_DIVISOR
}

/// Evaluate the stability of a wall.
///
/// Pure and total: identical input gives bit-identical output and no input
/// makes it panic. Verdicts compare unrounded values.
pub fn evaluate(input: &WallInput) -> StabilityResult {
    let f = breakdown(input);
    let b = f.base_width;

    let sliding_factor = f.sliding_resistance / f.active_thrust;
    let overturning_factor = f.resisting_moment / f.overturning_moment;
    let eccentricity = (f.resisting_moment - f.overturning_moment) / f.self_weight;
    let max_bearing_pressure = (f.self_weight / b) * (1.0 + (6.0 * eccentricity) / b);

    StabilityResult {
        ka: f.ka,
        active_thrust: f.active_thrust,
        self_weight: f.self_weight,
        sliding_factor,
        overturning_factor,
        eccentricity,
        max_bearing_pressure,
        sliding_ok: sliding_factor >= MIN_SLIDING_FACTOR,
        overturning_ok: overturning_factor >= MIN_OVERTURNING_FACTOR,
        bearing_ok: max_bearing_pressure <= input.allowable_bearing
            && within_middle_third(eccentricity, b),
    }
}

// =============================================================================
// TESTS
// =============================================================================
