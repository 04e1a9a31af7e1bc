//! # Fixed Primitives
//!
//! Hardcoded constants of the stability check.
//!
//! The calculator has no tunable parameters at runtime. Safety-factor
//! thresholds, the middle-third rule and display precision are compiled in.

// =============================================================================
// VERDICT THRESHOLDS
// =============================================================================

/// Minimum factor of safety against sliding.
///
/// `sliding_ok = FS_desl >= MIN_SLIDING_FACTOR`
pub const MIN_SLIDING_FACTOR: f64 = 1.5;

/// Minimum factor of safety against overturning.
///
/// `overturning_ok = FS_tomb >= MIN_OVERTURNING_FACTOR`
pub const MIN_OVERTURNING_FACTOR: f64 = 2.0;

/// Divisor of the base width bounding the admissible eccentricity.
///
/// The resultant must fall within the middle third: `|e| <= B / 6`.
/// Outside it the trapezoidal pressure formula no longer applies.
pub const MIDDLE_THIRD_DIVISOR: f64 = 6.0;

// =============================================================================
// RANKINE GEOMETRY
// =============================================================================

/// Angle of the Rankine active failure wedge before the `φ/2` reduction, in degrees.
pub const RANKINE_BASE_ANGLE_DEG: f64 = 45.0;

/// Fraction of the wall height where the triangular thrust resultant acts.
pub const THRUST_ARM_DIVISOR: f64 = 3.0;

// =============================================================================
// DISPLAY PRECISION
// =============================================================================

/// Decimals for the active pressure coefficient.
pub const KA_DECIMALS: usize = 3;

/// Decimals for forces (active thrust, self-weight).
pub const FORCE_DECIMALS: usize = 2;

/// Decimals for factors of safety.
pub const FACTOR_DECIMALS: usize = 2;

/// Decimals for the eccentricity.
pub const ECCENTRICITY_DECIMALS: usize = 3;

/// Decimals for the maximum bearing pressure.
pub const PRESSURE_DECIMALS: usize = 1;
