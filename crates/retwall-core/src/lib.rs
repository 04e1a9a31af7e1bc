//! # retwall-core
//!
//! Retaining wall stability check - THE LOGIC.
//!
//! A single pure routine, [`evaluate`], maps a [`WallInput`] to a
//! [`StabilityResult`]: Rankine active thrust, self-weight, factors of safety
//! against sliding and overturning, eccentricity and maximum bearing pressure,
//! with pass/fail verdicts against fixed thresholds.
//!
//! ## Architectural Constraints
//!
//! - No state, no I/O, no async: hosts live in `apps/retwall`
//! - Deterministic: identical input gives bit-identical output
//! - Unguarded: degenerate geometry yields infinities or NaN, never a panic
//! - Text enters only through [`parse_or_zero`], which never fails
//!
//! ## Example
//!
//! ```
//! use retwall_core::{WallInput, evaluate};
//!
//! let result = evaluate(&WallInput::default());
//! assert!(!result.sliding_ok);
//! assert!(result.overturning_ok);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod calculator;
pub mod draft;
pub mod primitives;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    ConcreteType, StabilityResult, WallError, WallField, WallInput, WallProfile, WallShape,
};

// =============================================================================
// RE-EXPORTS: Calculator and Hosts' Helpers
// =============================================================================

pub use calculator::{ForceBreakdown, breakdown, evaluate, within_middle_third};
pub use draft::{WallDraft, parse_or_zero};
pub use report::{StabilityReport, to_fixed};
pub use validation::{DomainWarning, check_domain, evaluate_strict};
