//! # Core Type Definitions
//!
//! This module contains all data types of the stability check:
//! - The calculator input and output (`WallInput`, `StabilityResult`)
//! - Descriptive wall data not consumed by the formula (`WallProfile`)
//! - The closed set of editable fields (`WallField`)
//! - Error types (`WallError`)
//!
//! ## Units
//!
//! SI only: lengths in meters, unit weights in kN/m³, pressures in kN/m²,
//! forces in kN per meter of wall, angles in degrees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// WALL INPUT
// =============================================================================

/// Geometric and geotechnical parameters of one retaining wall.
///
/// Immutable once built. Hosts edit a [`crate::WallDraft`] and snapshot it
/// with [`crate::WallDraft::build`]; the calculator never sees partial edits.
///
/// No constraint is enforced here. See [`crate::validation::check_domain`]
/// for the optional domain checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallInput {
    /// Exposed wall height H (m).
    pub height: f64,
    /// Soil unit weight γ_s (kN/m³).
    pub soil_unit_weight: f64,
    /// Soil internal friction angle φ (degrees).
    pub friction_angle: f64,
    /// Soil cohesion c (kN/m²).
    pub cohesion: f64,
    /// Uniform surface surcharge q (kN/m²).
    pub surcharge: f64,
    /// Heel extent of the base (m).
    pub inner_base: f64,
    /// Toe extent of the base (m).
    pub outer_base: f64,
    /// Larger footing thickness sample (m).
    pub higher_footing: f64,
    /// Smaller footing thickness sample (m).
    pub lower_footing: f64,
    /// Stem width at the top (m).
    pub top_width: f64,
    /// Stem width at the base (m).
    pub stem_base_width: f64,
    /// Concrete unit weight γ_c (kN/m³).
    pub concrete_unit_weight: f64,
    /// Sliding friction coefficient µ between base and soil.
    pub base_friction: f64,
    /// Admissible bearing pressure σ_adm (kN/m²).
    pub allowable_bearing: f64,
}

impl Default for WallInput {
    /// The initial state of the wall form: a 3 m cantilever on a 2 m base.
    fn default() -> Self {
        Self {
            height: 3.0,
            soil_unit_weight: 18.0,
            friction_angle: 30.0,
            cohesion: 0.0,
            surcharge: 5.0,
            inner_base: 1.0,
            outer_base: 1.0,
            higher_footing: 0.7,
            lower_footing: 0.4,
            top_width: 0.3,
            stem_base_width: 0.6,
            concrete_unit_weight: 24.0,
            base_friction: 0.5,
            allowable_bearing: 200.0,
        }
    }
}

// =============================================================================
// STABILITY RESULT
// =============================================================================

/// Derived stability metrics and verdicts for one [`WallInput`].
///
/// Values are unrounded. Degenerate input yields non-finite values, which
/// serialize as `null` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityResult {
    /// Rankine active earth pressure coefficient Ka.
    pub ka: f64,
    /// Active thrust per unit length Pa (kN/m).
    pub active_thrust: f64,
    /// Concrete self-weight per unit length W (kN/m).
    pub self_weight: f64,
    /// Factor of safety against sliding.
    pub sliding_factor: f64,
    /// Factor of safety against overturning.
    pub overturning_factor: f64,
    /// Eccentricity of the resultant from the base centerline e (m).
    pub eccentricity: f64,
    /// Maximum bearing pressure σ_max (kN/m²).
    pub max_bearing_pressure: f64,
    /// Sliding check passed.
    pub sliding_ok: bool,
    /// Overturning check passed.
    pub overturning_ok: bool,
    /// Bearing check passed (pressure and middle third).
    pub bearing_ok: bool,
}

impl StabilityResult {
    /// Whether all three checks passed.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.sliding_ok && self.overturning_ok && self.bearing_ok
    }
}

// =============================================================================
// WALL PROFILE
// =============================================================================

/// Concrete type selected on the wall form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcreteType {
    /// Reinforced concrete ("CA").
    #[default]
    #[serde(rename = "CA", alias = "ca", alias = "reinforced")]
    Reinforced,
    /// Cyclopean concrete ("CC").
    #[serde(rename = "CC", alias = "cc", alias = "cyclopean")]
    Cyclopean,
}

impl ConcreteType {
    /// Short code used on the form.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteType::Reinforced => "CA",
            ConcreteType::Cyclopean => "CC",
        }
    }
}

impl FromStr for ConcreteType {
    type Err = WallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ca" | "reinforced" => Ok(ConcreteType::Reinforced),
            "cc" | "cyclopean" => Ok(ConcreteType::Cyclopean),
            _ => Err(WallError::InvalidValue {
                field: "concrete_type".to_string(),
                reason: format!("unknown concrete type '{}'", s),
            }),
        }
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcreteType::Reinforced => write!(f, "Reinforced concrete"),
            ConcreteType::Cyclopean => write!(f, "Cyclopean concrete"),
        }
    }
}

/// Structural shape selected on the wall form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallShape {
    #[default]
    Cantilever,
    #[serde(alias = "gravidade")]
    Gravity,
}

impl FromStr for WallShape {
    type Err = WallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cantilever" => Ok(WallShape::Cantilever),
            "gravity" | "gravidade" => Ok(WallShape::Gravity),
            _ => Err(WallError::InvalidValue {
                field: "shape".to_string(),
                reason: format!("unknown wall shape '{}'", s),
            }),
        }
    }
}

impl fmt::Display for WallShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallShape::Cantilever => write!(f, "Cantilever"),
            WallShape::Gravity => write!(f, "Gravity"),
        }
    }
}

/// Descriptive wall data collected with the input.
///
/// The simplified model does not consume any of these fields: stem batter,
/// shear key and shape have no effect on [`crate::evaluate`]. They are kept
/// so hosts can round-trip and display what the user entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallProfile {
    /// Wall label, e.g. "M1".
    pub name: String,
    /// Crest elevation (cm).
    pub elevation: f64,
    pub concrete_type: ConcreteType,
    pub shape: WallShape,
    /// Inclination of the inner (backfill) stem face (degrees).
    pub inner_inclination: f64,
    /// Inclination of the outer stem face (degrees).
    pub outer_inclination: f64,
    /// Shear key width (m).
    pub key_base: f64,
    /// Shear key depth (m).
    pub key_height: f64,
}

impl Default for WallProfile {
    fn default() -> Self {
        Self {
            name: "M1".to_string(),
            elevation: 0.0,
            concrete_type: ConcreteType::default(),
            shape: WallShape::default(),
            inner_inclination: 5.0,
            outer_inclination: 0.0,
            key_base: 0.2,
            key_height: 0.0,
        }
    }
}

// =============================================================================
// WALL FIELD
// =============================================================================

/// Every numeric field a host can edit, by name.
///
/// Replaces a stringly-typed setter: names are resolved once into this closed
/// enum and every later access is checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallField {
    Height,
    SoilUnitWeight,
    FrictionAngle,
    Cohesion,
    Surcharge,
    InnerBase,
    OuterBase,
    HigherFooting,
    LowerFooting,
    TopWidth,
    StemBaseWidth,
    ConcreteUnitWeight,
    BaseFriction,
    AllowableBearing,
    Elevation,
    InnerInclination,
    OuterInclination,
    KeyBase,
    KeyHeight,
}

impl WallField {
    /// All fields in form order.
    pub const ALL: [WallField; 19] = [
        WallField::Height,
        WallField::SoilUnitWeight,
        WallField::FrictionAngle,
        WallField::Cohesion,
        WallField::Surcharge,
        WallField::InnerBase,
        WallField::OuterBase,
        WallField::HigherFooting,
        WallField::LowerFooting,
        WallField::TopWidth,
        WallField::StemBaseWidth,
        WallField::ConcreteUnitWeight,
        WallField::BaseFriction,
        WallField::AllowableBearing,
        WallField::Elevation,
        WallField::InnerInclination,
        WallField::OuterInclination,
        WallField::KeyBase,
        WallField::KeyHeight,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WallField::Height => "height",
            WallField::SoilUnitWeight => "soil_unit_weight",
            WallField::FrictionAngle => "friction_angle",
            WallField::Cohesion => "cohesion",
            WallField::Surcharge => "surcharge",
            WallField::InnerBase => "inner_base",
            WallField::OuterBase => "outer_base",
            WallField::HigherFooting => "higher_footing",
            WallField::LowerFooting => "lower_footing",
            WallField::TopWidth => "top_width",
            WallField::StemBaseWidth => "stem_base_width",
            WallField::ConcreteUnitWeight => "concrete_unit_weight",
            WallField::BaseFriction => "base_friction",
            WallField::AllowableBearing => "allowable_bearing",
            WallField::Elevation => "elevation",
            WallField::InnerInclination => "inner_inclination",
            WallField::OuterInclination => "outer_inclination",
            WallField::KeyBase => "key_base",
            WallField::KeyHeight => "key_height",
        }
    }

    /// Field name used by the original wall form.
    #[must_use]
    pub fn form_alias(&self) -> &'static str {
        match self {
            WallField::Height => "altura",
            WallField::SoilUnitWeight => "gamma_solo",
            WallField::FrictionAngle => "ang_atrito",
            WallField::Cohesion => "coesao",
            WallField::Surcharge => "sobrecarga",
            WallField::InnerBase => "base_interna",
            WallField::OuterBase => "base_externa",
            WallField::HigherFooting => "altura_maior",
            WallField::LowerFooting => "altura_menor",
            WallField::TopWidth => "largura_topo",
            WallField::StemBaseWidth => "largura_base_parede",
            WallField::ConcreteUnitWeight => "gamma_concreto",
            WallField::BaseFriction => "mu",
            WallField::AllowableBearing => "sigma_adm",
            WallField::Elevation => "elevacao",
            WallField::InnerInclination => "incl_int",
            WallField::OuterInclination => "incl_ext",
            WallField::KeyBase => "dente_base",
            WallField::KeyHeight => "dente_altura",
        }
    }

    /// Unit symbol for display.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            WallField::SoilUnitWeight | WallField::ConcreteUnitWeight => "kN/m³",
            WallField::Cohesion | WallField::Surcharge | WallField::AllowableBearing => "kN/m²",
            WallField::FrictionAngle
            | WallField::InnerInclination
            | WallField::OuterInclination => "°",
            WallField::BaseFriction => "-",
            WallField::Elevation => "cm",
            _ => "m",
        }
    }

    /// Whether the calculator reads this field.
    ///
    /// Profile fields are carried for display only.
    #[must_use]
    pub fn feeds_calculation(&self) -> bool {
        !matches!(
            self,
            WallField::Elevation
                | WallField::InnerInclination
                | WallField::OuterInclination
                | WallField::KeyBase
                | WallField::KeyHeight
        )
    }
}

impl FromStr for WallField {
    type Err = WallError;

    /// Accepts the canonical name or the form alias, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        WallField::ALL
            .into_iter()
            .find(|f| f.name() == key || f.form_alias() == key)
            .ok_or_else(|| WallError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for WallField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised at the host-facing boundary.
///
/// The calculator itself never fails; these cover field resolution,
/// optional domain checks and wall-file handling.
#[derive(Debug, Error)]
pub enum WallError {
    /// The field name matches no known field.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A field received a value it cannot hold.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// Strict evaluation refused an input with domain warnings.
    #[error("Domain check failed with {0} warning(s)")]
    DomainCheckFailed(usize),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
