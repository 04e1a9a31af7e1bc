//! # Wall Draft
//!
//! Mutable editing state owned by a host (CLI, HTTP handler, form).
//!
//! A draft accepts edits one field at a time, from typed values or raw text,
//! and is snapshotted into an immutable [`WallInput`] with [`WallDraft::build`].
//! Raw text goes through [`parse_or_zero`]: unparseable text becomes `0.0`
//! instead of an error.

use crate::{ConcreteType, WallError, WallField, WallInput, WallProfile, WallShape};

// =============================================================================
// PARSE OR ZERO
// =============================================================================

/// Convert text to a number, defaulting to zero.
///
/// Reads the longest numeric prefix of the trimmed text: optional sign,
/// digits, optional fraction, optional exponent. `"12abc"` is `12.0`,
/// `"abc"` and `""` are `0.0`. A result that is not finite (NaN, infinity,
/// overflow) is also `0.0`, so the calculator only ever receives finite
/// numbers from text.
pub fn parse_or_zero(raw: &str) -> f64 {
    let text = raw.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return 0.0;
    }
    match text[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Length in bytes of the leading decimal literal of `bytes`, or 0.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }

    end
}

// =============================================================================
// DRAFT
// =============================================================================

/// Editable wall definition.
///
/// Starts from the form defaults. Setters return `&mut Self` for chaining:
///
/// ```
/// use retwall_core::{WallDraft, evaluate};
///
/// let mut draft = WallDraft::default();
/// draft.height(4.0).friction_angle(32.0).set_raw_str("mu", "0.55").ok();
/// let result = evaluate(&draft.build());
/// assert!(result.ka < 0.33);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WallDraft {
    input: WallInput,
    profile: WallProfile,
}

macro_rules! typed_setters {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self, value: f64) -> &mut Self {
                self.input.$name = value;
                self
            }
        )*
    };
}

impl WallDraft {
    /// Create a draft from the form defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft holding an existing input and profile.
    #[must_use]
    pub fn from_parts(input: WallInput, profile: WallProfile) -> Self {
        Self { input, profile }
    }

    typed_setters! {
        /// Exposed wall height (m).
        height;
        /// Soil unit weight (kN/m³).
        soil_unit_weight;
        /// Soil friction angle (degrees).
        friction_angle;
        /// Soil cohesion (kN/m²).
        cohesion;
        /// Surface surcharge (kN/m²).
        surcharge;
        /// Heel extent (m).
        inner_base;
        /// Toe extent (m).
        outer_base;
        higher_footing;
        lower_footing;
        top_width;
        stem_base_width;
        /// Concrete unit weight (kN/m³).
        concrete_unit_weight;
        /// Base friction coefficient µ.
        base_friction;
        /// Admissible bearing pressure (kN/m²).
        allowable_bearing;
    }

    /// Set the wall label.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.profile.name = name.into();
        self
    }

    pub fn set_concrete_type(&mut self, concrete_type: ConcreteType) -> &mut Self {
        self.profile.concrete_type = concrete_type;
        self
    }

    pub fn set_shape(&mut self, shape: WallShape) -> &mut Self {
        self.profile.shape = shape;
        self
    }

    /// Set any numeric field.
    pub fn set(&mut self, field: WallField, value: f64) -> &mut Self {
        *self.slot(field) = value;
        self
    }

    /// Set a numeric field from raw text through [`parse_or_zero`].
    pub fn set_raw(&mut self, field: WallField, raw: &str) -> &mut Self {
        self.set(field, parse_or_zero(raw))
    }

    /// Resolve `name` (canonical or form alias) and set it from raw text.
    ///
    /// The text fields `name`/`nome`, `concrete_type`/`tipo_concreto` and
    /// `shape`/`formato` are accepted too.
    pub fn set_raw_str(&mut self, name: &str, raw: &str) -> Result<&mut Self, WallError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" | "nome" => Ok(self.set_name(raw)),
            "concrete_type" | "tipo_concreto" => {
                let concrete_type = raw.parse()?;
                Ok(self.set_concrete_type(concrete_type))
            }
            "shape" | "formato" => {
                let shape = raw.parse()?;
                Ok(self.set_shape(shape))
            }
            _ => {
                let field: WallField = name.parse()?;
                Ok(self.set_raw(field, raw))
            }
        }
    }

    /// Current value of a numeric field.
    #[must_use]
    pub fn get(&self, field: WallField) -> f64 {
        match field {
            WallField::Height => self.input.height,
            WallField::SoilUnitWeight => self.input.soil_unit_weight,
            WallField::FrictionAngle => self.input.friction_angle,
            WallField::Cohesion => self.input.cohesion,
            WallField::Surcharge => self.input.surcharge,
            WallField::InnerBase => self.input.inner_base,
            WallField::OuterBase => self.input.outer_base,
            WallField::HigherFooting => self.input.higher_footing,
            WallField::LowerFooting => self.input.lower_footing,
            WallField::TopWidth => self.input.top_width,
            WallField::StemBaseWidth => self.input.stem_base_width,
            WallField::ConcreteUnitWeight => self.input.concrete_unit_weight,
            WallField::BaseFriction => self.input.base_friction,
            WallField::AllowableBearing => self.input.allowable_bearing,
            WallField::Elevation => self.profile.elevation,
            WallField::InnerInclination => self.profile.inner_inclination,
            WallField::OuterInclination => self.profile.outer_inclination,
            WallField::KeyBase => self.profile.key_base,
            WallField::KeyHeight => self.profile.key_height,
        }
    }

    fn slot(&mut self, field: WallField) -> &mut f64 {
        match field {
            WallField::Height => &mut self.input.height,
            WallField::SoilUnitWeight => &mut self.input.soil_unit_weight,
            WallField::FrictionAngle => &mut self.input.friction_angle,
            WallField::Cohesion => &mut self.input.cohesion,
            WallField::Surcharge => &mut self.input.surcharge,
            WallField::InnerBase => &mut self.input.inner_base,
            WallField::OuterBase => &mut self.input.outer_base,
            WallField::HigherFooting => &mut self.input.higher_footing,
            WallField::LowerFooting => &mut self.input.lower_footing,
            WallField::TopWidth => &mut self.input.top_width,
            WallField::StemBaseWidth => &mut self.input.stem_base_width,
            WallField::ConcreteUnitWeight => &mut self.input.concrete_unit_weight,
            WallField::BaseFriction => &mut self.input.base_friction,
            WallField::AllowableBearing => &mut self.input.allowable_bearing,
            WallField::Elevation => &mut self.profile.elevation,
            WallField::InnerInclination => &mut self.profile.inner_inclination,
            WallField::OuterInclination => &mut self.profile.outer_inclination,
            WallField::KeyBase => &mut self.profile.key_base,
            WallField::KeyHeight => &mut self.profile.key_height,
        }
    }

    /// Snapshot the calculator input.
    #[must_use]
    pub fn build(&self) -> WallInput {
        self.input
    }

    /// Descriptive data carried with the input.
    #[must_use]
    pub fn profile(&self) -> &WallProfile {
        &self.profile
    }
}

// =============================================================================
// TESTS
// =============================================================================
