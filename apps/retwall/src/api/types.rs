//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use retwall_core::{
    DomainWarning, ForceBreakdown, StabilityReport, StabilityResult, WallDraft, WallError,
    WallField, WallInput, WallProfile,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// DEFAULTS / FIELDS RESPONSES
// =============================================================================

/// The wall a fresh form starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    pub input: WallInput,
    pub profile: WallProfile,
}

impl Default for DefaultsResponse {
    fn default() -> Self {
        let draft = WallDraft::new();
        Self {
            input: draft.build(),
            profile: draft.profile().clone(),
        }
    }
}

/// One entry of the field catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub alias: String,
    pub unit: String,
    pub default: f64,
    pub feeds_calculation: bool,
}

/// Every editable numeric field with its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsResponse {
    pub fields: Vec<FieldInfo>,
}

impl FieldsResponse {
    pub fn catalogue() -> Self {
        let defaults = WallDraft::new();
        let fields = WallField::ALL
            .iter()
            .map(|field| FieldInfo {
                name: field.name().to_string(),
                alias: field.form_alias().to_string(),
                unit: field.unit().to_string(),
                default: defaults.get(*field),
                feeds_calculation: field.feeds_calculation(),
            })
            .collect();
        Self { fields }
    }
}

// =============================================================================
// EVALUATE REQUEST/RESPONSE
// =============================================================================

/// Evaluation request: a flat object of field names to values.
///
/// Names may be canonical (`height`) or form aliases (`altura`). Numbers are
/// taken as is, strings go through parse-or-zero, `null` is zero. Missing
/// fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Refuse to evaluate input with domain warnings.
    #[serde(default)]
    pub strict: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EvaluateRequest {
    /// Apply every field onto a default draft.
    pub fn to_draft(&self) -> Result<WallDraft, WallError> {
        let mut draft = WallDraft::new();

        for (name, value) in &self.fields {
            match value {
                Value::Number(n) => match (name.parse::<WallField>(), n.as_f64()) {
                    (Ok(field), Some(v)) => {
                        draft.set(field, v);
                    }
                    _ => {
                        draft.set_raw_str(name, &n.to_string())?;
                    }
                },
                Value::String(s) => {
                    draft.set_raw_str(name, s)?;
                }
                Value::Null => {
                    draft.set_raw_str(name, "")?;
                }
                Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                    return Err(WallError::InvalidValue {
                        field: name.clone(),
                        reason: "expected a number or a string".to_string(),
                    });
                }
            }
        }

        Ok(draft)
    }
}

/// Evaluation response.
///
/// Non-finite numbers in `result` and `breakdown` serialize as `null`; the
/// `report` carries them as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub success: bool,
    pub input: Option<WallInput>,
    pub profile: Option<WallProfile>,
    pub result: Option<StabilityResult>,
    pub report: Option<StabilityReport>,
    pub breakdown: Option<ForceBreakdown>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub error: Option<String>,
}

impl EvaluateResponse {
    pub fn success(
        draft: &WallDraft,
        result: StabilityResult,
        breakdown: ForceBreakdown,
        warnings: &[DomainWarning],
    ) -> Self {
        Self {
            success: true,
            input: Some(draft.build()),
            profile: Some(draft.profile().clone()),
            result: Some(result),
            report: Some(StabilityReport::from(&result)),
            breakdown: Some(breakdown),
            warnings: warnings.iter().map(ToString::to_string).collect(),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>, warnings: &[DomainWarning]) -> Self {
        Self {
            success: false,
            input: None,
            profile: None,
            result: None,
            report: None,
            breakdown: None,
            warnings: warnings.iter().map(ToString::to_string).collect(),
            error: Some(msg.into()),
        }
    }
}
