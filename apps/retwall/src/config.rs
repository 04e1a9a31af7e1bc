//! # Wall Files
//!
//! TOML wall definitions, one section per tab of the wall form.
//!
//! ```toml
//! [general]
//! name = "M1"
//! height = 3.0
//! shape = "cantilever"
//!
//! [soil]
//! friction_angle = 32.0
//!
//! [materials]
//! allowable_bearing = 180.0
//! ```
//!
//! Every key is optional and falls back to the form default. Unknown keys
//! are rejected so a typo never silently keeps a default.

use retwall_core::{ConcreteType, WallDraft, WallError, WallInput, WallProfile, WallShape};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum wall file size (64 KiB).
pub const MAX_WALL_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// SECTIONS
// =============================================================================

/// Wall label, height and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralSection {
    pub name: String,
    pub height: f64,
    pub elevation: f64,
    pub concrete_type: ConcreteType,
    pub shape: WallShape,
}

/// Backfill parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoilSection {
    pub soil_unit_weight: f64,
    pub friction_angle: f64,
    pub cohesion: f64,
    pub surcharge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StemSection {
    pub top_width: f64,
    pub inner_inclination: f64,
    pub outer_inclination: f64,
    pub stem_base_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseSection {
    pub inner_base: f64,
    pub outer_base: f64,
    pub higher_footing: f64,
    pub lower_footing: f64,
}

/// Shear key below the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeySection {
    pub base: f64,
    pub height: f64,
}

/// Concrete weight, base friction and soil capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialsSection {
    pub concrete_unit_weight: f64,
    pub base_friction: f64,
    pub allowable_bearing: f64,
}

// =============================================================================
// WALL FILE
// =============================================================================

/// A complete wall definition as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallFile {
    pub general: GeneralSection,
    pub soil: SoilSection,
    pub stem: StemSection,
    pub base: BaseSection,
    pub key: KeySection,
    pub materials: MaterialsSection,
}

impl WallFile {
    /// Parse a wall file from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, WallError> {
        toml::from_str(text).map_err(|e| WallError::DeserializationError(e.to_string()))
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> Result<String, WallError> {
        toml::to_string_pretty(self).map_err(|e| WallError::SerializationError(e.to_string()))
    }

    /// Build an editable draft holding this definition.
    #[must_use]
    pub fn into_draft(self) -> WallDraft {
        let input = WallInput {
            height: self.general.height,
            soil_unit_weight: self.soil.soil_unit_weight,
            friction_angle: self.soil.friction_angle,
            cohesion: self.soil.cohesion,
            surcharge: self.soil.surcharge,
            inner_base: self.base.inner_base,
            outer_base: self.base.outer_base,
            higher_footing: self.base.higher_footing,
            lower_footing: self.base.lower_footing,
            top_width: self.stem.top_width,
            stem_base_width: self.stem.stem_base_width,
            concrete_unit_weight: self.materials.concrete_unit_weight,
            base_friction: self.materials.base_friction,
            allowable_bearing: self.materials.allowable_bearing,
        };
        let profile = WallProfile {
            name: self.general.name,
            elevation: self.general.elevation,
            concrete_type: self.general.concrete_type,
            shape: self.general.shape,
            inner_inclination: self.stem.inner_inclination,
            outer_inclination: self.stem.outer_inclination,
            key_base: self.key.base,
            key_height: self.key.height,
        };
        WallDraft::from_parts(input, profile)
    }
}

impl From<&WallDraft> for WallFile {
    fn from(draft: &WallDraft) -> Self {
        let input = draft.build();
        let profile = draft.profile();
        Self {
            general: GeneralSection {
                name: profile.name.clone(),
                height: input.height,
                elevation: profile.elevation,
                concrete_type: profile.concrete_type,
                shape: profile.shape,
            },
            soil: SoilSection {
                soil_unit_weight: input.soil_unit_weight,
                friction_angle: input.friction_angle,
                cohesion: input.cohesion,
                surcharge: input.surcharge,
            },
            stem: StemSection {
                top_width: input.top_width,
                inner_inclination: profile.inner_inclination,
                outer_inclination: profile.outer_inclination,
                stem_base_width: input.stem_base_width,
            },
            base: BaseSection {
                inner_base: input.inner_base,
                outer_base: input.outer_base,
                higher_footing: input.higher_footing,
                lower_footing: input.lower_footing,
            },
            key: KeySection {
                base: profile.key_base,
                height: profile.key_height,
            },
            materials: MaterialsSection {
                concrete_unit_weight: input.concrete_unit_weight,
                base_friction: input.base_friction,
                allowable_bearing: input.allowable_bearing,
            },
        }
    }
}

impl Default for WallFile {
    fn default() -> Self {
        Self::from(&WallDraft::new())
    }
}

macro_rules! section_defaults {
    ($($section:ident => $field:ident),* $(,)?) => {
        $(
            impl Default for $section {
                fn default() -> Self {
                    WallFile::default().$field
                }
            }
        )*
    };
}

section_defaults! {
    GeneralSection => general,
    SoilSection => soil,
    StemSection => stem,
    BaseSection => base,
    KeySection => key,
    MaterialsSection => materials,
}

// =============================================================================
// FILE ACCESS
// =============================================================================

/// Resolve `path` to a regular file.
///
/// Canonicalizes to resolve ".." and symlinks before any read.
fn validate_file_path(path: &Path) -> Result<PathBuf, WallError> {
    let canonical = path.canonicalize().map_err(|e| {
        WallError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(WallError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Load a wall file from disk.
pub fn load_wall_file(path: &Path) -> Result<WallFile, WallError> {
    let validated = validate_file_path(path)?;

    let metadata = std::fs::metadata(&validated)
        .map_err(|e| WallError::IoError(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > MAX_WALL_FILE_SIZE {
        return Err(WallError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_WALL_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(&validated)
        .map_err(|e| WallError::IoError(format!("Read wall file: {}", e)))?;
    tracing::debug!("Loaded wall file {:?}", validated);
    WallFile::from_toml_str(&text)
}

// =============================================================================
// TESTS
// =============================================================================
