//! Preset catalog - the ordered, read-only list of presets

use thiserror::Error;

use crate::entities::preset::{CoordinateMode, Preset};

/// Authoring defects found while loading presets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("The preset catalog is empty")]
    Empty,

    #[error("Duplicate preset name: '{0}'")]
    DuplicateName(String),

    #[error("Preset '{0}' uses coordinate mode 4 without a preference; the thickness slot would never be filled")]
    ThicknessWithoutPreference(String),

    #[error("Preset '{0}' is cylindrical but declares a preference postfix; cylindrical results never carry it")]
    PostfixOnCylinder(String),

    #[error("Preset not found: '{0}'")]
    UnknownPreset(String),
}

/// Ordered collection of presets, validated once at load time
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Build a catalog, rejecting inconsistent presets
    pub fn new(presets: Vec<Preset>) -> Result<Self, CatalogError> {
        if presets.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, preset) in presets.iter().enumerate() {
            if presets[..i].iter().any(|p| p.name == preset.name) {
                return Err(CatalogError::DuplicateName(preset.name.clone()));
            }
            match preset.mode() {
                CoordinateMode::BoxWithThickness if preset.preference.is_none() => {
                    return Err(CatalogError::ThicknessWithoutPreference(preset.name.clone()));
                }
                CoordinateMode::Cylindrical if preset.preference_postfix.is_some() => {
                    return Err(CatalogError::PostfixOnCylinder(preset.name.clone()));
                }
                _ => {}
            }
        }

        Ok(Self { presets })
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Look up a preset by name, failing if it doesn't exist
    pub fn get_preset_by_name(&self, name: &str) -> Result<&Preset, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownPreset(name.to_string()))
    }

    pub fn preset_exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first preset, used when nothing else is pre-selected
    pub fn first(&self) -> &Preset {
        // non-empty by construction
        &self.presets[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
