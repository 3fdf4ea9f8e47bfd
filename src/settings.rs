//! Editor settings - zoom limits, transform policy and startup defaults.
//!
//! Stored as JSON. Every field has a default so partial files load.

use crate::constants::{MAX_SCALE, MIN_SCALE, MIN_TRANSFORM_SIZE, PLACEHOLDER_TEXT, SCALE_SPEED};
use crate::error::{SettingsError, SettingsResult};
use crate::style::DefaultStyle;
use crate::transform::TransformPolicy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Style new shapes start with; only read at startup
    pub default_style: DefaultStyle,
    pub min_scale: f32,
    pub max_scale: f32,
    pub scale_speed: f32,
    pub placeholder_text: String,
    pub min_transform_size: f32,
    pub keep_ratio: bool,
    pub debug_logging: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_style: DefaultStyle::default(),
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            scale_speed: SCALE_SPEED,
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
            min_transform_size: MIN_TRANSFORM_SIZE,
            keep_ratio: true,
            debug_logging: false,
        }
    }
}

impl EditorSettings {
    /// Read and validate settings from `path`.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`load`](Self::load) but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                info!(path = %path.display(), "Loaded editor settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), "Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating settings directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Err(SettingsError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.scale_speed > 1.0) {
            return Err(SettingsError::InvalidScaleSpeed(self.scale_speed));
        }
        if !(self.min_transform_size >= 0.0) {
            return Err(SettingsError::InvalidMinTransformSize(self.min_transform_size));
        }
        Ok(())
    }

    pub fn transform_policy(&self) -> TransformPolicy {
        TransformPolicy {
            min_size: self.min_transform_size,
            keep_ratio: self.keep_ratio,
            ..TransformPolicy::default()
        }
    }
}

/// `<config dir>/inkboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inkboard").join("settings.json"))
}
