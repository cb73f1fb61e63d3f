use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curve::MIN_STROKE_WIDTH;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::palette::PaletteConfig;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCH_CONFIG";

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables of the sketching core. Every field has a default, so a config
/// file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Screen distance the pointer must travel before a new point is sampled
    pub min_point_distance: f32,
    /// Screen point that zoom-rotate gestures turn around
    pub pivot: [f32; 2],
    /// Closest a zoom-rotate gesture may start to the pivot
    pub min_arm_length: f32,
    pub history_capacity: usize,
    pub default_stroke_width: f32,
    pub stroke_width_step: f32,
    pub palette: PaletteConfig,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            min_point_distance: 5.0,
            pivot: [100.0, 100.0],
            min_arm_length: 100.0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            default_stroke_width: 5.0,
            stroke_width_step: 1.0,
            palette: PaletteConfig::default(),
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: SketchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the file named by `SKETCH_CONFIG`, falling back to defaults when
    /// the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("history_capacity must be at least 1".into()));
        }
        if !(self.min_point_distance >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_point_distance must be non-negative, got {}",
                self.min_point_distance
            )));
        }
        if !(self.min_arm_length > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_arm_length must be positive, got {}",
                self.min_arm_length
            )));
        }
        if !(self.default_stroke_width >= MIN_STROKE_WIDTH) {
            return Err(ConfigError::Invalid(format!(
                "default_stroke_width must be at least {MIN_STROKE_WIDTH}, got {}",
                self.default_stroke_width
            )));
        }
        if !(self.stroke_width_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "stroke_width_step must be positive, got {}",
                self.stroke_width_step
            )));
        }
        if self.palette.hue_cells == 0 || self.palette.brightness_cells == 0 {
            return Err(ConfigError::Invalid("palette needs at least one cell".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SketchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SketchConfig::from_json(r#"{ "history_capacity": 12, "palette": { "hue_cells": 24 } }"#)
            .unwrap();
        assert_eq!(config.history_capacity, 12);
        assert_eq!(config.palette.hue_cells, 24);
        assert_eq!(config.palette.brightness_cells, 10);
        assert_eq!(config.min_point_distance, 5.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            SketchConfig::from_json(r#"{ "history_capacity": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "default_stroke_width": 0.5 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(SketchConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SketchConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
