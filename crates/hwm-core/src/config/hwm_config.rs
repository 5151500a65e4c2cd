//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, ConfidenceConfig, ExtractionConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "hwm.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`HWM_*`)
/// 3. Project config (`hwm.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HwmConfig {
    pub classifier: ClassifierConfig,
    pub extraction: ExtractionConfig,
    pub confidence: ConfidenceConfig,
}

/// Override arguments supplied by the embedding service.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_keywords: Option<usize>,
    pub min_technical_terms: Option<usize>,
    pub extra_excluded_dirs: Vec<String>,
}

impl HwmConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            // Pattern files in the project config are relative to the project root.
            for path in &mut config.classifier.pattern_files {
                if path.is_relative() {
                    *path = root.join(&*path);
                }
            }
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: HwmConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HwmConfig) -> Result<(), ConfigError> {
        if config.extraction.max_keywords == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.max_keywords".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, weight) in &config.confidence.field_weights {
            if !weight.is_finite() || !(0.0..=1.0).contains(weight) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("confidence.field_weights.{field}"),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        for (source, quality) in &config.confidence.source_quality {
            if !quality.is_finite() || !(0.0..=1.0).contains(quality) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("confidence.source_quality.{source}"),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        for dir in &config.classifier.extra_excluded_dirs {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "classifier.extra_excluded_dirs".to_string(),
                    message: "directory names must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut HwmConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HwmConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it carries a value.
    fn merge(base: &mut HwmConfig, other: &HwmConfig) {
        if !other.classifier.extra_excluded_dirs.is_empty() {
            base.classifier.extra_excluded_dirs = other.classifier.extra_excluded_dirs.clone();
        }
        if !other.classifier.pattern_files.is_empty() {
            base.classifier.pattern_files = other.classifier.pattern_files.clone();
        }

        if other.extraction.max_keywords.is_some() {
            base.extraction.max_keywords = other.extraction.max_keywords;
        }
        if other.extraction.measurement_context_chars.is_some() {
            base.extraction.measurement_context_chars = other.extraction.measurement_context_chars;
        }
        if other.extraction.min_technical_terms.is_some() {
            base.extraction.min_technical_terms = other.extraction.min_technical_terms;
        }
        if other.extraction.min_description_length.is_some() {
            base.extraction.min_description_length = other.extraction.min_description_length;
        }

        for (field, weight) in &other.confidence.field_weights {
            base.confidence.field_weights.insert(field.clone(), *weight);
        }
        for (source, quality) in &other.confidence.source_quality {
            base.confidence.source_quality.insert(source.clone(), *quality);
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HWM_EXTRACTION_MAX_KEYWORDS`, etc. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut HwmConfig) {
        if let Ok(val) = std::env::var("HWM_EXTRACTION_MAX_KEYWORDS") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.max_keywords = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HWM_EXTRACTION_MIN_TECHNICAL_TERMS") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.min_technical_terms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HWM_EXTRACTION_MEASUREMENT_CONTEXT_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.measurement_context_chars = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut HwmConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.max_keywords {
            config.extraction.max_keywords = Some(v);
        }
        if let Some(v) = overrides.min_technical_terms {
            config.extraction.min_technical_terms = Some(v);
        }
        for dir in &overrides.extra_excluded_dirs {
            if !config.classifier.extra_excluded_dirs.contains(dir) {
                config.classifier.extra_excluded_dirs.push(dir.clone());
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
