//! Engine construction errors.

use super::error_code::HwmErrorCode;
use super::{ConfigError, RuleError};

/// Errors that can occur while building an extraction engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

impl HwmErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
        }
    }
}
