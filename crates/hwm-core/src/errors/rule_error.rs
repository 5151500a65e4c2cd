//! Rule table errors.

use super::error_code::{self, HwmErrorCode};

/// Errors raised while compiling user-supplied pattern rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern rule: {0}")]
    InvalidPattern(String),

    #[error("Pattern compilation failed for rule '{id}': {message}")]
    PatternCompilationFailed { id: String, message: String },

    #[error("Rule '{id}' has an empty field name")]
    EmptyField { id: String },
}

impl HwmErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => error_code::EMPTY_FIELD,
            _ => error_code::RULE_ERROR,
        }
    }
}
