//! HwmErrorCode trait for the service boundary.

/// Every error enum implements this to provide a structured error code
/// string for whatever layer exposes the engine.
pub trait HwmErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const EMPTY_FIELD: &str = "EMPTY_FIELD";
