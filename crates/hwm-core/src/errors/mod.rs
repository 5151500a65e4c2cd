//! Error handling for the extraction engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! Extraction and scoring operations never fail; these errors can only
//! surface while loading configuration or compiling rule tables.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod rule_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::HwmErrorCode;
pub use rule_error::RuleError;
