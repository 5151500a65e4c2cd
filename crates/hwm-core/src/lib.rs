//! hwm-core: shared foundation for the hardware manifest extraction engine.
//!
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Config: TOML-based, layered resolution (overrides > env > project > defaults)
//! - Tracing: `tracing` + `EnvFilter`, driven by `HWM_LOG`
//! - Types: collection aliases shared across crates

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::HwmConfig;
pub use errors::{ConfigError, EngineError, HwmErrorCode, RuleError};
