//! Configuration system for the extraction engine.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod classifier_config;
pub mod confidence_config;
pub mod extraction_config;
pub mod hwm_config;

pub use classifier_config::ClassifierConfig;
pub use confidence_config::ConfidenceConfig;
pub use extraction_config::ExtractionConfig;
pub use hwm_config::{ConfigOverrides, HwmConfig};
