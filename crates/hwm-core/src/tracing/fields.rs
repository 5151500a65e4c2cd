//! Structured field names used in tracing events across the engine.

/// Number of files handed to a record run.
pub const FILE_COUNT: &str = "file_count";

/// Number of files left after directory exclusion.
pub const KEPT_FILE_COUNT: &str = "kept_file_count";

/// Number of fields produced for a record.
pub const FIELD_COUNT: &str = "field_count";

/// Aggregate layer confidence of a record (0.0 - 1.0).
pub const LAYER_CONFIDENCE: &str = "layer_confidence";

/// Number of compiled filename pattern rules.
pub const PATTERN_RULE_COUNT: &str = "pattern_rule_count";

/// Number of confidence rules.
pub const CONFIDENCE_RULE_COUNT: &str = "confidence_rule_count";
