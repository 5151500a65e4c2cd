//! File classifier configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the file classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Directory names excluded in addition to the built-in set.
    pub extra_excluded_dirs: Vec<String>,
    /// TOML pattern-rule files appended after the built-in filename rules.
    pub pattern_files: Vec<PathBuf>,
}
