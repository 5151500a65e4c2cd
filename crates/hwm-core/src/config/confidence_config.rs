//! Confidence scoring configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for the confidence aggregator.
///
/// Both maps are folded into the rule tables once, when the aggregator is
/// built. They never change a running aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Field importance weight overrides (field name -> weight).
    pub field_weights: BTreeMap<String, f64>,
    /// Default source-quality overrides (extraction method -> multiplier).
    pub source_quality: BTreeMap<String, f64>,
}
