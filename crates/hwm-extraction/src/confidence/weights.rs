//! Field importance weights for layer confidence aggregation.
//!
//! Static weights are the default. An embedding service can implement
//! [`WeightProvider`] to supply its own table.

use std::collections::BTreeMap;

/// Weight used for fields absent from the table.
pub const DEFAULT_FIELD_WEIGHT: f64 = 0.5;

const STATIC_WEIGHTS: &[(&str, f64)] = &[
    ("title", 1.0),
    ("description", 0.9),
    ("license", 0.9),
    ("manufacturing_processes", 0.9),
    ("materials", 0.85),
    ("bom", 0.8),
    ("design_files", 0.8),
    ("version", 0.7),
    ("tools", 0.7),
    ("making_instructions", 0.75),
    ("schematics", 0.7),
    ("manufacturing_files", 0.7),
    ("operating_instructions", 0.6),
    ("readme", 0.6),
    ("keywords", 0.4),
    ("dimensions", 0.4),
    ("manifest", 0.4),
    ("images", 0.3),
    ("contribution_guide", 0.3),
];

/// Importance weight per field (field name → weight).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWeights {
    pub weights: BTreeMap<String, f64>,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self::static_defaults()
    }
}

impl FieldWeights {
    pub fn static_defaults() -> Self {
        Self {
            weights: STATIC_WEIGHTS
                .iter()
                .map(|(field, weight)| (field.to_string(), *weight))
                .collect(),
        }
    }

    /// Weight for a field, falling back to [`DEFAULT_FIELD_WEIGHT`].
    /// Clamps negative weights to 0.0, replaces NaN with the static default.
    pub fn get_weight(&self, field: &str) -> f64 {
        let raw = self.weights.get(field).copied().unwrap_or(DEFAULT_FIELD_WEIGHT);
        if raw.is_nan() {
            static_weight(field)
        } else if raw < 0.0 {
            0.0
        } else {
            raw
        }
    }

    /// Replace weights for the given fields.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        for (field, weight) in overrides {
            self.weights.insert(field.clone(), *weight);
        }
    }
}

fn static_weight(field: &str) -> f64 {
    STATIC_WEIGHTS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_FIELD_WEIGHT)
}

/// Provider of field importance weights.
///
/// The default implementation returns the static table.
pub trait WeightProvider: Send + Sync {
    fn field_weights(&self) -> FieldWeights {
        FieldWeights::static_defaults()
    }
}

/// Returns the static weight table.
pub struct StaticWeightProvider;

impl WeightProvider for StaticWeightProvider {}
