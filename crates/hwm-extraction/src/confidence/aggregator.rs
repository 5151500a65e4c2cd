//! Field and layer confidence calculation.

use std::collections::BTreeMap;

use hwm_core::config::ConfidenceConfig;

use super::clamp_confidence;
use super::rules::{builtin_rules, default_rule, default_source_quality, DEFAULT_SOURCE_QUALITY};
use super::types::{ConfidenceLevel, ConfidenceRule, ContentQuality};
use super::weights::{FieldWeights, StaticWeightProvider, WeightProvider};
use crate::types::FieldValue;

/// Scores extracted fields and aggregates them into a layer confidence.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct ConfidenceAggregator {
    rules: BTreeMap<String, ConfidenceRule>,
    default_rule: ConfidenceRule,
    source_quality: BTreeMap<String, f64>,
    weights: FieldWeights,
}

impl Default for ConfidenceAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceAggregator {
    /// Built-in rules, source table and static weights.
    pub fn new() -> Self {
        Self::with_weight_provider(&StaticWeightProvider)
    }

    pub fn with_weight_provider(provider: &dyn WeightProvider) -> Self {
        Self {
            rules: builtin_rules(),
            default_rule: default_rule("default"),
            source_quality: default_source_quality(),
            weights: provider.field_weights(),
        }
    }

    /// Built-in tables with the configured weight and source overrides folded in.
    pub fn from_config(config: &ConfidenceConfig) -> Self {
        let mut aggregator = Self::new();
        aggregator.weights.apply_overrides(&config.field_weights);
        for (source, quality) in &config.source_quality {
            aggregator.source_quality.insert(source.clone(), *quality);
        }
        aggregator
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The rule for a field, or the default rule.
    pub fn rule(&self, field: &str) -> &ConfidenceRule {
        self.rules.get(field).unwrap_or(&self.default_rule)
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Multiplier for an extraction method under a rule.
    fn source_multiplier(&self, rule: &ConfidenceRule, source: &str) -> f64 {
        rule.source_multipliers
            .get(source)
            .or_else(|| self.source_quality.get(source))
            .or_else(|| self.source_quality.get("default"))
            .copied()
            .unwrap_or(DEFAULT_SOURCE_QUALITY)
    }

    /// Confidence in `[0, 1]` for one extracted value.
    ///
    /// Quality adjustments are only applied when `content_quality` is given.
    pub fn calculate_field_confidence(
        &self,
        field: &str,
        value: &FieldValue,
        source: &str,
        content_quality: Option<&ContentQuality>,
    ) -> f64 {
        let rule = self.rule(field);
        let mut confidence = rule.base_confidence * self.source_multiplier(rule, source);

        if let Some(quality) = content_quality {
            for (factor, adjustment) in &rule.quality_adjustments {
                if factor.holds(value, quality) {
                    confidence += adjustment;
                }
            }
        }

        confidence *= shape_penalty(value);

        clamp_confidence(confidence)
    }

    /// Importance-weighted mean of the given field confidences.
    ///
    /// Inputs are clamped first. Returns 0.0 for an empty input or when
    /// every weight is zero.
    pub fn calculate_layer_confidence<'a, I>(&self, field_confidences: I) -> f64
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (field, confidence) in field_confidences {
            let weight = self.weights.get_weight(field);
            weighted_sum += clamp_confidence(*confidence) * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return 0.0;
        }
        clamp_confidence(weighted_sum / total_weight)
    }

    pub fn get_confidence_level(&self, confidence: f64) -> ConfidenceLevel {
        ConfidenceLevel::from_score(confidence)
    }

    /// True for finite scores in `[0, 1]`.
    pub fn validate_confidence_score(&self, confidence: f64) -> bool {
        confidence.is_finite() && (0.0..=1.0).contains(&confidence)
    }

    /// Clamp every score into `[0, 1]`.
    pub fn normalize_confidence_scores(
        &self,
        scores: &BTreeMap<String, f64>,
    ) -> BTreeMap<String, f64> {
        scores
            .iter()
            .map(|(field, score)| (field.clone(), clamp_confidence(*score)))
            .collect()
    }
}

/// Penalty for empty or thin values.
fn shape_penalty(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Null => 0.1,
        FieldValue::Text(text) => match text.trim().chars().count() {
            0 => 0.1,
            1 | 2 => 0.5,
            _ => 1.0,
        },
        FieldValue::List(items) => match items.len() {
            0 => 0.1,
            1 => 0.8,
            _ => 1.0,
        },
        FieldValue::Number(_) | FieldValue::Bool(_) => 1.0,
    }
}
