//! Confidence scoring: per-field confidence from rule tables and
//! importance-weighted aggregation into one layer confidence.
//!
//! Every score leaving this module is clamped to `[0.0, 1.0]`.

pub mod aggregator;
pub mod rules;
pub mod types;
pub mod weights;

pub use aggregator::ConfidenceAggregator;
pub use types::{ConfidenceLevel, ConfidenceRule, ContentQuality, QualityFactor};
pub use weights::{FieldWeights, StaticWeightProvider, WeightProvider};

/// Clamp into `[0.0, 1.0]`; NaN becomes 0.0.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
