//! hwm-extraction: confidence-weighted field extraction for hardware manifests.
//!
//! - Classifier: extension categories, filename pattern rules, directory exclusion
//! - Text: cleaning and field candidate extraction from raw text
//! - Confidence: per-field scoring and importance-weighted layer aggregation
//! - Pipeline: record-level orchestration and parallel batch processing
//!
//! All rule tables are built when a component is constructed and are
//! read-only afterwards, so every component is `Send + Sync` and may be
//! shared freely across threads.

pub mod classifier;
pub mod confidence;
pub mod pipeline;
pub mod text;
pub mod types;

pub use classifier::{FileClassifier, FileTypeCategory, PatternMatch, PatternRule};
pub use confidence::{
    ConfidenceAggregator, ConfidenceLevel, ConfidenceRule, ContentQuality, QualityFactor,
};
pub use pipeline::{ExtractionEngine, FieldQualityHints, RecordExtraction, RecordInput};
pub use text::{ContentClassification, Measurement, TextExtractor};
pub use types::{FieldExtractionResult, FieldValue, FileRecord};
