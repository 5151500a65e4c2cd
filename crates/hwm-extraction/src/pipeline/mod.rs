//! Record-level orchestration: classify a record's files, extract field
//! candidates, score them and aggregate a layer confidence.

pub mod engine;
pub mod record;

pub use engine::ExtractionEngine;
pub use record::{FieldQualityHints, RecordExtraction, RecordInput};
