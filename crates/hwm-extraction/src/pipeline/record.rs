//! Inputs and outputs of a record run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::confidence::ContentQuality;
use crate::types::{FieldExtractionResult, FileRecord};

/// Caller-supplied quality hints, per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldQualityHints {
    fields: BTreeMap<String, ContentQuality>,
}

impl FieldQualityHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Into<String>, quality: ContentQuality) -> Self {
        self.fields.insert(field.into(), quality);
        self
    }

    pub fn get(&self, field: &str) -> Option<&ContentQuality> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One record (a repository or upload) to run through the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordInput {
    pub record_id: String,
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub hints: FieldQualityHints,
}

impl RecordInput {
    pub fn new(record_id: impl Into<String>, files: Vec<FileRecord>) -> Self {
        Self {
            record_id: record_id.into(),
            files,
            hints: FieldQualityHints::default(),
        }
    }

    pub fn with_hints(mut self, hints: FieldQualityHints) -> Self {
        self.hints = hints;
        self
    }
}

/// Scored fields of one record plus the aggregate layer confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordExtraction {
    pub record_id: String,
    pub fields: BTreeMap<String, FieldExtractionResult>,
    pub layer_confidence: f64,
}

impl RecordExtraction {
    pub fn field(&self, name: &str) -> Option<&FieldExtractionResult> {
        self.fields.get(name)
    }

    /// Field name -> confidence.
    pub fn confidences(&self) -> BTreeMap<String, f64> {
        self.fields
            .iter()
            .map(|(name, result)| (name.clone(), result.confidence))
            .collect()
    }

    /// Pretty JSON for the manifest generator.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    #[test]
    fn test_hints_lookup() {
        let hints = FieldQualityHints::new()
            .with_field("description", ContentQuality::new().with_hint("length_short", true));
        assert!(hints.get("description").is_some_and(|q| q.is_set("length_short")));
        assert!(hints.get("title").is_none());
        assert!(FieldQualityHints::new().is_empty());
    }

    #[test]
    fn test_record_input_deserializes_without_hints() {
        let input: RecordInput = serde_json::from_str(
            r#"{"record_id": "r1", "files": [{"path": "README.md", "content": "hi"}]}"#,
        )
        .unwrap();
        assert_eq!(input.record_id, "r1");
        assert_eq!(input.files[0].text(), Some("hi"));
        assert!(input.hints.is_empty());
    }

    #[test]
    fn test_extraction_json_shape() {
        let mut extraction = RecordExtraction {
            record_id: "r1".to_string(),
            ..Default::default()
        };
        extraction.fields.insert(
            "license".to_string(),
            FieldExtractionResult {
                field: "license".to_string(),
                value: FieldValue::from("MIT"),
                source: "license_file_detection".to_string(),
                confidence: 1.0,
            },
        );
        extraction.layer_confidence = 1.0;

        let json: serde_json::Value = serde_json::from_str(&extraction.to_json().unwrap()).unwrap();
        assert_eq!(json["fields"]["license"]["value"], "MIT");
        assert_eq!(json["fields"]["license"]["source"], "license_file_detection");
        assert_eq!(json["layer_confidence"], 1.0);
        assert_eq!(extraction.confidences()["license"], 1.0);
    }
}
