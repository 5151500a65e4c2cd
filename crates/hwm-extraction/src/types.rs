//! Data model shared by every engine component.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A file handed to the engine by the ingestion layer.
///
/// Owned by the caller; the engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Repository-relative path, `/` or `\` separated.
    pub path: String,
    /// Decoded text content, when the caller read it as text.
    #[serde(default)]
    pub content: Option<String>,
    /// Raw bytes, when the caller kept them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_bytes: Option<Vec<u8>>,
}

impl FileRecord {
    /// A record with a path and no content.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
            raw_bytes: None,
        }
    }

    /// A record with a path and text content.
    pub fn with_content(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            raw_bytes: None,
        }
    }

    /// Final path component.
    pub fn basename(&self) -> &str {
        basename(&self.path)
    }

    /// Lower-cased extension of the final path component, if any.
    pub fn extension(&self) -> Option<String> {
        extension(&self.path)
    }

    /// Text content if present and non-blank.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Final component of a `/` or `\` separated path.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Lower-cased extension of a path's final component.
pub(crate) fn extension(path: &str) -> Option<String> {
    Path::new(basename(path))
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// An extracted field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One extracted field, scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldExtractionResult {
    pub field: String,
    pub value: FieldValue,
    /// Extraction method that produced the value.
    pub source: String,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f64,
}
