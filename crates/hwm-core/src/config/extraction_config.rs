//! Text extraction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the text extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum keywords kept per record. Default: 10.
    pub max_keywords: Option<usize>,
    /// Characters of context captured on each side of a measurement. Default: 20.
    pub measurement_context_chars: Option<usize>,
    /// Distinct technical terms needed for text to count as technical. Default: 3.
    pub min_technical_terms: Option<usize>,
    /// Minimum length of a paragraph accepted as a description. Default: 20.
    pub min_description_length: Option<usize>,
}

impl ExtractionConfig {
    /// Returns the effective keyword limit, defaulting to 10.
    pub fn effective_max_keywords(&self) -> usize {
        self.max_keywords.unwrap_or(10)
    }

    /// Returns the effective measurement context width, defaulting to 20.
    pub fn effective_measurement_context_chars(&self) -> usize {
        self.measurement_context_chars.unwrap_or(20)
    }

    /// Returns the effective technical term threshold, defaulting to 3.
    pub fn effective_min_technical_terms(&self) -> usize {
        self.min_technical_terms.unwrap_or(3)
    }

    /// Returns the effective minimum description length, defaulting to 20.
    pub fn effective_min_description_length(&self) -> usize {
        self.min_description_length.unwrap_or(20)
    }
}
