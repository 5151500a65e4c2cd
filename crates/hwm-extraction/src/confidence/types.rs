//! Core types for field confidence scoring.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::FieldValue;

/// Graduated confidence levels, ordered from least to most trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    /// score < 0.3
    VeryLow,
    /// 0.3 ≤ score < 0.5
    Low,
    /// 0.5 ≤ score < 0.7
    Medium,
    /// 0.7 ≤ score < 0.9
    High,
    /// score ≥ 0.9
    VeryHigh,
}

impl ConfidenceLevel {
    /// Classify a score into a level. NaN is `VeryLow`.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::VeryHigh
        } else if score >= 0.7 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else if score >= 0.3 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied quality signals about the source of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentQuality {
    hints: BTreeMap<String, bool>,
}

impl ContentQuality {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, name: impl Into<String>, value: bool) -> Self {
        self.hints.insert(name.into(), value);
        self
    }

    pub fn hint(&self, name: &str) -> Option<bool> {
        self.hints.get(name).copied()
    }

    /// True only when the hint is present and set.
    pub fn is_set(&self, name: &str) -> bool {
        self.hint(name).unwrap_or(false)
    }
}

impl FromIterator<(String, bool)> for ContentQuality {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            hints: iter.into_iter().collect(),
        }
    }
}

const GENERIC_TERMS: &[&str] = &[
    "untitled", "project", "example", "sample", "test", "default", "unknown", "todo",
    "tbd", "placeholder", "my ",
];

const STANDARD_LICENSES: &[&str] = &[
    "MIT", "Apache-2.0", "GPL-2.0", "GPL-3.0", "LGPL-2.1", "LGPL-3.0", "AGPL-3.0",
    "MPL-2.0", "BSD-2-Clause", "BSD-3-Clause", "ISC", "CERN-OHL-1.2", "CERN-OHL-S-2.0",
    "CERN-OHL-W-2.0", "CERN-OHL-P-2.0", "TAPR-OHL-1.0", "SHL-2.1", "CC-BY-4.0",
    "CC-BY-SA-4.0", "CC0-1.0", "Unlicense",
];

static SEMANTIC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+").expect("invalid semver pattern"));

/// A quality signal that adjusts a field's confidence when it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityFactor {
    /// Text of 10 to 100 characters.
    LengthOptimal,
    /// Text containing a generic placeholder term.
    IsGeneric,
    /// A well-known license identifier.
    StandardLicense,
    /// Text starting with `major.minor.patch`.
    SemanticVersion,
    /// A list of more than one item.
    MultipleMaterials,
    /// Text longer than 20 characters that states a purpose.
    ClearPurpose,
    /// Holds when the caller's `ContentQuality` sets this hint.
    Hint(String),
}

impl QualityFactor {
    pub fn name(&self) -> &str {
        match self {
            Self::LengthOptimal => "length_optimal",
            Self::IsGeneric => "is_generic",
            Self::StandardLicense => "standard_license",
            Self::SemanticVersion => "semantic_version",
            Self::MultipleMaterials => "multiple_materials",
            Self::ClearPurpose => "clear_purpose",
            Self::Hint(name) => name.as_str(),
        }
    }

    /// Evaluate the factor for a value and the caller's quality hints.
    pub fn holds(&self, value: &FieldValue, quality: &ContentQuality) -> bool {
        match self {
            Self::LengthOptimal => value
                .as_text()
                .is_some_and(|s| (10..=100).contains(&s.chars().count())),
            Self::IsGeneric => value.as_text().is_some_and(|s| {
                let lower = s.to_lowercase();
                GENERIC_TERMS.iter().any(|term| lower.contains(term))
            }),
            Self::StandardLicense => value
                .as_text()
                .is_some_and(|s| STANDARD_LICENSES.contains(&s.trim())),
            Self::SemanticVersion => value
                .as_text()
                .is_some_and(|s| SEMANTIC_VERSION.is_match(s.trim())),
            Self::MultipleMaterials => value.as_list().is_some_and(|items| items.len() > 1),
            Self::ClearPurpose => value.as_text().is_some_and(|s| {
                s.chars().count() > 20 && s.to_lowercase().contains("purpose")
            }),
            Self::Hint(name) => quality.is_set(name),
        }
    }
}

/// Scoring rule for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRule {
    pub field: String,
    /// Base confidence in `[0, 1]`.
    pub base_confidence: f64,
    /// Extraction method -> multiplier, consulted before the default table.
    pub source_multipliers: BTreeMap<String, f64>,
    /// Applied in order; adjustments may be negative.
    pub quality_adjustments: Vec<(QualityFactor, f64)>,
}

impl ConfidenceRule {
    pub fn new(field: impl Into<String>, base_confidence: f64) -> Self {
        Self {
            field: field.into(),
            base_confidence,
            source_multipliers: BTreeMap::new(),
            quality_adjustments: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: &str, multiplier: f64) -> Self {
        self.source_multipliers.insert(source.to_string(), multiplier);
        self
    }

    pub fn with_adjustment(mut self, factor: QualityFactor, adjustment: f64) -> Self {
        self.quality_adjustments.push((factor, adjustment));
        self
    }
}
