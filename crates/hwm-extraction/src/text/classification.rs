//! Content type and complexity classification by keyword buckets.
//!
//! Each bucket scores `keywords present / bucket size`. The highest score
//! wins; on a tie the bucket declared first wins. A text that hits no
//! bucket falls back to the default label with a score of zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::processes::extract_manufacturing_processes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    AssemblyInstructions,
    OperatingInstructions,
    ManufacturingInstructions,
    TechnicalSpecifications,
    Troubleshooting,
    SafetyInformation,
    Maintenance,
    General,
}

impl ContentType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssemblyInstructions => "assembly_instructions",
            Self::OperatingInstructions => "operating_instructions",
            Self::ManufacturingInstructions => "manufacturing_instructions",
            Self::TechnicalSpecifications => "technical_specifications",
            Self::Troubleshooting => "troubleshooting",
            Self::SafetyInformation => "safety_information",
            Self::Maintenance => "maintenance",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ComplexityLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentClassification {
    pub content_type: ContentType,
    /// First detected manufacturing process, or `"general"`.
    pub process_type: String,
    pub complexity_level: ComplexityLevel,
    /// Mean of the winning content-type and complexity scores.
    pub confidence: f64,
}

const CONTENT_BUCKETS: &[(ContentType, &[&str])] = &[
    (
        ContentType::AssemblyInstructions,
        &["assemble", "assembly", "attach", "install", "mount", "connect", "insert", "fasten", "screw", "step"],
    ),
    (
        ContentType::OperatingInstructions,
        &["operate", "operation", "power on", "turn on", "turn off", "start", "stop", "control", "setting", "usage"],
    ),
    (
        ContentType::ManufacturingInstructions,
        &["manufactur", "fabricat", "print", "cut", "machine", "mill", "drill", "solder", "weld", "mold"],
    ),
    (
        ContentType::TechnicalSpecifications,
        &["specification", "dimension", "tolerance", "material", "weight", "voltage", "current", "rated", "capacity", "accuracy"],
    ),
    (
        ContentType::Troubleshooting,
        &["troubleshoot", "problem", "issue", "error", "fix", "solution", "fault", "symptom", "not working", "repair"],
    ),
    (
        ContentType::SafetyInformation,
        &["safety", "warning", "caution", "danger", "hazard", "protective", "gloves", "goggles", "risk", "injury"],
    ),
    (
        ContentType::Maintenance,
        &["maintenance", "maintain", "clean", "lubricat", "replace", "inspect", "service", "calibrat", "wear", "schedule"],
    ),
];

const COMPLEXITY_BUCKETS: &[(ComplexityLevel, &[&str])] = &[
    (
        ComplexityLevel::Beginner,
        &["simple", "easy", "basic", "beginner", "quick", "introduction", "no experience", "straightforward"],
    ),
    (
        ComplexityLevel::Intermediate,
        &["moderate", "intermediate", "some experience", "standard", "typical"],
    ),
    (
        ComplexityLevel::Advanced,
        &["advanced", "complex", "expert", "precision", "professional", "sophisticated", "specialized", "experienced"],
    ),
];

/// Pick the bucket with the strictly highest ratio; earlier buckets win ties.
fn best_bucket<T: Copy>(lower: &str, buckets: &[(T, &[&str])], default: T) -> (T, f64) {
    let mut best = (default, 0.0);
    for (label, keywords) in buckets {
        if keywords.is_empty() {
            continue;
        }
        let hits = keywords.iter().filter(|k| lower.contains(*k)).count();
        let ratio = hits as f64 / keywords.len() as f64;
        if ratio > best.1 {
            best = (*label, ratio);
        }
    }
    best
}

/// Classify what kind of document `text` is and how demanding it reads.
pub fn classify_content_type(text: &str) -> ContentClassification {
    let lower = text.to_lowercase();

    let (content_type, content_score) =
        best_bucket(&lower, CONTENT_BUCKETS, ContentType::General);
    let (complexity_level, complexity_score) =
        best_bucket(&lower, COMPLEXITY_BUCKETS, ComplexityLevel::Intermediate);

    let process_type = extract_manufacturing_processes(text)
        .into_iter()
        .next()
        .unwrap_or_else(|| "general".to_string());

    ContentClassification {
        content_type,
        process_type,
        complexity_level,
        confidence: (content_score + complexity_score) / 2.0,
    }
}
