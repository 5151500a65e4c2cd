//! Built-in confidence rules and the default source-quality table.

use std::collections::BTreeMap;

use super::types::{ConfidenceRule, QualityFactor};

/// Multiplier for extraction methods absent from both the rule and the table.
pub const DEFAULT_SOURCE_QUALITY: f64 = 0.5;

/// Base confidence for fields without a rule.
pub const DEFAULT_BASE_CONFIDENCE: f64 = 0.5;

const SOURCE_QUALITY: &[(&str, f64)] = &[
    ("user_input", 1.0),
    ("github_api", 0.95),
    ("license_file_detection", 0.95),
    ("manifest_detection", 0.95),
    ("direct_mapping", 0.9),
    ("bom_file_detection", 0.9),
    ("readme_detection", 0.9),
    ("bom_parsing", 0.85),
    ("version_file_detection", 0.85),
    ("design_file_detection", 0.85),
    ("schematic_detection", 0.85),
    ("fabrication_file_detection", 0.85),
    ("readme_extraction", 0.8),
    ("file_pattern", 0.8),
    ("changelog_detection", 0.8),
    ("instruction_file_detection", 0.8),
    ("manual_detection", 0.8),
    ("material_list_detection", 0.8),
    ("tool_list_detection", 0.8),
    ("llm_extraction", 0.75),
    ("contributing_detection", 0.75),
    ("text_pattern", 0.7),
    ("image_detection", 0.7),
    ("keyword_extraction", 0.6),
    ("filename_inference", 0.5),
    ("default", DEFAULT_SOURCE_QUALITY),
    ("fallback", 0.1),
];

/// Default extraction method -> multiplier table.
pub fn default_source_quality() -> BTreeMap<String, f64> {
    SOURCE_QUALITY
        .iter()
        .map(|(source, quality)| (source.to_string(), *quality))
        .collect()
}

/// Rule applied to fields that have no dedicated rule.
pub fn default_rule(field: &str) -> ConfidenceRule {
    ConfidenceRule::new(field, DEFAULT_BASE_CONFIDENCE)
}

/// Per-field rules keyed by field name.
pub fn builtin_rules() -> BTreeMap<String, ConfidenceRule> {
    let hint = |name: &str| QualityFactor::Hint(name.to_string());

    let rules = vec![
        ConfidenceRule::new("title", 0.8)
            .with_source("direct_mapping", 1.0)
            .with_source("github_api", 1.0)
            .with_source("readme_extraction", 0.9)
            .with_source("filename_inference", 0.6)
            .with_adjustment(QualityFactor::LengthOptimal, 0.1)
            .with_adjustment(QualityFactor::IsGeneric, -0.3),
        ConfidenceRule::new("description", 0.7)
            .with_source("github_api", 0.95)
            .with_source("readme_extraction", 0.9)
            .with_source("llm_extraction", 0.85)
            .with_adjustment(QualityFactor::ClearPurpose, 0.1)
            .with_adjustment(QualityFactor::LengthOptimal, 0.05)
            .with_adjustment(hint("length_short"), -0.15),
        ConfidenceRule::new("version", 0.85)
            .with_source("github_api", 1.0)
            .with_source("version_file_detection", 1.0)
            .with_source("changelog_detection", 0.9)
            .with_source("text_pattern", 0.75)
            .with_adjustment(QualityFactor::SemanticVersion, 0.1),
        ConfidenceRule::new("license", 0.9)
            .with_source("license_file_detection", 1.0)
            .with_source("github_api", 1.0)
            .with_source("text_pattern", 0.75)
            .with_adjustment(QualityFactor::StandardLicense, 0.1),
        ConfidenceRule::new("manufacturing_processes", 0.6)
            .with_source("text_pattern", 0.85)
            .with_source("llm_extraction", 0.9)
            .with_adjustment(hint("explicit_process_section"), 0.15),
        ConfidenceRule::new("materials", 0.6)
            .with_source("bom_file_detection", 0.95)
            .with_source("material_list_detection", 0.9)
            .with_source("llm_extraction", 0.85)
            .with_source("text_pattern", 0.7)
            .with_adjustment(QualityFactor::MultipleMaterials, 0.1)
            .with_adjustment(hint("from_bom"), 0.1),
        ConfidenceRule::new("tools", 0.55)
            .with_source("tool_list_detection", 0.9)
            .with_source("llm_extraction", 0.85)
            .with_source("text_pattern", 0.7),
        ConfidenceRule::new("keywords", 0.5)
            .with_source("github_api", 1.0)
            .with_source("keyword_extraction", 0.8),
        ConfidenceRule::new("dimensions", 0.55).with_source("text_pattern", 0.8),
        ConfidenceRule::new("readme", 0.9).with_source("readme_detection", 1.0),
        ConfidenceRule::new("bom", 0.85).with_source("bom_file_detection", 1.0),
        ConfidenceRule::new("design_files", 0.85).with_source("design_file_detection", 1.0),
        ConfidenceRule::new("schematics", 0.85).with_source("schematic_detection", 1.0),
        ConfidenceRule::new("manufacturing_files", 0.85)
            .with_source("fabrication_file_detection", 1.0),
        ConfidenceRule::new("making_instructions", 0.75)
            .with_source("instruction_file_detection", 1.0),
        ConfidenceRule::new("operating_instructions", 0.7).with_source("manual_detection", 1.0),
        ConfidenceRule::new("images", 0.6).with_source("image_detection", 1.0),
    ];

    rules
        .into_iter()
        .map(|rule| (rule.field.clone(), rule))
        .collect()
}
