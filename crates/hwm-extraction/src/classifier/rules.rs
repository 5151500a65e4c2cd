//! Filename pattern rules: the built-in table plus TOML-defined extensions.
//!
//! Patterns are matched against a file's basename, case-insensitively, and
//! are always anchored to the whole name.

use serde::{Deserialize, Serialize};

use hwm_core::errors::RuleError;

/// Associates a filename pattern with a manifest field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    pub id: String,
    /// Regex source, without anchors or case flags.
    pub pattern: String,
    pub field: String,
    pub base_confidence: f64,
    pub extraction_method: String,
    pub description: String,
}

impl PatternRule {
    fn builtin(
        id: &str,
        field: &str,
        pattern: &str,
        base_confidence: f64,
        extraction_method: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            pattern: pattern.to_string(),
            field: field.to_string(),
            base_confidence,
            extraction_method: extraction_method.to_string(),
            description: description.to_string(),
        }
    }

    /// Pattern wrapped so it must match the whole basename.
    pub fn anchored_pattern(&self) -> String {
        format!("^(?:{})$", self.pattern)
    }
}

/// The built-in rule table, in declaration order.
pub fn builtin_rules() -> Vec<PatternRule> {
    vec![
        PatternRule::builtin(
            "readme",
            "readme",
            r"readme(\.(md|markdown|txt|rst|adoc))?",
            0.9,
            "readme_detection",
            "Project README",
        ),
        PatternRule::builtin(
            "license_file",
            "license",
            r"(license|licence|copying)([-_][a-z0-9.-]+)?(\.(md|txt|rst))?",
            0.95,
            "license_file_detection",
            "License text",
        ),
        PatternRule::builtin(
            "bom_file",
            "bom",
            r"(bom|bill[-_ ]?of[-_ ]?materials)(\.(csv|tsv|xlsx?|ods|md|txt|json))?",
            0.9,
            "bom_file_detection",
            "Bill of materials",
        ),
        PatternRule::builtin(
            "bom_suffixed",
            "bom",
            r".+[-_]bom\.(csv|tsv|xlsx?|ods)",
            0.8,
            "bom_file_detection",
            "Bill of materials with a prefixed name",
        ),
        PatternRule::builtin(
            "changelog",
            "version",
            r"(changelog|changes|history|releases?)(\.(md|txt|rst))?",
            0.7,
            "changelog_detection",
            "Release history",
        ),
        PatternRule::builtin(
            "version_file",
            "version",
            r"version(\.(txt|md))?",
            0.8,
            "version_file_detection",
            "Version marker file",
        ),
        PatternRule::builtin(
            "assembly_instructions",
            "making_instructions",
            r".*(assembly|build[-_]?guide|instructions?|how[-_]?to[-_]?build).*\.(md|pdf|txt|html?)",
            0.8,
            "instruction_file_detection",
            "Assembly or build instructions",
        ),
        PatternRule::builtin(
            "user_manual",
            "operating_instructions",
            r".*(manual|user[-_]?guide|operating|operation).*\.(md|pdf|txt|html?)",
            0.75,
            "manual_detection",
            "User manual or operating guide",
        ),
        PatternRule::builtin(
            "cad_source",
            "design_files",
            r".+\.(step|stp|iges|igs|f3d|fcstd|scad|sldprt|sldasm|dxf|dwg)",
            0.85,
            "design_file_detection",
            "CAD source file",
        ),
        PatternRule::builtin(
            "mesh_model",
            "design_files",
            r".+\.(stl|3mf|obj|amf)",
            0.8,
            "design_file_detection",
            "Printable mesh",
        ),
        PatternRule::builtin(
            "schematic",
            "schematics",
            r".+\.(kicad_sch|kicad_pcb|sch|brd|fzz)",
            0.85,
            "schematic_detection",
            "Electronics schematic or board layout",
        ),
        PatternRule::builtin(
            "gerber",
            "manufacturing_files",
            r".+\.(gbr|gtl|gbl|gto|gbo|gts|gbs|drl)|.*gerbers?.*\.zip",
            0.85,
            "fabrication_file_detection",
            "PCB fabrication output",
        ),
        PatternRule::builtin(
            "contributing",
            "contribution_guide",
            r"contributing(\.(md|txt|rst))?",
            0.9,
            "contributing_detection",
            "Contribution guide",
        ),
        PatternRule::builtin(
            "tool_list",
            "tools",
            r"tools?([-_ ]?list)?(\.(md|txt|csv))?",
            0.75,
            "tool_list_detection",
            "Required tools list",
        ),
        PatternRule::builtin(
            "material_list",
            "materials",
            r"materials?([-_ ]?list)?(\.(md|txt|csv))?",
            0.75,
            "material_list_detection",
            "Materials list",
        ),
        PatternRule::builtin(
            "manifest",
            "manifest",
            r"(okh|manifest)\.(toml|ya?ml|json)",
            0.95,
            "manifest_detection",
            "Existing hardware manifest",
        ),
        PatternRule::builtin(
            "product_images",
            "images",
            r"(photo|image|render|preview|picture)s?.*\.(png|jpe?g|webp|gif)",
            0.6,
            "image_detection",
            "Product photo or render",
        ),
    ]
}

/// A TOML-defined pattern rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlPatternRuleDef {
    pub id: String,
    pub field: String,
    pub pattern: String,
    #[serde(default = "default_base_confidence")]
    pub base_confidence: f64,
    #[serde(default = "default_extraction_method")]
    pub extraction_method: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_base_confidence() -> f64 {
    0.70
}

fn default_extraction_method() -> String {
    "file_pattern".to_string()
}

/// A collection of TOML pattern rule definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlPatternRuleFile {
    #[serde(default)]
    pub patterns: Vec<TomlPatternRuleDef>,
}

/// Loader for TOML pattern rules.
pub struct PatternRuleLoader;

impl PatternRuleLoader {
    /// Load rules from a TOML string. Disabled rules are skipped.
    pub fn load_from_str(toml_str: &str) -> Result<Vec<PatternRule>, RuleError> {
        let file: TomlPatternRuleFile = toml::from_str(toml_str)
            .map_err(|e| RuleError::InvalidPattern(format!("TOML parse error: {e}")))?;

        let mut rules = Vec::new();
        for def in file.patterns {
            if def.enabled == Some(false) {
                continue;
            }
            rules.push(Self::validate(def)?);
        }
        Ok(rules)
    }

    /// Load rules from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Vec<PatternRule>, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::InvalidPattern(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::load_from_str(&content)
    }

    fn validate(def: TomlPatternRuleDef) -> Result<PatternRule, RuleError> {
        if def.field.trim().is_empty() {
            return Err(RuleError::EmptyField { id: def.id });
        }
        if def.pattern.is_empty() {
            return Err(RuleError::InvalidPattern(format!(
                "pattern '{}' is empty",
                def.id
            )));
        }
        if !def.base_confidence.is_finite() || !(0.0..=1.0).contains(&def.base_confidence) {
            return Err(RuleError::InvalidPattern(format!(
                "base_confidence of '{}' must be between 0.0 and 1.0",
                def.id
            )));
        }

        let rule = PatternRule {
            description: def.description.unwrap_or_else(|| def.id.clone()),
            id: def.id,
            pattern: def.pattern,
            field: def.field,
            base_confidence: def.base_confidence,
            extraction_method: def.extraction_method,
        };

        regex::RegexBuilder::new(&rule.anchored_pattern())
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::PatternCompilationFailed {
                id: rule.id.clone(),
                message: e.to_string(),
            })?;

        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_compile() {
        for rule in builtin_rules() {
            assert!(
                regex::Regex::new(&rule.anchored_pattern()).is_ok(),
                "rule {} does not compile",
                rule.id
            );
            assert!((0.0..=1.0).contains(&rule.base_confidence));
        }
    }

    #[test]
    fn test_builtin_rule_ids_unique() {
        let rules = builtin_rules();
        let ids: std::collections::HashSet<_> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn test_load_defaults_and_skip_disabled() {
        let rules = PatternRuleLoader::load_from_str(
            r#"
[[patterns]]
id = "firmware"
field = "firmware"
pattern = 'firmware.*\.(hex|uf2)'

[[patterns]]
id = "old"
field = "legacy"
pattern = "legacy.*"
enabled = false
"#,
        )
        .unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].base_confidence, 0.70);
        assert_eq!(rules[0].extraction_method, "file_pattern");
        assert_eq!(rules[0].description, "firmware");
    }

    #[test]
    fn test_bad_regex_names_the_rule() {
        let err = PatternRuleLoader::load_from_str(
            r#"
[[patterns]]
id = "broken"
field = "bom"
pattern = "bom(\\.csv"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::PatternCompilationFailed { ref id, .. } if id == "broken"));
    }

    #[test]
    fn test_empty_field_rejected() {
        let err = PatternRuleLoader::load_from_str(
            r#"
[[patterns]]
id = "nofield"
field = " "
pattern = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::EmptyField { .. }));
    }
}
