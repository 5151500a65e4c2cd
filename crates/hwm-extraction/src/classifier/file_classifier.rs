//! FileClassifier: categorizes, pattern-annotates, and filters file records.
//!
//! Every pattern rule is compiled into a single `RegexSet`, so a basename
//! is tested against the whole table in one pass and every matching rule
//! is reported. Matches are independent: one file may land under several
//! fields.

use std::collections::BTreeMap;

use regex::{Regex, RegexSet, RegexSetBuilder};

use hwm_core::config::ClassifierConfig;
use hwm_core::errors::RuleError;

use super::category::FileTypeCategory;
use super::exclusions::{path_has_excluded_segment, DEFAULT_EXCLUDED_DIRS};
use super::rules::{builtin_rules, PatternRule, PatternRuleLoader};
use crate::types::{extension, FileRecord};

/// A file whose basename matched a pattern rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternMatch<'a> {
    pub file: &'a FileRecord,
    pub rule: &'a PatternRule,
}

/// Path-only file classifier with immutable rule tables.
#[derive(Debug, Clone)]
pub struct FileClassifier {
    rules: Vec<PatternRule>,
    rule_set: RegexSet,
    /// Lower-cased excluded directory names.
    excluded_dirs: Vec<String>,
}

impl FileClassifier {
    /// Classifier with the built-in rules and exclusions.
    pub fn new() -> Self {
        Self::with_rules(Vec::new(), &[]).expect("built-in pattern rules must compile")
    }

    /// Classifier with pattern files and extra exclusions from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, RuleError> {
        let mut extra_rules = Vec::new();
        for path in &config.pattern_files {
            let loaded = PatternRuleLoader::load_from_file(path)?;
            tracing::debug!(path = %path.display(), rules = loaded.len(), "loaded pattern rules");
            extra_rules.extend(loaded);
        }
        Self::with_rules(extra_rules, &config.extra_excluded_dirs)
    }

    /// Classifier with `extra_rules` appended after the built-in table.
    pub fn with_rules(
        extra_rules: Vec<PatternRule>,
        extra_excluded_dirs: &[String],
    ) -> Result<Self, RuleError> {
        let mut rules = builtin_rules();
        rules.extend(extra_rules);

        let rule_set = RegexSetBuilder::new(rules.iter().map(PatternRule::anchored_pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::PatternCompilationFailed {
                id: "<rule set>".to_string(),
                message: e.to_string(),
            })?;

        let mut excluded_dirs: Vec<String> =
            DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect();
        for dir in extra_excluded_dirs {
            let dir = dir.trim().to_lowercase();
            if !dir.is_empty() && !excluded_dirs.contains(&dir) {
                excluded_dirs.push(dir);
            }
        }

        Ok(Self {
            rules,
            rule_set,
            excluded_dirs,
        })
    }

    /// The compiled rule table, in match-report order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Number of compiled pattern rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Category of a path, from its extension (case-insensitive).
    pub fn detect_file_type(&self, path: &str) -> FileTypeCategory {
        FileTypeCategory::from_extension(extension(path).as_deref())
    }

    /// Test each file's basename against every rule and group the matches
    /// by field. Within a field, matches are in file order, then rule order.
    pub fn match_file_patterns<'a, I>(&'a self, files: I) -> BTreeMap<String, Vec<PatternMatch<'a>>>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        let mut grouped: BTreeMap<String, Vec<PatternMatch<'a>>> = BTreeMap::new();
        for file in files {
            for idx in self.rule_set.matches(file.basename()).into_iter() {
                let rule = &self.rules[idx];
                grouped
                    .entry(rule.field.clone())
                    .or_default()
                    .push(PatternMatch { file, rule });
            }
        }
        grouped
    }

    /// Drop files that live under an excluded directory.
    pub fn filter_excluded_files<'a, I>(&self, files: I) -> Vec<&'a FileRecord>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        files
            .into_iter()
            .filter(|file| !self.is_excluded(&file.path))
            .collect()
    }

    /// Whether a path lives under an excluded directory.
    pub fn is_excluded(&self, path: &str) -> bool {
        path_has_excluded_segment(path, &self.excluded_dirs)
    }

    /// Files whose extension is in `extensions` (case-insensitive, leading
    /// dot optional).
    pub fn find_files_by_extension<'a, I>(&self, files: I, extensions: &[&str]) -> Vec<&'a FileRecord>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        let wanted: Vec<String> = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect();
        files
            .into_iter()
            .filter(|file| file.extension().is_some_and(|ext| wanted.contains(&ext)))
            .collect()
    }

    /// Files whose full path matches `pattern`.
    pub fn find_files_by_pattern<'a, I>(&self, files: I, pattern: &Regex) -> Vec<&'a FileRecord>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        files
            .into_iter()
            .filter(|file| pattern.is_match(&file.path))
            .collect()
    }

    /// Whether the file's content can be handed to the text extractor.
    pub fn is_text_file(&self, path: &str) -> bool {
        let ext = extension(path);
        FileTypeCategory::from_extension(ext.as_deref()).is_text(ext.as_deref())
    }

    pub fn is_image_file(&self, path: &str) -> bool {
        self.detect_file_type(path) == FileTypeCategory::Image
    }

    pub fn is_design_file(&self, path: &str) -> bool {
        self.detect_file_type(path).is_design()
    }
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<FileRecord> {
        paths.iter().map(|p| FileRecord::new(*p)).collect()
    }

    #[test]
    fn test_detect_file_type_is_case_insensitive() {
        let classifier = FileClassifier::new();
        assert_eq!(classifier.detect_file_type("README.MD"), FileTypeCategory::Markdown);
        assert_eq!(classifier.detect_file_type("frame/Base.STEP"), FileTypeCategory::CadFile);
        assert_eq!(classifier.detect_file_type("mount.stl"), FileTypeCategory::Model3d);
        assert_eq!(classifier.detect_file_type("LICENSE"), FileTypeCategory::Other);
    }

    #[test]
    fn test_one_file_can_match_several_fields() {
        let classifier = FileClassifier::new();
        let records = files(&["assembly_manual.md"]);
        let matches = classifier.match_file_patterns(&records);
        assert!(matches.contains_key("making_instructions"));
        assert!(matches.contains_key("operating_instructions"));
    }

    #[test]
    fn test_anchoring_rejects_partial_names() {
        let classifier = FileClassifier::new();
        let records = files(&["not_a_readme_really.md", "LICENSE.md.bak"]);
        let matches = classifier.match_file_patterns(&records);
        assert!(!matches.contains_key("readme"));
        assert!(!matches.contains_key("license"));
    }

    #[test]
    fn test_extra_rules_are_appended() {
        let extra = PatternRuleLoader::load_from_str(
            r#"
[[patterns]]
id = "firmware"
field = "firmware"
pattern = 'firmware.*\.(hex|uf2)'
extraction_method = "firmware_detection"
"#,
        )
        .unwrap();
        let builtin = FileClassifier::new().rule_count();
        let classifier = FileClassifier::with_rules(extra, &[]).unwrap();
        assert_eq!(classifier.rule_count(), builtin + 1);

        let records = files(&["Firmware_v2.UF2"]);
        let matches = classifier.match_file_patterns(&records);
        assert_eq!(matches["firmware"][0].rule.extraction_method, "firmware_detection");
    }

    #[test]
    fn test_extra_excluded_dirs() {
        let classifier = FileClassifier::with_rules(Vec::new(), &["Renders".to_string()]).unwrap();
        let records = files(&["renders/front.png", "photos/front.png"]);
        let kept = classifier.filter_excluded_files(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].path, "photos/front.png");
    }
}
