//! TextExtractor: the configured entry point to every text operation.

use std::sync::LazyLock;

use regex::Regex;

use hwm_core::config::ExtractionConfig;

use super::classification::{classify_content_type, ContentClassification};
use super::cleaning::clean_text;
use super::keywords::extract_keywords;
use super::license::extract_license_type;
use super::measurements::{extract_measurements, Measurement};
use super::processes::extract_manufacturing_processes;
use super::technical::is_technical_content;
use super::version::extract_version_from_text;

static TITLE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ ]{0,3}#{1,2}[ \t]+(.+?)[ \t#]*\r?$").expect("invalid title pattern")
});

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("invalid paragraph pattern"));

/// Stateless text extractor; holds only the limits it was configured with.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    max_keywords: usize,
    measurement_context_chars: usize,
    min_technical_terms: usize,
    min_description_length: usize,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_keywords: config.effective_max_keywords(),
            measurement_context_chars: config.effective_measurement_context_chars(),
            min_technical_terms: config.effective_min_technical_terms(),
            min_description_length: config.effective_min_description_length(),
        }
    }

    /// Configured keyword limit.
    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    pub fn clean_text(&self, text: &str) -> String {
        clean_text(text)
    }

    pub fn extract_license_type(&self, content: &str) -> Option<String> {
        extract_license_type(content).map(str::to_string)
    }

    pub fn extract_version_from_text(&self, text: &str) -> Option<String> {
        extract_version_from_text(text)
    }

    pub fn extract_manufacturing_processes(&self, text: &str) -> Vec<String> {
        extract_manufacturing_processes(text)
    }

    pub fn classify_content_type(&self, text: &str) -> ContentClassification {
        classify_content_type(text)
    }

    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        extract_keywords(text, max_keywords)
    }

    /// Measurements with the configured context width.
    pub fn extract_measurements(&self, text: &str) -> Vec<Measurement> {
        extract_measurements(text, self.measurement_context_chars)
    }

    /// Technical content test with the configured term threshold.
    pub fn is_technical_content(&self, text: &str) -> bool {
        is_technical_content(text, self.min_technical_terms)
    }

    /// Text of the first level-1 or level-2 markdown heading.
    pub fn extract_title(&self, markdown: &str) -> Option<String> {
        TITLE_HEADING
            .captures_iter(markdown)
            .filter_map(|caps| caps.get(1))
            .map(|m| clean_text(m.as_str()))
            .find(|title| !title.is_empty())
    }

    /// First prose paragraph long enough to describe the project.
    ///
    /// Headings, badge/image rows, code fences, tables, and lists are skipped.
    /// A heading line directly above prose is dropped and the prose kept.
    pub fn extract_description(&self, text: &str) -> Option<String> {
        PARAGRAPH_BREAK
            .split(text)
            .map(str::trim)
            .map(strip_leading_headings)
            .filter(|para| !para.is_empty() && !is_non_prose(para))
            .map(clean_text)
            .find(|para| para.chars().count() >= self.min_description_length)
    }
}

fn strip_leading_headings(paragraph: &str) -> &str {
    let mut rest = paragraph;
    loop {
        let trimmed = rest.trim_start();
        if !trimmed.starts_with('#') {
            return trimmed;
        }
        match trimmed.split_once('\n') {
            Some((_, tail)) => rest = tail,
            None => return "",
        }
    }
}

fn is_non_prose(paragraph: &str) -> bool {
    let first = paragraph.trim_start();
    first.starts_with('#')
        || first.starts_with("[![")
        || first.starts_with("![")
        || first.starts_with("```")
        || first.starts_with('|')
        || first.starts_with("- ")
        || first.starts_with("* ")
        || first.starts_with('<')
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "[![build](https://ci/badge.svg)](https://ci)\n\n\
        # **Open** Microscope\n\n\
        ## Overview\n\n\
        Short.\n\n\
        A low-cost microscope built from 3D printed parts and a webcam.\n";

    #[test]
    fn test_title_from_first_heading() {
        let extractor = TextExtractor::new();
        assert_eq!(extractor.extract_title(README).as_deref(), Some("Open Microscope"));
        assert_eq!(extractor.extract_title("no headings here"), None);
    }

    #[test]
    fn test_description_skips_badges_headings_and_short_lines() {
        let extractor = TextExtractor::new();
        assert_eq!(
            extractor.extract_description(README).as_deref(),
            Some("A low-cost microscope built from 3D printed parts and a webcam.")
        );
        assert_eq!(extractor.extract_description(""), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let extractor = TextExtractor::new();
        let text = "# Lamp\r\n\r\nShort.\r\n\r\nA small desk lamp with a printed shade and LED strip.\r\n";
        assert_eq!(extractor.extract_title(text).as_deref(), Some("Lamp"));
        assert_eq!(
            extractor.extract_description(text).as_deref(),
            Some("A small desk lamp with a printed shade and LED strip.")
        );
    }

    #[test]
    fn test_heading_directly_above_prose() {
        let extractor = TextExtractor::new();
        assert_eq!(
            extractor
                .extract_description("# Lamp\nA compact desk lamp with a printed shade.")
                .as_deref(),
            Some("A compact desk lamp with a printed shade.")
        );
        assert_eq!(
            extractor
                .extract_description("# Lamp\r\n## Overview\r\nA compact desk lamp with a printed shade.\r\n")
                .as_deref(),
            Some("A compact desk lamp with a printed shade.")
        );
        assert_eq!(extractor.extract_description("# Lamp\n## Overview"), None);
    }

    #[test]
    fn test_configured_limits_apply() {
        let config = ExtractionConfig {
            min_technical_terms: Some(1),
            measurement_context_chars: Some(0),
            ..Default::default()
        };
        let extractor = TextExtractor::from_config(&config);
        assert!(extractor.is_technical_content("one sensor"));
        assert_eq!(extractor.extract_measurements("a 5 mm bolt")[0].context, "5 mm");
    }
}
