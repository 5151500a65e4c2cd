//! ExtractionEngine: runs one record (or a batch) through the classifier,
//! the text extractor and the confidence aggregator.

use std::collections::BTreeMap;

use rayon::prelude::*;

use hwm_core::errors::EngineError;
use hwm_core::tracing::fields::{
    CONFIDENCE_RULE_COUNT, FIELD_COUNT, FILE_COUNT, KEPT_FILE_COUNT, LAYER_CONFIDENCE,
    PATTERN_RULE_COUNT,
};
use hwm_core::types::collections::FxHashSet;
use hwm_core::HwmConfig;

use super::record::{FieldQualityHints, RecordExtraction, RecordInput};
use crate::classifier::{FileClassifier, FileTypeCategory, PatternMatch};
use crate::confidence::ConfidenceAggregator;
use crate::text::processes::known_processes;
use crate::text::TextExtractor;
use crate::types::{FieldExtractionResult, FieldValue, FileRecord};

const README_EXTRACTION: &str = "readme_extraction";
const TEXT_PATTERN: &str = "text_pattern";
const KEYWORD_EXTRACTION: &str = "keyword_extraction";
const LICENSE_FILE_DETECTION: &str = "license_file_detection";

/// The three engine components, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    classifier: FileClassifier,
    text: TextExtractor,
    aggregator: ConfidenceAggregator,
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionEngine {
    /// Engine with built-in tables and default limits.
    pub fn new() -> Self {
        Self::from_parts(
            FileClassifier::new(),
            TextExtractor::new(),
            ConfidenceAggregator::new(),
        )
    }

    /// Engine with pattern files, limits and confidence overrides from
    /// configuration. Fails only when a configured pattern rule is invalid.
    pub fn from_config(config: &HwmConfig) -> Result<Self, EngineError> {
        let classifier = FileClassifier::from_config(&config.classifier)?;
        Ok(Self::from_parts(
            classifier,
            TextExtractor::from_config(&config.extraction),
            ConfidenceAggregator::from_config(&config.confidence),
        ))
    }

    pub fn from_parts(
        classifier: FileClassifier,
        text: TextExtractor,
        aggregator: ConfidenceAggregator,
    ) -> Self {
        tracing::info!(
            { PATTERN_RULE_COUNT } = classifier.rule_count(),
            { CONFIDENCE_RULE_COUNT } = aggregator.rule_count(),
            "extraction engine ready"
        );
        Self {
            classifier,
            text,
            aggregator,
        }
    }

    pub fn classifier(&self) -> &FileClassifier {
        &self.classifier
    }

    pub fn text_extractor(&self) -> &TextExtractor {
        &self.text
    }

    pub fn aggregator(&self) -> &ConfidenceAggregator {
        &self.aggregator
    }

    /// Extract and score every field the record's files support.
    pub fn process_record(&self, files: &[FileRecord], hints: &FieldQualityHints) -> RecordExtraction {
        let kept = self.classifier.filter_excluded_files(files);
        let grouped = self.classifier.match_file_patterns(kept.iter().copied());

        let mut candidates = Candidates::new(&self.aggregator, hints);

        for (field, matches) in &grouped {
            match field.as_str() {
                "license" => self.license_from_files(matches, &mut candidates),
                "version" => self.version_from_files(matches, &mut candidates),
                _ => Self::paths_from_matches(field, matches, &mut candidates),
            }
        }

        if let Some(readme) = Self::readme_text(&grouped, &kept, &self.classifier) {
            self.fields_from_readme(readme, &mut candidates);
        }

        self.fields_from_text_files(&kept, &mut candidates);

        let fields = candidates.into_fields();
        let layer_confidence = self.aggregator.calculate_layer_confidence(
            fields.iter().map(|(name, result)| (name, &result.confidence)),
        );

        tracing::debug!(
            { FILE_COUNT } = files.len(),
            { KEPT_FILE_COUNT } = kept.len(),
            { FIELD_COUNT } = fields.len(),
            { LAYER_CONFIDENCE } = layer_confidence,
            "processed record"
        );

        RecordExtraction {
            record_id: String::new(),
            fields,
            layer_confidence,
        }
    }

    /// Process records in parallel. Results are in input order.
    pub fn process_records(&self, records: &[RecordInput]) -> Vec<RecordExtraction> {
        records
            .par_iter()
            .map(|record| {
                let mut extraction = self.process_record(&record.files, &record.hints);
                extraction.record_id = record.record_id.clone();
                extraction
            })
            .collect()
    }

    fn license_from_files(&self, matches: &[PatternMatch<'_>], candidates: &mut Candidates<'_>) {
        let Some(content) = matches.iter().find_map(|m| m.file.text()) else {
            return;
        };
        if let Some(license) = self.text.extract_license_type(content) {
            candidates.offer("license", license.into(), LICENSE_FILE_DETECTION, 1.0);
        }
    }

    fn version_from_files(&self, matches: &[PatternMatch<'_>], candidates: &mut Candidates<'_>) {
        let found = matches.iter().find_map(|m| {
            let content = m.file.text()?;
            let version = self.text.extract_version_from_text(content)?;
            Some((version, m.rule.extraction_method.as_str()))
        });
        if let Some((version, method)) = found {
            candidates.offer("version", version.into(), method, 1.0);
        }
    }

    /// Value is the sorted, de-duplicated list of matched paths. Confidence
    /// is scaled by the strongest matching rule.
    fn paths_from_matches(field: &str, matches: &[PatternMatch<'_>], candidates: &mut Candidates<'_>) {
        let Some(best) = matches.iter().fold(None::<&PatternMatch<'_>>, |best, m| match best {
            Some(b) if b.rule.base_confidence >= m.rule.base_confidence => Some(b),
            _ => Some(m),
        }) else {
            return;
        };

        let mut paths: Vec<String> = matches.iter().map(|m| m.file.path.clone()).collect();
        paths.sort();
        paths.dedup();

        candidates.offer(
            field,
            FieldValue::List(paths),
            &best.rule.extraction_method,
            best.rule.base_confidence,
        );
    }

    /// First `readme` match with content, else the first Markdown file with content.
    fn readme_text<'a>(
        grouped: &BTreeMap<String, Vec<PatternMatch<'a>>>,
        kept: &[&'a FileRecord],
        classifier: &FileClassifier,
    ) -> Option<&'a str> {
        grouped
            .get("readme")
            .and_then(|matches| matches.iter().find_map(|m| m.file.text()))
            .or_else(|| {
                kept.iter()
                    .filter(|f| classifier.detect_file_type(&f.path) == FileTypeCategory::Markdown)
                    .find_map(|f| f.text())
            })
    }

    fn fields_from_readme(&self, readme: &str, candidates: &mut Candidates<'_>) {
        if let Some(title) = self.text.extract_title(readme) {
            candidates.offer("title", title.into(), README_EXTRACTION, 1.0);
        }
        if let Some(description) = self.text.extract_description(readme) {
            candidates.offer("description", description.into(), README_EXTRACTION, 1.0);
        }
        if let Some(license) = self.text.extract_license_type(readme) {
            candidates.offer("license", license.into(), TEXT_PATTERN, 1.0);
        }
        if let Some(version) = self.text.extract_version_from_text(readme) {
            candidates.offer("version", version.into(), TEXT_PATTERN, 1.0);
        }

        let cleaned = self.text.clean_text(readme);
        let keywords = self.text.extract_keywords(&cleaned, self.text.max_keywords());
        if !keywords.is_empty() {
            candidates.offer("keywords", keywords.into(), KEYWORD_EXTRACTION, 1.0);
        }
    }

    fn fields_from_text_files(&self, kept: &[&FileRecord], candidates: &mut Candidates<'_>) {
        let mut processes: FxHashSet<String> = FxHashSet::default();
        let mut seen_dimensions: FxHashSet<String> = FxHashSet::default();
        let mut dimensions = Vec::new();

        let texts = kept
            .iter()
            .filter(|f| self.classifier.is_text_file(&f.path))
            .filter_map(|f| f.text());

        for text in texts {
            processes.extend(self.text.extract_manufacturing_processes(text));
            for measurement in self.text.extract_measurements(text) {
                let dimension = format!("{} {}", measurement.value, measurement.unit);
                if seen_dimensions.insert(dimension.clone()) {
                    dimensions.push(dimension);
                }
            }
        }

        if !processes.is_empty() {
            let ordered: Vec<String> = known_processes()
                .filter(|name| processes.contains(*name))
                .map(str::to_string)
                .collect();
            candidates.offer("manufacturing_processes", ordered.into(), TEXT_PATTERN, 1.0);
        }
        if !dimensions.is_empty() {
            candidates.offer("dimensions", dimensions.into(), TEXT_PATTERN, 1.0);
        }
    }
}

/// Best-so-far candidate per field.
struct Candidates<'a> {
    aggregator: &'a ConfidenceAggregator,
    hints: &'a FieldQualityHints,
    fields: BTreeMap<String, FieldExtractionResult>,
}

impl<'a> Candidates<'a> {
    fn new(aggregator: &'a ConfidenceAggregator, hints: &'a FieldQualityHints) -> Self {
        Self {
            aggregator,
            hints,
            fields: BTreeMap::new(),
        }
    }

    /// Score a candidate and keep it if it beats the current one.
    /// Ties keep the earlier candidate.
    fn offer(&mut self, field: &str, value: FieldValue, source: &str, scale: f64) {
        let confidence = scale
            * self.aggregator.calculate_field_confidence(
                field,
                &value,
                source,
                self.hints.get(field),
            );

        if let Some(current) = self.fields.get(field) {
            if current.confidence >= confidence {
                return;
            }
        }

        self.fields.insert(
            field.to_string(),
            FieldExtractionResult {
                field: field.to_string(),
                value,
                source: source.to_string(),
                confidence,
            },
        );
    }

    fn into_fields(self) -> BTreeMap<String, FieldExtractionResult> {
        self.fields
    }
}
