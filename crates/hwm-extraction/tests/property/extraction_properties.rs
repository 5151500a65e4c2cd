use std::collections::BTreeMap;

use hwm_extraction::{
    ConfidenceAggregator, ContentQuality, ExtractionEngine, FieldQualityHints, FieldValue,
    FileClassifier, FileRecord, TextExtractor,
};
use proptest::prelude::*;

const FIELDS: &[&str] = &[
    "title", "description", "version", "license", "materials", "tools", "keywords", "bom",
    "unknown_field",
];

const SOURCES: &[&str] = &[
    "user_input", "github_api", "direct_mapping", "readme_extraction", "text_pattern",
    "file_pattern", "fallback", "never_seen",
];

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Bool),
        (-1.0e6..1.0e6f64).prop_map(FieldValue::Number),
        ".{0,120}".prop_map(FieldValue::Text),
        prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 0..5).prop_map(FieldValue::List),
    ]
}

fn content_quality() -> impl Strategy<Value = Option<ContentQuality>> {
    prop::option::of(
        prop::collection::btree_map(
            prop::sample::select(vec!["length_short", "from_bom", "explicit_process_section"]),
            any::<bool>(),
            0..3,
        )
        .prop_map(|hints| {
            hints
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect::<ContentQuality>()
        }),
    )
}

proptest! {
    #[test]
    fn field_confidence_is_bounded(
        field in prop::sample::select(FIELDS),
        source in prop::sample::select(SOURCES),
        value in field_value(),
        quality in content_quality(),
    ) {
        let agg = ConfidenceAggregator::new();
        let confidence = agg.calculate_field_confidence(field, &value, source, quality.as_ref());
        prop_assert!((0.0..=1.0).contains(&confidence), "{} out of range", confidence);
    }

    #[test]
    fn trusted_source_never_scores_below_fallback(
        field in prop::sample::select(FIELDS),
        value in field_value(),
        quality in content_quality(),
    ) {
        let agg = ConfidenceAggregator::new();
        let trusted = agg.calculate_field_confidence(field, &value, "user_input", quality.as_ref());
        let fallback = agg.calculate_field_confidence(field, &value, "fallback", quality.as_ref());
        prop_assert!(trusted >= fallback, "{} < {}", trusted, fallback);
    }

    #[test]
    fn layer_confidence_is_bounded(
        scores in prop::collection::btree_map(
            prop::sample::select(FIELDS).prop_map(str::to_string),
            prop::num::f64::ANY,
            0..8,
        ),
    ) {
        let agg = ConfidenceAggregator::new();
        let layer = agg.calculate_layer_confidence(&scores);
        prop_assert!((0.0..=1.0).contains(&layer));
        let normalized: BTreeMap<String, f64> = agg.normalize_confidence_scores(&scores);
        prop_assert!(normalized.values().all(|v| agg.validate_confidence_score(*v)));
    }

    #[test]
    fn text_extraction_is_deterministic(text in ".{0,300}") {
        let extractor = TextExtractor::new();
        prop_assert_eq!(extractor.clean_text(&text), extractor.clean_text(&text));
        prop_assert_eq!(extractor.extract_license_type(&text), extractor.extract_license_type(&text));
        prop_assert_eq!(
            extractor.extract_version_from_text(&text),
            extractor.extract_version_from_text(&text)
        );
        prop_assert_eq!(extractor.extract_keywords(&text, 10), extractor.extract_keywords(&text, 10));
        prop_assert_eq!(extractor.extract_measurements(&text), extractor.extract_measurements(&text));
    }

    #[test]
    fn keyword_count_respects_limit(text in "[a-z ]{0,400}", max in 0usize..15) {
        let keywords = TextExtractor::new().extract_keywords(&text, max);
        prop_assert!(keywords.len() <= max);
    }

    #[test]
    fn exclusion_never_grows_the_file_list(
        paths in prop::collection::vec("[a-zA-Z_./]{1,30}", 0..20),
    ) {
        let classifier = FileClassifier::new();
        let files: Vec<FileRecord> = paths.into_iter().map(FileRecord::new).collect();
        let kept = classifier.filter_excluded_files(&files);
        prop_assert!(kept.len() <= files.len());
        prop_assert!(kept.iter().all(|f| !classifier.is_excluded(&f.path)));
    }

    #[test]
    fn record_processing_is_bounded_and_deterministic(
        readme in ".{0,200}",
        notes in ".{0,200}",
    ) {
        let engine = ExtractionEngine::new();
        let files = vec![
            FileRecord::with_content("README.md", readme),
            FileRecord::with_content("docs/notes.txt", notes),
        ];
        let first = engine.process_record(&files, &FieldQualityHints::new());
        let second = engine.process_record(&files, &FieldQualityHints::new());
        prop_assert!((0.0..=1.0).contains(&first.layer_confidence));
        prop_assert!(first.fields.values().all(|r| (0.0..=1.0).contains(&r.confidence)));
        prop_assert_eq!(first, second);
    }
}
