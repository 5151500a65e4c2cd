use hwm_core::config::ExtractionConfig;
use hwm_extraction::text::{ComplexityLevel, ContentType};
use hwm_extraction::TextExtractor;

#[test]
fn license_detection_examples() {
    let text = TextExtractor::new();
    assert_eq!(
        text.extract_license_type("This project is licensed under the MIT License").as_deref(),
        Some("MIT")
    );
    assert_eq!(
        text.extract_license_type("All rights reserved, proprietary").as_deref(),
        Some("Proprietary")
    );
    assert_eq!(text.extract_license_type(""), None);
    assert_eq!(text.extract_license_type("Nothing to see here."), None);
}

#[test]
fn hardware_licenses_are_recognized() {
    let text = TextExtractor::new();
    assert_eq!(
        text.extract_license_type("CERN Open Hardware Licence Version 2 - Strongly Reciprocal")
            .as_deref(),
        Some("CERN-OHL-S-2.0")
    );
    assert_eq!(
        text.extract_license_type("Licensed under the Apache License, Version 2.0").as_deref(),
        Some("Apache-2.0")
    );
}

#[test]
fn version_extraction_examples() {
    let text = TextExtractor::new();
    assert_eq!(
        text.extract_version_from_text("Release version 2.3.1 is available").as_deref(),
        Some("2.3.1")
    );
    assert_eq!(
        text.extract_version_from_text("Upgrade from 1.2 to 1.2.3a today").as_deref(),
        Some("1.2.3a")
    );
    assert_eq!(text.extract_version_from_text("no numbers here"), None);
}

#[test]
fn every_mentioned_process_is_reported_in_table_order() {
    let text = TextExtractor::new();
    let processes = text.extract_manufacturing_processes(
        "Solder the PCB, then laser cut the front panel. The housing is 3D printed.",
    );
    assert_eq!(
        processes,
        vec!["3D Printing", "Laser Cutting", "PCB Fabrication", "Soldering"]
    );
    assert!(text.extract_manufacturing_processes("").is_empty());
}

#[test]
fn safety_text_is_classified() {
    let text = TextExtractor::new();
    let classification = text.classify_content_type(
        "Safety warning: wear goggles and gloves. Caution, hazard of injury.",
    );
    assert_eq!(classification.content_type, ContentType::SafetyInformation);
    assert_eq!(classification.complexity_level, ComplexityLevel::Intermediate);
    assert_eq!(classification.process_type, "general");
    assert!((classification.confidence - 0.35).abs() < 1e-9);
}

#[test]
fn empty_text_classifies_as_general() {
    let classification = TextExtractor::new().classify_content_type("");
    assert_eq!(classification.content_type, ContentType::General);
    assert_eq!(classification.confidence, 0.0);
}

#[test]
fn keywords_follow_frequency_then_first_seen() {
    let text = TextExtractor::new();
    let cleaned = text.clean_text("# Stepper stepper **motor** mount. Motor driver.");
    assert_eq!(
        text.extract_keywords(&cleaned, 3),
        vec!["stepper", "motor", "mount"]
    );
    assert!(text.extract_keywords(&cleaned, 0).is_empty());
}

#[test]
fn measurements_skip_words_that_start_with_a_unit() {
    let text = TextExtractor::new();
    let measurements = text.extract_measurements("Cut a 2.5 cm strip and wait 10 minutes");
    assert_eq!(measurements.len(), 1);
    assert_eq!(measurements[0].value, 2.5);
    assert_eq!(measurements[0].unit, "cm");
    assert!(measurements[0].context.contains("2.5 cm"));
}

#[test]
fn technical_content_threshold_is_configurable() {
    let text = "The sensor board needs firmware.";
    assert!(!TextExtractor::new().is_technical_content(text));

    let lenient = TextExtractor::from_config(&ExtractionConfig {
        min_technical_terms: Some(2),
        ..Default::default()
    });
    assert!(lenient.is_technical_content(text));
}

#[test]
fn extraction_is_deterministic() {
    let text = TextExtractor::new();
    let input = "# Frame\n\nThe 3D printed frame is 200 mm wide. Licensed MIT. Version 0.4.1.";
    assert_eq!(text.extract_keywords(input, 5), text.extract_keywords(input, 5));
    assert_eq!(text.extract_measurements(input), text.extract_measurements(input));
    assert_eq!(text.classify_content_type(input), text.classify_content_type(input));
}
