//! Technical vocabulary detection.

use std::sync::LazyLock;

use regex::Regex;

use hwm_core::types::collections::FxHashSet;

const TECHNICAL_TERMS: &[&str] = &[
    "specification", "tolerance", "dimension", "dimensions", "material", "assembly",
    "component", "voltage", "current", "torque", "firmware", "schematic", "pcb", "cad",
    "bearing", "actuator", "sensor", "microcontroller", "calibration", "resolution",
    "stepper", "mm", "stl", "gcode", "extrusion", "nozzle", "enclosure", "fastener",
    "bom", "rpm",
];

static TECHNICAL_TERM: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = TECHNICAL_TERMS.join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("invalid technical term pattern")
});

/// Number of distinct technical terms in `text`.
pub fn count_technical_terms(text: &str) -> usize {
    let lower = text.to_lowercase();
    TECHNICAL_TERM
        .find_iter(&lower)
        .map(|m| m.as_str())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Whether `text` uses at least `min_terms` distinct technical terms.
pub fn is_technical_content(text: &str, min_terms: usize) -> bool {
    count_technical_terms(text) >= min_terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_terms_counted_once() {
        assert_eq!(count_technical_terms("sensor sensor SENSOR"), 1);
        assert_eq!(count_technical_terms("The PCB carries a sensor and a stepper driver."), 3);
    }

    #[test]
    fn test_whole_words_only() {
        // "comment" must not count as "mm", nor "incurrent" as "current".
        assert_eq!(count_technical_terms("a comment on incurrent ideas"), 0);
    }

    #[test]
    fn test_threshold() {
        assert!(is_technical_content("Set the torque and check the bearing tolerance.", 3));
        assert!(!is_technical_content("A nice lamp for the desk.", 3));
        assert!(!is_technical_content("", 3));
    }
}
