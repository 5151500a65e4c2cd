//! Frequency-ranked keyword extraction.

use std::sync::LazyLock;

use regex::Regex;

use hwm_core::types::collections::{FxHashMap, FxHashSet};

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("invalid word pattern"));

static STOP_WORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her",
        "was", "one", "our", "out", "has", "have", "his", "how", "its", "may", "new", "now",
        "old", "see", "two", "way", "who", "did", "get", "let", "put", "say", "she", "too",
        "use", "used", "using", "this", "that", "with", "from", "they", "will", "would",
        "there", "their", "what", "about", "which", "when", "make", "made", "like", "into",
        "than", "then", "them", "these", "some", "could", "other", "more", "also", "been",
        "were", "each", "your", "only", "very", "just", "over", "such", "here", "should",
        "where", "while", "must", "does", "both", "between", "after", "before", "through",
        "being", "because", "under", "most", "same", "well", "first", "need", "needs",
    ]
    .into_iter()
    .collect()
});

/// The `max_keywords` most frequent non-stop-word words of three or more
/// ASCII letters. Words with digits or other letters attached are skipped.
/// Ties keep first-seen order.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    if max_keywords == 0 || text.trim().is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut first_seen: Vec<&str> = Vec::new();
    for word in WORD.find_iter(&lower).map(|m| m.as_str()) {
        if STOP_WORDS.contains(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen
        .into_iter()
        .take(max_keywords)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_by_frequency_then_first_seen() {
        let keywords = extract_keywords(
            "Frame frame motor. The frame holds the motor and a spindle.",
            3,
        );
        assert_eq!(keywords, vec!["frame", "motor", "holds"]);
    }

    #[test]
    fn test_short_words_and_stop_words_dropped() {
        let keywords = extract_keywords("an ox is at the gate with the bolt", 10);
        assert_eq!(keywords, vec!["gate", "bolt"]);
    }

    #[test]
    fn test_letter_runs_inside_words_are_not_keywords() {
        assert_eq!(
            extract_keywords("ESP32 board with ESP32 and ATmega328P chips", 3),
            vec!["board", "chips"]
        );
        assert_eq!(extract_keywords("café frame", 3), vec!["frame"]);
    }

    #[test]
    fn test_empty_and_zero_limit() {
        assert!(extract_keywords("", 5).is_empty());
        assert!(extract_keywords("stepper motor", 0).is_empty());
    }
}
