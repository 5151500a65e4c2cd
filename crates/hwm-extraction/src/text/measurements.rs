//! Physical measurement extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A number with a length or angle unit, plus surrounding text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    /// Unit as written, lower-cased.
    pub unit: String,
    pub context: String,
}

/// Longer unit spellings come first so `inches` is not read as `in`.
static MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mm|cm|inches|inch|in|feet|ft|degrees|deg|°|m)")
        .expect("invalid measurement pattern")
});

/// Every measurement in `text`, in document order, with `context_chars`
/// characters of context on each side.
pub fn extract_measurements(text: &str, context_chars: usize) -> Vec<Measurement> {
    let mut measurements = Vec::new();
    for caps in MEASUREMENT.captures_iter(text) {
        let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        // "10 minutes" is not "10 m".
        let unit_is_word = unit.as_str().chars().all(char::is_alphabetic);
        let followed_by_letter = text[whole.end()..]
            .chars()
            .next()
            .is_some_and(char::is_alphabetic);
        if unit_is_word && followed_by_letter {
            continue;
        }

        let Ok(value) = number.as_str().parse::<f64>() else {
            continue;
        };

        measurements.push(Measurement {
            value,
            unit: unit.as_str().to_lowercase(),
            context: context_window(text, whole.start(), whole.end(), context_chars),
        });
    }
    measurements
}

/// Up to `chars` characters either side of `[start, end)`, on char boundaries.
fn context_window(text: &str, start: usize, end: usize, chars: usize) -> String {
    let from = match chars {
        0 => start,
        n => text[..start]
            .char_indices()
            .rev()
            .nth(n - 1)
            .map_or(0, |(idx, _)| idx),
    };
    let to = text[end..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| end + idx);
    text[from..to].trim().to_string()
}
