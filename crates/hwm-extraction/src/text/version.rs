//! Version string extraction.
//!
//! Patterns are tried in order; the first pattern that matches anywhere
//! decides, and among its matches the longest version string wins (the
//! earliest on equal length).

use std::sync::LazyLock;

use regex::Regex;

/// Matched against lower-cased text. Group 1 is the version.
static VERSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Pre-release semantic versions: 1.2.3-beta.1, 1.2.3rc2, 1.2.3a
        r"\bv?(\d+\.\d+\.\d+[-.]?(?:alpha|beta|rc|a|b)\.?\d*)\b",
        // Semantic versions: 1.2.3
        r"\bv?(\d+\.\d+\.\d+)\b",
        // Explicit labels: version 1.2, version: 3
        r"\bversion\s*:?\s*v?(\d+(?:\.\d+)*)\b",
        // Release labels: release 1.2
        r"\brelease\s*:?\s*v?(\d+\.\d+(?:\.\d+)?)\b",
        // Bare two-part versions: 1.2, v1.2
        r"\bv?(\d+\.\d+)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid version pattern"))
    .collect()
});

/// Find the most specific version string in `text`.
pub fn extract_version_from_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let lower = text.to_lowercase();

    for pattern in VERSION_PATTERNS.iter() {
        let best = pattern
            .captures_iter(&lower)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .fold(None::<&str>, |best, candidate| match best {
                Some(current) if current.len() >= candidate.len() => Some(current),
                _ => Some(candidate),
            });
        if let Some(version) = best {
            return Some(version.to_string());
        }
    }
    None
}
