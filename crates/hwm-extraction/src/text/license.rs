//! License identification from free text.
//!
//! The table is ordered: the first matching entry wins, so more specific
//! licenses (LGPL, AGPL, CC BY-SA) sit before the families they overlap.

use std::sync::LazyLock;

use regex::Regex;

struct LicensePattern {
    id: &'static str,
    regex: Regex,
}

impl LicensePattern {
    fn new(id: &'static str, pattern: &str) -> Self {
        Self {
            id,
            regex: Regex::new(pattern).expect("invalid license pattern"),
        }
    }
}

/// Matched against lower-cased text.
static LICENSE_PATTERNS: LazyLock<Vec<LicensePattern>> = LazyLock::new(|| {
    vec![
        // Open hardware
        LicensePattern::new("CERN-OHL-S-2.0", r"cern[\s-]*ohl[\s-]*s\b|strongly reciprocal"),
        LicensePattern::new("CERN-OHL-W-2.0", r"cern[\s-]*ohl[\s-]*w\b|weakly reciprocal"),
        LicensePattern::new("CERN-OHL-P-2.0", r"cern[\s-]*ohl[\s-]*p\b|cern open hardware licen[cs]e.{0,20}permissive"),
        LicensePattern::new("CERN-OHL-1.2", r"cern[\s-]*ohl|cern open hardware licen[cs]e"),
        LicensePattern::new("TAPR-OHL-1.0", r"tapr[\s-]*ohl|tapr open hardware"),
        LicensePattern::new("SHL-2.1", r"solderpad"),
        // GNU
        LicensePattern::new("AGPL-3.0", r"\bagpl|affero general public"),
        LicensePattern::new("LGPL-3.0", r"\blgpl[\s-]*v?3|lesser general public license,? version 3"),
        LicensePattern::new("LGPL-2.1", r"\blgpl|lesser general public"),
        LicensePattern::new("GPL-3.0", r"\bgpl[\s-]*v?3|general public license,? (version|v) ?3"),
        LicensePattern::new("GPL-2.0", r"\bgpl[\s-]*v?2|general public license,? (version|v) ?2"),
        LicensePattern::new("GPL-3.0", r"\bgpl\b|gnu general public license"),
        // Permissive
        LicensePattern::new("MPL-2.0", r"mozilla public license|\bmpl[\s-]*2"),
        LicensePattern::new("Apache-2.0", r"apache license|apache[\s-]*2|apache software license"),
        LicensePattern::new("MIT", r"\bmit licen[cs]e|\bmit\b|permission is hereby granted, free of charge"),
        LicensePattern::new("BSD-3-Clause", r"bsd[\s-]*3|3-clause bsd|new bsd|modified bsd|neither the name of"),
        LicensePattern::new("BSD-2-Clause", r"bsd[\s-]*2|2-clause bsd|simplified bsd|freebsd license"),
        LicensePattern::new("BSD-3-Clause", r"\bbsd\b"),
        LicensePattern::new("ISC", r"\bisc licen[cs]e"),
        // Creative Commons
        LicensePattern::new("CC-BY-NC-SA-4.0", r"cc[\s-]*by[\s-]*nc[\s-]*sa|attribution-noncommercial-sharealike"),
        LicensePattern::new("CC-BY-NC-4.0", r"cc[\s-]*by[\s-]*nc|attribution-noncommercial"),
        LicensePattern::new("CC-BY-SA-4.0", r"cc[\s-]*by[\s-]*sa|attribution-sharealike"),
        LicensePattern::new("CC-BY-4.0", r"cc[\s-]*by\b|creative commons attribution"),
        LicensePattern::new("CC0-1.0", r"\bcc0\b|cc[\s-]*zero|public domain dedication"),
        // Public domain
        LicensePattern::new("Unlicense", r"\bthe unlicense\b|unlicense\.org|free and unencumbered software"),
    ]
});

static NO_LICENSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bno licen[cs]e\b|\bunlicensed\b|\bnot licensed\b|\bwithout (a )?licen[cs]e\b")
        .expect("invalid no-license pattern")
});

static PROPRIETARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bproprietary\b|all rights reserved").expect("invalid proprietary pattern")
});

/// Identify the license a text declares. `None` when nothing matches.
pub fn extract_license_type(content: &str) -> Option<&'static str> {
    if content.trim().is_empty() {
        return None;
    }
    let lower = content.to_lowercase();

    if let Some(pattern) = LICENSE_PATTERNS.iter().find(|p| p.regex.is_match(&lower)) {
        return Some(pattern.id);
    }
    if NO_LICENSE.is_match(&lower) {
        return Some("Unlicense");
    }
    if PROPRIETARY.is_match(&lower) {
        return Some("Proprietary");
    }
    None
}

/// Every identifier the table can produce, for scoring against.
pub fn known_license_ids() -> impl Iterator<Item = &'static str> {
    LICENSE_PATTERNS.iter().map(|p| p.id)
}
