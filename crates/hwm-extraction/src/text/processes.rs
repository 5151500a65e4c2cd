//! Manufacturing process detection.
//!
//! Unlike license detection, every matching process is reported.

use std::sync::LazyLock;

use regex::Regex;

struct ProcessPattern {
    name: &'static str,
    regex: Regex,
}

/// Matched against lower-cased text, in this order.
static PROCESS_PATTERNS: LazyLock<Vec<ProcessPattern>> = LazyLock::new(|| {
    [
        ("3D Printing", r"3d[\s-]?print|additive manufacturing|\bfdm\b|\bsla\b|\bsls\b|fused (deposition|filament)"),
        ("CNC Machining", r"\bcnc\b|\bmachin(ed|ing)\b|\bmill(ed|ing)\b|\blathe\b"),
        ("Laser Cutting", r"laser[\s-]?(cut|engrav)"),
        ("PCB Fabrication", r"\bpcbs?\b|printed circuit board|gerber"),
        ("Soldering", r"\bsolder"),
        ("Injection Molding", r"injection[\s-]?mou?ld"),
        ("Sheet Metal", r"sheet[\s-]?metal|\bpress[\s-]?brake\b"),
        ("Welding", r"\bweld"),
        ("Casting", r"\bcasting\b|die[\s-]?cast|sand[\s-]?cast|resin[\s-]?cast"),
        ("Woodworking", r"woodwork|\bplywood\b|\bjoinery\b"),
        ("Sewing", r"\bsew(n|ing)?\b|\btextile"),
        ("Assembly", r"\bassembl(y|e|ed|ing)\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| ProcessPattern {
        name,
        regex: Regex::new(pattern).expect("invalid process pattern"),
    })
    .collect()
});

/// Every process mentioned in `text`, in table order, without duplicates.
pub fn extract_manufacturing_processes(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    PROCESS_PATTERNS
        .iter()
        .filter(|p| p.regex.is_match(&lower))
        .map(|p| p.name.to_string())
        .collect()
}

/// Names of every process the table knows, in table order.
pub fn known_processes() -> impl Iterator<Item = &'static str> {
    PROCESS_PATTERNS.iter().map(|p| p.name)
}
