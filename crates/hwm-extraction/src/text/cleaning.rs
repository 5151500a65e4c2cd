//! Markdown/HTML stripping and whitespace normalization.

use std::sync::LazyLock;

use regex::Regex;

struct Rewrite {
    regex: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("invalid cleaning pattern"),
            replacement,
        }
    }
}

/// Applied in order; later rewrites see the output of earlier ones.
static REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        // Fenced code markers (content kept)
        Rewrite::new(r"(?m)^\s*```[^\n]*$", " "),
        // HTML tags
        Rewrite::new(r"<[^>]+>", " "),
        // Images, then links: keep the label
        Rewrite::new(r"!\[([^\]]*)\]\([^)]*\)", "$1"),
        Rewrite::new(r"\[([^\]]*)\]\([^)]*\)", "$1"),
        // Headers
        Rewrite::new(r"(?m)^[ \t]*#{1,6}[ \t]*", ""),
        // Bold / italic / inline code
        Rewrite::new(r"\*\*([^*]+)\*\*", "$1"),
        Rewrite::new(r"__([^_]+)__", "$1"),
        Rewrite::new(r"`([^`]*)`", "$1"),
        // Punctuation runs
        Rewrite::new(r"\.{2,}", "."),
        Rewrite::new(r"!{2,}", "!"),
        Rewrite::new(r"\?{2,}", "?"),
        // Whitespace
        Rewrite::new(r"\s+", " "),
    ]
});

/// Strip markup and normalize whitespace and punctuation runs.
pub fn clean_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut cleaned = text.to_string();
    for rewrite in REWRITES.iter() {
        cleaned = rewrite
            .regex
            .replace_all(&cleaned, rewrite.replacement)
            .into_owned();
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markdown() {
        let cleaned = clean_text("# Title\n\nSome **bold** and `code` with [a link](https://x.org).");
        assert_eq!(cleaned, "Title Some bold and code with a link.");
    }

    #[test]
    fn test_strips_html_and_punctuation_runs() {
        let cleaned = clean_text("<p>Wait...</p> <b>really!!</b> why??");
        assert_eq!(cleaned, "Wait. really! why?");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t"), "");
    }
}
