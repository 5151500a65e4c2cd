//! File classification: extension categories, filename pattern rules,
//! and excluded-directory filtering. Works on paths only, never on content.

pub mod category;
pub mod exclusions;
pub mod file_classifier;
pub mod rules;

pub use category::FileTypeCategory;
pub use exclusions::DEFAULT_EXCLUDED_DIRS;
pub use file_classifier::{FileClassifier, PatternMatch};
pub use rules::{PatternRule, PatternRuleLoader};
