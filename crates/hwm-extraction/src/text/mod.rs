//! Text extraction: cleaning raw text and pulling candidate values for
//! manifest fields out of it.
//!
//! Every operation is total: empty input yields an empty or neutral result,
//! never an error. License, version, and process detection run on raw text;
//! keyword extraction expects cleaned text.

pub mod classification;
pub mod cleaning;
pub mod keywords;
pub mod license;
pub mod measurements;
pub mod processes;
pub mod technical;
pub mod text_extractor;
pub mod version;

pub use classification::{ComplexityLevel, ContentClassification, ContentType};
pub use measurements::Measurement;
pub use text_extractor::TextExtractor;
