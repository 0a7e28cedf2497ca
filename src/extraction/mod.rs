//! URL extraction and deduplication
//!
//! This module finds every link reference of a Markdown document, repairs
//! candidates that swallowed a closing parenthesis and produces the
//! duplicate-free list of targets to check.

pub mod dedup;
pub mod extractor;
pub mod flatten;
pub mod patterns;
pub mod render;
pub mod resolver;

// Re-export commonly used items
pub use dedup::{UrlSet, uniquify};
pub use extractor::{ExtractUrls, RegexExtractor, RenderExtractor, Strategy, extractor_for};
pub use flatten::MatchToken;
pub use render::{RenderOptions, render};
pub use resolver::resolve_trailing_parens;
