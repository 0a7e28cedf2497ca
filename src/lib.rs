//! Check the links of Markdown documents.
//!
//! Documents are discovered under the given roots, their URLs extracted
//! (explicit Markdown links and bare URLs alike), repaired where Markdown's
//! closing parenthesis was swallowed, deduplicated and finally requested
//! over HTTP. Only a `200` answer counts as healthy.

pub mod config;
pub mod core;
pub mod discovery;
pub mod extraction;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use crate::core::{LinkCheckError, MarkdownDocument, Result};
pub use config::Config;
pub use extraction::{ExtractUrls, Strategy, UrlSet};
pub use reporting::{DocumentReport, LinkTally};
pub use validation::{CheckLinks, LinkCheckResult, LinkStatus, Validator};
