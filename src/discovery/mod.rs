//! Document discovery
//!
//! This module walks the input roots for Markdown files, loads them and
//! extracts their URLs.

pub mod finder;
pub mod path_utils;

// Re-export commonly used items
pub use finder::{DocumentUrls, Finder, UrlFinder};
pub use path_utils::expand_paths;
