//! URL validation logic
//!
//! This module issues the HTTP requests for extracted URLs and classifies
//! the responses.

pub mod validator;

// Re-export commonly used items
pub use validator::{CheckLinks, LinkCheckResult, LinkStatus, Validator, classify};
