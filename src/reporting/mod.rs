//! Reporting
//!
//! This module holds the run totals with their percentage breakdown and
//! the structured logging helpers.

pub mod logging;
pub mod summary;

// Re-export commonly used items
pub use summary::{DocumentReport, LinkTally, get_percentage};
