//! User interface
//!
//! This module contains CLI parsing, terminal colors and the rendering
//! of results.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::display_results;
