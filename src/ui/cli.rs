// Command-line interface definitions and parsing for mdlinkcheck

use crate::config::CliConfig;
use crate::core::constants::{output_formats, strategies};
use crate::core::error::{LinkCheckError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markdown files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    // Core Options
    /// Request timeout in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Concurrent requests (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    // Filtering
    /// Treat 403 Forbidden as ignored
    #[arg(long = "ignore-403", help_heading = "Filtering")]
    pub ignore_403: bool,

    /// Status codes to ignore (comma-separated)
    #[arg(long, value_name = "CODES", help_heading = "Filtering")]
    pub ignore_status: Option<String>,

    /// URL patterns to skip (regex, repeatable)
    #[arg(long, value_name = "REGEX", help_heading = "Filtering")]
    pub exclude_pattern: Vec<String>,

    // Extraction
    /// How links are found in Markdown
    #[arg(long, value_name = "STRATEGY", value_parser = strategies::ALL, help_heading = "Extraction")]
    pub strategy: Option<String>,

    /// Check links in the order they first appear
    #[arg(long, help_heading = "Extraction")]
    pub keep_order: bool,

    /// Print the extracted URLs without checking them
    #[arg(long, help_heading = "Extraction")]
    pub list_only: bool,

    // Output & Verbosity
    /// Only print failing links and the metrics
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Comma-separated status codes; blanks are skipped.
fn parse_status_codes(value: &str) -> Result<Vec<u16>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u16>().map_err(|_| {
                LinkCheckError::InvalidArgument(format!(
                    "Status code '{s}' is not a valid HTTP status code. Expected a number between 100-599."
                ))
            })
        })
        .collect()
}

/// Convert parsed arguments into the CLI layer of the configuration
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    let ignored_status_codes = cli
        .ignore_status
        .as_deref()
        .map(parse_status_codes)
        .transpose()?;

    Ok(CliConfig {
        timeout: cli.timeout,
        threads: cli.concurrency,
        user_agent: cli.user_agent.clone(),
        ignore_403: cli.ignore_403,
        ignored_status_codes,
        exclude_patterns: (!cli.exclude_pattern.is_empty()).then(|| cli.exclude_pattern.clone()),
        strategy: cli.strategy.clone(),
        keep_order: cli.keep_order,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    })
}
