//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files, CI environment inputs and CLI arguments.

pub mod env;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{files, http_status, output_formats, strategies, timeouts};
use crate::core::error::{LinkCheckError, Result};
use crate::extraction::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Timeout in seconds for HTTP requests
    pub timeout: Option<u64>,

    /// Maximum number of requests in flight
    pub threads: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Treat 403 Forbidden as ignored instead of broken
    pub ignore_403: Option<bool>,

    /// Further HTTP status codes treated as ignored
    pub ignored_status_codes: Option<Vec<u16>>,

    /// URL patterns to skip (regex)
    pub exclude_patterns: Option<Vec<String>>,

    /// Extraction strategy (render, regex)
    pub strategy: Option<String>,

    /// Check URLs in the order they first appear
    pub keep_order: Option<bool>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            threads: None, // Will default to CPU core count
            user_agent: None,
            ignore_403: Some(false),
            ignored_status_codes: None,
            exclude_patterns: None,
            strategy: Some(strategies::DEFAULT.to_string()),
            keep_order: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinkCheckError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LinkCheckError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// First `.mdlinkcheck.toml` found in `start` or one of its parents
    /// (up to three levels up).
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .take(files::CONFIG_SEARCH_DEPTH + 1)
            .map(|dir| dir.join(files::CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the config file found from the current directory, falling back
    /// to defaults when there is none. A file that exists but is invalid is
    /// an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match Self::find_config_file(&cwd) {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(threads) = cli_config.threads {
            self.threads = Some(threads);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }

        if cli_config.ignore_403 {
            self.ignore_403 = Some(true);
        }
        if let Some(ref codes) = cli_config.ignored_status_codes {
            self.ignored_status_codes = Some(codes.clone());
        }
        if let Some(ref exclude_patterns) = cli_config.exclude_patterns {
            self.exclude_patterns = Some(exclude_patterns.clone());
        }

        if let Some(ref strategy) = cli_config.strategy {
            self.strategy = Some(strategy.clone());
        }
        if cli_config.keep_order {
            self.keep_order = Some(true);
        }

        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Compile exclude patterns into regex objects
    pub fn compile_exclude_patterns(&self) -> Result<Vec<Regex>> {
        let mut compiled = Vec::new();
        if let Some(ref patterns) = self.exclude_patterns {
            for pattern in patterns {
                compiled.push(Regex::new(pattern)?);
            }
        }
        Ok(compiled)
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Requests in flight, defaulting to the number of CPUs
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn user_agent_or_default(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Every status code treated as ignored, sorted, 403 included when
    /// `ignore_403` is set.
    pub fn ignored_status_codes_set(&self) -> Vec<u16> {
        let mut codes = self.ignored_status_codes.clone().unwrap_or_default();
        if self.ignore_403.unwrap_or(false) {
            codes.push(http_status::FORBIDDEN);
        }
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    /// Configured strategy; unknown names fall back to the default and are
    /// rejected earlier by [`Config::validate`].
    pub fn strategy_or_default(&self) -> Strategy {
        self.strategy
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    pub fn output_format_or_default(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(LinkCheckError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(LinkCheckError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(LinkCheckError::Config(
                    "Thread count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if threads > 1000 {
                return Err(LinkCheckError::Config(format!(
                    "Thread count of {threads} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref codes) = self.ignored_status_codes {
            for &code in codes {
                if !(http_status::MIN_VALID..=http_status::MAX_VALID).contains(&code) {
                    return Err(LinkCheckError::Config(format!(
                        "Status code {code} is not a valid HTTP status code. Expected a number between 100-599."
                    )));
                }
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(LinkCheckError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref strategy) = self.strategy {
            strategy
                .parse::<Strategy>()
                .map_err(|e| LinkCheckError::Config(e.to_string()))?;
        }

        // Validate exclude patterns by trying to compile them
        self.compile_exclude_patterns()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,                   // --timeout
    pub threads: Option<usize>,                 // --concurrency
    pub user_agent: Option<String>,             // --user-agent
    pub ignore_403: bool,                       // --ignore-403
    pub ignored_status_codes: Option<Vec<u16>>, // --ignore-status
    pub exclude_patterns: Option<Vec<String>>,  // --exclude-pattern
    pub strategy: Option<String>,               // --strategy
    pub keep_order: bool,                       // --keep-order

    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
