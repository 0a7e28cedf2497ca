//! CI inputs and context from environment variables
//!
//! Action inputs arrive as `INPUT_<NAME>` where the name is upper-cased and
//! spaces and dashes become underscores, so `ignore-403` is read from
//! `INPUT_IGNORE_403`.

use std::str::FromStr;

use super::Config;
use crate::core::constants::env_vars;
use crate::core::error::{LinkCheckError, Result};

/// Environment variable holding the input `name`.
pub fn input_var_name(name: &str) -> String {
    format!(
        "{}{}",
        env_vars::INPUT_PREFIX,
        name.trim().replace([' ', '-'], "_").to_uppercase()
    )
}

/// Parse a boolean input. Accepts `true/t/yes/y/1` and `false/f/no/n/0` in
/// any case.
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "0" => Ok(false),
        other => Err(LinkCheckError::Config(format!(
            "Invalid boolean '{other}' for input '{name}'. Expected one of: true, t, yes, y, 1, false, f, no, n, 0."
        ))),
    }
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        LinkCheckError::Config(format!(
            "Invalid number '{}' for input '{name}'.",
            value.trim()
        ))
    })
}

/// Comma- or newline-separated list, blanks dropped.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Overlay the `INPUT_*` variables of the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_inputs(|var| std::env::var(var).ok())
    }

    /// Overlay inputs obtained through `lookup`, which receives the full
    /// variable name. Empty values count as unset.
    pub fn apply_inputs<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| lookup(&input_var_name(name)).filter(|v| !v.trim().is_empty());

        if let Some(value) = input("ignore-403") {
            self.ignore_403 = Some(parse_bool("ignore-403", &value)?);
        }
        if let Some(value) = input("keep-order") {
            self.keep_order = Some(parse_bool("keep-order", &value)?);
        }
        if let Some(value) = input("verbose") {
            self.verbose = Some(parse_bool("verbose", &value)?);
        }
        if let Some(value) = input("timeout") {
            self.timeout = Some(parse_number("timeout", &value)?);
        }
        if let Some(value) = input("concurrency") {
            self.threads = Some(parse_number("concurrency", &value)?);
        }
        if let Some(value) = input("ignore-status") {
            let codes = parse_list(&value)
                .iter()
                .map(|code| parse_number("ignore-status", code))
                .collect::<Result<Vec<u16>>>()?;
            self.ignored_status_codes = Some(codes);
        }
        if let Some(value) = input("exclude-pattern") {
            self.exclude_patterns = Some(parse_list(&value));
        }
        if let Some(value) = input("strategy") {
            self.strategy = Some(value.trim().to_string());
        }
        if let Some(value) = input("format") {
            self.output_format = Some(value.trim().to_string());
        }
        if let Some(value) = input("user-agent") {
            self.user_agent = Some(value.trim().to_string());
        }

        Ok(())
    }
}

/// Repository checkout information provided by the CI runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubContext {
    pub workspace: Option<String>,
    pub repository: Option<String>,
}

impl GithubContext {
    pub fn from_env() -> Self {
        Self {
            workspace: std::env::var(env_vars::GITHUB_WORKSPACE).ok(),
            repository: std::env::var(env_vars::GITHUB_REPOSITORY).ok(),
        }
    }
}
