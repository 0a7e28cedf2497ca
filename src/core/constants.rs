/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - per-file listing with emojis and a metrics block
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - failing links and totals only
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Extraction strategy names
pub mod strategies {
    /// Render Markdown to HTML and collect anchor targets
    pub const RENDER: &str = "render";
    /// Run the link patterns directly on the raw Markdown
    pub const REGEX: &str = "regex";

    pub const DEFAULT: &str = RENDER;

    pub const ALL: [&str; 2] = [RENDER, REGEX];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status counted as healthy
    pub const OK: u16 = 200;
    /// HTTP 403 Forbidden - ignorable through `ignore_403`
    pub const FORBIDDEN: u16 = 403;
    /// Lowest valid status code
    pub const MIN_VALID: u16 = 100;
    /// Highest valid status code
    pub const MAX_VALID: u16 = 599;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Maximum accepted timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86400;
    /// Redirects followed before giving up
    pub const MAX_REDIRECTS: usize = 10;
}

/// File discovery constants
pub mod files {
    /// Extension of the documents that are scanned
    pub const MARKDOWN_EXTENSION: &str = "md";
    /// Name of the configuration file looked up in standard locations
    pub const CONFIG_FILE_NAME: &str = ".mdlinkcheck.toml";
    /// How many parent directories are searched for the configuration file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// CI environment variables
pub mod env_vars {
    /// Prefix for action inputs (`INPUT_<NAME>`)
    pub const INPUT_PREFIX: &str = "INPUT_";
    /// `owner/name` of the repository being checked
    pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
    /// Checkout directory of the repository being checked
    pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for a healthy link
    pub const OK_EMOJI: &str = "✅";
    /// Emoji for a broken link
    pub const NOT_OK_EMOJI: &str = "❌";
    /// Emoji for an ignored link
    pub const IGNORED_EMOJI: &str = "⚠️";
    /// Emoji for the metrics block
    pub const METRICS_EMOJI: &str = "🧮";
    /// Separator between status and URL
    pub const SEPARATOR: &str = "·";
    /// Indentation used in the metrics breakdown
    pub const TAB: &str = "    ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_strategy_constants() {
        assert_eq!(strategies::DEFAULT, strategies::RENDER);
        assert!(strategies::ALL.contains(&"regex"));
    }

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::OK, 200);
        assert_eq!(http_status::FORBIDDEN, 403);
        assert!(http_status::MIN_VALID < http_status::MAX_VALID);
    }
}
