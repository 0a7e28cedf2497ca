use crate::config::Config;
use crate::reporting::summary::LinkTally;
use crate::validation::{LinkCheckResult, LinkStatus};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    };

    // A second initialisation (tests, embedding) keeps the first logger.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective configuration
pub fn log_config_info(config: &Config, actual_threads: usize) {
    info!(
        "Configuration: threads={actual_threads}, timeout={}s, strategy={}, keep_order={}",
        config.timeout_duration().as_secs(),
        config.strategy_or_default(),
        config.keep_order.unwrap_or(false)
    );
    info!(
        "Ignored status codes: {:?}",
        config.ignored_status_codes_set()
    );
}

/// Log the documents about to be processed
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Processing {file_count} Markdown file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log how many URLs a document yielded
pub fn log_url_discovery(path: &Path, url_count: usize) {
    info!("Found {url_count} unique URL(s) in {}", path.display());
}

pub fn log_validation_start(url_count: usize) {
    info!("Starting validation of {url_count} URL(s)");
}

/// Summarise a finished run at info level, or at warn level when links are broken
pub fn log_validation_complete(tally: &LinkTally, duration_ms: u128) {
    let total = tally.total();
    if tally.has_failures() {
        warn!(
            "Validation complete: {} of {total} link(s) broken, {} ignored ({duration_ms}ms)",
            tally.not_ok, tally.ignored
        );
    } else {
        info!(
            "Validation complete: {} of {total} link(s) ok, {} ignored ({duration_ms}ms)",
            tally.ok, tally.ignored
        );
    }
}

/// Per-link outcome, only visible with `--verbose`
pub fn log_url_result(result: &LinkCheckResult) {
    let outcome = result.outcome();
    match (result.status, result.description.as_deref()) {
        (LinkStatus::Ok, _) => debug!("ok {} -> {outcome}", result.url),
        (LinkStatus::Ignored, _) => debug!("ignored {} -> {outcome}", result.url),
        (LinkStatus::NotOk, Some(desc)) => debug!("broken {} -> {outcome} ({desc})", result.url),
        (LinkStatus::NotOk, None) => debug!("broken {} -> {outcome}", result.url),
    }
}

pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

pub fn log_warning(message: &str) {
    warn!("{message}");
}
