use clap::Parser;
use mdlinkcheck::config::env::GithubContext;
use mdlinkcheck::config::{CliConfig, Config};
use mdlinkcheck::core::constants::output_formats;
use mdlinkcheck::discovery::path_utils::expand_paths;
use mdlinkcheck::discovery::{DocumentUrls, Finder, UrlFinder};
use mdlinkcheck::reporting::logging;
use mdlinkcheck::reporting::{DocumentReport, LinkTally};
use mdlinkcheck::ui::output;
use mdlinkcheck::ui::{Cli, cli_to_config};
use mdlinkcheck::validation::{CheckLinks, Validator};

use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_mdlinkcheck_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main link checking logic extracted from main() for testing
pub async fn run_mdlinkcheck_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config, config.thread_count());

    let expanded_paths = process_and_expand_files(&cli.paths)?;
    let documents = find_document_urls(&expanded_paths, &config)?;
    let context = GithubContext::from_env();

    if cli.list_only {
        display_url_lists(&documents, &context);
        return Ok(0);
    }

    let (reports, tally) = check_documents(documents, &config, &context, &output_settings).await?;
    display_final_results(&reports, &tally, &output_settings)?;

    Ok(tally.exit_code())
}

/// Layer the configuration: defaults, config file, `INPUT_*` variables,
/// then CLI flags. The result is validated once all layers are applied.
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()?
    };

    config.apply_env()?;
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    /// Text output is printed per document while checking runs.
    pub fn streams_documents(&self) -> bool {
        self.output_format == output_formats::TEXT
    }
}

pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    OutputSettings {
        quiet: cli_config.quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format: config.output_format_or_default().to_string(),
    }
}

/// Expand the input roots into Markdown files
pub fn process_and_expand_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let expanded_paths = expand_paths(paths).inspect_err(|e| {
        logging::log_error("Could not expand file paths", Some(e));
    })?;

    if expanded_paths.is_empty() {
        logging::log_warning("No Markdown files found");
    }
    logging::log_file_info(expanded_paths.len(), &expanded_paths);

    Ok(expanded_paths)
}

/// Load every document and extract its URLs
pub fn find_document_urls(
    expanded_paths: &[PathBuf],
    config: &Config,
) -> Result<Vec<DocumentUrls>, Box<dyn std::error::Error>> {
    let finder = Finder::new(config.strategy_or_default(), config.keep_order.unwrap_or(false))
        .with_exclude_patterns(config.compile_exclude_patterns()?);

    let documents = finder.find_urls(expanded_paths).inspect_err(|e| {
        logging::log_error("Could not read Markdown files", Some(e));
    })?;

    for doc in &documents {
        logging::log_url_discovery(doc.document.path(), doc.urls.len());
    }

    Ok(documents)
}

fn display_path(doc: &DocumentUrls, context: &GithubContext) -> String {
    doc.document
        .display_path(context.workspace.as_deref(), context.repository.as_deref())
}

pub fn display_url_lists(documents: &[DocumentUrls], context: &GithubContext) {
    for doc in documents {
        println!("{}", output::format_url_list(&display_path(doc, context), &doc.urls));
    }
}

/// Check documents one after the other, each with bounded concurrency.
/// Text output is printed as soon as a document is done.
pub async fn check_documents(
    documents: Vec<DocumentUrls>,
    config: &Config,
    context: &GithubContext,
    output_settings: &OutputSettings,
) -> Result<(Vec<DocumentReport>, LinkTally), Box<dyn std::error::Error>> {
    let validator = Validator::from_config(config)?;
    let mut tally = LinkTally {
        markdown_files: documents.len(),
        ..Default::default()
    };
    let mut reports = Vec::with_capacity(documents.len());

    let url_count: usize = documents.iter().map(|doc| doc.urls.len()).sum();
    logging::log_validation_start(url_count);
    let start_time = std::time::Instant::now();

    for doc in documents {
        let results = validator.check_urls(doc.urls.as_slice()).await;
        tally.record_all(&results);

        let report = DocumentReport::new(display_path(&doc, context), results);
        if output_settings.streams_documents() {
            println!("{}", output::format_document(&report, output_settings.quiet));
        }
        reports.push(report);
    }

    logging::log_validation_complete(&tally, start_time.elapsed().as_millis());
    Ok((reports, tally))
}

pub fn display_final_results(
    reports: &[DocumentReport],
    tally: &LinkTally,
    output_settings: &OutputSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    if output_settings.streams_documents() {
        println!("{}", output::format_metrics(tally));
    } else {
        output::display_results(
            reports,
            tally,
            &output_settings.output_format,
            output_settings.quiet,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_load_and_merge_config__cli_overrides_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("custom.toml");
        fs::write(&config_path, "timeout = 12\nkeep_order = true\n")?;
        let cli_config = CliConfig {
            config_file: Some(config_path.display().to_string()),
            timeout: Some(3),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config)?;

        assert_eq!(config.timeout, Some(3));
        assert_eq!(config.keep_order, Some(true));
        Ok(())
    }

    #[test]
    fn test_load_and_merge_config__no_config_uses_defaults() -> TestResult {
        let cli_config = CliConfig {
            no_config: true,
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config)?;

        assert_eq!(config.timeout, Config::default().timeout);
        Ok(())
    }

    #[test]
    fn test_load_and_merge_config__invalid_cli_value_rejected() {
        let cli_config = CliConfig {
            no_config: true,
            threads: Some(0),
            ..Default::default()
        };

        assert!(load_and_merge_config(&cli_config).is_err());
    }

    #[test]
    fn test_setup_output_settings() {
        let cli_config = CliConfig {
            quiet: true,
            ..Default::default()
        };
        let config = Config {
            output_format: Some(output_formats::JSON.to_string()),
            ..Default::default()
        };

        let settings = setup_output_settings(&cli_config, &config);

        assert!(settings.quiet);
        assert!(!settings.streams_documents());
    }

    #[test]
    fn test_find_document_urls__applies_exclude_patterns() -> TestResult {
        let dir = tempfile::tempdir()?;
        let doc = dir.path().join("README.md");
        fs::write(&doc, "https://keep.example.com and https://skip.example.com")?;
        let config = Config {
            exclude_patterns: Some(vec!["skip".to_string()]),
            keep_order: Some(true),
            ..Default::default()
        };

        let documents = find_document_urls(&[doc], &config)?;

        assert_eq!(documents[0].urls.as_slice(), ["https://keep.example.com"]);
        Ok(())
    }

    #[test]
    fn test_process_and_expand_files__missing_path() {
        let result = process_and_expand_files(&[PathBuf::from("/no/such/dir")]);

        assert!(result.is_err());
    }
}
