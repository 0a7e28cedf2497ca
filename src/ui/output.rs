//! Console rendering of check results
//!
//! Every `format_*` function builds the text and leaves printing to the
//! caller, so the binary can stream documents as they finish.

use serde::Serialize;

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::reporting::{DocumentReport, LinkTally};
use crate::ui::color::{Colors, bold, colorize};
use crate::validation::{LinkCheckResult, LinkStatus};

/// `✅ 200 · url`, `❌ 404 · url`, `⚠️ 403 · url (ignored)` or
/// `❌ Timeout · url`.
pub fn format_link_line(result: &LinkCheckResult) -> String {
    let body = format!("{} {} {}", result.outcome(), display::SEPARATOR, result.url);
    match result.status {
        LinkStatus::Ok => format!("{} {}", display::OK_EMOJI, colorize(&body, Colors::GREEN)),
        LinkStatus::Ignored => format!(
            "{} {}",
            display::IGNORED_EMOJI,
            colorize(&format!("{body} (ignored)"), Colors::YELLOW)
        ),
        LinkStatus::NotOk => format!(
            "{} {}",
            display::NOT_OK_EMOJI,
            colorize(&body, Colors::LIGHT_RED)
        ),
    }
}

/// Blank line followed by the document path in bold.
pub fn format_document_header(path: &str) -> String {
    format!("\n{}", bold(path))
}

/// Header plus one line per link.
pub fn format_document(report: &DocumentReport, quiet: bool) -> String {
    let mut lines = vec![format_document_header(&report.path)];
    lines.extend(
        report
            .results
            .iter()
            .filter(|result| !quiet || result.is_not_ok())
            .map(format_link_line),
    );
    lines.join("\n")
}

pub fn format_metrics(tally: &LinkTally) -> String {
    let mut lines = vec![
        format!("\n{} {}", display::METRICS_EMOJI, bold("Metrics")),
        format!("Number of Markdown files: {}", tally.markdown_files),
        format!("Number of links: {}", tally.total()),
    ];
    lines.extend(tally.breakdown());
    lines.join("\n")
}

/// Failing links only, one `outcome url` pair per line, then the totals.
pub fn format_minimal(reports: &[DocumentReport], tally: &LinkTally) -> String {
    let mut lines: Vec<String> = reports
        .iter()
        .flat_map(|report| report.failures())
        .map(|result| format!("{} {}", result.outcome(), result.url))
        .collect();
    lines.push(format!(
        "files={} links={} ok={} not_ok={} ignored={}",
        tally.markdown_files,
        tally.total(),
        tally.ok,
        tally.not_ok,
        tally.ignored
    ));
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    files: &'a [DocumentReport],
    summary: &'a LinkTally,
}

pub fn format_json(reports: &[DocumentReport], tally: &LinkTally) -> Result<String> {
    let report = JsonReport {
        status: if tally.has_failures() { "failure" } else { "success" },
        files: reports,
        summary: tally,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Extracted URLs of one document, without checking them.
pub fn format_url_list<'a, I>(path: &str, urls: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut lines = vec![format_document_header(path)];
    lines.extend(urls.into_iter().map(|url| format!("{}{url}", display::TAB)));
    lines.join("\n")
}

/// Print a whole run in `output_format`. Text output prints documents in
/// order and ends with the metrics block.
pub fn display_results(
    reports: &[DocumentReport],
    tally: &LinkTally,
    output_format: &str,
    quiet: bool,
) -> Result<()> {
    match output_format {
        output_formats::JSON => println!("{}", format_json(reports, tally)?),
        output_formats::MINIMAL => println!("{}", format_minimal(reports, tally)),
        _ => {
            for report in reports {
                println!("{}", format_document(report, quiet));
            }
            println!("{}", format_metrics(tally));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use serial_test::serial;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn result(url: &str, status: LinkStatus, code: Option<u16>, kind: Option<&str>) -> LinkCheckResult {
        LinkCheckResult {
            url: url.to_string(),
            status,
            status_code: code,
            error_kind: kind.map(str::to_string),
            description: kind.map(|_| "details".to_string()),
        }
    }

    fn sample() -> (Vec<DocumentReport>, LinkTally) {
        let reports = vec![DocumentReport::new(
            "owner/repo/README.md".to_string(),
            vec![
                result("https://ok.io", LinkStatus::Ok, Some(200), None),
                result("https://gone.io", LinkStatus::NotOk, Some(404), None),
                result("https://private.io", LinkStatus::Ignored, Some(403), None),
                result("https://slow.io", LinkStatus::NotOk, None, Some("Timeout")),
            ],
        )];
        let mut tally = LinkTally {
            markdown_files: 1,
            ..Default::default()
        };
        tally.record_all(&reports[0].results);
        (reports, tally)
    }

    #[test]
    #[serial]
    fn test_format_link_line__each_status() {
        let (reports, _) = sample();
        let lines: Vec<String> = reports[0].results.iter().map(format_link_line).collect();

        assert_eq!(lines[0], "✅ 200 · https://ok.io");
        assert_eq!(lines[1], "❌ 404 · https://gone.io");
        assert_eq!(lines[2], "⚠️ 403 · https://private.io (ignored)");
        assert_eq!(lines[3], "❌ Timeout · https://slow.io");
    }

    #[test]
    #[serial]
    fn test_format_document__header_then_links() {
        let (reports, _) = sample();

        let text = format_document(&reports[0], false);

        assert!(text.starts_with("\nowner/repo/README.md\n✅ 200 · https://ok.io"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    #[serial]
    fn test_format_document__quiet_keeps_failures_only() {
        let (reports, _) = sample();

        let text = format_document(&reports[0], true);

        assert!(!text.contains("https://ok.io"));
        assert!(!text.contains("https://private.io"));
        assert!(text.contains("https://gone.io"));
        assert!(text.contains("https://slow.io"));
    }

    #[test]
    #[serial]
    fn test_format_metrics() {
        let (_, tally) = sample();

        let text = format_metrics(&tally);

        assert_eq!(
            text,
            "\n🧮 Metrics\nNumber of Markdown files: 1\nNumber of links: 4\n    OK: 1 (25%)\n    Not OK: 2 (50%)\n    Ignored: 1 (25%)"
        );
    }

    #[test]
    fn test_format_minimal() {
        let (reports, tally) = sample();

        let text = format_minimal(&reports, &tally);

        assert_eq!(
            text,
            "404 https://gone.io\nTimeout https://slow.io\nfiles=1 links=4 ok=1 not_ok=2 ignored=1"
        );
    }

    #[test]
    fn test_format_json() -> TestResult {
        let (reports, tally) = sample();

        let json: serde_json::Value = serde_json::from_str(&format_json(&reports, &tally)?)?;

        assert_eq!(json["status"], "failure");
        assert_eq!(json["summary"]["not_ok"], 2);
        assert_eq!(json["files"][0]["path"], "owner/repo/README.md");
        assert_eq!(json["files"][0]["results"][1]["status"], "not_ok");
        assert_eq!(json["files"][0]["results"][1]["status_code"], 404);
        assert_eq!(json["files"][0]["results"][3]["error_kind"], "Timeout");
        Ok(())
    }

    #[test]
    fn test_format_json__success_without_links() -> TestResult {
        let json: serde_json::Value =
            serde_json::from_str(&format_json(&[], &LinkTally::default())?)?;

        assert_eq!(json["status"], "success");
        assert_eq!(json["files"].as_array().map(Vec::len), Some(0));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_format_url_list() {
        let urls = vec!["https://a.io".to_string(), "https://b.io".to_string()];

        let text = format_url_list("docs/guide.md", &urls);

        assert_eq!(text, "\ndocs/guide.md\n    https://a.io\n    https://b.io");
    }
}
