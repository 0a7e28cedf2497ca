//! Run totals and percentage breakdown

use serde::Serialize;

use crate::core::constants::display;
use crate::validation::{LinkCheckResult, LinkStatus};

/// Results of one document, in the order its URLs were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub path: String,
    pub results: Vec<LinkCheckResult>,
}

impl DocumentReport {
    pub fn new(path: String, results: Vec<LinkCheckResult>) -> Self {
        Self { path, results }
    }

    pub fn failures(&self) -> impl Iterator<Item = &LinkCheckResult> {
        self.results.iter().filter(|result| result.is_not_ok())
    }
}

/// Counters of one run, owned by the caller and threaded through the check
/// loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkTally {
    pub markdown_files: usize,
    pub ok: usize,
    pub not_ok: usize,
    pub ignored: usize,
}

impl LinkTally {
    pub fn record(&mut self, status: LinkStatus) {
        match status {
            LinkStatus::Ok => self.ok += 1,
            LinkStatus::NotOk => self.not_ok += 1,
            LinkStatus::Ignored => self.ignored += 1,
        }
    }

    pub fn record_all(&mut self, results: &[LinkCheckResult]) {
        for result in results {
            self.record(result.status);
        }
    }

    /// Number of links checked.
    pub fn total(&self) -> usize {
        self.ok + self.not_ok + self.ignored
    }

    pub fn has_failures(&self) -> bool {
        self.not_ok > 0
    }

    /// Process exit code: 1 when any link is broken.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() { 1 } else { 0 }
    }

    /// Indented `LABEL: count (pct)` lines. The ignored line only appears
    /// when something was ignored.
    pub fn breakdown(&self) -> Vec<String> {
        let total = self.total();
        let mut lines = vec![
            breakdown_line("OK", self.ok, get_percentage(self.ok, total)),
            breakdown_line("Not OK", self.not_ok, get_percentage(self.not_ok, total)),
        ];
        if self.ignored > 0 {
            lines.push(breakdown_line(
                "Ignored",
                self.ignored,
                get_percentage(self.ignored, total),
            ));
        }
        lines
    }
}

/// `numerator / denominator`, or `0.0` when there is nothing to divide by.
pub fn get_percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// A fraction as a percentage: no decimals when the value is a whole
/// percent, two otherwise.
pub fn format_percentage(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if percent.fract() == 0.0 {
        format!("{percent:.0}%")
    } else {
        format!("{percent:.2}%")
    }
}

pub fn breakdown_line(label: &str, count: usize, fraction: f64) -> String {
    format!(
        "{}{label}: {count} ({})",
        display::TAB,
        format_percentage(fraction)
    )
}
