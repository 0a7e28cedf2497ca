//! Trailing-parenthesis resolution
//!
//! In `[label](url)` the closing `)` collides with URLs that end in `)`.
//! A candidate ending in `)` is therefore checked against the Markdown
//! links of the raw text, and when one of them explains it, the link's
//! destination replaces the candidate. Destinations are found by counting
//! parenthesis depth, so `page_(disambiguation)` keeps its inner pair.

use super::patterns::LINK_OPENING;

/// A Markdown link found in raw text, with the prose parens around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan<'a> {
    /// The whole span, leading `(` and trailing `)` included.
    pub span: &'a str,
    pub label: &'a str,
    /// Text between the link's `(` and its matching `)`, title excluded.
    pub destination: &'a str,
    /// Byte offset of `destination` in the raw text.
    pub destination_offset: usize,
}

/// Every Markdown link of `content`.
///
/// Links whose destination never closes (end of line or input reached
/// first) are skipped.
pub fn link_spans(content: &str) -> Vec<LinkSpan<'_>> {
    let mut spans = Vec::new();
    let mut search_from = 0;

    while let Some(caps) = LINK_OPENING.captures_at(content, search_from) {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let dest_start = whole.end();
        match closing_paren(&content[dest_start..]) {
            Some(dest_len) => {
                let dest_end = dest_start + dest_len;
                let span_end = dest_end + 1 + trailing_parens(&content[dest_end + 1..]);
                let raw_destination = &content[dest_start..dest_end];
                let leading_blanks = raw_destination.len() - raw_destination.trim_start().len();
                spans.push(LinkSpan {
                    span: &content[whole.start()..span_end],
                    label: label.as_str(),
                    destination: strip_title(raw_destination),
                    destination_offset: dest_start + leading_blanks,
                });
                search_from = span_end;
            }
            None => search_from = dest_start,
        }
    }

    spans
}

/// Byte offset of the `)` closing a destination that starts right after an
/// opening `(`. Backslash escapes are skipped.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut escaped = false;

    for (offset, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\n' => return None,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }

    None
}

fn trailing_parens(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b')').count()
}

/// `url "title"` -> `url`
fn strip_title(destination: &str) -> &str {
    let trimmed = destination.trim();
    if trimmed.ends_with('"') {
        if let Some(idx) = trimmed.find(" \"") {
            return trimmed[..idx].trim_end();
        }
    }
    trimmed
}

/// The candidate ran past `span`'s destination into the link's closing
/// paren.
fn over_captured(candidate: &str, span: &LinkSpan<'_>) -> bool {
    let stripped = candidate.trim_end_matches(')');
    !span.destination.is_empty()
        && candidate.starts_with(span.destination)
        && span.destination.contains(stripped)
}

fn extends(span: &LinkSpan<'_>, candidate: &str) -> bool {
    span.destination.len() > candidate.len() && span.destination.starts_with(candidate)
}

/// The candidate stopped at a `)` inside `span`'s destination.
///
/// Only when the candidate never stands on its own in the raw text: every
/// occurrence must open a destination that continues past it. A complete
/// URL that merely prefixes some other link is left alone.
fn truncated(content: &str, candidate: &str, span: &LinkSpan<'_>, spans: &[LinkSpan<'_>]) -> bool {
    extends(span, candidate)
        && content.match_indices(candidate).all(|(offset, _)| {
            spans
                .iter()
                .any(|other| other.destination_offset == offset && extends(other, candidate))
        })
}

/// Replace, in place, every candidate that a Markdown link of `content`
/// shows to be over-captured or truncated.
///
/// Candidates that do not end in `)` are not touched, and neither are
/// those that no link explains.
pub fn resolve_trailing_parens(content: &str, candidates: &mut [String]) {
    if !candidates.iter().any(|candidate| candidate.ends_with(')')) {
        return;
    }

    let spans = link_spans(content);
    for candidate in candidates.iter_mut().filter(|c| c.ends_with(')')) {
        let found = spans.iter().find(|span| {
            over_captured(candidate.as_str(), span)
                || truncated(content, candidate.as_str(), span, &spans)
        });
        if let Some(span) = found {
            if span.destination != candidate.as_str() {
                log::debug!("Resolved '{candidate}' to '{}'", span.destination);
                *candidate = span.destination.to_string();
            }
        }
    }
}
