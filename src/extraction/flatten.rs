//! Flattening of irregular pattern matches
//!
//! A single pass of [`MARKDOWN_URL_OR_URL`](super::patterns::MARKDOWN_URL_OR_URL)
//! yields one tuple of groups per match, where all but one group is empty.
//! Matches are modelled as a tagged tree and flattened into plain tokens.

use regex::{Captures, Regex};

/// One node of a match result: either a token or a group of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchToken {
    Single(String),
    Group(Vec<MatchToken>),
}

impl MatchToken {
    /// A group holding every capture group of `caps` (group 0 excluded).
    /// Groups that did not participate become empty tokens.
    pub fn from_captures(caps: &Captures<'_>) -> Self {
        let groups = caps
            .iter()
            .skip(1)
            .map(|group| {
                MatchToken::Single(group.map(|m| m.as_str().to_string()).unwrap_or_default())
            })
            .collect();
        MatchToken::Group(groups)
    }

    fn is_empty(&self) -> bool {
        match self {
            MatchToken::Single(token) => token.is_empty(),
            MatchToken::Group(children) => children.is_empty(),
        }
    }
}

impl From<&str> for MatchToken {
    fn from(token: &str) -> Self {
        MatchToken::Single(token.to_string())
    }
}

/// Every match of `pattern` in `text`, one group node per match.
pub fn find_all(pattern: &Regex, text: &str) -> Vec<MatchToken> {
    pattern
        .captures_iter(text)
        .map(|caps| MatchToken::from_captures(&caps))
        .collect()
}

/// Depth-first flattening that drops empty tokens and empty groups.
/// Strings are leaves and are never split further.
pub fn flatten(tokens: &[MatchToken]) -> Vec<String> {
    let mut flat = Vec::with_capacity(tokens.len());
    flatten_into(tokens, &mut flat);
    flat
}

fn flatten_into(tokens: &[MatchToken], out: &mut Vec<String>) {
    for token in tokens.iter().filter(|token| !token.is_empty()) {
        match token {
            MatchToken::Single(value) => out.push(value.clone()),
            MatchToken::Group(children) => flatten_into(children, out),
        }
    }
}
