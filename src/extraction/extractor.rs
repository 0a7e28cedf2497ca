use std::fmt;
use std::str::FromStr;

use crate::core::constants::strategies;
use crate::core::error::{LinkCheckError, Result};
use crate::core::types::MarkdownDocument;

use super::dedup::{UrlSet, uniquify};
use super::flatten::{find_all, flatten};
use super::patterns::{HREF, MARKDOWN_URL_OR_URL, starts_with_url};
use super::render::{RenderOptions, render};
use super::resolver::resolve_trailing_parens;

/// Turns one Markdown document into its set of canonical URLs.
pub trait ExtractUrls {
    fn extract(&self, doc: &MarkdownDocument) -> UrlSet;
}

/// How link candidates are collected from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Render to HTML and read `href` values.
    #[default]
    Render,
    /// Match the link patterns on the raw Markdown.
    Regex,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Render => strategies::RENDER,
            Strategy::Regex => strategies::REGEX,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = LinkCheckError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            strategies::RENDER => Ok(Strategy::Render),
            strategies::REGEX => Ok(Strategy::Regex),
            other => Err(LinkCheckError::InvalidArgument(format!(
                "Unknown extraction strategy '{other}'. Expected one of: {}.",
                strategies::ALL.join(", ")
            ))),
        }
    }
}

/// Extraction through the Markdown renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderExtractor {
    pub keep_order: bool,
    pub options: RenderOptions,
}

impl RenderExtractor {
    pub fn new(keep_order: bool) -> Self {
        Self {
            keep_order,
            options: RenderOptions::default(),
        }
    }

    /// Absolute `http(s)` targets of the rendered anchors, in document
    /// order, before resolution and deduplication.
    pub fn candidates(&self, markdown: &str) -> Vec<String> {
        let html = render(markdown, self.options);

        HREF.captures_iter(&html)
            .filter_map(|caps| caps.get(1))
            .map(|value| decode_entities(value.as_str()))
            .filter(|value| starts_with_url(value))
            .collect()
    }
}

impl ExtractUrls for RenderExtractor {
    fn extract(&self, doc: &MarkdownDocument) -> UrlSet {
        let mut urls = self.candidates(doc.content());
        resolve_trailing_parens(doc.content(), &mut urls);
        uniquify(urls, self.keep_order)
    }
}

/// Extraction by pattern matching on the raw Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexExtractor {
    pub keep_order: bool,
}

impl RegexExtractor {
    pub fn new(keep_order: bool) -> Self {
        Self { keep_order }
    }

    /// Every pattern match of `markdown`, in document order, before
    /// resolution and deduplication.
    pub fn candidates(&self, markdown: &str) -> Vec<String> {
        flatten(&find_all(&MARKDOWN_URL_OR_URL, markdown))
    }
}

impl ExtractUrls for RegexExtractor {
    fn extract(&self, doc: &MarkdownDocument) -> UrlSet {
        let mut urls = self.candidates(doc.content());
        resolve_trailing_parens(doc.content(), &mut urls);
        uniquify(urls, self.keep_order)
    }
}

/// The extractor implementing `strategy`.
pub fn extractor_for(strategy: Strategy, keep_order: bool) -> Box<dyn ExtractUrls + Send + Sync> {
    match strategy {
        Strategy::Render => Box::new(RenderExtractor::new(keep_order)),
        Strategy::Regex => Box::new(RegexExtractor::new(keep_order)),
    }
}

/// Undo the escaping the HTML writer applies to attribute values.
/// `&amp;` goes last so that `&amp;lt;` decodes to `&lt;`.
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    value
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
