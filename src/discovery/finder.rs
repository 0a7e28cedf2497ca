use rayon::prelude::*;
use regex::Regex;

use crate::core::error::Result;
use crate::core::types::MarkdownDocument;
use crate::extraction::{ExtractUrls, Strategy, UrlSet, extractor_for};

use std::path::PathBuf;

/// A document together with the URLs extracted from it.
#[derive(Debug, Clone)]
pub struct DocumentUrls {
    pub document: MarkdownDocument,
    pub urls: UrlSet,
}

pub trait UrlFinder {
    fn find_urls(&self, paths: &[PathBuf]) -> Result<Vec<DocumentUrls>>;
}

pub struct Finder {
    extractor: Box<dyn ExtractUrls + Send + Sync>,
    exclude_patterns: Vec<Regex>,
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(Strategy::default(), false)
    }
}

impl std::fmt::Debug for Finder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finder")
            .field("exclude_patterns", &self.exclude_patterns)
            .finish_non_exhaustive()
    }
}

impl Finder {
    pub fn new(strategy: Strategy, keep_order: bool) -> Self {
        Self {
            extractor: extractor_for(strategy, keep_order),
            exclude_patterns: Vec::new(),
        }
    }

    /// URLs matching any of `patterns` are dropped after extraction.
    pub fn with_exclude_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    fn is_excluded(&self, url: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(url))
    }

    /// Extract the URLs of a document that is already loaded.
    pub fn find_in_document(&self, document: MarkdownDocument) -> DocumentUrls {
        let mut urls = self.extractor.extract(&document);
        if !self.exclude_patterns.is_empty() {
            let before = urls.len();
            urls.retain(|url| !self.is_excluded(url));
            let skipped = before - urls.len();
            if skipped > 0 {
                log::debug!(
                    "Excluded {skipped} URL(s) in {}",
                    document.path().display()
                );
            }
        }

        DocumentUrls { document, urls }
    }
}

impl UrlFinder for Finder {
    /// Documents are loaded and extracted in parallel; the result keeps the
    /// order of `paths`. The first unreadable file aborts the search.
    fn find_urls(&self, paths: &[PathBuf]) -> Result<Vec<DocumentUrls>> {
        paths
            .par_iter()
            .map(|path| -> Result<DocumentUrls> {
                let document = MarkdownDocument::load(path)?;
                Ok(self.find_in_document(document))
            })
            .collect()
    }
}
