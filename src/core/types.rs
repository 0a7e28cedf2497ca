use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{LinkCheckError, Result};

/// A Markdown file found under the scan root.
///
/// The document owns its raw text, which is loaded once and never mutated
/// while its links are extracted and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    path: PathBuf,
    content: String,
}

impl MarkdownDocument {
    /// Read a document from disk.
    ///
    /// The file must be valid UTF-8. Any read failure is reported together
    /// with the offending path.
    ///
    /// # Examples
    /// ```no_run
    /// use mdlinkcheck::core::types::MarkdownDocument;
    ///
    /// let doc = MarkdownDocument::load("README.md").unwrap();
    /// println!("{} bytes", doc.content().len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LinkCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Build a document from text that is already in memory.
    ///
    /// # Examples
    /// ```
    /// use mdlinkcheck::core::types::MarkdownDocument;
    ///
    /// let doc = MarkdownDocument::from_content("notes.md", "See https://example.com");
    /// assert_eq!(doc.path().to_str(), Some("notes.md"));
    /// ```
    pub fn from_content<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw Markdown text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Path shown to users.
    ///
    /// Inside a CI checkout the workspace prefix is replaced by the repository
    /// name, so `/home/runner/work/repo/repo/docs/a.md` reads `owner/repo/docs/a.md`.
    pub fn display_path(&self, workspace: Option<&str>, repository: Option<&str>) -> String {
        let shown = self.path.display().to_string();
        match (workspace, repository) {
            (Some(workspace), Some(repository)) if !workspace.is_empty() => {
                shown.replace(workspace, repository)
            }
            _ => shown,
        }
    }
}
