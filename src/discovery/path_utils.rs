use std::path::{Path, PathBuf};

use crate::core::constants::files;
use crate::core::error::{LinkCheckError, Result};

/// Does `path` carry the Markdown extension?
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == files::MARKDOWN_EXTENSION)
}

/// Expand the given roots into the Markdown files to check.
///
/// Files are taken as they are when they carry the `md` extension.
/// Directories are walked recursively with hidden entries included and
/// `.gitignore` rules honoured. Entries are visited in file-name order so
/// the result is stable between runs.
pub fn expand_paths<P: AsRef<Path>>(input_paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut result_paths = Vec::new();

    for path in input_paths.iter().map(AsRef::as_ref) {
        if path.is_file() {
            if is_markdown(path) {
                result_paths.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            let mut builder = ignore::WalkBuilder::new(path);
            builder
                .hidden(false)
                .require_git(false)
                .filter_entry(|entry| entry.file_name() != ".git")
                .sort_by_file_name(|a, b| a.cmp(b));

            for entry in builder.build() {
                let entry = entry?;
                let entry_path = entry.path();

                if entry_path.is_file() && is_markdown(entry_path) {
                    result_paths.push(entry_path.to_path_buf());
                }
            }
        } else {
            return Err(LinkCheckError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(result_paths)
}
