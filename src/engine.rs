use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::extract::extract_relevant_content;
use crate::models::FileMatch;
use crate::search::file_search::search_with_clauses;

/// Search capabilities over a documentation tree.
pub trait SearchEngine {
    /// Finds the files most relevant to the query, best first.
    fn find_relevant_files(&self, query: &str, max_files: usize) -> Result<Vec<FileMatch>>;

    /// Extracts content relevant to the query from a specific file.
    fn extract_relevant_content(
        &self,
        file_path: &str,
        query: &str,
        context_lines: usize,
    ) -> Result<String>;

    /// Reads the complete content of a file.
    fn get_file_content(&self, file_path: &str) -> Result<String>;
}

/// Filesystem-backed engine rooted at a directory. Paths in results and
/// arguments are relative to that root.
pub struct FsSearchEngine {
    root: PathBuf,
}

impl FsSearchEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSearchEngine { root: root.into() }
    }

    fn resolve(&self, file_path: &str) -> PathBuf {
        self.root.join(file_path)
    }
}

impl SearchEngine for FsSearchEngine {
    fn find_relevant_files(&self, query: &str, max_files: usize) -> Result<Vec<FileMatch>> {
        search_with_clauses(&self.root, query, max_files)
    }

    fn extract_relevant_content(
        &self,
        file_path: &str,
        query: &str,
        context_lines: usize,
    ) -> Result<String> {
        // An unreadable file degrades to empty content, which in turn yields
        // an empty sample rather than an error
        let content = fs::read_to_string(self.resolve(file_path)).unwrap_or_default();
        Ok(extract_relevant_content(&content, query, context_lines))
    }

    fn get_file_content(&self, file_path: &str) -> Result<String> {
        fs::read_to_string(self.resolve(file_path))
            .with_context(|| format!("failed to read file: {file_path}"))
    }
}
