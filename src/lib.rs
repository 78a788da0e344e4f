//! Docsearch is a lightweight lexical search tool for trees of
//! documentation-like files (markdown, HTML, text, JSON, YAML, RST,
//! AsciiDoc). Given a free-text query it ranks files by relevance and
//! extracts readable excerpts from the top matches. No index is persisted;
//! every query performs a fresh scan.
//!
//! This crate provides a library interface to the search functionality,
//! enabling integration with other tools and testing.

pub mod engine;
pub mod extract;
pub mod models;
pub mod search;

// Re-export commonly used types for convenience
pub use engine::{FsSearchEngine, SearchEngine};
pub use models::{ContentSection, FileMatch};
