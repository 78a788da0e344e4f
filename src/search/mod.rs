pub mod file_scoring;
pub mod file_search;
pub mod query;

pub use file_scoring::score_file;
pub use file_search::{find_relevant_files, is_documentation_file, search_with_clauses};
pub use query::normalize_query;

#[cfg(test)]
mod file_scoring_tests;
