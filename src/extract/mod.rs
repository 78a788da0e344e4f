pub mod formatter;
pub mod line_scoring;
pub mod sections;

pub use formatter::{content_sample, format_sections};
pub use line_scoring::score_line_relevance;
pub use sections::find_relevant_sections;

use crate::search::query::normalize_query;

/// Bytes of content returned when no relevant section could be found.
const SAMPLE_LENGTH: usize = 1000;

/// Extracts the parts of `content` most relevant to `query`.
///
/// Falls back to a bounded sample of the file's beginning when the query
/// normalizes to nothing or no line matched.
pub fn extract_relevant_content(content: &str, query: &str, context_lines: usize) -> String {
    let query_terms = normalize_query(query);
    if query_terms.is_empty() {
        return content_sample(content, SAMPLE_LENGTH);
    }

    let sections = find_relevant_sections(content, &query_terms, context_lines);
    if sections.is_empty() {
        return content_sample(content, SAMPLE_LENGTH);
    }

    format_sections(&sections)
}
