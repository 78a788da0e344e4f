use std::cmp::Ordering;

use crate::extract::line_scoring::score_line_relevance;
use crate::models::ContentSection;

/// At most this many context windows are selected per extraction.
const MAX_SECTIONS: usize = 5;

/// Scores every line of `content` and expands the best ones into bounded,
/// non-overlapping context windows.
pub fn find_relevant_sections(
    content: &str,
    query_terms: &[String],
    context_lines: usize,
) -> Vec<ContentSection> {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut scored_lines: Vec<(usize, f64)> = Vec::new();
    for (line_number, line) in lines.iter().enumerate() {
        let score = score_line_relevance(line, query_terms);
        if score > 0.0 {
            scored_lines.push((line_number, score));
        }
    }

    // Highest score first; line order breaks ties so output is reproducible
    scored_lines.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    expand_sections_with_context(&lines, &scored_lines, context_lines)
}

/// Expands scored candidate lines into `[line - context, line + context]`
/// windows, accepting a window only when it does not intersect one already
/// taken. Candidates arrive best-first, so the selected windows are ordered by
/// the originating line's score, descending.
pub fn expand_sections_with_context(
    lines: &[&str],
    scored_lines: &[(usize, f64)],
    context_lines: usize,
) -> Vec<ContentSection> {
    let mut sections: Vec<ContentSection> = Vec::new();
    let mut used_lines = vec![false; lines.len()];

    for &(line_number, score) in scored_lines {
        if sections.len() >= MAX_SECTIONS {
            break;
        }

        let start = line_number.saturating_sub(context_lines);
        let end = (line_number + context_lines + 1).min(lines.len());

        if used_lines[start..end].iter().any(|&used| used) {
            continue;
        }
        for used in &mut used_lines[start..end] {
            *used = true;
        }

        sections.push(ContentSection {
            start_line: start,
            end_line: end - 1,
            score,
            content: lines[start..end].join("\n"),
        });
    }

    sections
}
