use std::path::Path;

use crate::search::query::TOKEN_TRIM_CHARS;

/// Computes how relevant a file is to the query terms.
///
/// The score is built from three additive signals evaluated in order:
/// directory components, filename, and file content. `content` is `None` when
/// the file could not be read, which zeroes the content signal without
/// affecting the path-derived ones. The raw score is scaled down by 4.0 and
/// clamped to 1.0, so the returned value is always within `[0, 1]`.
pub fn score_file(file_path: &Path, content: Option<&str>, query_terms: &[String]) -> (f64, String) {
    if query_terms.is_empty() {
        return (0.0, String::new());
    }

    let mut score = 0.0;
    let mut reasons: Vec<String> = Vec::new();

    let file_stem = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let dir_components: Vec<String> = file_path
        .parent()
        .map(|dir| {
            dir.components()
                .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
                .collect()
        })
        .unwrap_or_default();
    let dir_path = dir_components.join("/");

    // Directory signal: at most one of the three rules fires per term
    for term in query_terms {
        let mut component_hit = false;
        for component in &dir_components {
            if component == term {
                score += 2.5;
                reasons.push(format!("directory exact match '{term}'"));
                component_hit = true;
                break;
            } else if component.contains(term.as_str()) {
                score += 1.8;
                reasons.push(format!("directory contains '{term}'"));
                component_hit = true;
                break;
            }
        }

        if !component_hit && dir_path.contains(term.as_str()) {
            score += 1.2;
            reasons.push(format!("path contains '{term}'"));
        }
    }

    // Filename signal: again only one rule per term
    for term in query_terms {
        if file_stem == *term {
            score += 2.0;
            reasons.push("exact filename match".to_string());
            continue;
        }

        if file_stem.contains(term.as_str()) {
            score += 1.5;
            reasons.push(format!("filename contains '{term}'"));
            continue;
        }

        if is_word_in_string(&file_stem, term) {
            score += 1.0;
            reasons.push(format!("filename word match '{term}'"));
        } else {
            for word in filename_words(&file_stem) {
                if word.len() < 3 || term.len() < 3 {
                    continue;
                }
                if (term.len() > 3 && term.contains(word))
                    || (word.len() > 3 && word.contains(term.as_str()))
                {
                    score += 0.5;
                    reasons.push(format!("partial filename match '{term}'"));
                    break;
                }
            }
        }
    }

    // Content signal, weighted lower than the path-derived ones
    let (content_score, content_reason) = score_file_content(content.unwrap_or(""), query_terms);
    score += content_score * 0.3;
    if !content_reason.is_empty() {
        reasons.push(content_reason);
    }

    if score > 0.0 {
        // Scale down but preserve relative differences, so directory matches
        // keep ranking above filename-only matches
        score /= 4.0;
        if score > 1.0 {
            score = 1.0;
        }
    }

    (score, reasons.join(", "))
}

/// Scores the file content alone: occurrence-counted exact containment per
/// term, partial word overlap otherwise, plus a flat bonus when every term was
/// found somewhere in the content.
pub fn score_file_content(content: &str, query_terms: &[String]) -> (f64, String) {
    let content_lower = content.to_lowercase();
    let mut score = 0.0;
    let mut matched_terms = 0;

    for term in query_terms {
        if content_lower.contains(term.as_str()) {
            matched_terms += 1;
            let count = content_lower.matches(term.as_str()).count();
            score += count as f64 * 0.1;
        } else {
            // Mutual-substring partial credit, at most once per term
            for word in content_lower.split_whitespace() {
                let clean_word = word.trim_matches(TOKEN_TRIM_CHARS);
                if clean_word.len() < 3 {
                    continue;
                }
                if (term.len() > 3 && term.contains(clean_word))
                    || (clean_word.len() > 3 && clean_word.contains(term.as_str()))
                {
                    score += 0.05;
                    break;
                }
            }
        }
    }

    if score == 0.0 {
        return (0.0, String::new());
    }

    if matched_terms == query_terms.len() {
        score += 0.3;
    }

    (score, "content matches".to_string())
}

/// Whole-word containment check over alphanumeric runs.
pub fn is_word_in_string(text: &str, word: &str) -> bool {
    filename_words(text).any(|w| w.to_lowercase() == word)
}

fn filename_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}
