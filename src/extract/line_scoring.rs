use regex::Regex;

/// Scores how relevant a single line is to the query terms.
///
/// A complete-word match counts 1.0 and a substring-only match 0.5, with an
/// extra 0.3 per matched term on lines that look structurally important.
/// Matching several distinct terms earns a further 0.2 per additional term.
pub fn score_line_relevance(line: &str, query_terms: &[String]) -> f64 {
    if query_terms.is_empty() {
        return 0.0;
    }

    let line_lower = line.to_lowercase();
    let mut score = 0.0;
    let mut matched_terms = 0usize;

    for term in query_terms {
        if line_lower.contains(term.as_str()) {
            matched_terms += 1;

            if is_exact_word_match(&line_lower, term) {
                score += 1.0;
            } else {
                score += 0.5;
            }

            if is_important_line(line) {
                score += 0.3;
            }
        }
    }

    if matched_terms > 1 {
        score += 0.2 * (matched_terms - 1) as f64;
    }

    score
}

/// Word-boundary containment test, so "api-docs" matches "api" but
/// "application" does not.
pub fn is_exact_word_match(text: &str, term: &str) -> bool {
    // Term lists are tiny, so compiling per check is fine here
    match Regex::new(&format!(r"\b{}\b", regex::escape(term))) {
        Ok(pattern) => pattern.is_match(text),
        Err(_) => false,
    }
}

/// Heuristic for lines likely to carry important information: headers, URLs,
/// HTTP verbs, curl invocations, code or JSON openers, and parameter
/// definitions.
pub fn is_important_line(line: &str) -> bool {
    let line = line.trim();

    if line.starts_with('#') {
        return true;
    }

    if line.contains("http://") || line.contains("https://") {
        return true;
    }

    if line.contains("GET ")
        || line.contains("POST ")
        || line.contains("PUT ")
        || line.contains("DELETE ")
    {
        return true;
    }

    if line.contains("curl") {
        return true;
    }

    if line.starts_with('{') || line.starts_with('[') {
        return true;
    }

    if line.starts_with("```") {
        return true;
    }

    // Parameter definitions like "name: string"
    if line.contains(':')
        && (line.contains("string") || line.contains("int") || line.contains("bool"))
    {
        return true;
    }

    false
}
