use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Punctuation stripped from the ends of query tokens and content words.
pub const TOKEN_TRIM_CHARS: &[char] = &[
    '.', ',', '!', '?', ':', ';', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Common English and Spanish function words excluded from term matching.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // English
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "will", "with",
        // Spanish
        "como", "con", "del", "el", "en", "es", "la", "para", "por", "que", "un", "una",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Tokenizes and cleans a raw query into an ordered, deduplicated term list.
///
/// Pipes act as additional token separators so that OR-clause queries fed in
/// whole still yield the union of their clause terms. Each surviving token is
/// followed by its morphological variants, and the final list preserves
/// first-occurrence order.
pub fn normalize_query(query: &str) -> Vec<String> {
    let raw_tokens: Vec<&str> = if query.contains('|') {
        query
            .split('|')
            .flat_map(|clause| clause.split_whitespace())
            .collect()
    } else {
        query.split_whitespace().collect()
    };

    let mut normalized = Vec::new();
    for token in raw_tokens {
        let token = token.to_lowercase();
        let cleaned = token.trim_matches(TOKEN_TRIM_CHARS);

        // Single characters add nothing to matching
        if cleaned.len() <= 1 {
            continue;
        }
        if is_stop_word(cleaned) {
            continue;
        }

        normalized.push(cleaned.to_string());
        normalized.extend(term_variations(cleaned));
    }

    let mut seen = HashSet::new();
    normalized.retain(|term| seen.insert(term.clone()));
    normalized
}

/// Generates simple suffix-stripped variants of a term for better matching.
pub fn term_variations(term: &str) -> Vec<String> {
    let mut variations = Vec::new();

    // Plural 's', but never from words ending in 'ss'
    if term.len() > 3 && term.ends_with('s') && !term.ends_with("ss") {
        variations.push(term[..term.len() - 1].to_string());
    }

    if term.len() > 5 {
        if let Some(stem) = term.strip_suffix("ing") {
            variations.push(stem.to_string());
        }
        if let Some(stem) = term.strip_suffix("ed") {
            variations.push(stem.to_string());
        }
    }

    variations
}
