use crate::models::ContentSection;

const SECTION_DIVIDER: &str = "--- Relevant Section ---";

/// Upper bound on sections rendered into one excerpt.
const MAX_FORMATTED_SECTIONS: usize = 10;

/// Joins selected sections into the final excerpt text. A single section is
/// returned as-is; multiple sections get a divider before each one and a blank
/// line between them.
pub fn format_sections(sections: &[ContentSection]) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for (i, section) in sections.iter().enumerate() {
        if i >= MAX_FORMATTED_SECTIONS {
            break;
        }

        if sections.len() > 1 {
            parts.push(SECTION_DIVIDER);
        }

        parts.push(&section.content);

        if i < sections.len() - 1 && sections.len() > 1 {
            parts.push("");
        }
    }

    parts.join("\n")
}

/// Returns the beginning of `content`, at most `max_length` bytes, preferring
/// to cut at a line boundary when one falls in the later half of the budget.
pub fn content_sample(content: &str, max_length: usize) -> String {
    if content.len() <= max_length {
        return content.to_string();
    }

    // Back off to a char boundary before slicing
    let mut cut = max_length;
    while !content.is_char_boundary(cut) {
        cut -= 1;
    }

    let sample = &content[..cut];
    match sample.rfind('\n') {
        Some(newline) if newline > max_length / 2 => content[..newline].to_string(),
        _ => sample.to_string(),
    }
}
