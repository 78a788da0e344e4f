use std::path::Path;

use crate::search::file_scoring::{is_word_in_string, score_file, score_file_content};
use crate::search::query::normalize_query;

#[test]
fn test_empty_terms_score_zero() {
    let (score, reason) = score_file(Path::new("docs/api/bar.md"), Some("API docs"), &[]);
    assert_eq!(score, 0.0);
    assert!(reason.is_empty());
}

#[test]
fn test_directory_exact_match_scores_high() {
    let terms = normalize_query("api");
    let (score, reason) = score_file(Path::new("testData/foo/api/bar.md"), Some("bar docs"), &terms);

    assert!(score > 0.6, "expected directory match to score > 0.6, got {score}");
    assert!(reason.contains("directory exact match 'api'"));
}

#[test]
fn test_no_match_scores_zero_with_empty_reason() {
    let terms = normalize_query("api");
    let (score, reason) = score_file(Path::new("testData/foo/bad.md"), Some("unrelated"), &terms);

    assert_eq!(score, 0.0);
    assert!(reason.is_empty());
}

#[test]
fn test_directory_outranks_filename_only() {
    let terms = normalize_query("api");

    let (dir_score, _) = score_file(Path::new("docs/api/endpoints.md"), Some("endpoint list"), &terms);
    let (name_score, _) = score_file(Path::new("other/api_notes.md"), Some("some notes"), &terms);

    assert!(dir_score > name_score);
}

#[test]
fn test_exact_filename_match() {
    let terms = normalize_query("setup");
    let (score, reason) = score_file(Path::new("docs/setup.md"), None, &terms);

    assert!(score > 0.0);
    assert!(reason.contains("exact filename match"));
}

#[test]
fn test_filename_contains_term() {
    let terms = normalize_query("api");
    let (score, reason) = score_file(Path::new("docs/api_reference.md"), None, &terms);

    assert!(score > 0.0);
    assert!(reason.contains("filename contains 'api'"));
}

#[test]
fn test_directory_component_contains_term() {
    let terms = normalize_query("auth");
    let (score, reason) = score_file(Path::new("authentication/guide.md"), None, &terms);

    assert!(score > 0.0);
    assert!(reason.contains("directory contains 'auth'"));
}

#[test]
fn test_unreadable_content_keeps_path_signals() {
    let terms = normalize_query("api");

    let (with_content, _) = score_file(Path::new("docs/api/bar.md"), Some("no match here"), &terms);
    let (without_content, reason) = score_file(Path::new("docs/api/bar.md"), None, &terms);

    assert_eq!(with_content, without_content);
    assert!(reason.contains("directory exact match 'api'"));
}

#[test]
fn test_reason_fragments_joined_in_order() {
    let terms = normalize_query("api");
    let (_, reason) = score_file(Path::new("api/api_guide.md"), Some("the api"), &terms);

    assert_eq!(
        reason,
        "directory exact match 'api', filename contains 'api', content matches"
    );
}

#[test]
fn test_score_is_clamped_to_one() {
    // Many terms hitting directory, filename, and content at once
    let terms = normalize_query("api auth users guide");
    let content = "api auth users guide ".repeat(50);
    let (score, _) = score_file(
        Path::new("api/auth/users/guide.md"),
        Some(&content),
        &terms,
    );

    assert!(score <= 1.0);
    assert!(score > 0.9);
}

#[test]
fn test_content_occurrences_are_counted() {
    let terms = normalize_query("api");
    let (score, reason) = score_file_content("api here, api there, api everywhere", &terms);

    // Three occurrences plus the all-terms bonus
    assert!((score - 0.6).abs() < 1e-9);
    assert_eq!(reason, "content matches");
}

#[test]
fn test_content_all_terms_bonus() {
    let terms = normalize_query("api auth");
    let (both, _) = score_file_content("api and auth", &terms);
    let (one, _) = score_file_content("api only", &terms);

    // 0.1 + 0.1 + 0.3 bonus versus a single 0.1
    assert!((both - 0.5).abs() < 1e-9);
    assert!((one - 0.1).abs() < 1e-9);
}

#[test]
fn test_content_partial_word_overlap() {
    // "authentication" is absent from the content, but it contains the
    // content word "authentic", earning the 0.05 partial credit once
    let terms = vec!["authentication".to_string()];
    let (score, reason) = score_file_content("authentic methods, authentic flows", &terms);

    assert!((score - 0.05).abs() < 1e-9);
    assert_eq!(reason, "content matches");
}

#[test]
fn test_content_partial_requires_length() {
    // Both sides length 3: no partial credit in either direction
    let terms = vec!["api".to_string()];
    let (score, reason) = score_file_content("abc def", &terms);

    assert_eq!(score, 0.0);
    assert!(reason.is_empty());
}

#[test]
fn test_content_no_match() {
    let terms = normalize_query("missing");
    let (score, reason) = score_file_content("nothing relevant", &terms);

    assert_eq!(score, 0.0);
    assert!(reason.is_empty());
}

#[test]
fn test_is_word_in_string() {
    assert!(is_word_in_string("hello world", "hello"));
    assert!(is_word_in_string("hello, world!", "hello"));
    assert!(!is_word_in_string("hello world", "hell"));
    assert!(is_word_in_string("Hello World", "hello"));
    assert!(is_word_in_string("api-documentation", "api"));
    assert!(!is_word_in_string("application", "api"));
}
