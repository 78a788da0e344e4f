use anyhow::{Context, Result};
use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::models::FileMatch;
use crate::search::file_scoring::score_file;
use crate::search::query::normalize_query;

/// Extensions treated as documentation content.
static DOC_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["md", "html", "txt", "json", "yaml", "yml", "rst", "adoc"]
        .into_iter()
        .collect()
});

/// Results returned per OR-clause, and the cap on the merged set.
const CLAUSE_RESULT_CAP: usize = 10;

/// Returns true for files eligible for searching: a documentation extension
/// and a base name that is not dot-prefixed.
pub fn is_documentation_file(path: &Path) -> bool {
    let base = match path.file_name().and_then(|n| n.to_str()) {
        Some(base) => base,
        None => return false,
    };
    if base.starts_with('.') {
        return false;
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => DOC_EXTENSIONS.contains(ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Finds the files under `root` most relevant to a single-clause query.
///
/// Unreadable directory entries and files are skipped without aborting the
/// walk; only an inaccessible root is an error. `max_files == 0` yields an
/// empty result set.
pub fn find_relevant_files(root: &Path, query: &str, max_files: usize) -> Result<Vec<FileMatch>> {
    fs::metadata(root)
        .with_context(|| format!("search root is not accessible: {}", root.display()))?;

    let debug_mode = std::env::var("DEBUG").unwrap_or_default() == "1";
    let query_terms = normalize_query(query);

    let mut matches: Vec<FileMatch> = Vec::new();

    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        // Skip entries that cannot be listed, never fail the entire search
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if entry.file_type().is_none_or(|ft| ft.is_dir()) {
            continue;
        }

        let path = entry.path();
        if !is_documentation_file(path) {
            continue;
        }

        let rel_path = path.strip_prefix(root).unwrap_or(path);
        // Read failures degrade to a zero content signal for this file
        let content = fs::read_to_string(path).ok();

        let (score, reason) = score_file(rel_path, content.as_deref(), &query_terms);
        if score > 0.0 {
            if debug_mode {
                println!(
                    "DEBUG: {} scored {score:.3} ({reason})",
                    rel_path.display()
                );
            }
            matches.push(FileMatch {
                path: rel_path.to_string_lossy().replace('\\', "/"),
                score,
                reason,
                file_name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            });
        }
    }

    sort_matches(&mut matches);

    if max_files == 0 {
        return Ok(Vec::new());
    }
    matches.truncate(max_files);

    Ok(matches)
}

/// Top-level search entry point handling `|`-separated OR-clauses.
///
/// Each clause is searched independently with an internal cap, the results are
/// merged keeping the best score per path, and the reason is annotated with
/// the clause(s) that matched. Queries without a pipe fall through to the
/// single-clause search unchanged.
pub fn search_with_clauses(root: &Path, query: &str, max_files: usize) -> Result<Vec<FileMatch>> {
    if !query.contains('|') {
        return find_relevant_files(root, query, max_files);
    }

    let mut merged: HashMap<String, FileMatch> = HashMap::new();

    for clause in query.split('|') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        for mut result in find_relevant_files(root, clause, CLAUSE_RESULT_CAP)? {
            match merged.get(&result.path) {
                Some(existing) if result.score <= existing.score => {}
                Some(existing) => {
                    result.reason = format!("matched terms: {clause}, {}", existing.reason);
                    merged.insert(result.path.clone(), result);
                }
                None => {
                    result.reason = format!("matched term: {clause} ({})", result.reason);
                    merged.insert(result.path.clone(), result);
                }
            }
        }
    }

    let mut all_results: Vec<FileMatch> = merged.into_values().collect();
    sort_matches(&mut all_results);
    all_results.truncate(CLAUSE_RESULT_CAP);

    Ok(all_results)
}

/// Descending score, then lexical path order so ties are reproducible.
fn sort_matches(matches: &mut [FileMatch]) {
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.path.cmp(&b.path))
    });
}
