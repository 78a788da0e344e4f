use serde::Serialize;

/// A file that matched a search query.
#[derive(Debug, Clone, Serialize)]
pub struct FileMatch {
    /// Relative path to the file
    pub path: String,
    /// Relevance score (0.0 to 1.0)
    pub score: f64,
    /// Human-readable explanation of why this file matches
    pub reason: String,
    /// Just the filename for quick reference
    #[serde(rename = "filename")]
    pub file_name: String,
}

/// A line-addressed excerpt window with an associated relevance score.
#[derive(Debug, Clone)]
pub struct ContentSection {
    pub start_line: usize,
    pub end_line: usize,
    pub score: f64,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::FileMatch;

    #[test]
    fn test_file_match_serializes_with_filename_key() {
        let json = serde_json::to_string(&FileMatch {
            path: "docs/api.md".to_string(),
            score: 0.5,
            reason: "filename contains 'api'".to_string(),
            file_name: "api.md".to_string(),
        })
        .expect("serialization failed");

        assert!(json.contains("\"filename\":\"api.md\""));
        assert!(json.contains("\"path\":\"docs/api.md\""));
    }
}
