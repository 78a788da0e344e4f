use clap::Parser as ClapParser;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Query to search for, optionally with |-separated OR clauses
    pub query: String,

    /// Path to search in
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Number of context lines to show around matches
    #[arg(short, long, default_value_t = 10)]
    pub context: usize,

    /// Maximum number of results to return
    #[arg(long = "max-results", default_value_t = 10)]
    pub max_results: usize,

    /// Output format for search results
    #[arg(long, default_value = "terminal", value_parser = ["terminal", "json"])]
    pub format: String,
}
