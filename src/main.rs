use anyhow::Result;
use clap::Parser as ClapParser;
use colored::*;

mod cli;

use cli::Args;
use docsearch::{FileMatch, FsSearchEngine, SearchEngine};

fn main() -> Result<()> {
    let args = Args::parse();

    let engine = FsSearchEngine::new(&args.path);
    let results = engine.find_relevant_files(&args.query, args.max_results)?;

    if args.format == "json" {
        return print_json_results(&engine, &results, &args);
    }

    if results.is_empty() {
        println!(
            "{}",
            format!("No results found for '{}'", args.query).yellow().bold()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} results for '{}'", results.len(), args.query).bold()
    );
    println!();

    for result in &results {
        println!("{}", "═".repeat(80).cyan());
        println!("{} {}", "Path:".bold().green(), result.path);
        println!("{} {:.2}", "Score:".bold().green(), result.score);
        if !result.reason.is_empty() {
            println!("{} {}", "Reason:".bold().green(), result.reason);
        }

        // Excerpt extraction is best-effort; a file that vanished mid-search
        // just renders without content
        if let Ok(content) = engine.extract_relevant_content(&result.path, &args.query, args.context)
        {
            if !content.is_empty() {
                println!();
                println!("{}", "Relevant content:".bold().magenta());
                println!("{}", "─".repeat(80).cyan());
                println!("{content}");
                println!("{}", "─".repeat(80).cyan());
            }
        }
        println!();
    }

    println!("{}", "═".repeat(80).cyan());

    Ok(())
}

/// Print results as a JSON object with the matches and a short summary.
fn print_json_results(engine: &FsSearchEngine, results: &[FileMatch], args: &Args) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonResult<'a> {
        #[serde(flatten)]
        file_match: &'a FileMatch,
        content: String,
    }

    let json_results: Vec<JsonResult> = results
        .iter()
        .map(|m| JsonResult {
            file_match: m,
            content: engine
                .extract_relevant_content(&m.path, &args.query, args.context)
                .unwrap_or_default(),
        })
        .collect();

    let wrapper = serde_json::json!({
        "results": json_results,
        "summary": {
            "count": results.len(),
            "query": args.query,
        }
    });

    println!("{}", serde_json::to_string_pretty(&wrapper)?);
    Ok(())
}
