// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Poisk CLI: build and query Russian full-text indexes.
//!
//! ```bash
//! # Build the index from a corpus (one document per line)
//! poisk index data/corpus.txt
//!
//! # Search interactively, top 10 results per query
//! poisk search
//! ```
//!
//! The search prompt reads boolean queries (`&` binds tighter than `|`)
//! until `exit` or EOF. Results print as `[docId] (score: X) <label>`.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use poisk::build::{run_build, IndexManifest, MANIFEST_FILE};
use poisk::Searcher;

mod cli;
use cli::display::{doc_id_badge, prompt, score_value, timing_secs};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Index { corpus, data_dir } => {
            if let Err(e) = run_build(&corpus, &data_dir) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
        Commands::Search { data_dir, limit } => {
            if let Err(e) = run_search(&data_dir, limit) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Load the index and serve queries until `exit` or EOF.
fn run_search(data_dir: &str, limit: usize) -> Result<(), String> {
    let data_dir = Path::new(data_dir);

    println!("Loading index...");
    let searcher = Searcher::load(data_dir)?;
    if searcher.is_empty() {
        return Err("Index is empty. Run `poisk index` first.".to_string());
    }

    println!(
        "Index loaded. {} terms, {} docs.",
        searcher.term_count(),
        searcher.doc_count()
    );
    if let Some(manifest) = IndexManifest::load(&data_dir.join(MANIFEST_FILE)) {
        println!(
            "Built from {} tokens in {:.2}s.",
            manifest.tokens, manifest.build_seconds
        );
    }
    println!("Enter query (or 'exit'):");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n{}", prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let query = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(format!("Failed to read query: {}", e)),
            None => break, // EOF
        };
        if query.trim() == "exit" {
            break;
        }

        let start = Instant::now();
        let hits = searcher.search(&query);
        let elapsed = start.elapsed();

        println!(
            "Found {} documents in {}:",
            hits.len(),
            timing_secs(elapsed.as_secs_f64())
        );
        for hit in hits.iter().take(limit) {
            println!(
                "{} (score: {}) {}",
                doc_id_badge(hit.doc_id.get()),
                score_value(hit.score),
                searcher.label(hit.doc_id)
            );
        }
        if hits.len() > limit {
            println!("... and {} more.", hits.len() - limit);
        }
    }

    Ok(())
}
