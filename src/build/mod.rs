// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build pipeline: corpus in, index files out.
//!
//! Streams the corpus line-by-line (one document per line), analyzes each
//! document, accumulates postings, and writes the three data files:
//! `index_data.txt`, `docs_map.txt`, and the `index_meta.json` sidecar.
//! Memory stays proportional to the vocabulary plus postings; the corpus
//! itself is never held in full.
//!
//! The builder is deliberately single-threaded. Documents must receive ids
//! in corpus order, and the posting-list invariant (strictly increasing doc
//! ids) falls out of processing them that way. A progress counter keeps the
//! operator informed on corpora large enough to take a while.

pub mod corpus;
pub mod manifest;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::format;
use crate::index::{DocMap, InvertedIndex};
use crate::types::DocId;

pub use corpus::{label_for, load_labels, URLS_FILE};
pub use manifest::{IndexManifest, MANIFEST_FILE};

fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {pos} {msg}")
        .expect("static template")
}

/// Build the index from a corpus file and write everything under `data_dir`.
pub fn run_build(corpus_path: &str, data_dir: &str) -> Result<(), String> {
    let corpus_path = Path::new(corpus_path);
    let data_dir = Path::new(data_dir);

    let corpus = File::open(corpus_path)
        .map_err(|e| format!("Failed to open corpus {}: {}", corpus_path.display(), e))?;
    let labels = corpus::load_labels(&data_dir.join(URLS_FILE));

    let pb = ProgressBar::new_spinner();
    pb.set_style(create_progress_style());
    pb.set_prefix("Indexing");
    pb.set_message("documents...");

    let start = Instant::now();
    let mut index = InvertedIndex::new();
    let mut doc_map = DocMap::new();

    let mut next_id: u32 = 0;
    for line in BufReader::new(corpus).lines() {
        let line =
            line.map_err(|e| format!("Failed to read {}: {}", corpus_path.display(), e))?;

        let doc_id = DocId(next_id);
        doc_map.insert(doc_id, corpus::label_for(next_id, &labels));
        index.index_document(doc_id, &line);

        next_id += 1;
        pb.inc(1);
    }
    let elapsed = start.elapsed();
    pb.finish_with_message(format!("analyzed {} documents", next_id));

    fs::create_dir_all(data_dir)
        .map_err(|e| format!("Failed to create {}: {}", data_dir.display(), e))?;

    let index_path = data_dir.join(format::INDEX_FILE);
    format::save_index(&index, &index_path)
        .map_err(|e| format!("Failed to write {}: {}", index_path.display(), e))?;

    let docs_path = data_dir.join(format::DOCS_FILE);
    format::save_doc_map(&doc_map, &docs_path)
        .map_err(|e| format!("Failed to write {}: {}", docs_path.display(), e))?;

    let manifest = IndexManifest {
        version: IndexManifest::VERSION,
        documents: doc_map.len(),
        terms: index.term_count(),
        tokens: index.token_count(),
        build_seconds: elapsed.as_secs_f64(),
    };
    let manifest_path = data_dir.join(MANIFEST_FILE);
    manifest
        .write(&manifest_path)
        .map_err(|e| format!("Failed to write {}: {}", manifest_path.display(), e))?;

    eprintln!();
    eprintln!("✅ Build complete in {:.2}s", elapsed.as_secs_f64());
    eprintln!(
        "   {} documents │ {} terms │ {} tokens",
        manifest.documents, manifest.terms, manifest.tokens
    );
    eprintln!("   → {}", index_path.display());
    eprintln!("   → {}", docs_path.display());

    Ok(())
}
