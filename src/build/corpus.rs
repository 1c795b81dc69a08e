// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus input for the build pipeline.
//!
//! The corpus is one document per line; a parallel `urls.txt` carries one
//! URL-or-label per line, aligned by line number. Documents past the end of
//! the URL list get a synthetic `Doc #<id>` label. A blank corpus line is a
//! valid, empty document - it still gets an id and a label.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Label-list file name under the data directory.
pub const URLS_FILE: &str = "urls.txt";

/// Load the URL/label list. A missing or unreadable file is not an error:
/// the corpus simply runs on synthetic labels.
pub fn load_labels(path: &Path) -> Vec<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Vec::new(),
    };
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .collect()
}

/// Label for a document: the aligned URL when one exists, `Doc #<id>`
/// otherwise.
pub fn label_for(doc_id: u32, labels: &[String]) -> String {
    labels
        .get(doc_id as usize)
        .cloned()
        .unwrap_or_else(|| format!("Doc #{}", doc_id))
}
