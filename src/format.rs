// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk text format for the index files.
//!
//! Two line-oriented UTF-8 files, built for greppability rather than size:
//!
//! ```text
//! index_data.txt      <term>:<docId>,<tf>;<docId>,<tf>;…;
//! docs_map.txt        <docId>|<label>
//! ```
//!
//! Postings are written in ascending doc id order (the build invariant) and
//! terms in sorted order so repeated builds of the same corpus produce
//! byte-identical files. The reader accepts any term order.
//!
//! # Degradation policy
//!
//! These files are corpus-derived artifacts, so the loaders degrade per line:
//! a line with no separator, an unparsable number, or out-of-order doc ids is
//! dropped silently and the rest of the file still loads. Only I/O failures
//! (missing file, read error) surface to the caller.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::index::{DocMap, InvertedIndex};
use crate::types::{DocId, PostingList};

/// Default index file name under the data directory.
pub const INDEX_FILE: &str = "index_data.txt";
/// Default doc-map file name under the data directory.
pub const DOCS_FILE: &str = "docs_map.txt";

// =============================================================================
// INVERTED INDEX
// =============================================================================

/// Write the index in the line format above, terms sorted.
pub fn write_index<W: Write>(index: &InvertedIndex, writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);

    let mut terms: Vec<(&str, &PostingList)> = index.iter().collect();
    terms.sort_unstable_by_key(|(term, _)| *term);

    for (term, list) in terms {
        write!(out, "{}:", term)?;
        for posting in list.postings() {
            write!(out, "{},{};", posting.doc_id, posting.tf)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Read an index written by [`write_index`] (or by hand; order and trailing
/// separators are forgiven, malformed lines are skipped).
///
/// Doc lengths are a build-time measurement and are not part of the format,
/// so a loaded index reports no lengths.
pub fn read_index<R: BufRead>(reader: R) -> io::Result<InvertedIndex> {
    let mut index = InvertedIndex::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((term, list)) = parse_index_line(&line) {
            for posting in list.postings() {
                index.insert(term, posting.doc_id, posting.tf);
            }
        }
    }
    Ok(index)
}

/// Parse one `term:doc,tf;doc,tf;` line. `None` means the line is malformed
/// and should be skipped: no colon, empty term, bad number, or doc ids that
/// fail the strictly-increasing invariant.
fn parse_index_line(line: &str) -> Option<(&str, PostingList)> {
    let (term, rest) = line.split_once(':')?;
    if term.is_empty() {
        return None;
    }

    let mut list = PostingList::new();
    let mut prev: Option<u32> = None;
    for chunk in rest.split(';') {
        if chunk.is_empty() {
            continue; // trailing separator
        }
        let (doc, tf) = chunk.split_once(',')?;
        let doc: u32 = doc.parse().ok()?;
        let tf: u32 = tf.parse().ok()?;
        if prev.is_some_and(|p| p >= doc) {
            return None;
        }
        prev = Some(doc);
        list.push(DocId(doc), tf);
    }
    Some((term, list))
}

/// Write the index to a file path.
pub fn save_index(index: &InvertedIndex, path: &Path) -> io::Result<()> {
    write_index(index, File::create(path)?)
}

/// Load the index from a file path.
pub fn load_index(path: &Path) -> io::Result<InvertedIndex> {
    read_index(BufReader::new(File::open(path)?))
}

// =============================================================================
// DOC MAP
// =============================================================================

/// Write the doc map, one `<docId>|<label>` line per document, ascending.
pub fn write_doc_map<W: Write>(docs: &DocMap, writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);

    let mut entries: Vec<(&DocId, &String)> = docs.iter().collect();
    entries.sort_unstable_by_key(|(id, _)| **id);

    for (id, label) in entries {
        writeln!(out, "{}|{}", id, label)?;
    }
    out.flush()
}

/// Read a doc map. Malformed lines (no pipe, unparsable id) are skipped.
pub fn read_doc_map<R: BufRead>(reader: R) -> io::Result<DocMap> {
    let mut docs = DocMap::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((id, label)) = line.split_once('|') {
            if let Ok(id) = id.parse::<u32>() {
                docs.insert(DocId(id), label.to_string());
            }
        }
    }
    Ok(docs)
}

/// Write the doc map to a file path.
pub fn save_doc_map(docs: &DocMap, path: &Path) -> io::Result<()> {
    write_doc_map(docs, File::create(path)?)
}

/// Load the doc map from a file path.
pub fn load_doc_map(path: &Path) -> io::Result<DocMap> {
    read_doc_map(BufReader::new(File::open(path)?))
}
