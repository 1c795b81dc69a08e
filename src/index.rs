//! Inverted index construction and lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is strictly increasing in
//!    doc id. `insert` is only ever called with the current document's id,
//!    and documents arrive in id order.
//! 2. **TF_POSITIVE**: a posting exists only for terms that occurred, so
//!    `tf >= 1`.
//! 3. **FROZEN_AFTER_BUILD**: the searcher loads an index and never mutates
//!    it. There is no in-place update path.
//!
//! The map itself is a plain `HashMap`; per-document term counting uses a
//! second small `HashMap` so each document costs O(tokens), not O(tokens²).

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crate::analyze::analyze;
use crate::types::{DocId, PostingList};

/// Maps each document id to its display label (a URL, or `Doc #<id>` when
/// the URL list ran short). Only used to present results.
pub type DocMap = HashMap<DocId, String>;

/// Term → posting list, plus the per-document token counts the builder
/// measured along the way.
///
/// Created empty, grown exclusively through [`InvertedIndex::index_document`]
/// or [`InvertedIndex::insert`], then frozen: serialized by the indexer and
/// reloaded read-only by the searcher.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingList>,
    doc_lengths: HashMap<DocId, u32>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one posting. The caller guarantees doc ids arrive in
    /// non-decreasing order per term; indexing documents in corpus order
    /// does this naturally.
    pub fn insert(&mut self, term: &str, doc_id: DocId, tf: u32) {
        self.terms
            .entry(term.to_string())
            .or_default()
            .push(doc_id, tf);
    }

    /// Posting list for a term. Absence is a normal outcome, not an error:
    /// unknown query terms simply match no documents.
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Analyzed token count of a document, recorded at build time.
    pub fn doc_length(&self, doc_id: DocId) -> Option<u32> {
        self.doc_lengths.get(&doc_id).copied()
    }

    /// Sum of all recorded document lengths.
    pub fn token_count(&self) -> u64 {
        self.doc_lengths.values().map(|&n| u64::from(n)).sum()
    }

    /// Iterate `(term, posting list)` pairs in arbitrary map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p))
    }

    /// Record the length of a document without indexing any terms. Blank
    /// corpus lines are still valid (empty) documents.
    pub fn record_doc_length(&mut self, doc_id: DocId, len: u32) {
        self.doc_lengths.insert(doc_id, len);
    }

    /// Analyze one document and fold it into the index.
    ///
    /// Counts per-term frequencies with a local map, then emits exactly one
    /// posting per distinct term. Returns the document's token count.
    pub fn index_document(&mut self, doc_id: DocId, text: &str) -> u32 {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut token_count: u32 = 0;
        for term in analyze(text) {
            *counts.entry(term).or_insert(0) += 1;
            token_count += 1;
        }

        for (term, tf) in counts {
            self.insert(&term, doc_id, tf);
        }
        self.record_doc_length(doc_id, token_count);
        token_count
    }

    /// Write the index in the on-disk text format. See [`crate::format`].
    pub fn serialize<W: Write>(&self, writer: W) -> io::Result<()> {
        crate::format::write_index(self, writer)
    }

    /// Read an index from the on-disk text format. See [`crate::format`].
    pub fn deserialize<R: BufRead>(reader: R) -> io::Result<InvertedIndex> {
        crate::format::read_index(reader)
    }

    /// Check the posting invariants hold (debug assertion for tests).
    #[cfg(any(debug_assertions, test))]
    pub fn is_well_formed(&self) -> bool {
        self.terms.values().all(|list| {
            let postings = list.postings();
            postings.iter().all(|p| p.tf >= 1)
                && postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id)
        })
    }
}
