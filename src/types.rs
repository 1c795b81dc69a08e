// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the inverted index.
//!
//! These types define how documents, postings, and search hits fit together.
//! The only invariant that matters lives in [`PostingList`]: doc ids are
//! strictly increasing within a list. The sorted-merge intersection and union
//! in `query::merge` rely on it, and the builder satisfies it for free by
//! appending postings in corpus order.

use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Type-safe document identifier.
///
/// Assigned by a monotonic counter during indexing, in order of appearance in
/// the corpus. Stable for the lifetime of an index file. Prevents accidentally
/// passing a term frequency where a document id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// POSTINGS
// =============================================================================

/// One term-in-document occurrence record.
///
/// `tf` counts how many tokens of the document stemmed to the posting's term,
/// so it is at least 1 whenever a posting exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub tf: u32,
}

/// Ordered sequence of postings for a single term.
///
/// **Invariant**: doc ids are strictly increasing. `push` debug-asserts it;
/// the builder appends in corpus order, and the loader preserves file order
/// (which the writer emits ascending).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a posting. Caller guarantees `doc_id` exceeds the current tail.
    pub fn push(&mut self, doc_id: DocId, tf: u32) {
        debug_assert!(
            self.postings.last().map_or(true, |p| p.doc_id < doc_id),
            "posting doc ids must be strictly increasing"
        );
        self.postings.push(Posting { doc_id, tf });
    }

    /// Document frequency: the number of documents containing the term.
    #[inline]
    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    #[inline]
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Iterate the doc ids, in ascending order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.postings.iter().map(|p| p.doc_id)
    }

    /// Term frequency for one document, or 0 when the document has no posting.
    ///
    /// Binary search over the strictly-increasing doc ids.
    pub fn tf(&self, doc_id: DocId) -> u32 {
        match self.postings.binary_search_by_key(&doc_id, |p| p.doc_id) {
            Ok(i) => self.postings[i].tf,
            Err(_) => 0,
        }
    }
}

impl FromIterator<Posting> for PostingList {
    fn from_iter<I: IntoIterator<Item = Posting>>(iter: I) -> Self {
        PostingList {
            postings: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// What the ranking stage hands to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
}
