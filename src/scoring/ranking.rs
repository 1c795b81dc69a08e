// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Descending by score, with doc id as the tiebreaker so equal-score runs
//! come out in corpus order. Scores are finite by construction (sums of
//! finite products), so the partial comparison below never actually falls
//! through to the tiebreaker on NaN.

use std::cmp::Ordering;

use crate::analyze::analyze;
use crate::index::InvertedIndex;
use crate::scoring::score_document;
use crate::types::{DocId, SearchHit};

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Doc id** - ascending, for absolute determinism
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc_id.cmp(&b.doc_id),
    }
}

/// Score and rank a candidate set against the original query string.
///
/// The query is re-analyzed here in full - not per and-term - so ranking
/// sees every token the user typed, including repeats and tokens the
/// boolean evaluator dropped past the first of each and-term.
pub fn rank(
    candidates: &[DocId],
    query: &str,
    index: &InvertedIndex,
    total_docs: usize,
) -> Vec<SearchHit> {
    let terms: Vec<String> = analyze(query).collect();

    let mut hits: Vec<SearchHit> = candidates
        .iter()
        .map(|&doc_id| SearchHit {
            doc_id,
            score: score_document(doc_id, &terms, index, total_docs),
        })
        .collect();

    hits.sort_by(compare_hits);
    hits
}
