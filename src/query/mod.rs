// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean query evaluation.
//!
//! The query language is two operators and nothing else: `&` binds tighter
//! than `|`, there are no parentheses, no negation, no quoting. A query
//! splits into or-groups on `|`; each or-group splits into and-terms on `&`.
//!
//! Each and-term is trimmed, analyzed, and reduced to its FIRST stemmed
//! token - a multi-word and-term quietly loses everything after the first
//! word. Compatibility behavior, kept on purpose; tests pin it.
//!
//! An and-term that analyzes to nothing (punctuation, digits) is skipped.
//! A group where every and-term was skipped contributes nothing, so the
//! degenerate queries - empty string, separators only - evaluate to an
//! empty result rather than an error.

pub mod merge;

use crate::analyze::analyze;
use crate::index::InvertedIndex;
use crate::types::DocId;

/// Evaluate a boolean query to the ordered set of matching doc ids.
///
/// Per group: intersect the posting doc ids of every usable and-term.
/// Across groups: union. Both stay ordered and unique throughout.
pub fn evaluate(query: &str, index: &InvertedIndex) -> Vec<DocId> {
    let mut result: Vec<DocId> = Vec::new();

    for group in query.split('|') {
        let mut group_result: Option<Vec<DocId>> = None;

        for raw_term in group.split('&') {
            let term = match first_term(raw_term) {
                Some(term) => term,
                None => continue,
            };

            let docs: Vec<DocId> = index
                .lookup(&term)
                .map(|list| list.doc_ids().collect())
                .unwrap_or_default();

            group_result = Some(match group_result {
                None => docs,
                Some(acc) => merge::intersect(&acc, &docs),
            });
        }

        if let Some(group_docs) = group_result {
            result = merge::union(&result, &group_docs);
        }
    }

    result
}

/// Trim an and-term and reduce it to its first analyzed token.
fn first_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c| c == ' ' || c == '\t');
    if trimmed.is_empty() {
        return None;
    }
    analyze(trimmed).next()
}
