// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF scoring.
//!
//! For a candidate document d and the analyzed query terms t₁…tₙ:
//!
//! ```text
//! score(d) = Σ  tf(tᵢ, d) · log10( N / (df(tᵢ) + 1) )
//! ```
//!
//! N is the total document count at load time, df a term's posting-list
//! length. The +1 in the denominator keeps the quotient finite for terms in
//! every document; with tiny corpora it can push the logarithm negative,
//! which is fine - scores only ever compare against each other.
//!
//! The query is re-analyzed as a whole string, so a term repeated in the
//! query counts twice. Terms absent from the index contribute nothing
//! (their tf is 0 everywhere).

use crate::index::InvertedIndex;
use crate::types::DocId;

/// Inverse document frequency for a document frequency under corpus size
/// `total_docs`.
#[inline]
pub fn idf(doc_freq: usize, total_docs: usize) -> f64 {
    (total_docs as f64 / (doc_freq as f64 + 1.0)).log10()
}

/// TF-IDF score of one document against a list of analyzed query terms.
pub fn score_document(
    doc_id: DocId,
    terms: &[String],
    index: &InvertedIndex,
    total_docs: usize,
) -> f64 {
    let mut score = 0.0;
    for term in terms {
        if let Some(list) = index.lookup(term) {
            let tf = list.tf(doc_id);
            if tf > 0 {
                score += f64::from(tf) * idf(list.doc_freq(), total_docs);
            }
        }
    }
    score
}
