// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The read side: load a persisted index and answer queries.
//!
//! A [`Searcher`] owns everything a query needs - the inverted index, the
//! doc map, and the document count the TF-IDF formula divides by. It is
//! loaded once and then only read; there is no way to mutate it afterwards,
//! which is exactly the lifecycle the on-disk format promises.

use std::path::Path;

use crate::format;
use crate::index::{DocMap, InvertedIndex};
use crate::query;
use crate::scoring::ranking::rank;
use crate::types::{DocId, SearchHit};

/// A loaded, immutable index ready to answer queries.
#[derive(Debug)]
pub struct Searcher {
    index: InvertedIndex,
    docs: DocMap,
}

impl Searcher {
    /// Load the index and doc map from a data directory.
    ///
    /// Missing files surface as errors with the path baked in; malformed
    /// lines inside the files were already skipped by the loaders.
    pub fn load(data_dir: &Path) -> Result<Searcher, String> {
        let index_path = data_dir.join(format::INDEX_FILE);
        let docs_path = data_dir.join(format::DOCS_FILE);

        let index = format::load_index(&index_path)
            .map_err(|e| format!("Failed to read {}: {}", index_path.display(), e))?;
        let docs = format::load_doc_map(&docs_path)
            .map_err(|e| format!("Failed to read {}: {}", docs_path.display(), e))?;

        Ok(Searcher { index, docs })
    }

    /// Build a searcher from in-memory parts (tests, benches).
    pub fn from_parts(index: InvertedIndex, docs: DocMap) -> Searcher {
        Searcher { index, docs }
    }

    /// Evaluate and rank a query. Returns ALL ranked hits; the caller
    /// decides how many to show.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let candidates = query::evaluate(query, &self.index);
        rank(&candidates, query, &self.index, self.doc_count())
    }

    /// Display label for a document, `Doc #<id>` when the map has none.
    pub fn label(&self, doc_id: DocId) -> String {
        self.docs
            .get(&doc_id)
            .cloned()
            .unwrap_or_else(|| format!("Doc #{}", doc_id))
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    pub fn is_empty(&self) -> bool {
        self.index.term_count() == 0
    }
}
