//! Boolean full-text search over Russian corpora with TF-IDF ranking.
//!
//! This crate indexes a line-per-document corpus into an inverted index,
//! persists it as plain text, and answers `&`/`|` boolean queries ranked by
//! TF-IDF.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ analyze.rs  │────▶│   index.rs   │────▶│ query/ +     │
//! │ (segment,   │     │ (InvertedIdx,│     │ scoring/     │
//! │  stem.rs)   │     │  postings)   │     │ (eval, rank) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │              build/ (corpus → data files)                │
//! │              format.rs (text persistence)                │
//! │              search/ (Searcher: load + query)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The same analyzer runs on documents and queries, so matching happens in
//! stem space: `Россия`, `россии` and `россия` all meet at `росс`.
//!
//! # Usage
//!
//! ```
//! use poisk::{DocMap, DocId, InvertedIndex, Searcher};
//!
//! let mut index = InvertedIndex::new();
//! let mut docs = DocMap::new();
//! for (id, text) in ["Россия и США", "экономика России"].iter().enumerate() {
//!     let doc_id = DocId(id as u32);
//!     index.index_document(doc_id, text);
//!     docs.insert(doc_id, format!("Doc #{}", id));
//! }
//!
//! let searcher = Searcher::from_parts(index, docs);
//! let hits = searcher.search("россия & сша");
//! assert_eq!(hits.len(), 1);
//! ```

// Module declarations
pub mod analyze;
pub mod build;
pub mod format;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod stem;
mod types;

// Re-exports for public API
pub use analyze::{analyze, Tokens};
pub use index::{DocMap, InvertedIndex};
pub use query::evaluate;
pub use query::merge::{intersect, union};
pub use scoring::ranking::{compare_hits, rank};
pub use scoring::{idf, score_document};
pub use search::Searcher;
pub use stem::stem;
pub use types::{DocId, Posting, PostingList, SearchHit};
