//! End-to-end query scenarios over the inline news corpus.

use super::common::{build_test_searcher, doc_ids, news_corpus};

#[test]
fn and_query_finds_the_shared_document() {
    let searcher = build_test_searcher(&news_corpus());
    assert_eq!(doc_ids(&searcher.search("россия & сша")), [0]);
}

#[test]
fn or_query_unions_both_sides() {
    let searcher = build_test_searcher(&news_corpus());
    assert_eq!(doc_ids(&searcher.search("путин | медведев")), [1]);
}

#[test]
fn single_term_query() {
    let searcher = build_test_searcher(&news_corpus());
    assert_eq!(doc_ids(&searcher.search("экономика")), [2]);
}

#[test]
fn inflected_query_matches_inflected_document() {
    // России in doc 2, Россия in doc 0: both stem to росс.
    let searcher = build_test_searcher(&news_corpus());
    assert_eq!(doc_ids(&searcher.search("россии")), [0, 2]);
}

#[test]
fn degenerate_queries_return_empty_without_error() {
    let searcher = build_test_searcher(&news_corpus());
    for query in ["", "   ", "&&|", "&", "|", "123 456", "... --- !!!"] {
        assert!(
            searcher.search(query).is_empty(),
            "query {:?} should be empty",
            query
        );
    }
}

#[test]
fn unknown_terms_match_nothing() {
    let searcher = build_test_searcher(&news_corpus());
    assert!(searcher.search("блокчейн").is_empty());
    assert!(searcher.search("россия & блокчейн").is_empty());
    assert_eq!(doc_ids(&searcher.search("блокчейн | россия")), [0, 2]);
}

#[test]
fn blank_documents_are_searchable_corpus_members() {
    let searcher = build_test_searcher(&["", "кот", ""]);
    assert_eq!(searcher.doc_count(), 3);
    assert_eq!(doc_ids(&searcher.search("кот")), [1]);
}
