//! Query grammar edge cases: precedence, trimming, the first-token rule.

use super::common::{build_test_searcher, doc_ids};

#[test]
fn and_binds_tighter_than_or() {
    let searcher = build_test_searcher(&[
        "кот собака",
        "кот",
        "попугай",
    ]);
    // (кот & собака) | попугай → {0} ∪ {2}
    assert_eq!(doc_ids(&searcher.search("кот & собака | попугай")), [0, 2]);
}

#[test]
fn whitespace_and_tabs_around_terms_are_trimmed() {
    let searcher = build_test_searcher(&["кот собака"]);
    assert_eq!(doc_ids(&searcher.search("\tкот &   собака\t")), [0]);
}

#[test]
fn multi_word_and_term_uses_first_token_only() {
    let searcher = build_test_searcher(&["кот", "собака"]);
    // The and-term "кот собака" reduces to кот; doc 1 must not match.
    assert_eq!(doc_ids(&searcher.search("кот собака")), [0]);
}

#[test]
fn empty_and_terms_are_skipped_within_a_group() {
    let searcher = build_test_searcher(&["кот собака"]);
    // The 123 and-term analyzes to nothing and drops out of the group.
    assert_eq!(doc_ids(&searcher.search("кот & 123 & собака")), [0]);
}

#[test]
fn groups_with_no_usable_terms_contribute_nothing() {
    let searcher = build_test_searcher(&["кот"]);
    assert_eq!(doc_ids(&searcher.search("... | кот | 42")), [0]);
}

#[test]
fn operators_inside_words_split_them() {
    // кот&собака is two and-terms even without spaces.
    let searcher = build_test_searcher(&["кот собака", "кот"]);
    assert_eq!(doc_ids(&searcher.search("кот&собака")), [0]);
}

#[test]
fn duplicate_or_groups_do_not_duplicate_results() {
    let searcher = build_test_searcher(&["кот"]);
    assert_eq!(doc_ids(&searcher.search("кот | кот")), [0]);
}
