//! TF-IDF ranking behavior at the searcher level.

use super::common::{build_test_searcher, doc_ids};

#[test]
fn higher_tf_wins_when_df_is_equal() {
    // Fillers keep df(кот)+1 below the document count so idf stays positive.
    let searcher = build_test_searcher(&[
        "кот кот кот",
        "кот собака",
        "экономика",
        "погода",
    ]);
    let hits = searcher.search("кот");
    assert_eq!(doc_ids(&hits), [0, 1]);
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn rare_terms_outweigh_common_ones() {
    let searcher = build_test_searcher(&[
        "кот редкость",
        "кот",
        "кот",
        "кот",
        "погода",
        "новости",
    ]);
    // Both docs 0 and 1 contain кот; doc 0 also has the rare term.
    let hits = searcher.search("кот | редкость");
    assert_eq!(doc_ids(&hits)[0], 0);
}

#[test]
fn scores_tie_break_by_doc_id() {
    let searcher = build_test_searcher(&["кот", "кот", "кот"]);
    let hits = searcher.search("кот");
    assert_eq!(doc_ids(&hits), [0, 1, 2]);
    assert!(hits[0].score == hits[1].score && hits[1].score == hits[2].score);
}

#[test]
fn engine_returns_all_hits_not_just_top_ten() {
    let texts: Vec<String> = (0..25).map(|i| format!("кот номер {}", i)).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let searcher = build_test_searcher(&refs);
    // Truncation to the display limit is the presentation layer's job.
    assert_eq!(searcher.search("кот").len(), 25);
}

#[test]
fn query_repeats_raise_the_contribution() {
    let searcher = build_test_searcher(&[
        "кот собака",
        "собака попугай",
        "погода",
        "новости",
    ]);
    let single = searcher.search("кот | собака");
    let repeated = searcher.search("кот | кот | собака");
    let score_of = |hits: &[poisk::SearchHit], id: u32| {
        hits.iter().find(|h| h.doc_id.get() == id).unwrap().score
    };
    // Doc 0 contains кот, so repeating кот in the query doubles that part.
    assert!(score_of(&repeated, 0) > score_of(&single, 0));
    // Doc 1 has no кот; its score is untouched.
    assert!((score_of(&repeated, 1) - score_of(&single, 1)).abs() < 1e-12);
}
