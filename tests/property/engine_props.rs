//! Evaluator and ranking properties over generated corpora.

use super::common::build_test_index;
use poisk::{evaluate, rank, DocId};
use proptest::prelude::*;

fn corpus() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[абв ]{0,24}", 1..10)
}

proptest! {
    /// Results are ordered unique doc ids within the corpus.
    #[test]
    fn evaluation_yields_sorted_unique_valid_ids(
        texts in corpus(),
        query in "[абв &|]{0,24}",
    ) {
        let index = build_test_index(
            &texts.iter().map(String::as_str).collect::<Vec<_>>()
        );
        let result = evaluate(&query, &index);
        prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.iter().all(|id| id.as_usize() < texts.len()));
    }

    /// AND narrows: adding an and-term never grows a group's result.
    #[test]
    fn and_terms_only_narrow(texts in corpus()) {
        let index = build_test_index(
            &texts.iter().map(String::as_str).collect::<Vec<_>>()
        );
        let broad = evaluate("а", &index);
        let narrow = evaluate("а & б", &index);
        prop_assert!(narrow.iter().all(|id| broad.contains(id)));
    }

    /// OR widens: adding an or-group never shrinks the result.
    #[test]
    fn or_groups_only_widen(texts in corpus()) {
        let index = build_test_index(
            &texts.iter().map(String::as_str).collect::<Vec<_>>()
        );
        let narrow = evaluate("а", &index);
        let broad = evaluate("а | б", &index);
        prop_assert!(narrow.iter().all(|id| broad.contains(id)));
    }

    /// Ranking is a permutation of its candidates, sorted by score.
    #[test]
    fn ranking_permutes_candidates(texts in corpus(), query in "[абв |&]{0,16}") {
        let index = build_test_index(
            &texts.iter().map(String::as_str).collect::<Vec<_>>()
        );
        let candidates = evaluate(&query, &index);
        let hits = rank(&candidates, &query, &index, texts.len());

        prop_assert_eq!(hits.len(), candidates.len());
        let mut returned: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        returned.sort();
        prop_assert_eq!(returned, candidates);
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
