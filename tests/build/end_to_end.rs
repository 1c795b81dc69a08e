//! Full pipeline: write a corpus to disk, build, reload, re-query.

use super::common::{build_test_searcher, doc_ids, news_corpus};
use poisk::build::{run_build, IndexManifest, MANIFEST_FILE, URLS_FILE};
use poisk::{format, Searcher};
use std::fs;
use std::path::Path;

fn write_corpus(dir: &Path, lines: &[&str]) -> String {
    let path = dir.join("corpus.txt");
    fs::write(&path, format!("{}\n", lines.join("\n"))).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn build_then_reload_answers_the_same_queries() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let corpus = write_corpus(dir.path(), &news_corpus());

    run_build(&corpus, data_dir.to_str().unwrap()).unwrap();
    let reloaded = Searcher::load(&data_dir).unwrap();

    // The reloaded index answers exactly like the in-memory one.
    let in_memory = build_test_searcher(&news_corpus());
    for query in ["россия", "россия & сша", "путин | медведев", "экономика"] {
        assert_eq!(
            doc_ids(&reloaded.search(query)),
            doc_ids(&in_memory.search(query)),
            "query {:?} diverged after reload",
            query
        );
    }
}

#[test]
fn urls_file_supplies_labels_and_falls_back_past_the_end() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join(URLS_FILE), "https://news.ru/a\n").unwrap();

    let corpus = write_corpus(dir.path(), &["первый", "второй"]);
    run_build(&corpus, data_dir.to_str().unwrap()).unwrap();

    let searcher = Searcher::load(&data_dir).unwrap();
    assert_eq!(searcher.label(poisk::DocId(0)), "https://news.ru/a");
    assert_eq!(searcher.label(poisk::DocId(1)), "Doc #1");
}

#[test]
fn manifest_records_build_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let corpus = write_corpus(dir.path(), &news_corpus());

    run_build(&corpus, data_dir.to_str().unwrap()).unwrap();

    let manifest = IndexManifest::load(&data_dir.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest.documents, 3);
    assert_eq!(manifest.tokens, 9);
    assert!(manifest.terms > 0);
}

#[test]
fn emitted_index_file_is_sorted_and_parseable_by_eye() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let corpus = write_corpus(dir.path(), &["кот собака", "кот"]);

    run_build(&corpus, data_dir.to_str().unwrap()).unwrap();

    let text = fs::read_to_string(data_dir.join(format::INDEX_FILE)).unwrap();
    assert_eq!(text, "кот:0,1;1,1;\nсобак:0,1;\n");
}

#[test]
fn loading_a_missing_index_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Searcher::load(&dir.path().join("nowhere")).unwrap_err();
    assert!(err.contains("Failed to read"));
}

#[test]
fn blank_lines_are_empty_documents_with_ids() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let corpus = write_corpus(dir.path(), &["кот", "", "собака"]);

    run_build(&corpus, data_dir.to_str().unwrap()).unwrap();

    let searcher = Searcher::load(&data_dir).unwrap();
    assert_eq!(searcher.doc_count(), 3);
    assert_eq!(doc_ids(&searcher.search("собака")), [2]);
}
