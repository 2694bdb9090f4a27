//! Fixture corpus regression tests
//!
//! Every document under `fixtures/valid` must validate cleanly, and every
//! document under `fixtures/invalid` must produce at least one invalid
//! report.

use std::path::PathBuf;

use docqa_core::corpus::Corpus;
use docqa_validate::{run_corpus, run_suite, Expectation};

fn fixtures(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn describe_failures(outcome: &docqa_validate::CorpusOutcome) -> String {
    outcome
        .failures()
        .map(|d| format!("{} ({})", d.location(), d.root))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn valid_corpus_passes() {
    let corpus = Corpus::load_dir(fixtures("valid")).unwrap();
    assert_eq!(corpus.len(), 5);

    let outcome = run_corpus(&corpus, Expectation::Valid);
    assert!(outcome.passed(), "unexpected failures:\n{}", describe_failures(&outcome));
    assert!(outcome.test_results().all(|r| r.valid && r.message.is_empty()));
}

#[test]
fn invalid_corpus_fails_every_document() {
    let corpus = Corpus::load_dir(fixtures("invalid")).unwrap();
    assert_eq!(corpus.len(), 9);

    let outcome = run_corpus(&corpus, Expectation::Invalid);
    assert!(outcome.passed(), "unexpectedly valid:\n{}", describe_failures(&outcome));
}

#[test]
fn documents_keep_file_order() {
    let corpus = Corpus::load_dir(fixtures("invalid")).unwrap();
    let names: Vec<String> = corpus
        .iter()
        .map(|d| {
            let file = d.source.file_name().unwrap().to_string_lossy();
            format!("{}#{}", file, d.index)
        })
        .collect();

    assert_eq!(names[0], "attributes.json#0");
    assert_eq!(names[4], "attributes.json#4");
    assert_eq!(names[5], "structure.json#0");
}

#[test]
fn suite_passes_and_swapped_suite_fails() {
    let valid = Corpus::load_dir(fixtures("valid")).unwrap();
    let invalid = Corpus::load_dir(fixtures("invalid")).unwrap();

    assert!(run_suite(&valid, &invalid).passed());

    let swapped = run_suite(&invalid, &valid);
    assert!(!swapped.passed());
    assert_eq!(swapped.valid.failure_count(), 9);
    assert_eq!(swapped.invalid.failure_count(), 5);
}

#[test]
fn one_test_result_per_node() {
    let corpus = Corpus::load_file(fixtures("valid").join("chapters.json")).unwrap();
    let outcome = run_corpus(&corpus, Expectation::Valid);

    let nodes: usize = corpus.iter().map(|d| d.root.node_count()).sum();
    assert_eq!(outcome.total_reports(), nodes);
    // 7 nodes in the first chapter, 5 in the second
    assert_eq!(nodes, 12);
}
