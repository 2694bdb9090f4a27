//! Fixture harness
//!
//! Runs the validator over a pre-classified corpus and checks every
//! document against the corpus expectation:
//!
//! - [`Expectation::Valid`]: every report of the document must be valid.
//! - [`Expectation::Invalid`]: at least one report must be invalid. Since
//!   invalidity propagates upward, this is the root report being invalid.
//!
//! Each report also becomes one [`TestResult`], for test runners that turn
//! reports into individual assertions.

use std::fmt;
use std::path::PathBuf;

use docqa_core::corpus::{Corpus, Document};
use serde::Serialize;
use tracing::info;

use crate::validate;

/// Expected classification of a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    Valid,
    Invalid,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Valid => write!(f, "valid"),
            Expectation::Invalid => write!(f, "invalid"),
        }
    }
}

/// One report, detached from the tree it was computed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    /// Description of the node
    pub node: String,
    /// Concatenated reasons, empty when valid
    pub message: String,
    /// Verdict of the node
    pub valid: bool,
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.node)
    }
}

/// Outcome of one corpus document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// File the document came from
    pub source: PathBuf,
    /// Position in that file
    pub index: usize,
    /// Description of the root node
    pub root: String,
    /// Every report of the document, in validation order
    pub reports: Vec<TestResult>,
    /// Whether the document met the expectation
    pub passed: bool,
}

impl DocumentOutcome {
    /// `file#index`, for failure listings
    pub fn location(&self) -> String {
        format!("{}#{}", self.source.display(), self.index)
    }
}

/// Outcome of one corpus
#[derive(Debug, Clone, Serialize)]
pub struct CorpusOutcome {
    /// What the corpus was expected to be
    pub expectation: Expectation,
    /// One outcome per document, in corpus order
    pub documents: Vec<DocumentOutcome>,
}

impl CorpusOutcome {
    /// Check if every document met the expectation
    pub fn passed(&self) -> bool {
        self.documents.iter().all(|d| d.passed)
    }

    /// Documents that did not meet the expectation
    pub fn failures(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.documents.iter().filter(|d| !d.passed)
    }

    /// Get the number of failed documents
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Get the number of reports across all documents
    pub fn total_reports(&self) -> usize {
        self.documents.iter().map(|d| d.reports.len()).sum()
    }

    /// Every report across all documents, in order
    pub fn test_results(&self) -> impl Iterator<Item = &TestResult> {
        self.documents.iter().flat_map(|d| d.reports.iter())
    }
}

/// Outcome of a valid and an invalid corpus
#[derive(Debug, Clone, Serialize)]
pub struct SuiteOutcome {
    pub valid: CorpusOutcome,
    pub invalid: CorpusOutcome,
}

impl SuiteOutcome {
    /// Check if both corpora met their expectations
    pub fn passed(&self) -> bool {
        self.valid.passed() && self.invalid.passed()
    }
}

/// Validate every document of a corpus against an expectation
pub fn run_corpus(corpus: &Corpus, expectation: Expectation) -> CorpusOutcome {
    let documents: Vec<DocumentOutcome> = corpus
        .iter()
        .map(|document| run_document(document, expectation))
        .collect();
    let outcome = CorpusOutcome {
        expectation,
        documents,
    };

    info!(
        expectation = %expectation,
        documents = outcome.documents.len(),
        reports = outcome.total_reports(),
        failures = outcome.failure_count(),
        "corpus checked"
    );
    outcome
}

/// Run both corpora, each against its own expectation
pub fn run_suite(valid: &Corpus, invalid: &Corpus) -> SuiteOutcome {
    SuiteOutcome {
        valid: run_corpus(valid, Expectation::Valid),
        invalid: run_corpus(invalid, Expectation::Invalid),
    }
}

fn run_document(document: &Document, expectation: Expectation) -> DocumentOutcome {
    let reports = validate(&document.root);
    let passed = match expectation {
        Expectation::Valid => reports.all_valid(),
        Expectation::Invalid => reports.has_invalid(),
    };

    DocumentOutcome {
        source: document.source.clone(),
        index: document.index,
        root: document.root.to_string(),
        reports: reports
            .iter()
            .map(|report| TestResult {
                node: report.node.to_string(),
                message: report.message(),
                valid: report.is_valid(),
            })
            .collect(),
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_ast::builder::{chapter, image, paragraph, text};
    use docqa_ast::Node;

    fn corpus(nodes: Vec<Node>) -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_nodes("inline.json", nodes);
        corpus
    }

    #[test]
    fn test_valid_expectation() {
        let good = corpus(vec![
            text("a").into(),
            image().with_src("a.png").into(),
        ]);
        let outcome = run_corpus(&good, Expectation::Valid);
        assert!(outcome.passed());
        assert_eq!(outcome.total_reports(), 2);
    }

    #[test]
    fn test_invalid_expectation() {
        let bad = corpus(vec![
            text("").into(),
            chapter().with_child(paragraph().with_child(text("ok"))).into(),
        ]);
        let outcome = run_corpus(&bad, Expectation::Invalid);
        assert!(outcome.passed());

        let results: Vec<bool> = outcome.test_results().map(|r| r.valid).collect();
        assert_eq!(results, vec![false, true, true, false]);
    }

    #[test]
    fn test_failures_are_listed() {
        let mixed = corpus(vec![text("fine").into(), text("").into()]);

        let as_valid = run_corpus(&mixed, Expectation::Valid);
        assert!(!as_valid.passed());
        let failed: Vec<String> = as_valid.failures().map(|d| d.location()).collect();
        assert_eq!(failed, vec!["inline.json#1"]);

        let as_invalid = run_corpus(&mixed, Expectation::Invalid);
        assert_eq!(as_invalid.failure_count(), 1);
        assert_eq!(as_invalid.failures().next().unwrap().index, 0);
    }

    #[test]
    fn test_suite() {
        let good = corpus(vec![text("a").into()]);
        let bad = corpus(vec![image().into()]);
        assert!(run_suite(&good, &bad).passed());
        assert!(!run_suite(&bad, &good).passed());
    }

    #[test]
    fn test_empty_corpus_passes() {
        let outcome = run_corpus(&Corpus::new(), Expectation::Invalid);
        assert!(outcome.passed());
        assert_eq!(outcome.total_reports(), 0);
    }

    #[test]
    fn test_result_display() {
        let result = TestResult {
            node: "Text[t]".to_string(),
            message: "There is no text.".to_string(),
            valid: false,
        };
        assert_eq!(result.to_string(), "There is no text.: Text[t]");
    }
}
