//! docqa-validate - Content tree validation engine
//!
//! This crate checks a node tree against the docqa schema and produces one
//! [`ValidityReport`] per visited node.
//!
//! # Architecture
//!
//! Each node kind implements the [`NodeRules`] trait: its own attribute
//! checks plus a [`ChildPolicy`] saying what children it accepts. A single
//! exhaustive match over [`Node`] dispatches to those rules, so a new kind
//! cannot be added without rules for it. The shared recursion then:
//!
//! 1. collects the attribute reasons,
//! 2. checks child count and the capability of every child, validating
//!    each child and appending its reports,
//! 3. adds one propagation reason per invalid report a child returned,
//! 4. appends the node's own report after all descendant reports.
//!
//! Validation is a pure function of the tree: running it again on the same
//! tree gives the same reports.
//!
//! # Example
//!
//! ```
//! use docqa_ast::builder::{chapter, paragraph, text};
//! use docqa_ast::Node;
//! use docqa_validate::validate;
//!
//! let doc: Node = chapter()
//!     .with_title("Intro")
//!     .with_child(paragraph().with_child(text("Hello")))
//!     .into();
//!
//! let reports = validate(&doc);
//! assert_eq!(reports.len(), 3);
//! assert!(reports.all_valid());
//! ```

pub mod harness;
pub mod rules;

use docqa_ast::{Element, Kind, Node};
use docqa_core::diagnostics::{ChildRequirement, Reason, ReportSet, ValidityReport};
use tracing::{debug, trace};

// Re-export harness entry points
pub use harness::{run_corpus, run_suite, CorpusOutcome, Expectation, SuiteOutcome};

/// What a node kind accepts as children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPolicy {
    /// No children allowed; children are never descended into
    Leaf,
    /// At least one child, each meeting the requirement
    Required(ChildRequirement),
}

/// Validation rules of one node kind
pub trait NodeRules: Element {
    /// Children this kind accepts
    const CHILDREN: ChildPolicy;

    /// Check the node's own attributes
    ///
    /// Every failing check contributes a reason; checks never stop each
    /// other.
    fn check_attributes(&self) -> Vec<Reason>;
}

/// Validate a tree and return its reports in post-order
///
/// The report of `node` itself is always last.
pub fn validate(node: &Node) -> ReportSet<'_> {
    let mut reports = ReportSet::new();
    visit(node, &mut reports);
    reports
}

/// Validate several trees, concatenating their reports in order
pub fn validate_all(nodes: &[Node]) -> ReportSet<'_> {
    let mut reports = ReportSet::new();
    for node in nodes {
        visit(node, &mut reports);
    }
    reports
}

/// Check if a child meets a parent's requirement
///
/// Block and inline checks read the capability from the child's type.
pub fn accepts(requirement: ChildRequirement, child: &Node) -> bool {
    match requirement {
        ChildRequirement::Block => child.is_block(),
        ChildRequirement::Inline => child.is_inline(),
        ChildRequirement::Text => child.kind() == Kind::Text,
    }
}

fn visit<'a>(node: &'a Node, reports: &mut ReportSet<'a>) {
    trace!(kind = %node.kind(), id = ?node.id(), "validating node");

    let reasons = match node {
        Node::Chapter(el) => check(el, reports),
        Node::Paragraph(el) => check(el, reports),
        Node::List(el) => check(el, reports),
        Node::Image(el) => check(el, reports),
        Node::Format(el) => check(el, reports),
        Node::Link(el) => check(el, reports),
        Node::Text(el) => check(el, reports),
    };

    if !reasons.is_empty() {
        let codes: Vec<&str> = reasons.iter().map(Reason::code).collect();
        debug!(node = %node, codes = ?codes, "node is invalid");
    }

    reports.push(ValidityReport::new(node, reasons));
}

fn check<'a, T: NodeRules>(element: &'a T, reports: &mut ReportSet<'a>) -> Vec<Reason> {
    let mut reasons = element.check_attributes();
    let children = element.children();

    match T::CHILDREN {
        ChildPolicy::Leaf => {
            if !children.is_empty() {
                reasons.push(Reason::UnexpectedChildren {
                    kind: T::KIND,
                    count: children.len(),
                });
            }
        }
        ChildPolicy::Required(requirement) => {
            if children.is_empty() {
                reasons.push(Reason::Empty { kind: T::KIND });
            }
            for child in children {
                if !accepts(requirement, child) {
                    reasons.push(Reason::ChildMismatch {
                        child: child.to_string(),
                        expected: requirement,
                    });
                }

                let child_reports = validate(child);
                reasons.extend(child_reports.invalid().map(|report| Reason::InvalidChild {
                    child: report.node.to_string(),
                }));
                reports.append(child_reports);
            }
        }
    }

    reasons
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
