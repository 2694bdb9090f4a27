//! Validation diagnostics for docqa
//!
//! This module provides the structures for reporting rule violations found
//! while validating a node tree: the per-rule [`Reason`], the per-node
//! [`ValidityReport`], and the ordered [`ReportSet`] produced by one pass.

use std::fmt;

use docqa_ast::{Kind, Node};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

/// Category of a violated rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// A required attribute is absent or blank
    MissingRequiredAttribute,
    /// An attribute holds a value outside its allowed set
    UnsupportedEnumValue,
    /// A numeric attribute is outside its allowed range
    OutOfRangeNumericValue,
    /// Wrong number of children
    StructuralArityViolation,
    /// A child has the wrong block/inline classification
    CapabilityMismatch,
    /// URL syntax, file extension or color code problem
    FormatViolation,
    /// A descendant reported itself invalid
    InvalidDescendant,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleCategory::MissingRequiredAttribute => "missing-required-attribute",
            RuleCategory::UnsupportedEnumValue => "unsupported-enum-value",
            RuleCategory::OutOfRangeNumericValue => "out-of-range-numeric-value",
            RuleCategory::StructuralArityViolation => "structural-arity-violation",
            RuleCategory::CapabilityMismatch => "capability-mismatch",
            RuleCategory::FormatViolation => "format-violation",
            RuleCategory::InvalidDescendant => "invalid-descendant",
        };
        f.write_str(name)
    }
}

/// What a parent node accepts as children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildRequirement {
    /// Any block-capable node
    Block,
    /// Any inline-capable node
    Inline,
    /// Only nodes of kind Text
    Text,
}

impl fmt::Display for ChildRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRequirement::Block => write!(f, "a block component"),
            ChildRequirement::Inline => write!(f, "an inline component"),
            ChildRequirement::Text => write!(f, "a Text component"),
        }
    }
}

/// A single violated rule
///
/// Nodes are referred to by their rendered description, so a `Reason`
/// owns all its data and outlives the tree it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Text without content
    NoText,
    /// Required attribute absent or blank
    MissingAttribute {
        kind: Kind,
        attribute: &'static str,
    },
    /// Attribute value outside the allowed set
    UnsupportedValue {
        kind: Kind,
        attribute: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    /// Numerical list starting below one
    StartBelowOne { value: i64 },
    /// Leaf node with children
    UnexpectedChildren { kind: Kind, count: usize },
    /// Composite node without children
    Empty { kind: Kind },
    /// Child of a kind the parent does not accept
    ChildMismatch {
        child: String,
        expected: ChildRequirement,
    },
    /// A report returned by a child's validation is invalid
    InvalidChild { child: String },
    /// `href` does not look like an http(s) URL
    MalformedUrl { href: String },
    /// `href` does not mention an allowed protocol
    UnsupportedProtocol { href: String },
    /// Image file name does not split into name and extension
    InvalidImageName {
        attribute: &'static str,
        value: Option<String>,
    },
    /// Image extension outside the supported formats
    UnsupportedImageFormat {
        attribute: &'static str,
        extension: String,
    },
    /// Color code with the wrong length
    InvalidColor { value: String },
}

impl Reason {
    /// Stable diagnostic code
    ///
    /// `DQ1xx` are attribute rules, `DQ2xx` structural rules and
    /// `DQ3xx` format rules.
    pub fn code(&self) -> &'static str {
        match self {
            Reason::NoText => "DQ101",
            Reason::MissingAttribute { .. } => "DQ102",
            Reason::UnsupportedValue { .. } => "DQ103",
            Reason::StartBelowOne { .. } => "DQ104",
            Reason::UnexpectedChildren { .. } => "DQ201",
            Reason::Empty { .. } => "DQ202",
            Reason::ChildMismatch { .. } => "DQ203",
            Reason::InvalidChild { .. } => "DQ204",
            Reason::MalformedUrl { .. } => "DQ301",
            Reason::UnsupportedProtocol { .. } => "DQ302",
            Reason::InvalidImageName { .. } => "DQ303",
            Reason::UnsupportedImageFormat { .. } => "DQ304",
            Reason::InvalidColor { .. } => "DQ305",
        }
    }

    /// The rule category this reason belongs to
    pub fn category(&self) -> RuleCategory {
        match self {
            Reason::NoText | Reason::MissingAttribute { .. } => {
                RuleCategory::MissingRequiredAttribute
            }
            Reason::UnsupportedValue { .. } => RuleCategory::UnsupportedEnumValue,
            Reason::StartBelowOne { .. } => RuleCategory::OutOfRangeNumericValue,
            Reason::UnexpectedChildren { .. } | Reason::Empty { .. } => {
                RuleCategory::StructuralArityViolation
            }
            Reason::ChildMismatch { .. } => RuleCategory::CapabilityMismatch,
            Reason::InvalidChild { .. } => RuleCategory::InvalidDescendant,
            Reason::MalformedUrl { .. }
            | Reason::UnsupportedProtocol { .. }
            | Reason::InvalidImageName { .. }
            | Reason::UnsupportedImageFormat { .. }
            | Reason::InvalidColor { .. } => RuleCategory::FormatViolation,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NoText => write!(f, "There is no text."),
            Reason::MissingAttribute { kind, attribute } => {
                write!(f, "{} is missing {}.", kind, attribute)
            }
            Reason::UnsupportedValue {
                kind,
                attribute,
                value,
                allowed,
            } => write!(
                f,
                "Unsupported {} '{}' for {}, expected one of: {}.",
                attribute,
                value,
                kind.as_str(),
                allowed.join(", ")
            ),
            Reason::StartBelowOne { value } => {
                write!(f, "A numerical list must start at 1 or above (startWith is {}).", value)
            }
            Reason::UnexpectedChildren { kind, count } => write!(
                f,
                "{} should not have children (found {}).",
                kind, count
            ),
            Reason::Empty { kind } => {
                write!(f, "Empty {}: at least one child is required.", kind.as_str())
            }
            Reason::ChildMismatch { child, expected } => write!(
                f,
                "A child ({}) is not {}. Only {} children are allowed.",
                child,
                expected,
                match expected {
                    ChildRequirement::Block => "block",
                    ChildRequirement::Inline => "inline",
                    ChildRequirement::Text => "Text",
                }
            ),
            Reason::InvalidChild { child } => {
                write!(f, "This child component ({}) is invalid.", child)
            }
            Reason::MalformedUrl { href } => {
                write!(f, "The href ({}) is not a valid http(s) URL.", href)
            }
            Reason::UnsupportedProtocol { href } => {
                write!(f, "The protocol of a link is not http or https ({}).", href)
            }
            Reason::InvalidImageName { attribute, value } => write!(
                f,
                "Missing or invalid name of an image in {} ({}).",
                attribute,
                value.as_deref().unwrap_or("null")
            ),
            Reason::UnsupportedImageFormat {
                attribute,
                extension,
            } => write!(
                f,
                "Unsupported ({}) image format in {}.",
                extension, attribute
            ),
            Reason::InvalidColor { value } => {
                write!(f, "The color ({}) is not a 6 character code.", value)
            }
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reason", 3)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("category", &self.category())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Verdict for one node
///
/// A report borrows the node it describes; it is valid exactly when no
/// reason was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidityReport<'a> {
    /// The node this report describes
    pub node: &'a Node,
    /// Every violated rule, in check order
    pub reasons: Vec<Reason>,
}

impl<'a> ValidityReport<'a> {
    /// Create a report from the reasons collected for a node
    pub fn new(node: &'a Node, reasons: Vec<Reason>) -> Self {
        Self { node, reasons }
    }

    /// Create a report for a node without violations
    pub fn valid_for(node: &'a Node) -> Self {
        Self::new(node, Vec::new())
    }

    /// Check if the node passed every rule
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    /// All reason texts joined by spaces; empty when valid
    pub fn message(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Diagnostic codes of all reasons, in order
    pub fn codes(&self) -> Vec<&'static str> {
        self.reasons.iter().map(Reason::code).collect()
    }

    /// Check if any reason falls in the given category
    pub fn has_category(&self, category: RuleCategory) -> bool {
        self.reasons.iter().any(|r| r.category() == category)
    }
}

impl fmt::Display for ValidityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: verdict: node, then one line per reason
        if self.is_valid() {
            return write!(f, "valid: {}", self.node);
        }
        write!(f, "invalid: {}", self.node)?;
        for reason in &self.reasons {
            write!(f, "\n  = {}: {}", reason.code(), reason)?;
        }
        Ok(())
    }
}

impl Serialize for ValidityReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidityReport", 6)?;
        state.serialize_field("node", &self.node.to_string())?;
        state.serialize_field("kind", &self.node.kind())?;
        state.serialize_field("id", &self.node.id())?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("reasons", &self.reasons)?;
        state.end()
    }
}

/// Ordered reports from one validation pass
///
/// Reports are kept in the order they were pushed: every descendant
/// report comes before the report of its ancestor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSet<'a> {
    reports: Vec<ValidityReport<'a>>,
}

impl<'a> ReportSet<'a> {
    /// Create a new empty report set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report
    pub fn push(&mut self, report: ValidityReport<'a>) {
        self.reports.push(report);
    }

    /// Append every report of another set, keeping their order
    pub fn append(&mut self, other: ReportSet<'a>) {
        self.reports.extend(other.reports);
    }

    /// Get all reports
    pub fn iter(&self) -> impl Iterator<Item = &ValidityReport<'a>> {
        self.reports.iter()
    }

    /// Reports as a slice
    pub fn as_slice(&self) -> &[ValidityReport<'a>] {
        &self.reports
    }

    /// Get the count
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// The last report pushed, which belongs to the validated root
    pub fn root(&self) -> Option<&ValidityReport<'a>> {
        self.reports.last()
    }

    /// Check if every report is valid
    pub fn all_valid(&self) -> bool {
        self.reports.iter().all(ValidityReport::is_valid)
    }

    /// Check if any report is invalid
    pub fn has_invalid(&self) -> bool {
        !self.all_valid()
    }

    /// Get the number of invalid reports
    pub fn invalid_count(&self) -> usize {
        self.invalid().count()
    }

    /// Invalid reports, in order
    pub fn invalid(&self) -> impl Iterator<Item = &ValidityReport<'a>> {
        self.reports.iter().filter(|r| !r.is_valid())
    }
}

impl<'a> Extend<ValidityReport<'a>> for ReportSet<'a> {
    fn extend<I: IntoIterator<Item = ValidityReport<'a>>>(&mut self, iter: I) {
        self.reports.extend(iter);
    }
}

impl<'a> FromIterator<ValidityReport<'a>> for ReportSet<'a> {
    fn from_iter<I: IntoIterator<Item = ValidityReport<'a>>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for ReportSet<'a> {
    type Item = ValidityReport<'a>;
    type IntoIter = std::vec::IntoIter<ValidityReport<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s ReportSet<'a> {
    type Item = &'s ValidityReport<'a>;
    type IntoIter = std::slice::Iter<'s, ValidityReport<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

impl Serialize for ReportSet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.reports.len()))?;
        for report in &self.reports {
            seq.serialize_element(report)?;
        }
        seq.end()
    }
}
