//! docqa-core - Diagnostics, decoding and fixture corpora
//!
//! Core library for docqa, providing the validation report types, the
//! lenient JSON decoder for node trees, and fixture corpus loading.
//!
//! # Example
//!
//! ```
//! use docqa_core::decode_str;
//! use docqa_core::diagnostics::{Reason, ReportSet, ValidityReport};
//!
//! let nodes = decode_str(r#"[{"type": "text", "properties": {"value": ""}}]"#).unwrap();
//!
//! let mut reports = ReportSet::new();
//! reports.push(ValidityReport::new(&nodes[0], vec![Reason::NoText]));
//! assert_eq!(reports.invalid_count(), 1);
//! ```

pub mod corpus;
pub mod decode;
pub mod diagnostics;
pub mod error;

// Re-export main types and functions
pub use corpus::{Corpus, Document};
pub use decode::{decode_node, decode_str, decode_value};
pub use diagnostics::{ChildRequirement, Reason, ReportSet, RuleCategory, ValidityReport};
pub use error::{CorpusError, DecodeError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
