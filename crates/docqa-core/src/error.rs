//! Error types for decoding and corpus loading.
//!
//! Only malformed input is an error. Document content that breaks a rule
//! is reported through [`crate::diagnostics`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while turning JSON into nodes
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top level is neither an array nor a single node object
    #[error("expected an array of nodes at the top level, found {found}")]
    NotAnArray { found: &'static str },

    /// An entry where a node was expected is not an object
    #[error("expected a node object at {path}, found {found}")]
    NotAnObject { path: String, found: &'static str },

    /// A node object without a `type` field
    #[error("missing \"type\" discriminator at {path}")]
    MissingType { path: String },

    /// A `type` field that is not a string
    #[error("\"type\" discriminator at {path} must be a string, found {found}")]
    InvalidType { path: String, found: &'static str },

    /// A `type` naming no known kind
    #[error("unknown node type '{name}' at {path}")]
    UnknownKind { path: String, name: String },
}

/// Errors that can occur while loading a fixture corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus directory does not exist
    #[error("corpus directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The file listing pattern could not be built
    #[error("invalid corpus pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A corpus file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file could not be decoded
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}
