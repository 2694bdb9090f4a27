//! docqa CLI - Command-line interface library
//!
//! This library provides the CLI functionality for docqa:
//! - Check: Validate JSON documents and print their reports
//! - Corpus: Run the valid and invalid fixture corpora
//!
//! # Library Usage
//!
//! ```ignore
//! use docqa_cli::{check_command, OutputFormat};
//!
//! let status = check_command(&[input], OutputFormat::Json, false)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Print the invalid reports of some documents
//! docqa check chapter.json jsons-unsafe/
//!
//! # Check both fixture corpora, configured in docqa.toml
//! docqa corpus --format json
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{check_command, corpus_command, load_paths, run_cli, CommandStatus};
pub use config::{OutputFormat, Settings};
