//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use docqa_core::corpus::{Corpus, Document};
use docqa_core::diagnostics::ValidityReport;
use docqa_validate::harness::{CorpusOutcome, SuiteOutcome};
use docqa_validate::{run_suite, validate};

use crate::config::{OutputFormat, Settings};

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Nothing invalid, every expectation met
    Clean,
    /// Invalid reports or failed expectations were found
    Failed,
}

impl CommandStatus {
    /// Process exit code for this status
    pub fn exit_code(self) -> ExitCode {
        match self {
            CommandStatus::Clean => ExitCode::SUCCESS,
            CommandStatus::Failed => ExitCode::from(1),
        }
    }
}

#[derive(Parser)]
#[command(name = "docqa")]
#[command(author, version, about = "Validate document content trees", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate JSON documents and print their reports
    Check {
        /// JSON files or directories of JSON files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print valid reports too
        #[arg(long)]
        all: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the valid and invalid fixture corpora against their expectations
    Corpus {
        /// Directory of documents expected to be valid
        #[arg(long)]
        valid: Option<PathBuf>,

        /// Directory of documents expected to be invalid
        #[arg(long)]
        invalid: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let status = match cli.command {
        Commands::Check {
            paths,
            format,
            all,
            config,
        } => {
            let settings = Settings::load(config.as_deref())?;
            let format = format.unwrap_or(settings.output.format);
            let show_valid = all || settings.output.show_valid;
            check_command(&paths, format, show_valid)?
        }
        Commands::Corpus {
            valid,
            invalid,
            format,
            config,
        } => {
            let settings = Settings::load(config.as_deref())?;
            let valid = valid.unwrap_or(settings.corpus.valid);
            let invalid = invalid.unwrap_or(settings.corpus.invalid);
            let format = format.unwrap_or(settings.output.format);
            corpus_command(&valid, &invalid, format)?
        }
    };

    Ok(status.exit_code())
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` directives apply on top of the verbosity level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init();
}

/// Load files and directories into one corpus, in argument order
pub fn load_paths(paths: &[PathBuf]) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for path in paths {
        if !path.exists() {
            anyhow::bail!("Input not found: {}", path.display());
        }
        let loaded = if path.is_dir() {
            Corpus::load_dir(path)
        } else {
            Corpus::load_file(path)
        }
        .with_context(|| format!("Failed to load documents from {}", path.display()))?;
        corpus.append(loaded);
    }
    Ok(corpus)
}

/// Reports of one document, for JSON output
#[derive(Serialize)]
struct DocumentReport<'a> {
    source: &'a Path,
    index: usize,
    valid: bool,
    reports: Vec<&'a ValidityReport<'a>>,
}

/// Execute the check command
pub fn check_command(
    paths: &[PathBuf],
    format: OutputFormat,
    show_valid: bool,
) -> Result<CommandStatus> {
    let corpus = load_paths(paths)?;
    let validated: Vec<(&Document, _)> = corpus
        .iter()
        .map(|document| (document, validate(&document.root)))
        .collect();

    let invalid_reports: usize = validated.iter().map(|(_, r)| r.invalid_count()).sum();
    let invalid_documents = validated.iter().filter(|(_, r)| r.has_invalid()).count();
    info!(
        documents = corpus.len(),
        invalid_documents, invalid_reports, "check finished"
    );

    match format {
        OutputFormat::Json => {
            let documents: Vec<DocumentReport<'_>> = validated
                .iter()
                .map(|(document, reports)| DocumentReport {
                    source: &document.source,
                    index: document.index,
                    valid: reports.all_valid(),
                    reports: reports
                        .iter()
                        .filter(|r| show_valid || !r.is_valid())
                        .collect(),
                })
                .collect();
            let json = serde_json::to_string_pretty(&documents)
                .context("Failed to serialize reports to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for (document, reports) in &validated {
                let shown: Vec<_> = reports
                    .iter()
                    .filter(|r| show_valid || !r.is_valid())
                    .collect();
                if shown.is_empty() {
                    continue;
                }
                println!("{}#{}", document.source.display(), document.index);
                for report in shown {
                    println!("  {}", report.to_string().replace('\n', "\n  "));
                }
                println!();
            }

            if invalid_reports == 0 {
                println!("✓ {} document(s) valid", corpus.len());
            } else {
                println!(
                    "Found {} invalid report(s) in {} of {} document(s)",
                    invalid_reports,
                    invalid_documents,
                    corpus.len()
                );
            }
        }
    }

    Ok(if invalid_reports == 0 {
        CommandStatus::Clean
    } else {
        CommandStatus::Failed
    })
}

/// Execute the corpus command
pub fn corpus_command(valid: &Path, invalid: &Path, format: OutputFormat) -> Result<CommandStatus> {
    let valid_corpus = Corpus::load_dir(valid)
        .with_context(|| format!("Failed to load valid corpus: {}", valid.display()))?;
    let invalid_corpus = Corpus::load_dir(invalid)
        .with_context(|| format!("Failed to load invalid corpus: {}", invalid.display()))?;

    let outcome = run_suite(&valid_corpus, &invalid_corpus);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome)
                .context("Failed to serialize corpus outcome to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_suite(&outcome, valid, invalid),
    }

    Ok(if outcome.passed() {
        CommandStatus::Clean
    } else {
        CommandStatus::Failed
    })
}

fn print_suite(outcome: &SuiteOutcome, valid: &Path, invalid: &Path) {
    print_corpus(&outcome.valid, valid);
    print_corpus(&outcome.invalid, invalid);

    if outcome.passed() {
        println!("✓ All corpus expectations met");
    } else {
        let failed = outcome.valid.failure_count() + outcome.invalid.failure_count();
        println!("Found {} document(s) not meeting their expectation", failed);
    }
}

fn print_corpus(outcome: &CorpusOutcome, dir: &Path) {
    println!(
        "{} corpus ({}): {} document(s), {} report(s), {} failure(s)",
        outcome.expectation,
        dir.display(),
        outcome.documents.len(),
        outcome.total_reports(),
        outcome.failure_count()
    );

    for document in outcome.failures() {
        println!("  ✗ {}: {}", document.location(), document.root);
        for result in document.reports.iter().filter(|r| !r.valid) {
            println!("      {}", result);
        }
    }
}
