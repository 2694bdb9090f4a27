//! Integration tests for the docqa CLI
//!
//! These drive the commands over temporary fixture directories.

use std::fs;
use std::path::{Path, PathBuf};

use docqa_cli::{check_command, corpus_command, load_paths, CommandStatus, OutputFormat, Settings};
use tempfile::TempDir;

const VALID_DOC: &str = r#"[
  {
    "type": "chapter",
    "properties": { "title": "Intro" },
    "children": [
      {
        "type": "paragraph",
        "children": [ { "type": "text", "properties": { "value": "Hello" } } ]
      }
    ]
  },
  { "type": "image", "properties": { "src": "logo.svg" } }
]"#;

const INVALID_DOC: &str = r#"[
  {
    "type": "link",
    "properties": { "href": "ftp://x.com" },
    "children": [ { "type": "text", "properties": { "value": "go" } } ]
  }
]"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// A workspace with `safe/` and `unsafe/` corpora
fn corpora() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let safe = temp.path().join("safe");
    let unsafe_dir = temp.path().join("unsafe");
    fs::create_dir(&safe).unwrap();
    fs::create_dir(&unsafe_dir).unwrap();
    write(&safe, "docs.json", VALID_DOC);
    write(&unsafe_dir, "links.json", INVALID_DOC);
    temp
}

#[test]
fn test_check_valid_file() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "ok.json", VALID_DOC);

    let status = check_command(&[path], OutputFormat::Text, false).unwrap();
    assert_eq!(status, CommandStatus::Clean);
}

#[test]
fn test_check_invalid_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "bad.json", INVALID_DOC);

    let status = check_command(&[path.clone()], OutputFormat::Text, true).unwrap();
    assert_eq!(status, CommandStatus::Failed);

    let status = check_command(&[path], OutputFormat::Json, false).unwrap();
    assert_eq!(status, CommandStatus::Failed);
}

#[test]
fn test_check_mixes_files_and_directories() {
    let temp = corpora();
    let extra = write(temp.path(), "extra.json", r#"{"type": "text", "value": "x"}"#);

    let corpus = load_paths(&[temp.path().join("safe"), extra]).unwrap();
    assert_eq!(corpus.len(), 3);
    assert!(corpus.documents()[2].source.ends_with("extra.json"));
}

#[test]
fn test_check_missing_path_is_error() {
    let temp = TempDir::new().unwrap();
    let err = check_command(&[temp.path().join("absent.json")], OutputFormat::Text, false)
        .unwrap_err();
    assert!(err.to_string().contains("Input not found"));
}

#[test]
fn test_check_malformed_json_is_error() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "broken.json", r#"[{"type": "chapter""#);

    let err = check_command(&[path], OutputFormat::Text, false).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
}

#[test]
fn test_check_unknown_kind_is_error() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "sidebar.json", r#"[{"type": "sidebar"}]"#);

    let err = check_command(&[path], OutputFormat::Json, false).unwrap_err();
    assert!(format!("{:#}", err).contains("sidebar"));
}

#[test]
fn test_corpus_passes() {
    let temp = corpora();
    let status = corpus_command(
        &temp.path().join("safe"),
        &temp.path().join("unsafe"),
        OutputFormat::Text,
    )
    .unwrap();
    assert_eq!(status, CommandStatus::Clean);
}

#[test]
fn test_corpus_swapped_fails() {
    let temp = corpora();
    let status = corpus_command(
        &temp.path().join("unsafe"),
        &temp.path().join("safe"),
        OutputFormat::Json,
    )
    .unwrap();
    assert_eq!(status, CommandStatus::Failed);
}

#[test]
fn test_corpus_missing_directory_is_error() {
    let temp = corpora();
    let err = corpus_command(
        &temp.path().join("safe"),
        &temp.path().join("nowhere"),
        OutputFormat::Text,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Failed to load invalid corpus"));
}

#[test]
fn test_corpus_directories_from_config() {
    let temp = corpora();
    let config = format!(
        "[corpus]\nvalid = {:?}\ninvalid = {:?}\n\n[output]\nformat = \"json\"\n",
        temp.path().join("safe").display().to_string(),
        temp.path().join("unsafe").display().to_string(),
    );
    let config_path = write(temp.path(), "docqa.toml", &config);

    let settings = Settings::load(Some(&config_path)).unwrap();
    assert_eq!(settings.output.format, OutputFormat::Json);

    let status = corpus_command(
        &settings.corpus.valid,
        &settings.corpus.invalid,
        settings.output.format,
    )
    .unwrap();
    assert_eq!(status, CommandStatus::Clean);
}
