//! Fixture corpus loading.
//!
//! A corpus is the merged content of every `*.json` file in one directory.
//! Each file holds an array of node records (see [`crate::decode`]), and
//! each entry becomes one [`Document`].
//!
//! # Example
//!
//! ```ignore
//! use docqa_core::corpus::Corpus;
//!
//! let safe = Corpus::load_dir("jsons-safe")?;
//! for document in safe.iter() {
//!     println!("{}#{}: {}", document.source.display(), document.index, document.root);
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use docqa_ast::Node;
use glob::{glob, Pattern};
use tracing::debug;

use crate::decode::decode_str;
use crate::error::CorpusError;

/// One top-level entry of a corpus file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// File the entry was read from
    pub source: PathBuf,
    /// Position of the entry within its file
    pub index: usize,
    /// The decoded tree
    pub root: Node,
}

/// Ordered documents from one or more corpus files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create a new empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file of a directory, in sorted path order
    ///
    /// The directory is not searched recursively. A single unreadable or
    /// undecodable file fails the whole load.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CorpusError::DirectoryNotFound(dir.to_path_buf()));
        }

        let pattern = format!("{}/*.json", Pattern::escape(&dir.to_string_lossy()));
        let mut paths = Vec::new();
        for entry in glob(&pattern)? {
            let path = entry.map_err(|e| CorpusError::Io {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut corpus = Self::new();
        for path in paths {
            corpus.add_file(&path)?;
        }

        debug!(
            dir = %dir.display(),
            documents = corpus.len(),
            "loaded corpus directory"
        );
        Ok(corpus)
    }

    /// Load a single corpus file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let mut corpus = Self::new();
        corpus.add_file(path.as_ref())?;
        Ok(corpus)
    }

    /// Decode a file and append its entries
    pub fn add_file(&mut self, path: &Path) -> Result<(), CorpusError> {
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let nodes = decode_str(&content).map_err(|source| CorpusError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(file = %path.display(), entries = nodes.len(), "decoded corpus file");
        self.add_nodes(path, nodes);
        Ok(())
    }

    /// Append already decoded entries under the given source name
    pub fn add_nodes(&mut self, source: impl Into<PathBuf>, nodes: Vec<Node>) {
        let source = source.into();
        self.documents
            .extend(nodes.into_iter().enumerate().map(|(index, root)| Document {
                source: source.clone(),
                index,
                root,
            }));
    }

    /// Move every document of another corpus to the end of this one
    pub fn append(&mut self, other: Corpus) {
        self.documents.extend(other.documents);
    }

    /// Get all documents
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Documents as a slice
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Get the number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_ast::Kind;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_dir_merges_files_in_order() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "b.json",
            r#"[{"type": "text", "properties": {"value": "third"}}]"#,
        );
        write(
            temp.path(),
            "a.json",
            r#"[{"type": "text", "properties": {"value": "first"}},
                {"type": "image", "properties": {"src": "x.png"}}]"#,
        );
        write(temp.path(), "notes.txt", "not a corpus file");

        let corpus = Corpus::load_dir(temp.path()).unwrap();
        assert_eq!(corpus.len(), 3);

        let kinds: Vec<Kind> = corpus.iter().map(|d| d.root.kind()).collect();
        assert_eq!(kinds, vec![Kind::Text, Kind::Image, Kind::Text]);
        assert_eq!(corpus.documents()[1].index, 1);
        assert!(corpus.documents()[2].source.ends_with("b.json"));
    }

    #[test]
    fn test_empty_dir_is_empty_corpus() {
        let temp = TempDir::new().unwrap();
        let corpus = Corpus::load_dir(temp.path()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_missing_dir_is_error() {
        let temp = TempDir::new().unwrap();
        let err = Corpus::load_dir(temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, CorpusError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_bad_file_names_path() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "good.json", r#"[{"type": "paragraph"}]"#);
        write(temp.path(), "broken.json", r#"[{"type": "sidebar"}]"#);

        let err = Corpus::load_dir(temp.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Decode { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "one.json", r#"{"type": "chapter"}"#);
        let corpus = Corpus::load_file(temp.path().join("one.json")).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.documents()[0].root.kind(), Kind::Chapter);
    }

    #[test]
    fn test_dir_with_glob_characters() {
        let temp = TempDir::new().unwrap();
        let odd = temp.path().join("set [1]");
        fs::create_dir(&odd).unwrap();
        write(&odd, "a.json", r#"[{"type": "paragraph"}]"#);

        let corpus = Corpus::load_dir(&odd).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_append_keeps_sources() {
        let mut first = Corpus::new();
        first.add_nodes("a.json", vec![docqa_ast::builder::text("x").into()]);
        let mut second = Corpus::new();
        second.add_nodes(
            "b.json",
            vec![docqa_ast::builder::chapter().into(), docqa_ast::builder::list().into()],
        );

        first.append(second);
        let locations: Vec<(String, usize)> = first
            .iter()
            .map(|d| (d.source.display().to_string(), d.index))
            .collect();
        assert_eq!(
            locations,
            vec![
                ("a.json".to_string(), 0),
                ("b.json".to_string(), 0),
                ("b.json".to_string(), 1),
            ]
        );
    }
}
