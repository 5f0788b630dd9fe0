use std::fs;
use std::path::Path;

use serde::Serialize;

use super::Document;
use super::reader::read_document;
use crate::error::{Error, Result};
use crate::preprocessing::Preprocessor;

/// A file left out of the collection and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

/// The processed documents of one directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub skipped: Vec<SkippedFile>,
}

impl Corpus {
    /// Reads and processes every supported file directly inside `dir`, in
    /// file-name order. Unsupported or unreadable files are logged and listed
    /// in `skipped`; they never abort the load.
    pub fn load_dir(dir: impl AsRef<Path>, preprocessor: &Preprocessor) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut paths = Vec::new();
        let entries = fs::read_dir(dir).map_err(|source| Error::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| Error::Read {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            } else {
                tracing::debug!(path = %path.display(), "not a regular file, ignoring");
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut corpus = Corpus::default();
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match read_document(&path) {
                Ok(content) => corpus.documents.push(Document::process(name, content, preprocessor)),
                Err(e) if e.is_per_file() => {
                    tracing::warn!(file = %name, error = %e, "skipping file");
                    corpus.skipped.push(SkippedFile {
                        name,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            dir = %dir.display(),
            documents = corpus.documents.len(),
            skipped = corpus.skipped.len(),
            "loaded documents"
        );
        Ok(corpus)
    }

    pub fn from_texts<N, T>(texts: impl IntoIterator<Item = (N, T)>, preprocessor: &Preprocessor) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            documents: texts
                .into_iter()
                .map(|(name, text)| Document::process(name, text, preprocessor))
                .collect(),
            skipped: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_supported_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "Ikan makan").unwrap();
        fs::write(dir.path().join("a.TXT"), "Kucing").unwrap();
        fs::write(dir.path().join("notes.md"), "# ignored").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let corpus = Corpus::load_dir(dir.path(), &Preprocessor::plain()).unwrap();
        let names: Vec<&str> = corpus.documents.iter().map(Document::name).collect();
        assert_eq!(names, ["a.TXT", "b.txt"]);
        assert_eq!(corpus.skipped.len(), 1);
        assert_eq!(corpus.skipped[0].name, "notes.md");
        assert!(corpus.skipped[0].reason.contains("unsupported"));
    }

    #[test]
    fn bad_file_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.docx"), "plain bytes").unwrap();
        fs::write(dir.path().join("broken.pdf"), "plain bytes").unwrap();
        fs::write(dir.path().join("good.txt"), "satu dua").unwrap();

        let corpus = Corpus::load_dir(dir.path(), &Preprocessor::plain()).unwrap();
        assert_eq!(corpus.documents.len(), 1);
        assert_eq!(corpus.documents[0].stemmed(), ["satu", "dua"]);
        let skipped: Vec<&str> = corpus.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped, ["broken.docx", "broken.pdf"]);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load_dir(dir.path().join("absent"), &Preprocessor::plain()).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory { .. }));
    }
}
