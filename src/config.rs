//! Engine settings: defaults, overridden by an optional TOML file, overridden
//! by command-line flags.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::search::SearchIndex;
use crate::error::{Error, Result};
use crate::preprocessing::{Preprocessor, StemDictionary, StopWords};
use crate::stemmer::StemmerKind;

pub const DEFAULT_CORPUS_DIR: &str = "file_test";

/// Where the stop-word set comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StopWordSource {
    /// Bundled Indonesian list.
    #[default]
    Builtin,
    Disabled,
    File(PathBuf),
}

impl StopWordSource {
    pub fn load(&self) -> Result<StopWords> {
        match self {
            StopWordSource::Builtin => Ok(StopWords::builtin()),
            StopWordSource::Disabled => Ok(StopWords::empty()),
            StopWordSource::File(path) => StopWords::load(path),
        }
    }
}

impl From<String> for StopWordSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "builtin" => StopWordSource::Builtin,
            "none" => StopWordSource::Disabled,
            _ => StopWordSource::File(PathBuf::from(value)),
        }
    }
}

impl From<StopWordSource> for String {
    fn from(value: StopWordSource) -> Self {
        value.to_string()
    }
}

impl fmt::Display for StopWordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopWordSource::Builtin => f.write_str("builtin"),
            StopWordSource::Disabled => f.write_str("none"),
            StopWordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory whose files make up the collection.
    pub corpus_dir: PathBuf,
    /// Two-column stem dictionary; no dictionary when unset.
    pub dictionary: Option<PathBuf>,
    pub stop_words: StopWordSource,
    pub stemmer: StemmerKind,
    /// Maximum number of ranked results to report; all when unset.
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            dictionary: None,
            stop_words: StopWordSource::default(),
            stemmer: StemmerKind::default(),
            limit: None,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: String| Error::Config {
            path: path.to_path_buf(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        toml::from_str(&content).map_err(|e| invalid(e.to_string()))
    }

    /// Loads the stop words and dictionary. Either one missing is fatal.
    pub fn preprocessor(&self) -> Result<Preprocessor> {
        let stop_words = self.stop_words.load()?;
        let dictionary = match &self.dictionary {
            Some(path) => StemDictionary::load(path)?,
            None => StemDictionary::empty(),
        };
        tracing::debug!(
            stop_words = stop_words.len(),
            dictionary = dictionary.len(),
            stemmer = %self.stemmer,
            "resources ready"
        );
        Ok(Preprocessor::new(stop_words, dictionary, self.stemmer.build()))
    }

    /// Resources first, then the collection.
    pub fn load_index(&self) -> Result<SearchIndex> {
        let preprocessor = self.preprocessor()?;
        SearchIndex::load_dir(&self.corpus_dir, preprocessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.corpus_dir, PathBuf::from("file_test"));
        assert_eq!(config.stop_words, StopWordSource::Builtin);
        assert_eq!(config.stemmer, StemmerKind::Identity);
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn parses_toml() {
        let config: Config = toml::from_str(
            r#"
            corpus_dir = "docs"
            dictionary = "kata-dasar.txt"
            stop_words = "none"
            stemmer = "porter"
            limit = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("docs"));
        assert_eq!(config.dictionary, Some(PathBuf::from("kata-dasar.txt")));
        assert_eq!(config.stop_words, StopWordSource::Disabled);
        assert_eq!(config.stemmer, StemmerKind::Porter);
        assert_eq!(config.limit, Some(3));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(r#"stop_words = "id-stop.txt""#).unwrap();
        assert_eq!(config.stop_words, StopWordSource::File(PathBuf::from("id-stop.txt")));
        assert_eq!(config.corpus_dir, PathBuf::from(DEFAULT_CORPUS_DIR));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vsm.toml");
        fs::write(&path, "shard_count = 4\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn missing_dictionary_fails_before_documents_are_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "ikan").unwrap();
        let config = Config {
            corpus_dir: dir.path().to_path_buf(),
            dictionary: Some(dir.path().join("kata-dasar.txt")),
            ..Config::default()
        };
        assert!(matches!(config.load_index(), Err(Error::MissingResource { .. })));
    }

    #[test]
    fn missing_stop_word_file_is_fatal() {
        let config = Config {
            stop_words: StopWordSource::File(PathBuf::from("/nonexistent/stop.txt")),
            ..Config::default()
        };
        assert!(matches!(config.preprocessor(), Err(Error::MissingResource { .. })));
    }
}
