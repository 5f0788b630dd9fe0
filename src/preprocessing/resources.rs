use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{Error, ResourceKind, Result};

/// Indonesian stop-word list shipped with the crate.
const BUILTIN_STOP_WORDS: &str = include_str!("../../resources/stopwords-id.txt");

/// Words dropped before stemming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::parse(BUILTIN_STOP_WORDS)
    }

    /// One word per line; lines are trimmed and lower-cased, blank lines ignored.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { words }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::MissingResource {
            kind: ResourceKind::StopWords,
            path: path.to_path_buf(),
            source,
        })?;
        let stop_words = Self::parse(&content);
        tracing::info!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Exact-match surface form to stem mapping, consulted before the stemmer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StemDictionary {
    entries: HashMap<String, String>,
}

impl StemDictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Each line is split on whitespace. Lines with exactly two fields become
    /// `surface -> stem` entries, a repeated surface form keeps the last stem,
    /// and every other line is skipped without notice.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            let mut fields = line.split_whitespace();
            if let (Some(surface), Some(stem), None) = (fields.next(), fields.next(), fields.next()) {
                entries.insert(surface.to_string(), stem.to_string());
            }
        }
        Self { entries }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::MissingResource {
            kind: ResourceKind::Dictionary,
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&content);
        tracing::info!(path = %path.display(), entries = dictionary.len(), "loaded stem dictionary");
        Ok(dictionary)
    }

    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StemDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
