use std::sync::Arc;

use super::resources::{StemDictionary, StopWords};
use crate::stemmer::Stemmer;

/// Stop-word removal followed by dictionary lookup or stemming.
#[derive(Clone)]
pub struct LinguisticFilter {
    stop_words: Arc<StopWords>,
    dictionary: Arc<StemDictionary>,
    stemmer: Arc<dyn Stemmer>,
}

impl LinguisticFilter {
    pub fn new(stop_words: StopWords, dictionary: StemDictionary, stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            stop_words: Arc::new(stop_words),
            dictionary: Arc::new(dictionary),
            stemmer,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn dictionary(&self) -> &StemDictionary {
        &self.dictionary
    }

    /// Drops stop words and canonicalizes the rest, keeping their order.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| AsRef::<str>::as_ref(token))
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.canonical(token))
            .collect()
    }

    /// A dictionary entry takes precedence over the stemmer.
    pub fn canonical(&self, token: &str) -> String {
        match self.dictionary.get(token) {
            Some(stem) => stem.to_string(),
            None => self.stemmer.stem(token),
        }
    }
}

impl std::fmt::Debug for LinguisticFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticFilter")
            .field("stop_words", &self.stop_words.len())
            .field("dictionary", &self.dictionary.len())
            .finish_non_exhaustive()
    }
}
