//! Text preprocessing: case folding, cleaning, tokenization, stop-word
//! removal and stemming.

pub mod filter;
pub mod resources;
pub mod tokenizer;

use std::sync::Arc;

use serde::Serialize;

pub use filter::LinguisticFilter;
pub use resources::{StemDictionary, StopWords};
pub use tokenizer::{Normalized, normalize};

use crate::stemmer::{IdentityStemmer, Stemmer};

/// Every intermediate form a text goes through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessedText {
    pub lower: String,
    pub cleaned: String,
    pub tokens: Vec<String>,
    pub stemmed: Vec<String>,
}

/// The full pipeline shared by documents and queries.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    filter: LinguisticFilter,
}

impl Preprocessor {
    pub fn new(stop_words: StopWords, dictionary: StemDictionary, stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            filter: LinguisticFilter::new(stop_words, dictionary, stemmer),
        }
    }

    /// No stop words, no dictionary, identity stemming.
    pub fn plain() -> Self {
        Self::new(StopWords::empty(), StemDictionary::empty(), Arc::new(IdentityStemmer))
    }

    pub fn filter(&self) -> &LinguisticFilter {
        &self.filter
    }

    pub fn process(&self, text: &str) -> ProcessedText {
        let Normalized { lower, cleaned, tokens } = normalize(text);
        let stemmed = self.filter.filter(&tokens);
        tracing::trace!(tokens = tokens.len(), stemmed = stemmed.len(), "processed text");
        ProcessedText {
            lower,
            cleaned,
            tokens,
            stemmed,
        }
    }

    /// Stemmed tokens of a query.
    pub fn stem_query(&self, query: &str) -> Vec<String> {
        self.filter.filter(&normalize(query).tokens)
    }
}
