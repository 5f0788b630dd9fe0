//! Documents: format detection, text extraction and the per-document
//! processing record.

pub mod corpus;
pub mod reader;

use serde::Serialize;

pub use corpus::{Corpus, SkippedFile};
pub use reader::{DocumentFormat, read_document};

use crate::engine::summary::{WordCount, word_count_table};
use crate::preprocessing::{Preprocessor, ProcessedText};

/// A document after preprocessing. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    name: String,
    content: String,
    lower: String,
    cleaned: String,
    tokens: Vec<String>,
    stemmed: Vec<String>,
    word_count: usize,
}

impl Document {
    pub fn process(name: impl Into<String>, content: impl Into<String>, preprocessor: &Preprocessor) -> Self {
        let content = content.into();
        let ProcessedText {
            lower,
            cleaned,
            tokens,
            stemmed,
        } = preprocessor.process(&content);
        Self {
            name: name.into(),
            content,
            lower,
            cleaned,
            tokens,
            word_count: stemmed.len(),
            stemmed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw extracted text.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn stemmed(&self) -> &[String] {
        &self.stemmed
    }

    /// Number of stemmed tokens.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn word_count_table(&self) -> Vec<WordCount> {
        word_count_table(&self.stemmed)
    }
}
