//! Vector space model search over a small document collection.
//!
//! Documents are case-folded, cleaned, tokenized, stripped of stop words and
//! stemmed. The distinct stemmed terms of the whole collection form a sorted
//! vocabulary, every document becomes a raw term-frequency vector over it, and
//! a query is ranked against the collection by cosine similarity.

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod preprocessing;
pub mod stemmer;

pub use config::Config;
pub use document::{Corpus, Document, DocumentFormat, SkippedFile};
pub use engine::search::{SearchHit, SearchIndex, SearchStats, cosine_similarity};
pub use engine::summary::{WordCount, format_matrix, word_count_table};
pub use error::{Error, Result};
pub use matrix::{TermDocumentMatrix, TermVector, Vocabulary, vectorize};
pub use preprocessing::{LinguisticFilter, Normalized, Preprocessor, ProcessedText, StemDictionary, StopWords};
pub use stemmer::{IdentityStemmer, PorterStemmer, Stemmer, StemmerKind};
