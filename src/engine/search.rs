use std::path::Path;

use serde::Serialize;

use crate::document::{Corpus, Document, SkippedFile};
use crate::error::Result;
use crate::matrix::{TermDocumentMatrix, TermVector, Vocabulary, vectorize};
use crate::preprocessing::Preprocessor;

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub score: f64,
    /// Index of the document in the collection.
    #[serde(skip)]
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub skipped: usize,
}

/// `dot(a, b) / (|a| * |b|)` over raw term frequencies, defined as 0 when
/// either vector has zero length. Clamped to 1 against rounding overshoot.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    cosine(a.dot(b), a.magnitude(), b.magnitude())
}

fn cosine(dot: u64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot as f64 / (norm_a * norm_b)).min(1.0)
}

/// Similarity of `query` with every document column, in collection order.
pub fn calculate_similarity(query: &TermVector, matrix: &TermDocumentMatrix) -> Vec<f64> {
    let query_norm = query.magnitude();
    (0..matrix.documents())
        .map(|doc| cosine(matrix.dot(doc, query), query_norm, matrix.norm(doc)))
        .collect()
}

/// Pairs scores with document names and orders them by descending score.
/// The sort is stable: equal scores keep collection order.
pub fn rank<S: AsRef<str>>(names: &[S], scores: &[f64]) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = names
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(position, (name, &score))| SearchHit {
            name: name.as_ref().to_string(),
            score,
            position,
        })
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

/// An immutable snapshot of a processed collection: the documents, their
/// shared vocabulary and term counts, and the pipeline queries must go
/// through. Rebuild a new snapshot instead of mutating one.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    preprocessor: Preprocessor,
    documents: Vec<Document>,
    skipped: Vec<SkippedFile>,
    vocabulary: Vocabulary,
    matrix: TermDocumentMatrix,
}

impl SearchIndex {
    pub fn build(preprocessor: Preprocessor, corpus: Corpus) -> Self {
        let vocabulary = Vocabulary::from_documents(&corpus.documents);
        let matrix = TermDocumentMatrix::build(&corpus.documents, &vocabulary);
        tracing::info!(
            documents = corpus.documents.len(),
            vocabulary = vocabulary.len(),
            "built search index"
        );
        Self {
            preprocessor,
            documents: corpus.documents,
            skipped: corpus.skipped,
            vocabulary,
            matrix,
        }
    }

    pub fn from_documents(preprocessor: Preprocessor, documents: Vec<Document>) -> Self {
        Self::build(
            preprocessor,
            Corpus {
                documents,
                skipped: Vec::new(),
            },
        )
    }

    /// Builds an index from `(name, text)` pairs.
    pub fn from_texts<N, T>(preprocessor: Preprocessor, texts: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let corpus = Corpus::from_texts(texts, &preprocessor);
        Self::build(preprocessor, corpus)
    }

    pub fn load_dir(dir: impl AsRef<Path>, preprocessor: Preprocessor) -> Result<Self> {
        let corpus = Corpus::load_dir(dir, &preprocessor)?;
        Ok(Self::build(preprocessor, corpus))
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn matrix(&self) -> &TermDocumentMatrix {
        &self.matrix
    }

    pub fn document_vector(&self, doc: usize) -> TermVector {
        self.matrix.column(doc)
    }

    /// The query projected into this collection's vocabulary.
    pub fn query_vector(&self, query: &str) -> TermVector {
        vectorize(&self.preprocessor.stem_query(query), &self.vocabulary)
    }

    /// One score per document, in collection order.
    pub fn scores(&self, query: &str) -> Vec<f64> {
        calculate_similarity(&self.query_vector(query), &self.matrix)
    }

    /// Every document, best match first.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let names: Vec<&str> = self.documents.iter().map(Document::name).collect();
        let hits = rank(&names, &self.scores(query));
        tracing::debug!(query, hits = hits.len(), "search");
        hits
    }

    pub fn search_top(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let mut hits = self.search(query);
        hits.truncate(limit);
        hits
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            document_count: self.documents.len(),
            vocabulary_size: self.vocabulary.len(),
            skipped: self.skipped.len(),
        }
    }
}
