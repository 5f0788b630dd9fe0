//! Vocabulary, term vectors and the term-document count matrix.

pub mod vector;
pub mod vocabulary;

use sprs::{CsMat, TriMat};

pub use vector::{TermVector, vectorize};
pub use vocabulary::Vocabulary;

use crate::document::Document;

/// Raw term counts of a document collection: one row per vocabulary term,
/// one column per document, stored column-compressed.
#[derive(Debug, Clone)]
pub struct TermDocumentMatrix {
    counts: CsMat<u32>,
    norms: Vec<f64>,
}

impl TermDocumentMatrix {
    pub fn build(documents: &[Document], vocabulary: &Vocabulary) -> Self {
        Self::from_token_lists(documents.iter().map(Document::stemmed), vocabulary)
    }

    pub fn from_token_lists<'a, I>(documents: I, vocabulary: &Vocabulary) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
        I::IntoIter: ExactSizeIterator,
    {
        let documents = documents.into_iter();
        let mut triplets = TriMat::new((vocabulary.len(), documents.len()));
        let mut norms = Vec::with_capacity(documents.len());

        for (doc, tokens) in documents.enumerate() {
            let vector = vectorize(tokens, vocabulary);
            for (term, &count) in vector.as_slice().iter().enumerate() {
                if count > 0 {
                    triplets.add_triplet(term, doc, count);
                }
            }
            norms.push(vector.magnitude());
        }

        let counts: CsMat<u32> = triplets.to_csc();
        tracing::debug!(
            terms = vocabulary.len(),
            documents = norms.len(),
            nnz = counts.nnz(),
            "built term-document matrix"
        );
        Self { counts, norms }
    }

    pub fn terms(&self) -> usize {
        self.counts.rows()
    }

    pub fn documents(&self) -> usize {
        self.norms.len()
    }

    /// Euclidean length of a document's vector.
    pub fn norm(&self, doc: usize) -> f64 {
        self.norms[doc]
    }

    /// Dense term vector of one document.
    pub fn column(&self, doc: usize) -> TermVector {
        let mut dense = vec![0u32; self.terms()];
        if let Some(column) = self.counts.outer_view(doc) {
            for (term, &count) in column.iter() {
                dense[term] = count;
            }
        }
        TermVector::from(dense)
    }

    pub fn columns(&self) -> impl Iterator<Item = TermVector> + '_ {
        (0..self.documents()).map(|doc| self.column(doc))
    }

    /// Dot product of a document column with a dense vector of the same length.
    pub fn dot(&self, doc: usize, vector: &TermVector) -> u64 {
        let dense = vector.as_slice();
        self.counts
            .outer_view(doc)
            .map(|column| {
                column
                    .iter()
                    .map(|(term, &count)| u64::from(count) * u64::from(dense[term]))
                    .sum()
            })
            .unwrap_or(0)
    }
}
