use std::collections::{BTreeSet, HashMap};

use serde::{Serialize, Serializer};

use crate::document::Document;

/// Sorted, duplicate-free set of stemmed terms. Position in the vocabulary is
/// the component index of every term vector built against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Union of all token sequences, ordered by byte-wise string comparison.
    /// The result does not depend on the order of `documents`.
    pub fn build<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let distinct: BTreeSet<&str> = documents
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        Self::from_sorted(distinct.into_iter().map(str::to_string).collect())
    }

    pub fn from_documents(documents: &[Document]) -> Self {
        Self::build(documents.iter().map(Document::stemmed))
    }

    fn from_sorted(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.terms)
    }
}
