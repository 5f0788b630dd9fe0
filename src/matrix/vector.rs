use serde::Serialize;

use super::vocabulary::Vocabulary;

/// Raw term frequencies, one component per vocabulary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermVector(Vec<u32>);

impl TermVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all components.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn dot(&self, other: &TermVector) -> u64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| u64::from(a) * u64::from(b))
            .sum()
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        (self.dot(self) as f64).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl From<Vec<u32>> for TermVector {
    fn from(counts: Vec<u32>) -> Self {
        Self(counts)
    }
}

/// Counts each token against `vocabulary`.
///
/// Tokens the vocabulary does not know are dropped: a query is projected
/// into the collection's term space and never extends it.
pub fn vectorize<S: AsRef<str>>(tokens: &[S], vocabulary: &Vocabulary) -> TermVector {
    let mut counts = vec![0u32; vocabulary.len()];
    for token in tokens {
        if let Some(i) = vocabulary.index_of(token.as_ref()) {
            counts[i] += 1;
        }
    }
    TermVector(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vocabulary {
        let terms: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        Vocabulary::build([terms.as_slice()])
    }

    #[test]
    fn counts_in_vocabulary_order() {
        let v = vocab(&["besar", "ikan", "kucing", "makan"]);
        assert_eq!(vectorize(&["kucing", "makan", "ikan"], &v).as_slice(), [0, 1, 1, 1]);
        assert_eq!(vectorize(&["ikan", "makan", "kucing", "besar"], &v).as_slice(), [1, 1, 1, 1]);
        assert_eq!(vectorize(&["ikan", "ikan", "ikan"], &v).as_slice(), [0, 3, 0, 0]);
    }

    #[test]
    fn unknown_terms_are_ignored() {
        let v = vocab(&["ikan", "kucing"]);
        let q = vectorize(&["kucing", "anjing", "ikan", "burung"], &v);
        assert_eq!(q.as_slice(), [1, 1]);
        assert_eq!(q.len(), v.len());
    }

    #[test]
    fn total_equals_token_count_for_known_tokens() {
        let tokens = ["a", "b", "a", "c", "a"];
        let v = vocab(&tokens);
        assert_eq!(vectorize(&tokens, &v).total(), tokens.len() as u64);
    }

    #[test]
    fn empty_tokens_give_zero_vector() {
        let v = vocab(&["ikan"]);
        let z = vectorize::<&str>(&[], &v);
        assert!(z.is_zero());
        assert_eq!(z.magnitude(), 0.0);
    }

    #[test]
    fn dot_and_magnitude() {
        let a = TermVector::from(vec![1, 2, 0]);
        let b = TermVector::from(vec![3, 1, 5]);
        assert_eq!(a.dot(&b), 5);
        assert_eq!(TermVector::from(vec![3, 4]).magnitude(), 5.0);
    }
}
