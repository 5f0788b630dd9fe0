use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Anything that is neither a letter nor whitespace.
static NON_ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\s]").expect("valid regex literal"));

/// The three intermediate forms of a normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Normalized {
    /// Case-folded input.
    pub lower: String,
    /// `lower` with every non-alphabetic, non-whitespace character deleted.
    pub cleaned: String,
    /// Whitespace-separated words of `cleaned`.
    pub tokens: Vec<String>,
}

/// Case-folds, cleans and tokenizes `text`.
///
/// Deleted characters are not replaced by a separator, so letters on both
/// sides of a digit or punctuation mark end up in the same token
/// (`"co2link"` becomes `"colink"`).
pub fn normalize(text: &str) -> Normalized {
    let lower = text.to_lowercase();
    let cleaned = clean(&lower);
    let tokens = tokenize(&cleaned);
    Normalized { lower, cleaned, tokens }
}

pub fn clean(text: &str) -> String {
    NON_ALPHABETIC.replace_all(text, "").into_owned()
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let n = normalize("Kucing, MAKAN ikan!");
        assert_eq!(n.lower, "kucing, makan ikan!");
        assert_eq!(n.cleaned, "kucing makan ikan");
        assert_eq!(n.tokens, vec!["kucing", "makan", "ikan"]);
    }

    #[test]
    fn deleted_characters_merge_neighbours() {
        let n = normalize("co2link e-mail");
        assert_eq!(n.cleaned, "colink email");
        assert_eq!(n.tokens, vec!["colink", "email"]);
    }

    #[test]
    fn digits_only_tokens_vanish() {
        let n = normalize("tahun 2024 ini");
        assert_eq!(n.cleaned, "tahun  ini");
        assert_eq!(n.tokens, vec!["tahun", "ini"]);
    }

    #[test]
    fn keeps_non_ascii_letters() {
        let n = normalize("Café Über");
        assert_eq!(n.tokens, vec!["café", "über"]);
    }

    #[test]
    fn whitespace_runs_produce_no_empty_tokens() {
        let n = normalize("  satu\t\tdua\n\ntiga  ");
        assert_eq!(n.tokens, vec!["satu", "dua", "tiga"]);
    }

    #[test]
    fn empty_input() {
        let n = normalize("");
        assert_eq!(n, Normalized::default());
        assert!(normalize("123 !!!").tokens.is_empty());
    }
}
