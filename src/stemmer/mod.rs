//! Stemming capability used by the linguistic filter.

mod porter;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use porter::PorterStemmer;

/// Reduces a lowercase word to its root form. Must be total: every
/// well-formed alphabetic input yields a usable lowercase string.
pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, token: &str) -> String {
        self(token)
    }
}

/// Leaves every token untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Stemmer selection for configuration files and command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    #[default]
    Identity,
    Porter,
}

impl StemmerKind {
    pub fn build(self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Identity => Arc::new(IdentityStemmer),
            StemmerKind::Porter => Arc::new(PorterStemmer),
        }
    }
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StemmerKind::Identity => f.write_str("identity"),
            StemmerKind::Porter => f.write_str("porter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_input() {
        assert_eq!(IdentityStemmer.stem("berlari"), "berlari");
    }

    #[test]
    fn kinds_build_matching_stemmers() {
        assert_eq!(StemmerKind::Identity.build().stem("running"), "running");
        assert_eq!(StemmerKind::Porter.build().stem("running"), "run");
    }

    #[test]
    fn closures_are_stemmers() {
        let strip_me = |token: &str| token.strip_prefix("me").unwrap_or(token).to_string();
        assert_eq!(strip_me.stem("memakan"), "makan");
        assert_eq!(strip_me.stem("ikan"), "ikan");
    }
}
