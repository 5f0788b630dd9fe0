//! Porter (1980) suffix-stripping stemmer for English.
//!
//! Operates on ASCII lowercase words. Words of two letters or fewer, and any
//! word containing other characters, are returned as they are.

use super::Stemmer;

#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, token: &str) -> String {
        if token.len() <= 2 || !token.bytes().all(|b| b.is_ascii_lowercase()) {
            return token.to_string();
        }

        let mut word = Word(token.as_bytes().to_vec());
        word.step_1a();
        word.step_1b();
        word.step_1c();
        word.step_2();
        word.step_3();
        word.step_4();
        word.step_5a();
        word.step_5b();

        // Only ASCII letters are ever written back.
        String::from_utf8(word.0).unwrap_or_else(|_| token.to_string())
    }
}

const STEP_2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP_3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

// "ement" and "ment" must be tried before "ent".
const STEP_4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

struct Word(Vec<u8>);

impl Word {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix.as_bytes())
    }

    /// Length of the word without `suffix`.
    fn stem_len(&self, suffix: &str) -> usize {
        self.len() - suffix.len()
    }

    fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        let keep = self.stem_len(suffix);
        self.0.truncate(keep);
        self.0.extend_from_slice(replacement.as_bytes());
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.0[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in the first `end` letters.
    fn measure(&self, end: usize) -> usize {
        let mut m = 0;
        let mut i = 0;
        while i < end && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < end && !self.is_consonant(i) {
                i += 1;
            }
            if i >= end {
                return m;
            }
            while i < end && self.is_consonant(i) {
                i += 1;
            }
            m += 1;
        }
    }

    fn has_vowel(&self, end: usize) -> bool {
        (0..end).any(|i| !self.is_consonant(i))
    }

    fn ends_with_double_consonant(&self, end: usize) -> bool {
        end >= 2 && self.0[end - 1] == self.0[end - 2] && self.is_consonant(end - 1)
    }

    /// consonant-vowel-consonant ending, where the last consonant is not w, x or y.
    fn ends_with_cvc(&self, end: usize) -> bool {
        end >= 3
            && self.is_consonant(end - 3)
            && !self.is_consonant(end - 2)
            && self.is_consonant(end - 1)
            && !matches!(self.0[end - 1], b'w' | b'x' | b'y')
    }

    fn step_1a(&mut self) {
        if self.ends_with("sses") || self.ends_with("ies") {
            self.0.truncate(self.len() - 2);
        } else if self.ends_with("s") && !self.ends_with("ss") {
            self.0.pop();
        }
    }

    fn step_1b(&mut self) {
        if self.ends_with("eed") {
            if self.measure(self.stem_len("eed")) > 0 {
                self.0.pop();
            }
            return;
        }

        let stripped = ["ed", "ing"].into_iter().find(|suffix| {
            self.ends_with(suffix) && self.has_vowel(self.stem_len(suffix))
        });
        let Some(suffix) = stripped else {
            return;
        };
        self.replace_suffix(suffix, "");

        if self.ends_with("at") || self.ends_with("bl") || self.ends_with("iz") {
            self.0.push(b'e');
        } else if self.ends_with_double_consonant(self.len())
            && !matches!(self.0[self.len() - 1], b'l' | b's' | b'z')
        {
            self.0.pop();
        } else if self.measure(self.len()) == 1 && self.ends_with_cvc(self.len()) {
            self.0.push(b'e');
        }
    }

    fn step_1c(&mut self) {
        if self.ends_with("y") && self.has_vowel(self.len() - 1) {
            let last = self.len() - 1;
            self.0[last] = b'i';
        }
    }

    /// The first rule whose suffix matches decides; its replacement applies
    /// only when the remaining stem has a measure above zero.
    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        if let Some(&(suffix, replacement)) = rules.iter().find(|(suffix, _)| self.ends_with(suffix)) {
            if self.measure(self.stem_len(suffix)) > 0 {
                self.replace_suffix(suffix, replacement);
            }
        }
    }

    fn step_2(&mut self) {
        self.apply_rules(STEP_2);
    }

    fn step_3(&mut self) {
        self.apply_rules(STEP_3);
    }

    fn step_4(&mut self) {
        let matched = STEP_4.iter().find(|suffix| {
            if !self.ends_with(suffix) {
                return false;
            }
            if **suffix == "ion" {
                let end = self.stem_len(suffix);
                return end > 0 && matches!(self.0[end - 1], b's' | b't');
            }
            true
        });
        if let Some(suffix) = matched {
            if self.measure(self.stem_len(suffix)) > 1 {
                self.replace_suffix(suffix, "");
            }
        }
    }

    fn step_5a(&mut self) {
        if !self.ends_with("e") {
            return;
        }
        let end = self.len() - 1;
        let m = self.measure(end);
        if m > 1 || (m == 1 && !self.ends_with_cvc(end)) {
            self.0.pop();
        }
    }

    fn step_5b(&mut self) {
        if self.ends_with("l")
            && self.ends_with_double_consonant(self.len())
            && self.measure(self.len()) > 1
        {
            self.0.pop();
        }
    }
}
