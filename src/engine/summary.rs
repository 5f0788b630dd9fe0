use std::collections::HashMap;
use std::fmt::{Display, Write};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrences of each distinct token, in order of first appearance.
pub fn word_count_table<S: AsRef<str>>(tokens: &[S]) -> Vec<WordCount> {
    let mut rows: Vec<WordCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        match positions.get(token) {
            Some(&row) => rows[row].count += 1,
            None => {
                positions.insert(token, rows.len());
                rows.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }
    rows
}

/// Tab-separated rendering of `rows`, one line each, preceded by an
/// optional header line.
pub fn format_matrix<H, R, T>(header: Option<&[H]>, rows: impl IntoIterator<Item = R>) -> String
where
    H: Display,
    R: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::new();
    if let Some(header) = header {
        push_row(&mut out, header);
    }
    for row in rows {
        push_row(&mut out, row);
    }
    out
}

fn push_row<T: Display>(out: &mut String, cells: impl IntoIterator<Item = T>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push('\t');
        }
        let _ = write!(out, "{cell}");
    }
    out.push('\n');
}
