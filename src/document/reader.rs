use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{Error, Result};

/// Paragraphs of a WordprocessingML body, including empty self-closing ones.
static DOCX_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*?)?(?:/>|>(.*?)</w:p>)").expect("valid regex literal")
});

/// Text runs, tabs and line breaks inside a paragraph.
static DOCX_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>/]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:br(?:\s[^>]*)?/>").expect("valid regex literal")
});

static XML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(lt|gt|amp|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").expect("valid regex literal"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Txt,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "txt" => Some(DocumentFormat::Txt),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extracts the raw text of a supported file.
pub fn read_document(path: &Path) -> Result<String> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), ?format, "reading document");
    match format {
        DocumentFormat::Txt => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Pdf => read_pdf(path),
        DocumentFormat::Docx => read_docx(path),
    }
}

/// Page text as produced by poppler's `pdftotext`.
fn read_pdf(path: &Path) -> Result<String> {
    let extraction = |reason: String| Error::Extraction {
        path: path.to_path_buf(),
        reason,
    };
    let output = Command::new("pdftotext")
        .args(["-q", "-enc", "UTF-8"])
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| extraction(format!("failed to run pdftotext: {e} (is poppler installed?)")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(extraction(format!("pdftotext exited with {}: {}", output.status, stderr.trim())));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn read_docx(path: &Path) -> Result<String> {
    let extraction = |reason: String| Error::Extraction {
        path: path.to_path_buf(),
        reason,
    };
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(|e| extraction(e.to_string()))?;
    let mut body = archive
        .by_name("word/document.xml")
        .map_err(|e| extraction(format!("word/document.xml: {e}")))?;
    let mut xml = String::new();
    body.read_to_string(&mut xml).map_err(|e| extraction(e.to_string()))?;
    Ok(docx_text(&xml))
}

/// Concatenates every paragraph's text, each followed by one space.
pub fn docx_text(xml: &str) -> String {
    let mut text = String::new();
    for paragraph in DOCX_PARAGRAPH.captures_iter(xml) {
        if let Some(inner) = paragraph.get(1) {
            for run in DOCX_RUN.captures_iter(inner.as_str()) {
                match run.get(1) {
                    Some(t) => text.push_str(&decode_entities(t.as_str())),
                    None if run[0].starts_with("<w:tab") => text.push('\t'),
                    None => text.push('\n'),
                }
            }
        }
        text.push(' ');
    }
    text
}

fn decode_entities(text: &str) -> String {
    XML_ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| entity[1..].parse())
                    .ok()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
