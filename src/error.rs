use std::fmt;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which external resource failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    StopWords,
    Dictionary,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::StopWords => f.write_str("stop-word list"),
            ResourceKind::Dictionary => f.write_str("stem dictionary"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// File extension is not one of txt, pdf, docx.
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Stop words or dictionary could not be read. Fatal for the batch.
    #[error("cannot load {kind} from {}: {source}", path.display())]
    MissingResource {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot extract text from {}: {reason}", path.display())]
    Extraction { path: PathBuf, reason: String },

    #[error("invalid configuration in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl Error {
    /// Per-file errors are reported and skipped; everything else aborts the batch.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFormat { .. } | Error::Read { .. } | Error::Extraction { .. }
        )
    }
}
