use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the database files
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be created, read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row does not have as many fields as the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A quoted field runs to the end of the file.
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    /// A row's id is larger than any id this tool hands out.
    #[error("line {line}: id {id} is out of range")]
    IdOutOfRange { line: usize, id: usize },

    /// The header row has no `id` column, so rows cannot be placed.
    #[error("header row has no `id` column")]
    MissingIdColumn,

    /// A parse error attributed to the file it came from.
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<PersistenceError>,
    },
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a file path to a content error; I/O errors already carry one
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io { .. } | Self::InFile { .. } => self,
            other => Self::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}
