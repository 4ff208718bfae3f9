use model::{core::encoding::EncodingError, records::table::TableError};
use std::{io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: EncodingError,
    },
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: EncodingError,
    },
    #[error("Malformed row in {path} at line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("No columns to parse from file: {0}")]
    EmptyInput(String),
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid table: {0}")]
    Table(#[from] TableError),
}

impl FileError {
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path),
            _ => FileError::Io { path, source },
        }
    }

    /// True for failures caused by the file's contents rather than its access.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            FileError::RaggedRow { .. } | FileError::EmptyInput(_) | FileError::CsvError(_)
        )
    }
}
