//! Storage error module.
//!
//! This module defines error types raised while reading or writing the
//! tab-separated dictionary file.

use crate::data_structures::OleloTrieError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for dictionary file operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during dictionary file operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The dictionary file could not be opened, read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a stream failed.
    #[error("Stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// A line is missing the tab between word and meaning.
    #[error("Line {line}: expected 'word<TAB>meaning'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
    },

    /// A line is not valid UTF-8.
    #[error("Line {line}: invalid UTF-8")]
    Encoding {
        /// 1-based line number
        line: usize,
    },

    /// The dictionary rejected an entry or a lookup failed.
    #[error("Line {line}: {source}")]
    Entry {
        /// 1-based line number
        line: usize,
        /// Rejection reason
        #[source]
        source: OleloTrieError,
    },

    /// A dictionary lookup failed while exporting.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] OleloTrieError),
}
