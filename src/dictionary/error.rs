//! Error types for dictionary loading.

use thiserror::Error;

/// Errors that can occur while opening or parsing the dictionary file.
///
/// All variants are fatal: the store either loads completely or not at all.
/// Queries against a loaded dictionary cannot fail.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dictionary file is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(String),
}

/// A convenience `Result` alias for dictionary operations.
pub type Result<T> = std::result::Result<T, DictionaryError>;
