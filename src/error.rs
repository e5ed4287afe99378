//! Error types for pasteclean.
//!
//! The cleanup pipeline itself is total and never fails. Errors only come
//! from the I/O helpers that read pasted content from files or readers.

use std::io;
use thiserror::Error;

/// Result type alias for pasteclean operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pasteclean.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not valid UTF-8.
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// Input could not be accepted (e.g. a directory was given as a file).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
