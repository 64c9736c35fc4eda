//! Error types for the API

use std::fmt;
use thiserror::Error;

/// Which of the two compared documents an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first document of the pair
    First,
    /// The second document of the pair
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Broad category of a rejection, for transports that map errors to responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A document is missing, unreadable, or not valid UTF-8
    InvalidInput,
    /// The granularity selector or its length is missing or malformed
    InvalidParameter,
}

/// Error type for API operations
///
/// Every variant is raised before any matching work starts.
#[derive(Debug, Error)]
pub enum Error {
    /// No document was supplied
    #[error("Missing document: {0}")]
    MissingDocument(Side),

    /// The document bytes are not valid UTF-8
    #[error("Invalid document: {side} document is not valid UTF-8")]
    UndecodableDocument {
        /// Offending document
        side: Side,
        /// Decoding failure
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The document source could not be read
    #[error("Invalid document: failed to read {side} document: {source}")]
    Io {
        /// Offending document
        side: Side,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// No granularity selector was supplied
    #[error("Missing mode")]
    MissingMode,

    /// The granularity selector is not one of the known modes
    #[error("Invalid mode: {0}")]
    UnknownMode(String),

    /// Substring mode was requested without a length
    #[error("Missing length")]
    MissingLength,

    /// Substring length is not a positive integer
    #[error("Invalid length: {0}")]
    InvalidLength(String),
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingDocument(_) | Error::UndecodableDocument { .. } | Error::Io { .. } => {
                ErrorKind::InvalidInput
            }
            Error::MissingMode
            | Error::UnknownMode(_)
            | Error::MissingLength
            | Error::InvalidLength(_) => ErrorKind::InvalidParameter,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
