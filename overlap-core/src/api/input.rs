//! Document sources

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::{Error, Side};

/// A document to compare, from any of several sources
pub enum Input {
    /// Already-decoded text
    Text(String),
    /// File path, read and decoded on use
    File(PathBuf),
    /// Raw bytes, decoded as UTF-8 on use
    Bytes(Vec<u8>),
    /// Reader, drained and decoded on use
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the raw bytes of the document
    pub(crate) fn into_bytes(self, side: Side) -> Result<Vec<u8>, Error> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => std::fs::read(&path).map_err(|source| Error::Io { side, source }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|source| Error::Io { side, source })?;
                Ok(buffer)
            }
        }
    }

    /// Read and decode the document as UTF-8
    pub(crate) fn into_text(self, side: Side) -> Result<String, Error> {
        match self {
            Input::Text(text) => Ok(text),
            other => {
                let bytes = other.into_bytes(side)?;
                String::from_utf8(bytes)
                    .map_err(|source| Error::UndecodableDocument { side, source })
            }
        }
    }
}
