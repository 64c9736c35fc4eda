//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// File reader producing raw document bytes
///
/// Decoding is left to the core so invalid UTF-8 is reported the same way
/// for every transport.
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}
