//! Plain text persistence for documents.
//!
//! The on-disk format is newline-delimited UTF-8: one document line per
//! text line, no header and no escaping. Saving terminates every line with
//! `\n`; loading accepts `\n` or `\r\n` and a missing final terminator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::document::Document;

/// Input bytes that are not UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid UTF-8 on line {line}")]
pub struct InvalidUtf8 {
    /// 1-based line holding the first invalid byte.
    pub line: usize,
}

/// Failure to reach or interpret the backing file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open {} for loading: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to open {} for saving: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to load {}: {source}", path.display())]
    Encoding { path: PathBuf, source: InvalidUtf8 },
}

/// Render lines in the on-disk format.
pub fn encode<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Split raw file content into lines, stripping line terminators.
///
/// # Errors
/// Returns [`InvalidUtf8`] if `bytes` is not valid UTF-8.
pub fn decode(bytes: &[u8]) -> Result<Vec<String>, InvalidUtf8> {
    let text = std::str::from_utf8(bytes).map_err(|err| {
        let valid = &bytes[..err.valid_up_to()];
        InvalidUtf8 {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;
    Ok(text.lines().map(ToOwned::to_owned).collect())
}

/// Write every line of `document` to `path`, replacing the file.
///
/// # Errors
/// Returns [`StorageError::Write`] if the file cannot be created or written.
pub fn save(path: &Path, document: &Document) -> Result<(), StorageError> {
    fs::write(path, encode(document.lines())).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), lines = document.line_count(), "saved document");
    Ok(())
}

/// Read the lines stored at `path`.
///
/// Nothing is returned on failure, so callers can keep their current
/// document and only call [`Document::replace_all`] on success.
///
/// # Errors
/// Returns [`StorageError::Read`] if the file cannot be read and
/// [`StorageError::Encoding`] if it is not UTF-8.
pub fn load(path: &Path) -> Result<Vec<String>, StorageError> {
    let raw_bytes = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = decode(&raw_bytes).map_err(|source| StorageError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded document");
    Ok(lines)
}
