//! Source files read fully before substitution starts

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An input file split into lines.
///
/// Lines are split on `\n` with a trailing `\r` dropped, so CRLF input comes
/// out LF-normalised after reassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    raw_lines: Vec<String>,
}

impl SourceFile {
    /// Read a file in one go.
    ///
    /// The path must exist and must not be a directory. A zero-length file
    /// yields no lines. Content must be UTF-8: manifest data is text, so
    /// anything else is a [`Error::FileRead`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| Error::file_read(path, e))?;

        if metadata.is_dir() {
            return Err(Error::file_is_directory(path));
        }

        if metadata.len() == 0 {
            return Ok(Self::from_lines(path, Vec::new()));
        }

        let content = fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        Ok(Self::from_text(path, &content))
    }

    /// Build a source file from in-memory text
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, content: &str) -> Self {
        Self::from_lines(path, content.lines().map(str::to_string).collect())
    }

    #[must_use]
    pub fn from_lines(path: impl Into<PathBuf>, raw_lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            raw_lines,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.raw_lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_lines.is_empty()
    }
}
