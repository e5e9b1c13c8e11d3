//! Line substitution engine
//!
//! Each line is scanned for references; every match span is replaced by the
//! value the backend returns for it. Lines are reassembled with `\n` and a
//! single trailing newline is dropped, so a file that ends with one line
//! terminator resolves to text without a trailing newline.

use kvault_core::{Result, SourceFile};
use kvault_secrets::{find_references, SecretBackend};
use std::path::Path;

/// Resolves the references of whole files against one backend
pub struct Substituter<'a> {
    backend: &'a dyn SecretBackend,
}

impl<'a> Substituter<'a> {
    pub fn new(backend: &'a dyn SecretBackend) -> Self {
        Self { backend }
    }

    /// Read `path` and substitute every reference in it.
    ///
    /// The file must exist and must not be a directory. An empty file yields
    /// an empty string without touching the backend.
    pub async fn substitute_file(&self, path: &Path) -> Result<String> {
        let source = SourceFile::read(path)?;
        tracing::debug!(
            path = %source.path().display(),
            lines = source.lines().len(),
            "Substituting file"
        );
        self.substitute(&source).await
    }

    /// Substitute an already-read source. The first failing lookup aborts
    /// and no partial text is returned.
    pub async fn substitute(&self, source: &SourceFile) -> Result<String> {
        let mut output = String::new();

        for line in source.lines() {
            output.push_str(&self.substitute_line(line).await?);
            output.push('\n');
        }

        // Delete last line terminator
        output.pop();

        Ok(output)
    }

    /// Substitute every reference in one line, left to right. A line without
    /// references comes back unchanged.
    pub async fn substitute_line(&self, line: &str) -> Result<String> {
        let matches = find_references(line);
        if matches.is_empty() {
            return Ok(line.to_string());
        }

        let mut result = String::with_capacity(line.len());
        let mut last = 0;

        for found in matches {
            let resolved = self.backend.resolve(&found.reference).await?;
            tracing::debug!(
                path = %found.reference.path,
                key = %found.reference.key,
                "Resolved reference"
            );

            result.push_str(&line[last..found.span.start]);
            result.push_str(resolved.value());
            last = found.span.end;
        }
        result.push_str(&line[last..]);

        Ok(result)
    }
}
