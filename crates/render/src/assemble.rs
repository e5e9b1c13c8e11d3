//! Multi-file assembly for `vault-replace-inline`

use crate::substitute::Substituter;
use kvault_core::{Result, DOCUMENT_SEPARATOR};
use std::path::PathBuf;

/// Substitute each file in order and join the results with a `---` line.
///
/// Stops at the first failing file. An empty list is rejected earlier, by
/// configuration validation.
pub async fn assemble_all(substituter: &Substituter<'_>, paths: &[PathBuf]) -> Result<String> {
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        documents.push(substituter.substitute_file(path).await?);
    }

    Ok(documents.join(&format!("\n{DOCUMENT_SEPARATOR}\n")))
}

/// Final stdout framing: the assembled text followed by a closing `---` line
#[must_use]
pub fn frame_inline_output(assembled: &str) -> String {
    format!("{assembled}\n{DOCUMENT_SEPARATOR}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvault_secrets::testing::FakeBackend;
    use kvault_core::Error;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_files_joined_with_separator() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.yaml", "x: vault://kv/data/a@value\n");
        let b = write(&dir, "b.yaml", "y\n");

        let backend = FakeBackend::new().with_secret("kv/data/a", &[("value", "1")]);
        let substituter = Substituter::new(&backend);

        let out = assemble_all(&substituter, &[a, b]).await.unwrap();
        assert_eq!(out, "x: 1\n---\ny");
        assert_eq!(frame_inline_output(&out), "x: 1\n---\ny\n---\n");
    }

    #[tokio::test]
    async fn test_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = ["c", "a", "b"]
            .iter()
            .map(|n| write(&dir, &format!("{n}.txt"), n))
            .collect();

        let backend = FakeBackend::new();
        let out = assemble_all(&Substituter::new(&backend), &paths).await.unwrap();
        assert_eq!(out, "c\n---\na\n---\nb");
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.yaml", "x: vault://kv/data/missing@value\n");
        let b = write(&dir, "b.yaml", "y: vault://kv/data/b@value\n");

        let backend = FakeBackend::new().with_secret("kv/data/b", &[("value", "2")]);
        let err = assemble_all(&Substituter::new(&backend), &[a, b])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::SecretPathNotFound { .. }));
        assert_eq!(backend.reads(), vec!["kv/data/missing"]);
    }

    #[tokio::test]
    async fn test_missing_file_fails_the_whole_run() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.yaml", "x\n");
        let backend = FakeBackend::new();

        let err = assemble_all(&Substituter::new(&backend), &[a, dir.path().join("gone.yaml")])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
