//! In-memory backend for tests of this crate and its dependents
//!
//! Compiled for this crate's own tests and, through the `testing` feature,
//! for the dev-dependencies of the render and cli crates.

use crate::backend::SecretBackend;
use async_trait::async_trait;
use kvault_core::{Error, Result, SecretData};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed secrets and records every path it was asked for
#[derive(Default)]
pub struct FakeBackend {
    secrets: HashMap<String, Vec<(String, String)>>,
    reads: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, path: &str, entries: &[(&str, &str)]) -> Self {
        self.secrets.insert(
            path.to_string(),
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Paths read so far, in call order
    pub fn reads(&self) -> Vec<String> {
        self.reads
            .lock()
            .map(|reads| reads.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SecretBackend for FakeBackend {
    async fn read_secret(&self, path: &str) -> Result<SecretData> {
        if let Ok(mut reads) = self.reads.lock() {
            reads.push(path.to_string());
        }
        self.secrets
            .get(path)
            .map(|entries| entries.iter().cloned().collect())
            .ok_or_else(|| Error::secret_path_not_found(path))
    }
}
