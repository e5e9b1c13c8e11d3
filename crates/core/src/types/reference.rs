//! Secret references found in source text

use crate::constants::REFERENCE_SCHEME;
use std::fmt;

/// A `vault://<path>@<key>` reference extracted from one match span
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub path: String,
    pub key: String,
}

impl Reference {
    #[must_use]
    pub fn new(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REFERENCE_SCHEME}{}@{}", self.path, self.key)
    }
}

/// The value a reference resolved to. Immutable once produced.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    key: String,
    value: String,
}

impl ResolvedValue {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedValue")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}
