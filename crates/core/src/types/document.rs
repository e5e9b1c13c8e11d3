//! Documents built after every reference has resolved

use std::fmt;

/// Manifest kinds the tool emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    ConfigMap,
    Secret,
}

impl DocumentKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::ConfigMap => "ConfigMap",
            DocumentKind::Secret => "Secret",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a rendered document
#[derive(Clone, PartialEq, Eq)]
pub enum DocumentData {
    /// One resolved file embedded verbatim under a single key
    Blob { key: String, text: String },
    /// Encoded key/value pairs in emission order
    Entries(Vec<(String, String)>),
}

impl DocumentData {
    /// Number of data keys in the document
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DocumentData::Blob { .. } => 1,
            DocumentData::Entries(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DocumentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentData::Blob { key, text } => f
                .debug_struct("Blob")
                .field("key", key)
                .field("bytes", &text.len())
                .finish(),
            DocumentData::Entries(entries) => f
                .debug_list()
                .entries(entries.iter().map(|(k, _)| k))
                .finish(),
        }
    }
}

/// A manifest ready for rendering.
///
/// Only ever constructed from fully resolved input; there is no partially
/// resolved representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub name: String,
    pub namespace: String,
    pub data: DocumentData,
}

impl RenderedDocument {
    #[must_use]
    pub fn config_map(
        name: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: DocumentKind::ConfigMap,
            name: name.into(),
            namespace: namespace.into(),
            data: DocumentData::Blob {
                key: key.into(),
                text: text.into(),
            },
        }
    }

    #[must_use]
    pub fn secret(
        name: impl Into<String>,
        namespace: impl Into<String>,
        entries: Vec<(String, String)>,
    ) -> Self {
        Self {
            kind: DocumentKind::Secret,
            name: name.into(),
            namespace: namespace.into(),
            data: DocumentData::Entries(entries),
        }
    }
}
