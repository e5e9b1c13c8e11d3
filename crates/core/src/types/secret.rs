//! Decoded secret payloads and key selection

use crate::constants::WILDCARD_KEY;
use std::collections::BTreeMap;
use std::fmt;
use zeroize::Zeroize;

/// The key/value map stored at one backend path.
///
/// Keys iterate in lexicographic order, so anything rendered from this map is
/// reproducible across runs. Values are zeroized on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretData(BTreeMap<String, String>);

impl SecretData {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in lexicographic key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for SecretData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

impl Drop for SecretData {
    fn drop(&mut self) {
        for value in self.0.values_mut() {
            value.zeroize();
        }
    }
}

/// Which keys of a secret end up in a rendered Secret document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelection {
    /// Every key the backend returns (`*`)
    All,
    /// Only the listed keys; listed keys the backend lacks are omitted
    Only(Vec<String>),
}

/// Result of applying a [`KeySelection`] to a [`SecretData`]
#[derive(Debug)]
pub struct Selected {
    pub data: SecretData,
    /// Requested keys absent from the payload, in request order
    pub missing: Vec<String>,
}

impl KeySelection {
    /// Build a selection from configured keys. Any `*` entry selects everything.
    #[must_use]
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Self {
        if keys.iter().any(|k| k.as_ref() == WILDCARD_KEY) {
            KeySelection::All
        } else {
            KeySelection::Only(keys.iter().map(|k| k.as_ref().to_string()).collect())
        }
    }

    #[must_use]
    pub fn includes(&self, key: &str) -> bool {
        match self {
            KeySelection::All => true,
            KeySelection::Only(keys) => keys.iter().any(|k| k == key),
        }
    }

    /// Keep the selected entries. Unlike inline reference resolution, a
    /// requested key that is absent is not an error here: it is reported in
    /// [`Selected::missing`] and left out.
    #[must_use]
    pub fn select(&self, data: &SecretData) -> Selected {
        let selected: SecretData = data
            .iter()
            .filter(|(k, _)| self.includes(k))
            .collect();

        let mut missing = Vec::new();
        if let KeySelection::Only(keys) = self {
            for key in keys {
                if !data.contains_key(key) && !missing.contains(key) {
                    missing.push(key.clone());
                }
            }
        }

        Selected {
            data: selected,
            missing,
        }
    }
}
