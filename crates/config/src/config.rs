//! Generator configuration shapes
//!
//! Each tool reads one of these from the YAML file named on its command line.
//! Field names are camelCase on disk. Unknown fields are ignored so the same
//! file can carry kustomize's `apiVersion`/`kind`/`metadata` header.

use kvault_core::{Error, KeySelection, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Implemented by every configuration shape; run once after parsing
pub trait ValidateConfig {
    /// Check required fields. `path` is the configuration file, used in errors.
    fn validate(&self, path: &Path) -> Result<()>;
}

fn require(value: &str, field: &str, path: &Path) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::config_missing_field(field, path));
    }
    Ok(())
}

/// `configmap-from-vault`: one source file embedded in a ConfigMap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigMapConfig {
    pub name_config_map: String,
    pub namespace: String,
    pub path_file: PathBuf,
}

impl ValidateConfig for ConfigMapConfig {
    fn validate(&self, path: &Path) -> Result<()> {
        require(&self.name_config_map, "nameConfigMap", path)?;
        require(&self.namespace, "namespace", path)?;
        require(&self.path_file.to_string_lossy(), "pathFile", path)?;
        Ok(())
    }
}

/// `secret-from-vault`: selected keys of one secret rendered as a Secret
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretConfig {
    pub name_secret: String,
    pub namespace: String,
    pub vault_secret: String,
    pub vault_keys: Vec<String>,
}

impl SecretConfig {
    /// The configured keys as a selection policy
    #[must_use]
    pub fn key_selection(&self) -> KeySelection {
        KeySelection::from_keys(&self.vault_keys)
    }
}

impl ValidateConfig for SecretConfig {
    fn validate(&self, path: &Path) -> Result<()> {
        require(&self.name_secret, "nameSecret", path)?;
        require(&self.namespace, "namespace", path)?;
        require(&self.vault_secret, "vaultSecret", path)?;
        if self.vault_keys.iter().all(|k| k.trim().is_empty()) {
            return Err(Error::config_missing_field("vaultKeys", path));
        }
        Ok(())
    }
}

/// `vault-replace-inline`: several files substituted and concatenated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineConfig {
    pub files: Vec<PathBuf>,
}

impl ValidateConfig for InlineConfig {
    fn validate(&self, path: &Path) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::config_missing_field("files", path));
        }
        Ok(())
    }
}
