use kvault_config::{ConfigLoader, ConfigMapConfig, InlineConfig, SecretConfig};
use kvault_core::Result;
use kvault_secrets::SecretBackend;
use std::path::Path;

pub mod configmap;
pub mod inline;
pub mod secret;

/// The three generators, one per binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Substitute one file and wrap it in a ConfigMap
    ConfigMap,
    /// Render selected keys of one secret as a Secret
    Secret,
    /// Substitute several files and concatenate them
    Inline,
}

impl Commands {
    pub fn bin_name(&self) -> &'static str {
        match self {
            Commands::ConfigMap => "configmap-from-vault",
            Commands::Secret => "secret-from-vault",
            Commands::Inline => "vault-replace-inline",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Commands::ConfigMap => {
                "Resolve vault:// references in a file and print it as a ConfigMap"
            }
            Commands::Secret => "Print keys of a Vault secret as a base64-encoded Secret",
            Commands::Inline => {
                "Resolve vault:// references in several files and print them as one stream"
            }
        }
    }

    /// Load the configuration at `config_path` and produce the full stdout text
    pub async fn execute(self, backend: &dyn SecretBackend, config_path: &Path) -> Result<String> {
        let loader = ConfigLoader::new(config_path);
        match self {
            Commands::ConfigMap => {
                let config: ConfigMapConfig = loader.load()?;
                configmap::execute(backend, &config).await
            }
            Commands::Secret => {
                let config: SecretConfig = loader.load()?;
                secret::execute(backend, &config).await
            }
            Commands::Inline => {
                let config: InlineConfig = loader.load()?;
                inline::execute(backend, &config).await
            }
        }
    }
}
