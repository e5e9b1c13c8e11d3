use kvault_config::ConfigMapConfig;
use kvault_core::Result;
use kvault_render::{manifest, project_config_map, Substituter};
use kvault_secrets::SecretBackend;

/// Substitute `pathFile` and embed the result in a ConfigMap
pub async fn execute(backend: &dyn SecretBackend, config: &ConfigMapConfig) -> Result<String> {
    let text = Substituter::new(backend)
        .substitute_file(&config.path_file)
        .await?;

    let doc = project_config_map(
        &config.name_config_map,
        &config.namespace,
        &config.path_file,
        text,
    )?;

    manifest::render(&doc)
}
