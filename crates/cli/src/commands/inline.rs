use kvault_config::InlineConfig;
use kvault_core::Result;
use kvault_render::{assemble_all, frame_inline_output, Substituter};
use kvault_secrets::SecretBackend;

/// Substitute every configured file and frame them as one document stream
pub async fn execute(backend: &dyn SecretBackend, config: &InlineConfig) -> Result<String> {
    let substituter = Substituter::new(backend);
    let assembled = assemble_all(&substituter, &config.files).await?;
    Ok(frame_inline_output(&assembled))
}
