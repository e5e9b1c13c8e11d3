//! Output projectors: resolved data -> [`RenderedDocument`]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kvault_core::{DocumentKind, Error, KeySelection, RenderedDocument, Result, SecretData};
use std::path::Path;

/// Embed one resolved file in a ConfigMap, keyed by the file's base name
pub fn project_config_map(
    name: &str,
    namespace: &str,
    source: &Path,
    text: String,
) -> Result<RenderedDocument> {
    let key = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::template_render(
                DocumentKind::ConfigMap.as_str(),
                format!("cannot derive a data key from \"{}\"", source.display()),
            )
        })?;

    Ok(RenderedDocument::config_map(name, namespace, key, text))
}

/// Build a Secret from the selected keys of `data`, base64-encoding every value.
///
/// Requested keys the backend did not return are left out with a warning,
/// unlike inline references where a missing key fails the run.
pub fn project_secret(
    name: &str,
    namespace: &str,
    secret_path: &str,
    data: &SecretData,
    selection: &KeySelection,
) -> RenderedDocument {
    let selected = selection.select(data);

    for key in &selected.missing {
        tracing::warn!(path = %secret_path, key = %key, "Requested key not present in secret, omitting");
    }

    let entries = selected
        .data
        .iter()
        .map(|(key, value)| (key.to_string(), STANDARD.encode(value.as_bytes())))
        .collect();

    RenderedDocument::secret(name, namespace, entries)
}
