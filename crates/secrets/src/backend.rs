//! The lookup seam between substitution and the secret store

use async_trait::async_trait;
use kvault_core::{Error, Reference, ResolvedValue, Result, SecretData};

/// A source of secrets addressed by path.
///
/// Implementations perform exactly one read per call. Nothing is cached, so
/// a reference that appears twice is read twice.
#[async_trait]
pub trait SecretBackend: Send + Sync {
    /// Read the whole key/value map stored at `path`
    ///
    /// # Returns
    /// * `Ok(data)` - the decoded map, possibly empty
    /// * `Err(SecretPathNotFound)` - nothing is stored at `path`
    /// * `Err(SecretDataShapeUnexpected)` - the backend answered with something other than a map of strings
    /// * `Err(BackendUnreachable)` - transport failure or unexpected status
    async fn read_secret(&self, path: &str) -> Result<SecretData>;

    /// Resolve one inline reference. The key must exist in the secret.
    async fn resolve(&self, reference: &Reference) -> Result<ResolvedValue> {
        let data = self.read_secret(&reference.path).await?;
        lookup_key(&reference.path, &data, &reference.key)
    }
}

/// Strict key lookup used for inline references
pub fn lookup_key(path: &str, data: &SecretData, key: &str) -> Result<ResolvedValue> {
    data.get(key)
        .map(|value| ResolvedValue::new(key, value))
        .ok_or_else(|| Error::secret_key_not_found(path, key))
}

#[async_trait]
impl<T: SecretBackend + ?Sized> SecretBackend for Box<T> {
    async fn read_secret(&self, path: &str) -> Result<SecretData> {
        (**self).read_secret(path).await
    }
}
