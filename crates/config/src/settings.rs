//! Backend connection settings
//!
//! Address and token are captured once at startup and passed explicitly to
//! the backend client. Nothing here is global, so tests can build settings
//! from a plain lookup function without touching the process environment.

use kvault_core::{Error, Result, VAULT_HOST_VAR, VAULT_TOKEN_VAR};
use std::fmt;
use url::Url;
use zeroize::Zeroizing;

/// Where the secret backend lives and how to authenticate against it
#[derive(Clone)]
pub struct VaultSettings {
    address: Url,
    token: Zeroizing<String>,
}

impl VaultSettings {
    /// Build settings from an address and a token
    pub fn new(address: &str, token: impl Into<String>) -> Result<Self> {
        let token = Zeroizing::new(token.into());
        if address.trim().is_empty() {
            return Err(Error::environment_missing(VAULT_HOST_VAR));
        }
        if token.trim().is_empty() {
            return Err(Error::environment_missing(VAULT_TOKEN_VAR));
        }

        let address = Url::parse(address.trim()).map_err(|e| {
            Error::environment(VAULT_HOST_VAR, format!("is not a valid URL: {e}"))
        })?;

        Ok(Self { address, token })
    }

    /// Read `VAULT_HOST` and `VAULT_TOKEN` from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(VAULT_HOST_VAR)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::environment_missing(VAULT_HOST_VAR))?;
        let token = lookup(VAULT_TOKEN_VAR)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::environment_missing(VAULT_TOKEN_VAR))?;

        Self::new(&host, token)
    }

    #[must_use]
    pub fn address(&self) -> &Url {
        &self.address
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for VaultSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultSettings")
            .field("address", &self.address.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let settings = VaultSettings::from_lookup(lookup(&[
            ("VAULT_HOST", "https://vault.example.com:8200"),
            ("VAULT_TOKEN", "s.token"),
        ]))
        .unwrap();

        assert_eq!(settings.address().host_str(), Some("vault.example.com"));
        assert_eq!(settings.token(), "s.token");
    }

    #[test]
    fn test_host_is_checked_first() {
        let err = VaultSettings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "VAULT_HOST environment variable not found");
    }

    #[test]
    fn test_empty_token_is_missing() {
        let err = VaultSettings::from_lookup(lookup(&[
            ("VAULT_HOST", "http://127.0.0.1:8200"),
            ("VAULT_TOKEN", ""),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "VAULT_TOKEN environment variable not found");
    }

    #[test]
    fn test_invalid_host() {
        let err = VaultSettings::from_lookup(lookup(&[
            ("VAULT_HOST", "not a url"),
            ("VAULT_TOKEN", "t"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Environment { .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = VaultSettings::new("http://127.0.0.1:8200", "s.very-secret").unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("127.0.0.1"));
    }
}
