use kvault_config::SecretConfig;
use kvault_core::Result;
use kvault_render::{manifest, project_secret};
use kvault_secrets::SecretBackend;

/// Read `vaultSecret` once and render the selected keys as a Secret
pub async fn execute(backend: &dyn SecretBackend, config: &SecretConfig) -> Result<String> {
    let data = backend.read_secret(&config.vault_secret).await?;

    let doc = project_secret(
        &config.name_secret,
        &config.namespace,
        &config.vault_secret,
        &data,
        &config.key_selection(),
    );

    manifest::render(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvault_secrets::testing::FakeBackend;
    use kvault_core::Error;

    fn config(keys: &[&str]) -> SecretConfig {
        SecretConfig {
            name_secret: "db-credentials".into(),
            namespace: "prod".into(),
            vault_secret: "secret/data/db".into(),
            vault_keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn backend() -> FakeBackend {
        FakeBackend::new().with_secret(
            "secret/data/db",
            &[("username", "admin"), ("password", "s3cret"), ("host", "db")],
        )
    }

    #[tokio::test]
    async fn test_wildcard_includes_every_key() {
        let backend = backend();
        let out = execute(&backend, &config(&["*"])).await.unwrap();
        assert_eq!(
            out,
            "apiVersion: v1\nkind: Secret\nmetadata:\n  name: db-credentials\n  namespace: prod\n\
             type: Opaque\ndata:\n  host: ZGI=\n  password: czNjcmV0\n  username: YWRtaW4=\n"
        );
        assert_eq!(backend.reads(), vec!["secret/data/db"]);
    }

    #[tokio::test]
    async fn test_explicit_keys_silently_skip_absent() {
        let backend = backend();
        let out = execute(&backend, &config(&["password", "token"])).await.unwrap();
        assert!(out.ends_with("data:\n  password: czNjcmV0\n"));
        assert!(!out.contains("token"));
    }

    #[tokio::test]
    async fn test_missing_secret_is_fatal() {
        let backend = FakeBackend::new();
        let err = execute(&backend, &config(&["*"])).await.unwrap_err();
        assert!(matches!(err, Error::SecretPathNotFound { .. }));
    }
}
