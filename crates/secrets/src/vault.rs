//! HashiCorp Vault HTTP backend
//!
//! One `GET {VAULT_HOST}/v1/{path}` per read, authenticated with the
//! `X-Vault-Token` header. No retries and no caching: the first failure is
//! returned to the caller, which aborts the run.

use crate::backend::SecretBackend;
use crate::payload::{decode_payload, error_messages};
use async_trait::async_trait;
use kvault_config::VaultSettings;
use kvault_core::{
    Error, Result, SecretData, VAULT_API_PREFIX, VAULT_REQUEST_TIMEOUT_SECS, VAULT_TOKEN_HEADER,
};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Vault client bound to one address and token for the whole run
pub struct VaultClient {
    client: reqwest::Client,
    settings: VaultSettings,
}

impl VaultClient {
    /// Create a client with the default request timeout
    pub fn new(settings: VaultSettings) -> Result<Self> {
        Self::with_timeout(settings, Duration::from_secs(VAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(settings: VaultSettings, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::backend_unreachable(settings.address().as_str(), format!("client setup failed: {e}"))
            })?;

        Ok(Self { client, settings })
    }

    /// Full read URL for a secret path
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.settings.address().as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let raw = format!("{base}/{VAULT_API_PREFIX}/{path}");
        Url::parse(&raw).map_err(|e| Error::backend_unreachable(raw, format!("invalid secret path: {e}")))
    }
}

#[async_trait]
impl SecretBackend for VaultClient {
    async fn read_secret(&self, path: &str) -> Result<SecretData> {
        let endpoint = self.endpoint(path)?;
        tracing::debug!(endpoint = %endpoint, "Reading secret");

        let response = self
            .client
            .get(endpoint.clone())
            .header(VAULT_TOKEN_HEADER, self.settings.token())
            .send()
            .await
            .map_err(|e| Error::backend_unreachable(endpoint.as_str(), e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::backend_unreachable(endpoint.as_str(), e.to_string()))?;
        tracing::debug!(endpoint = %endpoint, status = %status, "Secret read finished");

        let body: Option<Value> = serde_json::from_str(&text).ok();

        if status == StatusCode::NOT_FOUND {
            // A soft-deleted KV v2 version answers 404 with a metadata envelope;
            // only a bare 404 means the path holds nothing.
            return match body {
                Some(ref body) if body.get("data").is_some_and(Value::is_object) => {
                    decode_payload(path, body)
                }
                _ => Err(Error::secret_path_not_found(path)),
            };
        }

        if !status.is_success() {
            let detail = body
                .as_ref()
                .and_then(error_messages)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(Error::backend_unreachable(
                endpoint.as_str(),
                format!("unexpected status {status}: {detail}"),
            ));
        }

        match body {
            Some(body) => decode_payload(path, &body),
            None => Err(Error::secret_data_shape(path, "response is not JSON")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvault_core::Reference;
    use serde_json::json;
    use wiremock::matchers::{header, method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> VaultClient {
        let settings = VaultSettings::new(&server.uri(), "s.test-token").unwrap();
        VaultClient::new(settings).unwrap()
    }

    fn kv2(data: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {"data": data, "metadata": {"version": 1}}
        }))
    }

    #[tokio::test]
    async fn test_read_sends_token_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/v1/secret/data/app"))
            .and(header("X-Vault-Token", "s.test-token"))
            .respond_with(kv2(json!({"user": "app", "pass": "pw"})))
            .expect(1)
            .mount(&server)
            .await;

        let data = client(&server).read_secret("secret/data/app").await.unwrap();
        assert_eq!(data.get("user"), Some("app"));
        assert_eq!(data.get("pass"), Some("pw"));
    }

    #[tokio::test]
    async fn test_leading_slash_and_trailing_host_slash() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/v1/secret/data/app"))
            .respond_with(kv2(json!({"k": "v"})))
            .expect(1)
            .mount(&server)
            .await;

        let settings = VaultSettings::new(&format!("{}/", server.uri()), "t").unwrap();
        let client = VaultClient::new(settings).unwrap();
        let data = client.read_secret("/secret/data/app").await.unwrap();
        assert_eq!(data.get("k"), Some("v"));
    }

    #[tokio::test]
    async fn test_every_resolve_hits_the_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/v1/secret/data/app"))
            .respond_with(kv2(json!({"token": "abc"})))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server);
        let reference = Reference::new("secret/data/app", "token");
        assert_eq!(client.resolve(&reference).await.unwrap().value(), "abc");
        assert_eq!(client.resolve(&reference).await.unwrap().value(), "abc");
    }

    #[tokio::test]
    async fn test_bare_404_is_path_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": []})))
            .mount(&server)
            .await;

        let err = client(&server).read_secret("secret/data/none").await.unwrap_err();
        assert!(matches!(err, Error::SecretPathNotFound { ref path } if path == "secret/data/none"));
    }

    #[tokio::test]
    async fn test_soft_deleted_404_is_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "data": {"data": null, "metadata": {"deletion_time": "2024-01-01T00:00:00Z"}}
            })))
            .mount(&server)
            .await;

        let err = client(&server).read_secret("secret/data/old").await.unwrap_err();
        assert!(matches!(err, Error::SecretDataShapeUnexpected { .. }));
    }

    #[tokio::test]
    async fn test_forbidden_carries_vault_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"errors": ["permission denied"]})),
            )
            .mount(&server)
            .await;

        let err = client(&server).read_secret("secret/data/app").await.unwrap_err();
        assert!(matches!(err, Error::BackendUnreachable { .. }));
        assert!(err.to_string().contains("permission denied"));
        assert!(!err.to_string().contains("s.test-token"));
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let err = client(&server).read_secret("secret/data/app").await.unwrap_err();
        assert!(matches!(err, Error::SecretDataShapeUnexpected { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let settings = VaultSettings::new(&format!("http://127.0.0.1:{port}"), "t").unwrap();
        let client = VaultClient::with_timeout(settings, Duration::from_secs(2)).unwrap();
        let err = client.read_secret("secret/data/app").await.unwrap_err();
        assert!(matches!(err, Error::BackendUnreachable { .. }));
    }
}
