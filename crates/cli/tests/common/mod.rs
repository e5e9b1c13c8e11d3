//! Shared helpers for the binary tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "s.test-token";

/// Register a KV v2 secret on the mock server
pub async fn mount_secret(server: &MockServer, secret_path: &str, data: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/{secret_path}")))
        .and(header("X-Vault-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "00000000-0000-0000-0000-000000000000",
            "data": { "data": data, "metadata": { "version": 1 } }
        })))
        .mount(server)
        .await;
}

/// A binary with the backend environment pointed at `server`
pub fn bin(name: &str, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env("VAULT_HOST", server.uri())
        .env("VAULT_TOKEN", TOKEN)
        .env_remove("KVAULT_LOG");
    cmd
}

pub fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn display(path: &Path) -> String {
    path.display().to_string()
}
