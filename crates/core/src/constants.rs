//! Constants used throughout the kvault codebase
// Backend connection
pub const VAULT_HOST_VAR: &str = "VAULT_HOST";
pub const VAULT_TOKEN_VAR: &str = "VAULT_TOKEN";
pub const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";
pub const VAULT_API_PREFIX: &str = "v1";
pub const VAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// Logging filter
pub const KVAULT_LOG_VAR: &str = "KVAULT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Reference syntax: vault://<path>@<key>
pub const REFERENCE_SCHEME: &str = "vault://";

// Key selection sentinel meaning "every key the backend returns"
pub const WILDCARD_KEY: &str = "*";

// Document framing
pub const DOCUMENT_SEPARATOR: &str = "---";

// Prefix for fatal diagnostics on stderr
pub const ERROR_PREFIX: &str = "[ERROR]";
