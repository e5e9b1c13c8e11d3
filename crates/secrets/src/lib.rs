//! Secret reference resolution for kvault
//!
//! - [`matcher`] recognises `vault://<path>@<key>` references inside a line
//! - [`backend`] is the seam every lookup goes through
//! - [`vault`] talks to HashiCorp Vault over HTTP
//! - [`payload`] turns a raw Vault response into a checked key/value map

pub mod backend;
pub mod matcher;
pub mod payload;
pub mod vault;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::SecretBackend;
pub use matcher::{find_references, ReferenceMatch};
pub use payload::decode_payload;
pub use vault::VaultClient;
