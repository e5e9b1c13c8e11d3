//! Core domain types for `kvault`.
//!
//! - **`reference`**: `vault://<path>@<key>` references and their resolved values
//! - **`secret`**: decoded secret payloads and key selection
//! - **`source`**: input files read fully into lines
//! - **`document`**: manifests built from fully resolved input

pub mod document;
pub mod reference;
pub mod secret;
pub mod source;

pub use document::*;
pub use reference::*;
pub use secret::*;
pub use source::*;
