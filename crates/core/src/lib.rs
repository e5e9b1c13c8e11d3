//! Core domain types, errors, and constants for `kvault`.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias. Every failure in the
//!   pipeline is one of these variants and every one of them ends the run.
//! - **`types`**: References, resolved values, secret payloads, key
//!   selection and rendered documents.
//! - **`constants`**: Environment variable names, the reference scheme and
//!   document framing strings.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
