//! Error types for kvault operations

mod builders;
mod types;

pub use types::{Error, Result};
