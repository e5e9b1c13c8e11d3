//! Configuration handling for kvault
//!
//! This crate loads the YAML generator configurations of the three tools and
//! captures the backend connection settings from the environment.

pub mod config;
pub mod loader;
pub mod settings;

pub use config::*;
pub use loader::ConfigLoader;
pub use settings::VaultSettings;
