//! Configuration loader for kvault
//!
//! Reads the configuration file named on the command line, parses it into the
//! shape the running tool expects and validates required fields. Loaded once
//! at startup; the result is never mutated afterwards.

use crate::config::ValidateConfig;
use kvault_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

/// Loads one configuration file
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read, parse and validate the configuration
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default + ValidateConfig,
    {
        let content = self.read()?;
        let config = self.parse::<T>(&content)?;
        config.validate(&self.path)?;

        tracing::debug!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    fn read(&self) -> Result<String> {
        if self.path.is_dir() {
            return Err(Error::file_is_directory(&self.path));
        }
        fs::read_to_string(&self.path).map_err(|e| Error::file_read(&self.path, e))
    }

    fn parse<T>(&self, content: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        // An empty document carries no fields; validation reports which one is missing
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::config_parse(&self.path, e.to_string()))
    }
}
