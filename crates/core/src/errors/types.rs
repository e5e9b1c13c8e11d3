//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for kvault operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a run can hit. None of them is recovered locally: the first
/// one ends the run with exit status 1 and no document on stdout.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration field is absent or empty
    #[error("{field} not found in file configuration \"{}\"", path.display())]
    ConfigMissingField { field: String, path: PathBuf },

    /// The configuration file is not valid YAML for the expected shape
    #[error("unmarshal yaml file \"{}\" error: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A required environment variable is absent or empty
    #[error("{variable} environment variable {message}")]
    Environment { variable: String, message: String },

    /// Input file does not exist
    #[error("file \"{}\" not found", path.display())]
    FileNotFound { path: PathBuf },

    /// Input path names a directory
    #[error("file \"{}\" is a directory", path.display())]
    FileIsDirectory { path: PathBuf },

    /// Input file exists but could not be read
    #[error("read file \"{}\" error: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure or unexpected status talking to the backend
    #[error("secret backend '{endpoint}' unreachable: {message}")]
    BackendUnreachable { endpoint: String, message: String },

    /// The backend holds nothing at this path
    #[error("secret \"{path}\" not found")]
    SecretPathNotFound { path: String },

    /// The backend answered but not with a `data.data` map of strings
    #[error("secret \"{path}\" has unexpected data: {message}")]
    SecretDataShapeUnexpected { path: String, message: String },

    /// The secret exists but lacks the referenced key
    #[error("key \"{key}\" not found in secret \"{path}\"")]
    SecretKeyNotFound { path: String, key: String },

    /// A manifest could not be built from the resolved data
    #[error("render {kind} error: {message}")]
    TemplateRender { kind: String, message: String },

    /// Writing the rendered document failed
    #[error("write output error: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for this error. The tool has no finer-grained codes.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        1
    }
}
