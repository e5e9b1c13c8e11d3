//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a missing configuration field error
    #[must_use]
    pub fn config_missing_field(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::ConfigMissingField {
            field: field.into(),
            path: path.into(),
        }
    }

    /// Create a configuration parse error
    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an environment variable error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create the error for a required variable that is unset or empty
    #[must_use]
    pub fn environment_missing(variable: impl Into<String>) -> Self {
        Self::environment(variable, "not found")
    }

    #[must_use]
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    #[must_use]
    pub fn file_is_directory(path: impl Into<PathBuf>) -> Self {
        Error::FileIsDirectory { path: path.into() }
    }

    /// Create a file read error, mapping `NotFound` onto [`Error::FileNotFound`]
    #[must_use]
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Error::FileNotFound { path };
        }
        Error::FileRead { path, source }
    }

    /// Create a backend transport error
    #[must_use]
    pub fn backend_unreachable(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::BackendUnreachable {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn secret_path_not_found(path: impl Into<String>) -> Self {
        Error::SecretPathNotFound { path: path.into() }
    }

    /// Create an unexpected payload shape error
    #[must_use]
    pub fn secret_data_shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::SecretDataShapeUnexpected {
            path: path.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn secret_key_not_found(path: impl Into<String>, key: impl Into<String>) -> Self {
        Error::SecretKeyNotFound {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Create a manifest rendering error
    #[must_use]
    pub fn template_render(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Error::TemplateRender {
            kind: kind.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn output(source: std::io::Error) -> Self {
        Error::Output { source }
    }
}
