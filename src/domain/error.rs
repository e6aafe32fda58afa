use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for codews operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No project descriptor found at the project root.
    #[error("No project descriptor found at {}", .0.display())]
    DescriptorMissing(PathBuf),

    /// The database is not local and has no usable editor command.
    #[error("Database '{name}' is not local and has no usable editor command")]
    RemoteDatabase { name: String },

    /// Template registration or rendering failed.
    #[error("Template '{name}': {details}")]
    Template { name: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
