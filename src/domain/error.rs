use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for defectlab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// TOML parsing error.
    #[error("Failed to parse defectlab.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Requirement specifier is malformed.
    #[error("Invalid requirement '{spec}': {reason}")]
    InvalidRequirement { spec: String, reason: String },

    /// Package installer could not be spawned or exited unsuccessfully.
    #[error("Failed to install '{package}': {details}")]
    InstallerFailed { package: String, details: String },

    /// Interactive prompt could not be read.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
