use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or rewriting the project manifest
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Project manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse project manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to parse project manifest: {0}")]
    Document(#[from] toml_edit::TomlError),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
