use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling or writing the resource manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing mandatory {name}: {}", .path.display())]
    MissingMandatoryFile { name: String, path: PathBuf },
}
