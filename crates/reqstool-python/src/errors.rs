use reqstool_config::PythonPathError;
use std::io;
use thiserror::Error;

/// Errors that can occur while generating the annotations file
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error(transparent)]
    PythonNotFound(#[from] PythonPathError),

    #[error("reqstool-python-decorators is not installed in the Python environment")]
    DecoratorsNotInstalled,

    #[error("Annotation extraction failed ({status}): {stderr}")]
    ProcessFailed { status: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
