//! Project configuration for the reqstool Poetry hooks
//!
//! Reads `pyproject.toml`: the `[tool.reqstool]` settings, the package version
//! and Poetry's include list. Also locates the Python interpreter the
//! annotation extractor runs under.

pub mod atomic;
pub mod errors;
pub mod pyproject;
pub mod python_paths;
pub mod tool_config;

pub use atomic::write_atomic;
pub use errors::ConfigError;
pub use pyproject::{IncludeEntry, IncludeFormat, PyProject, PYPROJECT_FILE_NAME};
pub use python_paths::{find_python, PythonPathError};
pub use tool_config::ReqstoolConfig;
