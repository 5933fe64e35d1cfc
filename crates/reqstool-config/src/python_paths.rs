//! Locating the Python interpreter that runs the annotation extractor
//!
//! The extractor is a Python package installed in the project's environment,
//! so the interpreter must be the project's own one whenever possible.

use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming an interpreter explicitly
pub const PYTHON_ENV: &str = "REQSTOOL_PYTHON";

/// Virtual environment directory names probed in the project root
const VENV_DIR_CANDIDATES: &[&str] = &[".venv", "venv"];

/// The name of the binaries/scripts directory in a Python venv
/// "Scripts" on Windows, "bin" on Unix
#[cfg(windows)]
pub const PYTHON_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const PYTHON_BIN_DIR: &str = "bin";

/// Candidate executable names in a venv
#[cfg(not(windows))]
const PYTHON_EXE_CANDIDATES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PYTHON_EXE_CANDIDATES: &[&str] = &["python.exe", "python3.exe"];

/// Error type for interpreter resolution
#[derive(Debug, Clone)]
pub enum PythonPathError {
    /// An explicitly requested interpreter does not exist
    NotAFile(PathBuf),
    /// No interpreter found anywhere
    NotFound(String),
}

impl fmt::Display for PythonPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PythonPathError::NotAFile(path) => {
                write!(f, "Python interpreter not found: {}", path.display())
            }
            PythonPathError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PythonPathError {}

/// Resolve the interpreter for a project.
///
/// Order: `explicit`, then `$REQSTOOL_PYTHON`, then a virtual environment in
/// `project_dir`, then `python3`/`python` on `PATH`.
pub fn find_python(project_dir: &Path, explicit: Option<&Path>) -> Result<PathBuf, PythonPathError> {
    let from_env = std::env::var_os(PYTHON_ENV).map(PathBuf::from);
    if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
        return resolve_explicit(&path);
    }

    for name in VENV_DIR_CANDIDATES {
        if let Some(exe) = resolve_venv_python(&project_dir.join(name)) {
            return Ok(exe);
        }
    }

    ["python3", "python"]
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| {
            PythonPathError::NotFound(format!(
                "No Python interpreter found (set {} or create a virtual environment in {})",
                PYTHON_ENV,
                project_dir.display()
            ))
        })
}

fn resolve_explicit(path: &Path) -> Result<PathBuf, PythonPathError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    // A bare command name such as "python3.12" is looked up on PATH
    if path.components().count() == 1 {
        if let Ok(found) = which::which(path) {
            return Ok(found);
        }
    }
    Err(PythonPathError::NotAFile(path.to_path_buf()))
}

/// Python executable of a virtual environment, if it has one
pub fn resolve_venv_python(venv_path: &Path) -> Option<PathBuf> {
    let bin_dir = venv_path.join(PYTHON_BIN_DIR);
    if !bin_dir.is_dir() {
        return None;
    }

    PYTHON_EXE_CANDIDATES
        .iter()
        .map(|exe| bin_dir.join(exe))
        .find(|candidate| candidate.is_file())
}
