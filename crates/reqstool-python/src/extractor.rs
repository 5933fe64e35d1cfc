use crate::errors::ExtractorError;
use reqstool_config::find_python;
use reqstool_logger as logger;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Module of the decorator processor inside `reqstool-python-decorators`
pub const DECORATOR_PROCESSOR_MODULE: &str =
    "reqstool_python_decorators.processors.decorator_processor";

/// Program handed to `python -c`: argv[1] is the output file, the rest are sources
const PROCESS_SCRIPT: &str = "\
import sys
from reqstool_python_decorators.processors.decorator_processor import DecoratorProcessor
DecoratorProcessor().process_decorated_data(path_to_python_files=sys.argv[2:], output_file=sys.argv[1])
";

/// Something that scans source roots and writes an annotations file
pub trait AnnotationExtractor {
    fn extract(&self, sources: &[String], output_file: &Path) -> Result<(), ExtractorError>;
}

/// Runs the Python decorator processor in a child interpreter
#[derive(Debug, Clone)]
pub struct DecoratorProcessor {
    python: PathBuf,
    working_dir: PathBuf,
}

impl DecoratorProcessor {
    pub fn new(python: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            python,
            working_dir,
        }
    }

    /// Use the interpreter belonging to the project in `project_dir`
    pub fn for_project(project_dir: &Path, python: Option<&Path>) -> Result<Self, ExtractorError> {
        let python = find_python(project_dir, python)?;
        debug!("Using Python interpreter: {:?}", python);
        Ok(Self::new(python, project_dir.to_path_buf()))
    }

    pub fn python(&self) -> &Path {
        &self.python
    }
}

impl AnnotationExtractor for DecoratorProcessor {
    /// `sources` and a relative `output_file` are resolved against the working directory
    fn extract(&self, sources: &[String], output_file: &Path) -> Result<(), ExtractorError> {
        let absolute_output = self.working_dir.join(output_file);
        if let Some(parent) = absolute_output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        logger::step(&format!(
            "Running {} on {:?} -> {}",
            DECORATOR_PROCESSOR_MODULE,
            sources,
            output_file.display()
        ));

        let output = Command::new(&self.python)
            .current_dir(&self.working_dir)
            .arg("-c")
            .arg(PROCESS_SCRIPT)
            .arg(output_file)
            .args(sources)
            .output()?;

        logger::capture_output(&self.python.display().to_string(), &output);

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains("ModuleNotFoundError") && stderr.contains("reqstool_python_decorators") {
            return Err(ExtractorError::DecoratorsNotInstalled);
        }

        Err(ExtractorError::ProcessFailed {
            status: output.status.to_string(),
            stderr,
        })
    }
}
