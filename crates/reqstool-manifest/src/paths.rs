//! Well-known file names and the paths derived from the configuration

use reqstool_config::ReqstoolConfig;
use std::path::{Path, PathBuf};

pub const REQUIREMENTS_FILE: &str = "requirements.yml";
pub const SOFTWARE_VERIFICATION_CASES_FILE: &str = "software_verification_cases.yml";
pub const MANUAL_VERIFICATION_RESULTS_FILE: &str = "manual_verification_results.yml";
pub const ANNOTATIONS_FILE: &str = "annotations.yml";

/// The resource manifest, written to the project root
pub const MANIFEST_FILE_NAME: &str = "reqstool_config.yml";

/// Candidate resource files, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub requirements: PathBuf,
    pub software_verification_cases: PathBuf,
    pub manual_verification_results: PathBuf,
    pub annotations: PathBuf,
}

impl ResourcePaths {
    pub fn from_config(config: &ReqstoolConfig) -> Self {
        let dataset = &config.dataset_directory;
        Self {
            requirements: dataset.join(REQUIREMENTS_FILE),
            software_verification_cases: dataset.join(SOFTWARE_VERIFICATION_CASES_FILE),
            manual_verification_results: dataset.join(MANUAL_VERIFICATION_RESULTS_FILE),
            annotations: annotations_path(config),
        }
    }
}

/// Where the extractor writes the annotations file
pub fn annotations_path(config: &ReqstoolConfig) -> PathBuf {
    config.output_directory.join(ANNOTATIONS_FILE)
}

/// Path as it is recorded in generated files
pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
