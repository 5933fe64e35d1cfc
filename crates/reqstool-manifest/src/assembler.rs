//! Building the resource manifest from what exists on disk

use crate::errors::ManifestError;
use crate::paths::{path_string, ResourcePaths, REQUIREMENTS_FILE};
use crate::types::{ResourceManifest, Resources};
use reqstool_config::ReqstoolConfig;
use std::path::Path;
use tracing::debug;

/// Assemble the manifest for the project rooted at `project_root`.
///
/// Paths are checked under `project_root` but recorded as configured. The
/// requirements file is mandatory; every other file is listed only if it
/// exists, and test result patterns only if any are configured.
pub fn assemble(
    config: &ReqstoolConfig,
    project_root: &Path,
) -> Result<ResourceManifest, ManifestError> {
    let paths = ResourcePaths::from_config(config);

    if !project_root.join(&paths.requirements).exists() {
        return Err(ManifestError::MissingMandatoryFile {
            name: REQUIREMENTS_FILE.to_string(),
            path: paths.requirements,
        });
    }

    let present = |path: &Path| -> Option<String> {
        let exists = project_root.join(path).exists();
        debug!("Resource {:?} exists: {}", path, exists);
        exists.then(|| path_string(path))
    };

    let resources = Resources {
        requirements: path_string(&paths.requirements),
        software_verification_cases: present(&paths.software_verification_cases),
        manual_verification_results: present(&paths.manual_verification_results),
        annotations: present(&paths.annotations),
        test_results: config.test_results.clone(),
    };

    Ok(ResourceManifest::new(resources))
}
