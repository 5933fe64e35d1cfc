//! Writing and removing `reqstool_config.yml`

use crate::errors::ManifestError;
use crate::types::ResourceManifest;
use reqstool_config::write_atomic;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// First line of the manifest; lets editors validate it against the schema
pub const SCHEMA_COMMENT: &str = "# yaml-language-server: $schema=https://raw.githubusercontent.com/reqstool/reqstool-client/main/src/reqstool/resources/schemas/v1/reqstool_config.schema.json";

/// Render the manifest with its comment header
pub fn render(manifest: &ResourceManifest, version: &str) -> Result<String, ManifestError> {
    let body = serde_yaml::to_string(manifest)?;
    Ok(format!("{}\n\n# version: {}\n{}", SCHEMA_COMMENT, version, body))
}

/// Write the manifest to `output_path`, replacing any existing file
pub fn write_to_path(
    manifest: &ResourceManifest,
    output_path: &Path,
    version: &str,
) -> Result<(), ManifestError> {
    debug!("Writing resource manifest to: {:?}", output_path);

    let content = render(manifest, version)?;
    write_atomic(output_path, &content)?;

    info!("Resource manifest written to: {:?}", output_path);
    Ok(())
}

/// Remove the manifest. Returns whether a file was actually removed.
pub fn delete(manifest_path: &Path) -> Result<bool, ManifestError> {
    match fs::remove_file(manifest_path) {
        Ok(()) => {
            info!("Resource manifest removed: {:?}", manifest_path);
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No resource manifest to remove at: {:?}", manifest_path);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::manifest_writer::*;
    use crate::types::Resources;
    use tempfile::TempDir;

    // Comments are ignored by the YAML parser
    fn read_from_path(manifest_path: &Path) -> Result<ResourceManifest, ManifestError> {
        let content = fs::read_to_string(manifest_path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn sample_manifest() -> ResourceManifest {
        ResourceManifest::new(Resources {
            requirements: "reqstool/requirements.yml".to_string(),
            annotations: Some("build/reqstool/annotations.yml".to_string()),
            test_results: vec!["build/junit.xml".to_string()],
            ..Default::default()
        })
    }

    #[test]
    fn test_render_layout() {
        let Ok(content) = render(&sample_manifest(), "1.4.0") else {
            return;
        };
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], SCHEMA_COMMENT);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "# version: 1.4.0");
        assert_eq!(lines[3], "language: python");
        assert_eq!(lines[4], "build: poetry");
        assert_eq!(lines[5], "resources:");
        assert!(content.contains("  requirements: reqstool/requirements.yml\n"));
        assert!(content.contains("  annotations: build/reqstool/annotations.yml\n"));
        assert!(content.contains("- build/junit.xml\n"));
        assert!(!content.contains("software_verification_cases"));
    }

    #[test]
    fn test_write_overwrites_and_reads_back() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("reqstool_config.yml");
        assert!(fs::write(&path, "stale: true\nmore: stale\nextra: lines\n").is_ok());

        let manifest = sample_manifest();
        assert!(write_to_path(&manifest, &path, "0.1.0").is_ok());

        let content = fs::read_to_string(&path).unwrap_or_default();
        assert!(!content.contains("stale"));

        let loaded = read_from_path(&path);
        assert!(loaded.is_ok_and(|m| m == manifest));
    }

    #[test]
    fn test_delete_is_noop_when_absent() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("reqstool_config.yml");

        assert!(delete(&path).is_ok_and(|removed| !removed));

        assert!(fs::write(&path, "language: python\n").is_ok());
        assert!(delete(&path).is_ok_and(|removed| removed));
        assert!(!path.exists());
    }
}
