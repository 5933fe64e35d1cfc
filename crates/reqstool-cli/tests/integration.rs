//! Integration tests for reqstool-poetry

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PYPROJECT: &str = r#"[tool.poetry]
name = "mypackage"
version = "0.5.0"
description = "Example package"
include = ["CHANGELOG.md"]

[tool.poetry.dependencies]
python = "^3.10"

[tool.reqstool]
sources = ["src", "tests"]
test_results = "build/junit.xml"
"#;

/// A throwaway Poetry project plus a private log directory
struct Project {
    dir: TempDir,
    logs: TempDir,
}

impl Project {
    fn new() -> io::Result<Self> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("pyproject.toml"), PYPROJECT)?;
        Ok(Self {
            dir,
            logs: TempDir::new()?,
        })
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, relative: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("reqstool-poetry");
        cmd.env("REQSTOOL_LOG_DIR", self.logs.path())
            .env_remove("REQSTOOL_PYTHON")
            .arg("--project-dir")
            .arg(self.path());
        cmd
    }

    fn manifest(&self) -> PathBuf {
        self.path().join("reqstool_config.yml")
    }

    fn include_paths(&self) -> Vec<String> {
        let content = fs::read_to_string(self.path().join("pyproject.toml")).unwrap_or_default();
        let Ok(document) = toml::from_str::<toml::Table>(&content) else {
            return Vec::new();
        };
        document
            .get("tool")
            .and_then(|t| t.get("poetry"))
            .and_then(|p| p.get("include"))
            .and_then(|i| i.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|e| {
                        e.as_str()
                            .or_else(|| e.get("path").and_then(|p| p.as_str()))
                            .map(str::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(unix)]
mod fake_python {
    use std::fs;
    use std::io;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Skips `-c <script>` and writes a minimal annotations file to argv[1]
    const WORKING: &str = "#!/bin/sh\nshift 2\nmkdir -p \"$(dirname \"$1\")\"\necho 'requirement_annotations: {}' > \"$1\"\n";

    const BROKEN: &str = "#!/bin/sh\necho \"ModuleNotFoundError: No module named 'reqstool_python_decorators'\" >&2\nexit 1\n";

    fn install(dir: &Path, name: &str, body: &str) -> io::Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, body)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    pub fn working(dir: &Path) -> io::Result<PathBuf> {
        install(dir, "python-ok", WORKING)
    }

    pub fn broken(dir: &Path) -> io::Result<PathBuf> {
        install(dir, "python-broken", BROKEN)
    }
}

#[test]
fn test_version() {
    cargo_bin_cmd!("reqstool-poetry")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reqstool-poetry"));
}

#[test]
fn test_help_lists_hooks() {
    cargo_bin_cmd!("reqstool-poetry")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build-start"))
        .stdout(predicate::str::contains("install-start"))
        .stdout(predicate::str::contains("build-terminate"));
}

#[test]
fn test_invalid_command() {
    cargo_bin_cmd!("reqstool-poetry")
        .arg("invalid")
        .assert()
        .failure();
}

#[test]
fn test_missing_pyproject_fails() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    cargo_bin_cmd!("reqstool-poetry")
        .env("REQSTOOL_LOG_DIR", dir.path())
        .arg("--project-dir")
        .arg(dir.path())
        .arg("build-terminate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pyproject.toml"));
}

#[test]
fn test_show_config() {
    let project = Project::new().expect("project fixture");
    project
        .command()
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration:"))
        .stdout(predicate::str::contains("build/junit.xml"))
        .stdout(predicate::str::contains("0.5.0"));
}

#[cfg(unix)]
#[test]
fn test_build_start_writes_manifest() {
    let project = Project::new().expect("project fixture");
    project
        .write("reqstool/requirements.yml", "requirements: []\n")
        .expect("requirements");
    project
        .write("reqstool/software_verification_cases.yml", "cases: []\n")
        .expect("svcs");
    let python = fake_python::working(project.logs.path()).expect("fake python");

    project
        .command()
        .arg("--python")
        .arg(&python)
        .arg("build-start")
        .assert()
        .success();

    assert!(project
        .path()
        .join("build/reqstool/annotations.yml")
        .is_file());

    let content = fs::read_to_string(project.manifest()).expect("manifest written");
    assert!(content.starts_with("# yaml-language-server: $schema="));
    assert!(content.contains("# version: 0.5.0"));
    assert!(content.contains("language: python"));
    assert!(content.contains("build: poetry"));
    assert!(content.contains("requirements: reqstool/requirements.yml"));
    assert!(content.contains("software_verification_cases: reqstool/software_verification_cases.yml"));
    assert!(content.contains("annotations: build/reqstool/annotations.yml"));
    assert!(content.contains("- build/junit.xml"));
    assert!(!content.contains("manual_verification_results"));
}

#[cfg(unix)]
#[test]
fn test_build_start_without_requirements_fails() {
    let project = Project::new().expect("project fixture");
    let python = fake_python::working(project.logs.path()).expect("fake python");

    project
        .command()
        .arg("--python")
        .arg(&python)
        .arg("build-start")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing mandatory requirements.yml"));

    assert!(!project.manifest().exists());
}

#[cfg(unix)]
#[test]
fn test_build_start_extractor_failure_is_fatal() {
    let project = Project::new().expect("project fixture");
    project
        .write("reqstool/requirements.yml", "requirements: []\n")
        .expect("requirements");
    let python = fake_python::broken(project.logs.path()).expect("fake python");

    project
        .command()
        .arg("--python")
        .arg(&python)
        .arg("build-start")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reqstool-python-decorators is not installed"));

    assert!(!project.manifest().exists());
}

#[test]
fn test_install_start_is_idempotent() {
    let project = Project::new().expect("project fixture");

    project.command().arg("install-start").assert().success();
    let first = project.include_paths();
    assert_eq!(
        first,
        vec![
            "CHANGELOG.md",
            "reqstool_config.yml",
            "build/reqstool/annotations.yml",
            "reqstool",
            "build/junit.xml",
        ]
    );

    project.command().arg("install-start").assert().success();
    assert_eq!(project.include_paths(), first);

    let content = fs::read_to_string(project.path().join("pyproject.toml")).unwrap_or_default();
    assert!(!content.contains("\n\n\n"));
    assert!(content.contains("python = \"^3.10\""));
}

#[test]
fn test_build_terminate_removes_manifest() {
    let project = Project::new().expect("project fixture");
    project
        .write("reqstool_config.yml", "language: python\n")
        .expect("manifest");

    project.command().arg("build-terminate").assert().success();
    assert!(!project.manifest().exists());

    // Nothing left to remove is not an error
    project.command().arg("build-terminate").assert().success();
}

#[cfg(unix)]
#[test]
fn test_full_lifecycle() {
    let project = Project::new().expect("project fixture");
    project
        .write("reqstool/requirements.yml", "requirements: []\n")
        .expect("requirements");
    let python = fake_python::working(project.logs.path()).expect("fake python");

    project.command().arg("install-start").assert().success();
    project
        .command()
        .arg("--python")
        .arg(&python)
        .arg("build-start")
        .assert()
        .success();
    assert!(project.manifest().is_file());

    project.command().arg("build-terminate").assert().success();
    assert!(!project.manifest().exists());
    assert!(project
        .include_paths()
        .contains(&"reqstool_config.yml".to_string()));

    let log = fs::read_to_string(project.logs.path().join("reqstool-poetry.log")).unwrap_or_default();
    assert!(log.contains("added to reqstool_config.yml: reqstool/requirements.yml"));
    assert!(log.contains(
        "not found, left out of reqstool_config.yml: reqstool/software_verification_cases.yml"
    ));
}
