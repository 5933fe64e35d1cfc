//! pyproject.toml as an opaque document
//!
//! Only the pieces the hooks care about are typed: the `[tool.reqstool]`
//! table, the package version and Poetry's `include` list. Edits go through a
//! format-preserving document, so comments, key order and the layout of every
//! other table survive a save.

use crate::atomic::write_atomic;
use crate::errors::ConfigError;
use crate::tool_config::ReqstoolConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml_edit::{Array, DocumentMut, InlineTable, Item, TableLike, Value};
use tracing::debug;

/// File name of the project manifest
pub const PYPROJECT_FILE_NAME: &str = "pyproject.toml";

/// Version reported when the manifest declares none
pub const UNKNOWN_VERSION: &str = "0.0.0";

/// One entry of `[tool.poetry].include`
///
/// Poetry accepts both a bare glob and a table with an optional `format`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IncludeEntry {
    Bare(String),
    Detailed {
        path: String,
        #[serde(default)]
        format: Option<IncludeFormat>,
    },
}

/// The `format` key of an include table: one format or several
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IncludeFormat {
    One(String),
    Many(Vec<String>),
}

impl IncludeEntry {
    /// Entry bundled only into the source distribution
    pub fn sdist(path: impl Into<String>) -> Self {
        IncludeEntry::Detailed {
            path: path.into(),
            format: Some(IncludeFormat::One("sdist".to_string())),
        }
    }

    /// The path (or glob) this entry includes
    pub fn path(&self) -> &str {
        match self {
            IncludeEntry::Bare(path) => path,
            IncludeEntry::Detailed { path, .. } => path,
        }
    }

    /// Inline TOML form: a string or `{ path = ..., format = ... }`
    fn to_value(&self) -> Value {
        match self {
            IncludeEntry::Bare(path) => Value::from(path.as_str()),
            IncludeEntry::Detailed { path, format } => {
                let mut table = InlineTable::new();
                table.insert("path", Value::from(path.as_str()));
                match format {
                    Some(IncludeFormat::One(one)) => {
                        table.insert("format", Value::from(one.as_str()));
                    }
                    Some(IncludeFormat::Many(many)) => {
                        let formats: Array = many.iter().map(String::as_str).collect();
                        table.insert("format", Value::Array(formats));
                    }
                    None => {}
                }
                Value::InlineTable(table)
            }
        }
    }
}

/// A loaded `pyproject.toml`
///
/// `document` is what gets edited and saved; `data` is a plain view of the
/// same content for typed reads.
#[derive(Debug, Clone)]
pub struct PyProject {
    path: PathBuf,
    document: DocumentMut,
    data: toml::Table,
}

impl PyProject {
    /// Load `pyproject.toml` from a project directory
    pub fn load_from_dir(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&project_dir.join(PYPROJECT_FILE_NAME))
    }

    /// Load a project manifest from an explicit path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        debug!("Reading project manifest: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest content that will be saved back to `path`
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let document: DocumentMut = content.parse()?;
        let data: toml::Table = toml::from_str(content)?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest; all configured paths are relative to it
    pub fn root_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn table(&self, keys: &[&str]) -> Option<&toml::Table> {
        let mut current = &self.data;
        for key in keys {
            current = current.get(*key)?.as_table()?;
        }
        Some(current)
    }

    /// Walk to the table at `keys` in the editable document, creating
    /// implicit tables (no `[header]` of their own) for missing levels
    fn table_like_mut(&mut self, keys: &[&str]) -> Result<&mut dyn TableLike, ConfigError> {
        let mut current: &mut dyn TableLike = self.document.as_table_mut();
        let mut walked = Vec::with_capacity(keys.len());
        for key in keys {
            walked.push(*key);
            let mut created = toml_edit::Table::new();
            created.set_implicit(true);
            current = current
                .entry(key)
                .or_insert(Item::Table(created))
                .as_table_like_mut()
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: walked.join("."),
                    reason: "expected a table".to_string(),
                })?;
        }
        Ok(current)
    }

    /// Typed `[tool.reqstool]` settings, defaults applied
    pub fn reqstool_config(&self) -> Result<ReqstoolConfig, ConfigError> {
        match self.table(&["tool", "reqstool"]) {
            Some(table) => Ok(toml::Value::Table(table.clone()).try_into()?),
            None => Ok(ReqstoolConfig::default()),
        }
    }

    /// Package version: `[project].version`, then `[tool.poetry].version`
    ///
    /// Poetry 2 reads the PEP 621 table first and only falls back to its own
    /// section when `[project]` has no version.
    pub fn version(&self) -> String {
        [&["project"][..], &["tool", "poetry"][..]]
            .iter()
            .filter_map(|keys| self.table(keys))
            .find_map(|table| table.get("version").and_then(|v| v.as_str()))
            .unwrap_or(UNKNOWN_VERSION)
            .to_string()
    }

    /// Current `[tool.poetry].include`, empty when absent
    pub fn include_entries(&self) -> Result<Vec<IncludeEntry>, ConfigError> {
        let Some(value) = self.table(&["tool", "poetry"]).and_then(|t| t.get("include")) else {
            return Ok(Vec::new());
        };

        // Poetry also accepts a single bare string here
        if let Some(single) = value.as_str() {
            return Ok(vec![IncludeEntry::Bare(single.to_string())]);
        }

        value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::InvalidValue {
                key: "tool.poetry.include".to_string(),
                reason: e.message().to_string(),
            })
    }

    /// Replace `[tool.poetry].include` with an inline array, one entry per
    /// line. Nothing else in the document is touched.
    pub fn set_include_entries(&mut self, entries: &[IncludeEntry]) -> Result<(), ConfigError> {
        let mut array = Array::new();
        for entry in entries {
            let mut value = entry.to_value();
            value.decor_mut().set_prefix("\n    ");
            array.push_formatted(value);
        }
        array.set_trailing("\n");
        array.set_trailing_comma(true);

        self.table_like_mut(&["tool", "poetry"])?
            .insert("include", Item::Value(Value::Array(array)));
        self.data = toml::from_str(&self.document.to_string())?;
        Ok(())
    }

    /// Render the document as TOML
    pub fn to_toml_string(&self) -> String {
        self.document.to_string()
    }

    /// Save back to where the manifest was loaded from, atomically
    pub fn save(&self) -> Result<(), ConfigError> {
        write_atomic(&self.path, &self.to_toml_string())?;
        debug!("Project manifest saved: {:?}", self.path);
        Ok(())
    }
}
