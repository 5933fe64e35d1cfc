//! Typed view of the `[tool.reqstool]` table
//!
//! Every key is optional. Missing keys fall back to the defaults below, so a
//! project without any `[tool.reqstool]` table still gets a usable config.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Default source roots scanned for annotations
pub const DEFAULT_SOURCES: &[&str] = &["src", "tests"];

/// Default directory holding the hand-written requirement files
pub const DEFAULT_DATASET_DIRECTORY: &str = "reqstool";

/// Default directory for generated files
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "build/reqstool";

/// Settings read from `[tool.reqstool]` in `pyproject.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReqstoolConfig {
    /// Source roots handed to the annotation extractor
    pub sources: Vec<String>,
    /// Directory containing `requirements.yml` and friends
    pub dataset_directory: PathBuf,
    /// Directory the annotations file is generated into
    pub output_directory: PathBuf,
    /// Glob patterns for test result files; a bare string is accepted
    #[serde(deserialize_with = "string_or_list")]
    pub test_results: Vec<String>,
}

impl Default for ReqstoolConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| (*s).to_string()).collect(),
            dataset_directory: PathBuf::from(DEFAULT_DATASET_DIRECTORY),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            test_results: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(pattern) if pattern.is_empty() => Vec::new(),
        StringOrList::One(pattern) => vec![pattern],
        StringOrList::Many(patterns) => patterns,
    })
}
