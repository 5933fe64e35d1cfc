use serde::{Deserialize, Serialize};

/// Value of the `language` key
pub const LANGUAGE: &str = "python";

/// Value of the `build` key
pub const BUILD_TOOL: &str = "poetry";

/// The `reqstool_config.yml` document
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceManifest {
    pub language: String,
    pub build: String,
    pub resources: Resources,
}

impl ResourceManifest {
    pub fn new(resources: Resources) -> Self {
        Self {
            language: LANGUAGE.to_string(),
            build: BUILD_TOOL.to_string(),
            resources,
        }
    }
}

/// Locations of the traceability artifacts shipped with the package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub requirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_verification_cases: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_verification_results: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_results: Vec<String>,
}

impl Resources {
    /// Single-file resources present in this manifest, as (key, path) pairs
    pub fn files(&self) -> Vec<(&'static str, &str)> {
        let mut files = vec![("requirements", self.requirements.as_str())];
        let optional = [
            ("software_verification_cases", &self.software_verification_cases),
            ("manual_verification_results", &self.manual_verification_results),
            ("annotations", &self.annotations),
        ];
        files.extend(
            optional
                .into_iter()
                .filter_map(|(key, path)| path.as_deref().map(|p| (key, p))),
        );
        files
    }
}
