//! Project context (`artcp.yaml`)
//!
//! The enclosing project supplies a default version for versionless
//! coordinates, its packaging kind for `--skip-poms`, and its declared
//! repositories for the repository list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_parse_failed, config_read_failed};

/// Project context loaded from a YAML file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Packaging kind, e.g. "jar" or "pom"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,

    /// Declared repositories, searched before any explicitly passed ones
    #[serde(default)]
    pub repositories: Vec<DeclaredRepository>,
}

/// A repository declared by the project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclaredRepository {
    pub id: String,

    /// Layout name, resolved against the layout registry ("default" if omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    pub url: String,
}

impl ProjectContext {
    /// Parse a project context from a YAML string
    #[allow(dead_code)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let project: Self = serde_yaml::from_str(yaml)?;
        Ok(project)
    }

    /// Load a project context from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Whether the project packaging is "pom"
    pub fn is_pom_packaging(&self) -> bool {
        self.packaging.as_deref() == Some("pom")
    }
}
