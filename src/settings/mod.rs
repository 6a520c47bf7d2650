//! User settings (mirrors, proxies, server credentials)
//!
//! Settings enrich the repository list before resolution: a mirror rewrites
//! matching repositories, an active proxy is attached to every repository,
//! and server credentials are attached by repository id. Settings are loaded
//! from a YAML file (`~/.config/artcp/settings.yaml` by default).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_parse_failed, config_read_failed};

/// User settings file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub mirrors: Vec<Mirror>,

    #[serde(default)]
    pub proxies: Vec<Proxy>,

    #[serde(default)]
    pub servers: Vec<ServerCredentials>,
}

/// A mirror rule rewriting repositories it covers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mirror {
    pub id: String,

    /// Repository id this mirror covers, or "*" for all repositories
    pub mirror_of: String,

    pub url: String,
}

impl Mirror {
    /// Whether this mirror covers the repository with the given id
    pub fn matches(&self, repository_id: &str) -> bool {
        self.mirror_of == "*" || self.mirror_of == repository_id
    }
}

/// An outbound proxy entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proxy {
    pub id: String,

    #[serde(default = "default_active")]
    pub active: bool,

    pub protocol: String,
    pub host: String,
    pub port: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Authentication for a repository, matched by repository id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerCredentials {
    pub id: String,
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Settings {
    /// Parse settings from a YAML string
    #[allow(dead_code)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load settings from a file if it exists, empty settings otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match default_settings_path() {
                Some(p) if p.exists() => Self::load(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// The first active proxy entry, if any
    pub fn active_proxy(&self) -> Option<&Proxy> {
        self.proxies.iter().find(|p| p.active)
    }

    /// The first mirror covering the repository with the given id, if any
    pub fn mirror_for(&self, repository_id: &str) -> Option<&Mirror> {
        self.mirrors.iter().find(|m| m.matches(repository_id))
    }

    /// Credentials for the repository with the given id, if any
    pub fn credentials_for(&self, repository_id: &str) -> Option<&ServerCredentials> {
        self.servers.iter().find(|s| s.id == repository_id)
    }
}

/// Default settings file location (`~/.config/artcp/settings.yaml`)
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("artcp").join("settings.yaml"))
}
