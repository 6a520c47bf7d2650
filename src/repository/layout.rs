//! Repository layouts
//!
//! A layout is the naming convention a repository uses to locate artifacts.
//! Layouts are a closed set resolved through a name registry; an unregistered
//! name fails with `UnknownLayout` before any resolution is attempted.

use std::path::PathBuf;

use crate::coordinate::Coordinate;
use crate::error::{Result, unknown_layout};

/// Layout name used when a repository specification leaves the layout empty
pub const DEFAULT_LAYOUT_NAME: &str = "default";

/// The registered repository layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryLayout {
    /// Nested `group/path/artifact/version/` directories
    Default,
    /// All artifacts directly under the repository root
    Flat,
}

impl RepositoryLayout {
    /// Look up a layout by its registered name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(RepositoryLayout::Default),
            "flat" => Ok(RepositoryLayout::Flat),
            other => Err(unknown_layout(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RepositoryLayout::Default => "default",
            RepositoryLayout::Flat => "flat",
        }
    }

    /// Relative path of an artifact within a repository using this layout
    pub fn artifact_path(&self, coordinate: &Coordinate) -> PathBuf {
        let mut file_name = format!("{}-{}", coordinate.artifact_id, coordinate.version);
        if let Some(ref classifier) = coordinate.classifier {
            file_name.push('-');
            file_name.push_str(classifier);
        }
        file_name.push('.');
        file_name.push_str(&coordinate.artifact_type);

        self.version_dir(coordinate).join(file_name)
    }

    /// Relative path of the dependency list sitting next to an artifact
    pub fn deps_path(&self, coordinate: &Coordinate) -> PathBuf {
        let file_name = format!("{}-{}.deps", coordinate.artifact_id, coordinate.version);
        self.version_dir(coordinate).join(file_name)
    }

    fn version_dir(&self, coordinate: &Coordinate) -> PathBuf {
        match self {
            RepositoryLayout::Default => {
                let mut dir = PathBuf::new();
                for part in coordinate.group_id.split('.') {
                    dir.push(part);
                }
                dir.push(&coordinate.artifact_id);
                dir.push(&coordinate.version);
                dir
            }
            RepositoryLayout::Flat => PathBuf::new(),
        }
    }
}
