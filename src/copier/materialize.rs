//! Artifact materialization
//!
//! Computes the destination file name for an accepted artifact and copies the
//! resolved file into the output directory, overwriting an existing file at
//! that path. An artifact without a backing file is a soft failure: the
//! caller logs it and treats the artifact as done.

use std::path::{Path, PathBuf};

use crate::coordinate::Coordinate;
use crate::error::{Result, copy_failed, output_dir_failed};
use crate::resolver::ResolvedArtifact;

/// Marker emitted in place of the version when resolved snapshot versions
/// are disabled
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Options controlling destination file name composition
#[derive(Debug, Clone)]
pub struct NamingOptions {
    pub include_version: bool,
    pub include_classifier: bool,
    pub resolved_snapshot_version: bool,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            include_version: true,
            include_classifier: true,
            resolved_snapshot_version: true,
        }
    }
}

/// Destination file name for an artifact
///
/// `artifactId[-version|-SNAPSHOT][-classifier].type`. When the version is
/// included but resolved snapshot versions are disabled, the literal
/// "SNAPSHOT" marker is emitted regardless of the actual version.
pub fn destination_file_name(coordinate: &Coordinate, options: &NamingOptions) -> String {
    let mut name = coordinate.artifact_id.clone();
    if options.include_version {
        name.push('-');
        if options.resolved_snapshot_version {
            name.push_str(&coordinate.version);
        } else {
            name.push_str(SNAPSHOT_MARKER);
        }
    }
    if options.include_classifier {
        if let Some(ref classifier) = coordinate.classifier {
            if !classifier.is_empty() {
                name.push('-');
                name.push_str(classifier);
            }
        }
    }
    name.push('.');
    name.push_str(&coordinate.artifact_type);
    name
}

/// Create the output directory if it does not exist
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| output_dir_failed(path.display().to_string(), e.to_string()))?;
    }
    Ok(())
}

/// Result of materializing one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeOutcome {
    /// File was copied to the returned destination
    Copied(PathBuf),
    /// Artifact had no backing file on disk; treated as done, nothing written
    MissingSource,
}

/// Copy an accepted artifact into the output directory
pub fn materialize(
    artifact: &ResolvedArtifact,
    output_dir: &Path,
    options: &NamingOptions,
) -> Result<MaterializeOutcome> {
    let source = match artifact.file {
        Some(ref file) if file.exists() => file,
        _ => return Ok(MaterializeOutcome::MissingSource),
    };

    ensure_output_dir(output_dir)?;

    let destination = output_dir.join(destination_file_name(&artifact.coordinate, options));
    std::fs::copy(source, &destination)
        .map_err(|e| copy_failed(destination.display().to_string(), e.to_string()))?;

    Ok(MaterializeOutcome::Copied(destination))
}
