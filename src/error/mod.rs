//! Error types and handling for artcp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`coordinate`]: Coordinate parsing errors
//! - [`repository`]: Repository specification and layout errors
//! - [`resolve`]: Artifact resolution errors
//! - [`fs`]: File system and output errors
//! - [`config`]: Settings and project file errors

pub mod config;
pub mod coordinate;
pub mod fs;
pub mod repository;
pub mod resolve;

#[allow(unused_imports)]
pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
#[allow(unused_imports)]
pub use coordinate::{invalid as invalid_coordinate, missing_version};
#[allow(unused_imports)]
pub use fs::{copy_failed, io_error, output_dir_failed};
#[allow(unused_imports)]
pub use repository::{invalid_spec as invalid_repository_spec, unknown_layout};
#[allow(unused_imports)]
pub use resolve::failed as resolution_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for artcp operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtcpError {
    // Coordinate errors
    #[error("Invalid artifact coordinate: {token}")]
    #[diagnostic(
        code(artcp::coordinate::invalid),
        help("Coordinates must have the form groupId:artifactId:version[:type[:classifier]]")
    )]
    InvalidCoordinate { token: String },

    #[error("No version for coordinate: {token}")]
    #[diagnostic(
        code(artcp::coordinate::missing_version),
        help("Specify a version in the coordinate or provide a project file with --project")
    )]
    MissingVersion { token: String },

    #[error("No artifacts requested")]
    #[diagnostic(
        code(artcp::coordinate::none_requested),
        help("Pass coordinates as arguments or via --artifact-list")
    )]
    NoArtifactsRequested,

    // Repository errors
    #[error("Unknown repository layout: {layout}")]
    #[diagnostic(
        code(artcp::repository::unknown_layout),
        help("Registered layouts: default, flat")
    )]
    UnknownLayout { layout: String },

    #[error("Invalid repository specification: {spec}")]
    #[diagnostic(
        code(artcp::repository::invalid_spec),
        help("Use \"id::layout::url\" or a plain URL")
    )]
    InvalidRepositorySpec { spec: String },

    // Resolution errors
    #[error("Failed to resolve '{coordinate}': {reason}")]
    #[diagnostic(
        code(artcp::resolve::failed),
        help("Check that the coordinate exists in one of the listed repositories")
    )]
    ResolutionFailed { coordinate: String, reason: String },

    // File system errors
    #[error("Failed to create output directory: {path}")]
    #[diagnostic(code(artcp::fs::output_dir_failed))]
    OutputDirFailed { path: String, reason: String },

    #[error("Failed to copy artifact to {path}")]
    #[diagnostic(code(artcp::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(artcp::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(artcp::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(artcp::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

impl From<std::io::Error> for ArtcpError {
    fn from(err: std::io::Error) -> Self {
        ArtcpError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ArtcpError {
    fn from(err: serde_yaml::Error) -> Self {
        ArtcpError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ArtcpError>;
