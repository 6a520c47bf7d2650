//! Artifact resolution
//!
//! The resolver is the seam between the copy pipeline and whatever actually
//! locates artifacts. The pipeline only depends on the [`ArtifactResolver`]
//! trait; `local.rs` provides the implementation shipped with the binary,
//! resolving against file-based repositories.

pub mod local;

pub use local::LocalRepositoryResolver;

use std::path::PathBuf;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::repository::RepositoryDescriptor;

/// An artifact located by a resolver
#[derive(Debug, Clone)]
pub struct ResolvedArtifact {
    pub coordinate: Coordinate,

    /// Local file backing the artifact; `None` when the resolver could not
    /// attach one (handled as a soft failure downstream)
    pub file: Option<PathBuf>,
}

/// Resolves coordinates against an ordered repository list
///
/// With `transitive` set, returns the full dependency closure of the
/// coordinate; the order of the returned sequence is resolver-defined and
/// must be treated as unordered. Without it, returns exactly the single
/// requested artifact.
pub trait ArtifactResolver {
    fn resolve(
        &self,
        coordinate: &Coordinate,
        repositories: &[RepositoryDescriptor],
        transitive: bool,
    ) -> Result<Vec<ResolvedArtifact>>;
}
