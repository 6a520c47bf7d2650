//! File-based repository resolution
//!
//! Resolves coordinates against repositories whose URL is a `file://` URL or
//! a plain path, using each descriptor's layout to compute the artifact path.
//! Repositories are searched in list order; the first hit wins. Repositories
//! with other URL schemes are skipped by this resolver.
//!
//! Transitive dependencies are read from an optional `artifact-version.deps`
//! file sitting next to the artifact: one coordinate token per line, `#`
//! starts a comment.

use std::collections::HashSet;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::coordinate::{Coordinate, CoordinateDefaults, parse};
use crate::error::{Result, resolution_failed};
use crate::repository::RepositoryDescriptor;
use crate::resolver::{ArtifactResolver, ResolvedArtifact};

/// Resolver over file-based repositories
#[derive(Debug, Default)]
pub struct LocalRepositoryResolver;

impl LocalRepositoryResolver {
    pub fn new() -> Self {
        Self
    }

    /// Locate an artifact in the first repository that has it
    ///
    /// Returns the artifact file and the path its dependency list would have.
    fn locate(
        &self,
        coordinate: &Coordinate,
        repositories: &[RepositoryDescriptor],
    ) -> Option<(PathBuf, PathBuf)> {
        for repository in repositories {
            let Some(root) = file_root(&repository.url) else {
                continue;
            };
            let artifact = root.join(repository.layout.artifact_path(coordinate));
            if artifact.is_file() {
                let deps = root.join(repository.layout.deps_path(coordinate));
                return Some((artifact, deps));
            }
        }
        None
    }

    fn resolve_one(
        &self,
        coordinate: &Coordinate,
        repositories: &[RepositoryDescriptor],
    ) -> Result<(ResolvedArtifact, PathBuf)> {
        match self.locate(coordinate, repositories) {
            Some((file, deps)) => Ok((
                ResolvedArtifact {
                    coordinate: coordinate.clone(),
                    file: Some(file),
                },
                deps,
            )),
            None => Err(resolution_failed(
                coordinate.to_string(),
                "not found in any listed repository",
            )),
        }
    }

    /// Read dependency coordinates from a `.deps` file, if present
    fn read_dependencies(&self, root: &Coordinate, deps_path: &Path) -> Result<Vec<Coordinate>> {
        if !deps_path.is_file() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(deps_path).map_err(|e| {
            resolution_failed(
                root.to_string(),
                format!("failed to read {}: {}", deps_path.display(), e),
            )
        })?;

        let mut dependencies = Vec::new();
        for line in contents.lines() {
            let token = line.split('#').next().unwrap_or("").trim();
            if token.is_empty() {
                continue;
            }
            let dependency = parse(token, &CoordinateDefaults::default()).map_err(|e| {
                resolution_failed(
                    root.to_string(),
                    format!("invalid dependency '{}': {}", token, e),
                )
            })?;
            dependencies.push(dependency);
        }
        Ok(dependencies)
    }
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve(
        &self,
        coordinate: &Coordinate,
        repositories: &[RepositoryDescriptor],
        transitive: bool,
    ) -> Result<Vec<ResolvedArtifact>> {
        if !transitive {
            let (artifact, _) = self.resolve_one(coordinate, repositories)?;
            return Ok(vec![artifact]);
        }

        let mut results = Vec::new();
        let mut visited: HashSet<Coordinate> = HashSet::new();
        let mut queue: VecDeque<Coordinate> = VecDeque::new();

        visited.insert(coordinate.clone());
        queue.push_back(coordinate.clone());

        while let Some(current) = queue.pop_front() {
            let (artifact, deps_path) = self.resolve_one(&current, repositories)?;
            results.push(artifact);

            for dependency in self.read_dependencies(&current, &deps_path)? {
                if visited.insert(dependency.clone()) {
                    queue.push_back(dependency);
                }
            }
        }

        Ok(results)
    }
}

/// Local root of a repository URL, `None` for non-file schemes
fn file_root(url: &str) -> Option<PathBuf> {
    if let Some(path) = url.strip_prefix("file://") {
        return Some(PathBuf::from(path));
    }
    if url.contains("://") {
        return None;
    }
    Some(PathBuf::from(url))
}
