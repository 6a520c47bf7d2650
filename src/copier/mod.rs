//! The copy pipeline
//!
//! For each requested coordinate token: parse the coordinate, build the
//! repository list, resolve (transitively or not), then filter, deduplicate,
//! and materialize each result. Processing is strictly sequential in input
//! order; the first fatal error aborts the remaining batch with the cause
//! attached.

pub mod filter;
pub mod materialize;

use std::path::PathBuf;

use crate::coordinate::{self, CoordinateDefaults};
use crate::error::{ArtcpError, Result};
use crate::progress::ProgressDisplay;
use crate::project::ProjectContext;
use crate::repository::{RepositoryPolicy, build_repository_list};
use crate::resolver::ArtifactResolver;
use crate::settings::Settings;
use crate::ui;

use filter::{Disposition, ResultFilter};
use materialize::{MaterializeOutcome, NamingOptions, materialize};

/// Flat run configuration, read once at the start of a run
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// Coordinate tokens to resolve
    pub artifacts: Vec<String>,

    /// Additional whitespace-separated coordinate tokens in one string
    pub artifact_list: Option<String>,

    pub default_classifier: Option<String>,
    pub default_type: Option<String>,

    pub include_classifier: bool,
    pub include_version: bool,
    pub resolved_snapshot_version: bool,

    /// Extra repositories, comma-separated `id::layout::url` or bare URLs
    pub remote_repositories: Option<String>,

    /// Include the project's declared repositories in the list
    pub use_project_repositories: bool,

    pub exclude_classifiers: Vec<String>,

    /// Documented option; at-most-once copy is enforced by the seen-set
    /// regardless of its value
    #[allow(dead_code)]
    pub copy_once_per_runtime: bool,

    pub output_directory: PathBuf,

    pub skip: bool,
    pub skip_poms: bool,
    pub transitive: bool,

    pub update_policy: Option<String>,
    pub checksum_policy: Option<String>,
}

impl Default for CopyRequest {
    fn default() -> Self {
        Self {
            artifacts: Vec::new(),
            artifact_list: None,
            default_classifier: None,
            default_type: None,
            include_classifier: true,
            include_version: true,
            resolved_snapshot_version: true,
            remote_repositories: None,
            use_project_repositories: true,
            exclude_classifiers: Vec::new(),
            copy_once_per_runtime: true,
            output_directory: PathBuf::from("dependency"),
            skip: false,
            skip_poms: false,
            transitive: true,
            update_policy: None,
            checksum_policy: None,
        }
    }
}

impl CopyRequest {
    /// All requested coordinate tokens, in input order
    pub fn artifact_tokens(&self) -> Vec<String> {
        let mut tokens = self.artifacts.clone();
        if let Some(ref list) = self.artifact_list {
            tokens.extend(list.split_whitespace().map(|t| t.to_string()));
        }
        tokens
    }

    fn naming_options(&self) -> NamingOptions {
        NamingOptions {
            include_version: self.include_version,
            include_classifier: self.include_classifier,
            resolved_snapshot_version: self.resolved_snapshot_version,
        }
    }
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    pub copied: usize,
    pub excluded: usize,
    pub deduplicated: usize,
    pub missing: usize,
    /// Whole run was skipped (`skip` or `skip_poms`)
    pub skipped: bool,
}

/// One execution of the copy pipeline
///
/// Holds the run-scoped state (the seen-set via the filter). Not safe for
/// concurrent use from multiple threads; callers serialize or instantiate
/// per thread.
pub struct CopyRun<'a, R: ArtifactResolver> {
    request: &'a CopyRequest,
    settings: &'a Settings,
    project: Option<&'a ProjectContext>,
    resolver: &'a R,
    filter: ResultFilter,
    verbose: bool,
}

impl<'a, R: ArtifactResolver> CopyRun<'a, R> {
    pub fn new(
        request: &'a CopyRequest,
        settings: &'a Settings,
        project: Option<&'a ProjectContext>,
        resolver: &'a R,
        verbose: bool,
    ) -> Self {
        Self {
            request,
            settings,
            project,
            resolver,
            filter: ResultFilter::new(&request.exclude_classifiers),
            verbose,
        }
    }

    /// Run the pipeline over all requested coordinates
    pub fn run(&mut self, progress: Option<&ProgressDisplay>) -> Result<CopyOutcome> {
        if self.request.skip {
            ui::info("Skipping execution");
            return Ok(CopyOutcome {
                skipped: true,
                ..Default::default()
            });
        }

        if self.request.skip_poms {
            if let Some(project) = self.project {
                if project.is_pom_packaging() {
                    ui::info(&format!(
                        "Skipping {}, it has pom packaging and we are configured to skip these",
                        project.name.as_deref().unwrap_or("project")
                    ));
                    return Ok(CopyOutcome {
                        skipped: true,
                        ..Default::default()
                    });
                }
            }
        }

        let tokens = self.request.artifact_tokens();
        if tokens.is_empty() {
            return Err(ArtcpError::NoArtifactsRequested);
        }

        let defaults = CoordinateDefaults {
            version: self.project.and_then(|p| p.version.clone()),
            artifact_type: self.request.default_type.clone(),
            classifier: self.request.default_classifier.clone(),
        };

        let mut outcome = CopyOutcome::default();
        let total = tokens.len();

        for (index, token) in tokens.iter().enumerate() {
            ui::info(&format!("Getting {}", token));
            if let Some(progress) = progress {
                progress.update(token, index + 1, total);
            }

            self.process_coordinate(token, &defaults, &mut outcome)?;

            if let Some(progress) = progress {
                progress.inc();
            }
        }

        Ok(outcome)
    }

    /// Resolve and materialize one requested coordinate
    fn process_coordinate(
        &mut self,
        token: &str,
        defaults: &CoordinateDefaults,
        outcome: &mut CopyOutcome,
    ) -> Result<()> {
        // A fresh coordinate per token, never reused across iterations
        let requested = coordinate::parse(token, defaults)?;

        // Policy and list are rebuilt per coordinate; policy fields may vary
        // per call in principle
        let policy = RepositoryPolicy::from_options(
            self.request.update_policy.as_deref(),
            self.request.checksum_policy.as_deref(),
        );
        let repositories = build_repository_list(
            self.project,
            self.request.use_project_repositories,
            self.request.remote_repositories.as_deref(),
            &policy,
            self.settings,
        )?;

        for repository in &repositories {
            let mut line = format!(
                "Repository {} ({} layout, update {}) at {}",
                repository.id,
                repository.layout.name(),
                repository.policy.update_policy,
                repository.url
            );
            if let Some(ref proxy) = repository.proxy {
                line.push_str(&format!(" via proxy {}:{}", proxy.host, proxy.port));
            }
            if let Some(ref credentials) = repository.credentials {
                line.push_str(&format!(" as {}", credentials.username));
            }
            ui::debug(self.verbose, &line);
        }

        ui::debug(
            self.verbose,
            &format!(
                "Resolving {}{}",
                requested,
                if self.request.transitive {
                    " with transitive dependencies"
                } else {
                    ""
                }
            ),
        );

        let results =
            self.resolver
                .resolve(&requested, &repositories, self.request.transitive)?;

        for result in &results {
            match self.filter.check(&result.coordinate) {
                Disposition::Excluded => {
                    ui::info(&format!(
                        "Skipping {} because its classifier is excluded",
                        filter::identity_key(&result.coordinate)
                    ));
                    outcome.excluded += 1;
                }
                Disposition::AlreadyCopied => {
                    outcome.deduplicated += 1;
                }
                Disposition::Copy => {
                    match materialize(
                        result,
                        &self.request.output_directory,
                        &self.request.naming_options(),
                    )? {
                        MaterializeOutcome::Copied(destination) => {
                            ui::debug(
                                self.verbose,
                                &format!(
                                    "Copying artifact {} to {}",
                                    result.coordinate.artifact_id,
                                    destination.display()
                                ),
                            );
                            outcome.copied += 1;
                        }
                        MaterializeOutcome::MissingSource => {
                            ui::warn(&format!(
                                "Artifact {} has no attached file. Its content will not be copied to the output directory.",
                                result.coordinate.artifact_id
                            ));
                            outcome.missing += 1;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::LocalRepositoryResolver;
    use std::path::Path;
    use tempfile::TempDir;

    fn put_artifact(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn flat_repo_request(root: &Path, output: &Path, artifacts: &[&str]) -> CopyRequest {
        CopyRequest {
            artifacts: artifacts.iter().map(|s| s.to_string()).collect(),
            remote_repositories: Some(format!("test::flat::{}", root.display())),
            use_project_repositories: false,
            output_directory: output.to_path_buf(),
            ..Default::default()
        }
    }

    fn run(request: &CopyRequest) -> Result<CopyOutcome> {
        let settings = Settings::default();
        let resolver = LocalRepositoryResolver::new();
        CopyRun::new(request, &settings, None, &resolver, false).run(None)
    }

    #[test]
    fn test_copies_single_artifact() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        put_artifact(temp.path(), "foo-1.0.jar", "foo");

        let request = flat_repo_request(temp.path(), &output, &["org.example:foo:1.0"]);
        let outcome = run(&request).unwrap();

        assert_eq!(outcome.copied, 1);
        assert!(output.join("foo-1.0.jar").is_file());
    }

    #[test]
    fn test_skip_short_circuits() {
        let temp = TempDir::new().unwrap();
        let request = CopyRequest {
            skip: true,
            ..flat_repo_request(temp.path(), &temp.path().join("out"), &[])
        };
        let outcome = run(&request).unwrap();
        assert!(outcome.skipped);
    }

    #[test]
    fn test_skip_poms_with_pom_packaging() {
        let temp = TempDir::new().unwrap();
        let request = CopyRequest {
            skip_poms: true,
            ..flat_repo_request(temp.path(), &temp.path().join("out"), &["org.example:foo:1.0"])
        };
        let project = ProjectContext {
            packaging: Some("pom".to_string()),
            ..Default::default()
        };

        let settings = Settings::default();
        let resolver = LocalRepositoryResolver::new();
        let outcome = CopyRun::new(&request, &settings, Some(&project), &resolver, false)
            .run(None)
            .unwrap();
        assert!(outcome.skipped);
    }

    #[test]
    fn test_no_artifacts_fails() {
        let temp = TempDir::new().unwrap();
        let request = flat_repo_request(temp.path(), &temp.path().join("out"), &[]);
        let err = run(&request).unwrap_err();
        assert!(matches!(err, ArtcpError::NoArtifactsRequested));
    }

    #[test]
    fn test_artifact_list_tokens_combined() {
        let request = CopyRequest {
            artifacts: vec!["a:b:1".to_string()],
            artifact_list: Some("c:d:2  e:f:3".to_string()),
            ..Default::default()
        };
        assert_eq!(request.artifact_tokens(), vec!["a:b:1", "c:d:2", "e:f:3"]);
    }

    #[test]
    fn test_dedup_across_requested_roots() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        put_artifact(temp.path(), "foo-1.0.jar", "foo");
        put_artifact(temp.path(), "foo-1.0.deps", "org.example:shared:1.0\n");
        put_artifact(temp.path(), "bar-1.0.jar", "bar");
        put_artifact(temp.path(), "bar-1.0.deps", "org.example:shared:1.0\n");
        put_artifact(temp.path(), "shared-1.0.jar", "shared");

        let request = flat_repo_request(
            temp.path(),
            &output,
            &["org.example:foo:1.0", "org.example:bar:1.0"],
        );
        let outcome = run(&request).unwrap();

        // shared is materialized once even though it appears in both closures
        assert_eq!(outcome.copied, 3);
        assert_eq!(outcome.deduplicated, 1);
    }

    #[test]
    fn test_excluded_classifier_not_copied() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        put_artifact(temp.path(), "foo-1.0-sources.jar", "src");

        let request = CopyRequest {
            exclude_classifiers: vec!["sources".to_string()],
            transitive: false,
            ..flat_repo_request(temp.path(), &output, &["org.example:foo:1.0:jar:sources"])
        };
        let outcome = run(&request).unwrap();

        assert_eq!(outcome.copied, 0);
        assert_eq!(outcome.excluded, 1);
        assert!(!output.join("foo-1.0-sources.jar").exists());
    }

    #[test]
    fn test_resolution_failure_aborts_batch() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        put_artifact(temp.path(), "bar-1.0.jar", "bar");

        // First token fails, the second would resolve; abort-at-first-fatal
        let request = flat_repo_request(
            temp.path(),
            &output,
            &["org.example:missing:1.0", "org.example:bar:1.0"],
        );
        let err = run(&request).unwrap_err();
        assert!(matches!(err, ArtcpError::ResolutionFailed { .. }));
        assert!(!output.join("bar-1.0.jar").exists());
    }

    #[test]
    fn test_non_transitive_resolves_single() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        put_artifact(temp.path(), "foo-1.0.jar", "foo");
        put_artifact(temp.path(), "foo-1.0.deps", "org.example:bar:2.0\n");
        put_artifact(temp.path(), "bar-2.0.jar", "bar");

        let request = CopyRequest {
            transitive: false,
            ..flat_repo_request(temp.path(), &output, &["org.example:foo:1.0"])
        };
        let outcome = run(&request).unwrap();

        assert_eq!(outcome.copied, 1);
        assert!(!output.join("bar-2.0.jar").exists());
    }
}
