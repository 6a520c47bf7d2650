use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Arguments for the copy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Copy an artifact with its dependencies:\n    \
                   artcp copy org.example:foo:1.0 -o out\n\n\
                   Copy from an explicit repository:\n    \
                   artcp copy org.example:foo:1.0 --remote-repositories central::default::file:///srv/repo\n\n\
                   Skip source and javadoc attachments:\n    \
                   artcp copy org.example:foo:1.0 --exclude-classifier sources --exclude-classifier javadoc")]
pub struct CopyArgs {
    /// Coordinates of the form groupId:artifactId:version[:type[:classifier]]
    pub artifacts: Vec<String>,

    /// Additional coordinates as one whitespace-separated string
    #[arg(long, value_name = "LIST")]
    pub artifact_list: Option<String>,

    /// Classifier applied when a 4-field coordinate omits one
    #[arg(long, value_name = "CLASSIFIER")]
    pub default_classifier: Option<String>,

    /// Type applied when a coordinate omits one (falls back to "jar")
    #[arg(long, value_name = "TYPE")]
    pub default_type: Option<String>,

    /// Include the classifier in destination file names
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
    pub include_classifier: bool,

    /// Include the version in destination file names
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
    pub include_version: bool,

    /// Use the resolved version in file names; when false the literal
    /// "SNAPSHOT" marker is emitted instead
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
    pub resolved_snapshot_version: bool,

    /// Repositories in the format id::layout::url or just url, separated by comma
    #[arg(long, value_name = "SPECS")]
    pub remote_repositories: Option<String>,

    /// Include the project's declared repositories
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
    pub use_project_repositories: bool,

    /// Classifiers to skip entirely (repeatable)
    #[arg(long = "exclude-classifier", value_name = "CLASSIFIER")]
    pub exclude_classifiers: Vec<String>,

    /// Copy each artifact identity at most once per run
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
    pub copy_once_per_runtime: bool,

    /// Destination directory, created if absent
    #[arg(long, short = 'o', value_name = "DIR", default_value = "dependency")]
    pub output_directory: PathBuf,

    /// Skip execution completely
    #[arg(long)]
    pub skip: bool,

    /// Skip execution when the project packaging is "pom"
    #[arg(long)]
    pub skip_poms: bool,

    /// Resolve the full dependency closure instead of the single artifact
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
    pub transitive: bool,

    /// Update policy forwarded to repository construction
    #[arg(long, value_name = "POLICY")]
    pub update_policy: Option<String>,

    /// Checksum policy forwarded to repository construction
    #[arg(long, value_name = "POLICY")]
    pub checksum_policy: Option<String>,

    /// Settings file with mirrors, proxies, and server credentials
    #[arg(long, value_name = "FILE", env = "ARTCP_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Project file supplying a default version, packaging, and repositories
    #[arg(long, value_name = "FILE", env = "ARTCP_PROJECT")]
    pub project: Option<PathBuf>,
}
