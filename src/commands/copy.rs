//! Copy command implementation
//!
//! The copy process:
//! 1. Load settings (mirrors, proxies, credentials) and the optional project
//!    context
//! 2. For each requested coordinate: parse, build the repository list,
//!    resolve (transitively by default)
//! 3. Filter excluded classifiers, deduplicate by identity, copy accepted
//!    artifacts into the output directory

use crate::cli::CopyArgs;
use crate::copier::{CopyOutcome, CopyRequest, CopyRun};
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::project::ProjectContext;
use crate::resolver::LocalRepositoryResolver;
use crate::settings::Settings;
use crate::ui;

/// Run the copy command
pub fn run(args: CopyArgs, verbose: bool) -> Result<()> {
    let settings = Settings::load_or_default(args.settings.as_deref())?;
    let project = match args.project {
        Some(ref path) => Some(ProjectContext::load(path)?),
        None => None,
    };

    let request = to_request(&args);
    let resolver = LocalRepositoryResolver::new();
    let mut run = CopyRun::new(&request, &settings, project.as_ref(), &resolver, verbose);

    let total = request.artifact_tokens().len() as u64;
    let progress = ProgressDisplay::new(total);

    let outcome = match run.run(Some(&progress)) {
        Ok(outcome) => {
            progress.finish();
            outcome
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    if !outcome.skipped {
        report(&outcome, &request);
    }

    Ok(())
}

fn to_request(args: &CopyArgs) -> CopyRequest {
    CopyRequest {
        artifacts: args.artifacts.clone(),
        artifact_list: args.artifact_list.clone(),
        default_classifier: args.default_classifier.clone(),
        default_type: args.default_type.clone(),
        include_classifier: args.include_classifier,
        include_version: args.include_version,
        resolved_snapshot_version: args.resolved_snapshot_version,
        remote_repositories: args.remote_repositories.clone(),
        use_project_repositories: args.use_project_repositories,
        exclude_classifiers: args.exclude_classifiers.clone(),
        copy_once_per_runtime: args.copy_once_per_runtime,
        output_directory: args.output_directory.clone(),
        skip: args.skip,
        skip_poms: args.skip_poms,
        transitive: args.transitive,
        update_policy: args.update_policy.clone(),
        checksum_policy: args.checksum_policy.clone(),
    }
}

fn report(outcome: &CopyOutcome, request: &CopyRequest) {
    ui::success(&format!(
        "Copied {} artifact{} to {}",
        outcome.copied,
        if outcome.copied == 1 { "" } else { "s" },
        request.output_directory.display()
    ));

    let mut notes = Vec::new();
    if outcome.excluded > 0 {
        notes.push(format!("{} excluded", outcome.excluded));
    }
    if outcome.deduplicated > 0 {
        notes.push(format!("{} duplicates skipped", outcome.deduplicated));
    }
    if outcome.missing > 0 {
        notes.push(format!("{} without attached files", outcome.missing));
    }
    if !notes.is_empty() {
        ui::info(&format!("({})", notes.join(", ")));
    }
}
