//! Repository list construction
//!
//! Builds the ordered repository list for one resolution: project-declared
//! repositories first (when enabled), then each comma-separated token of the
//! remote repositories option, parsed either as `id::layout::url` or as a
//! bare URL. Mirror, proxy, and authentication rules from settings are then
//! injected over the accumulated list, in that order.

use crate::error::{Result, invalid_repository_spec};
use crate::project::ProjectContext;
use crate::repository::layout::DEFAULT_LAYOUT_NAME;
use crate::repository::{
    RepositoryDescriptor, RepositoryLayout, RepositoryPolicy, TEMP_REPOSITORY_ID,
};
use crate::settings::Settings;

/// Parse one repository specification token
///
/// A token containing `::` must have the three-part `id::layout::url` shape;
/// id and layout may be empty (defaulting to "temp" and "default"). Any other
/// token is taken as a bare URL with id "temp" and the default layout.
pub fn parse_repository_spec(spec: &str, policy: &RepositoryPolicy) -> Result<RepositoryDescriptor> {
    if !spec.contains("::") {
        return Ok(RepositoryDescriptor::new(
            TEMP_REPOSITORY_ID,
            RepositoryLayout::Default,
            spec.trim(),
            policy.clone(),
        ));
    }

    let parts: Vec<&str> = spec.split("::").collect();
    if parts.len() != 3 {
        return Err(invalid_repository_spec(spec));
    }

    let url = parts[2].trim();
    if url.is_empty() {
        return Err(invalid_repository_spec(spec));
    }

    let id = match parts[0].trim() {
        "" => TEMP_REPOSITORY_ID,
        id => id,
    };
    let layout = match parts[1].trim() {
        "" => RepositoryLayout::from_name(DEFAULT_LAYOUT_NAME)?,
        name => RepositoryLayout::from_name(name)?,
    };

    Ok(RepositoryDescriptor::new(id, layout, url, policy.clone()))
}

/// Build the ordered repository list for one resolution
pub fn build_repository_list(
    project: Option<&ProjectContext>,
    use_project_repositories: bool,
    remote_repositories: Option<&str>,
    policy: &RepositoryPolicy,
    settings: &Settings,
) -> Result<Vec<RepositoryDescriptor>> {
    let mut repositories = Vec::new();

    if use_project_repositories {
        if let Some(project) = project {
            for declared in &project.repositories {
                let layout = match declared.layout.as_deref() {
                    Some(name) if !name.is_empty() => RepositoryLayout::from_name(name)?,
                    _ => RepositoryLayout::Default,
                };
                repositories.push(RepositoryDescriptor::new(
                    &declared.id,
                    layout,
                    &declared.url,
                    policy.clone(),
                ));
            }
        }
    }

    if let Some(specs) = remote_repositories {
        for token in specs.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            repositories.push(parse_repository_spec(token, policy)?);
        }
    }

    inject_mirrors(&mut repositories, settings);
    inject_proxy(&mut repositories, settings);
    inject_authentication(&mut repositories, settings);

    Ok(repositories)
}

/// Rewrite repositories covered by a mirror rule
fn inject_mirrors(repositories: &mut [RepositoryDescriptor], settings: &Settings) {
    for repository in repositories.iter_mut() {
        if let Some(mirror) = settings.mirror_for(&repository.id) {
            repository.id = mirror.id.clone();
            repository.url = mirror.url.clone();
        }
    }
}

/// Attach the active proxy, if any, to every repository
fn inject_proxy(repositories: &mut [RepositoryDescriptor], settings: &Settings) {
    if let Some(proxy) = settings.active_proxy() {
        for repository in repositories.iter_mut() {
            repository.proxy = Some(proxy.clone());
        }
    }
}

/// Attach credentials to repositories with a matching server entry
///
/// Runs after mirror injection so credentials match the effective id.
fn inject_authentication(repositories: &mut [RepositoryDescriptor], settings: &Settings) {
    for repository in repositories.iter_mut() {
        if let Some(credentials) = settings.credentials_for(&repository.id) {
            repository.credentials = Some(credentials.clone());
        }
    }
}
