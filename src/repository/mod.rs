//! Repository descriptors and the repository list builder
//!
//! This module handles building the ordered repository list a resolution runs
//! against:
//! - `layout.rs`: the closed set of repository layouts and the name registry
//! - `policy.rs`: download/update/checksum policy
//! - `builder.rs`: `id::layout::url` parsing and mirror/proxy/auth injection
//!
//! Order defines resolution precedence: project-declared repositories first,
//! explicitly passed ones appended.

pub mod builder;
pub mod layout;
pub mod policy;

pub use builder::{build_repository_list, parse_repository_spec};
pub use layout::RepositoryLayout;
pub use policy::RepositoryPolicy;

use crate::settings::{Proxy, ServerCredentials};

/// Id given to repositories passed as a bare URL
pub const TEMP_REPOSITORY_ID: &str = "temp";

/// One remote repository in the resolution list
#[derive(Debug, Clone)]
pub struct RepositoryDescriptor {
    pub id: String,
    pub layout: RepositoryLayout,
    pub url: String,
    pub policy: RepositoryPolicy,

    /// Proxy attached from settings, if any
    pub proxy: Option<Proxy>,

    /// Credentials attached from settings, if any
    pub credentials: Option<ServerCredentials>,
}

impl RepositoryDescriptor {
    pub fn new(
        id: impl Into<String>,
        layout: RepositoryLayout,
        url: impl Into<String>,
        policy: RepositoryPolicy,
    ) -> Self {
        Self {
            id: id.into(),
            layout,
            url: url.into(),
            policy,
            proxy: None,
            credentials: None,
        }
    }
}
