//! Repository specification and layout errors

use super::ArtcpError;

/// Creates an unknown layout error
pub fn unknown_layout(layout: impl Into<String>) -> ArtcpError {
    ArtcpError::UnknownLayout {
        layout: layout.into(),
    }
}

/// Creates an invalid repository specification error
pub fn invalid_spec(spec: impl Into<String>) -> ArtcpError {
    ArtcpError::InvalidRepositorySpec { spec: spec.into() }
}
