//! Coordinate parsing errors

use super::ArtcpError;

/// Creates an invalid coordinate error
pub fn invalid(token: impl Into<String>) -> ArtcpError {
    ArtcpError::InvalidCoordinate {
        token: token.into(),
    }
}

/// Creates a missing version error
pub fn missing_version(token: impl Into<String>) -> ArtcpError {
    ArtcpError::MissingVersion {
        token: token.into(),
    }
}
