//! Artifact resolution errors

use super::ArtcpError;

/// Creates a resolution failure wrapping the underlying cause
pub fn failed(coordinate: impl Into<String>, reason: impl Into<String>) -> ArtcpError {
    ArtcpError::ResolutionFailed {
        coordinate: coordinate.into(),
        reason: reason.into(),
    }
}
