//! Settings and project file errors

use super::ArtcpError;

/// Creates a configuration read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ArtcpError {
    ArtcpError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a configuration parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ArtcpError {
    ArtcpError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
