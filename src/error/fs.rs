//! File system errors

use super::ArtcpError;

/// Creates an output directory creation error
pub fn output_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> ArtcpError {
    ArtcpError::OutputDirFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an artifact copy error
pub fn copy_failed(path: impl Into<String>, reason: impl Into<String>) -> ArtcpError {
    ArtcpError::CopyFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
#[allow(dead_code)]
pub fn io_error(message: impl Into<String>) -> ArtcpError {
    ArtcpError::IoError {
        message: message.into(),
    }
}
