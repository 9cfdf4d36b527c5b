//! File system errors

use super::MvnError;

/// Creates a materialization failure for a destination path
pub fn materialization_failure(path: impl Into<String>, reason: impl Into<String>) -> MvnError {
    MvnError::MaterializationFailure {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid path error
pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> MvnError {
    MvnError::InvalidPath {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MvnError {
    MvnError::IoError {
        message: message.into(),
    }
}
