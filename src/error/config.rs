//! Declaration file errors

use super::MvnError;

/// Creates a declaration file not found error
pub fn not_found(path: impl Into<String>) -> MvnError {
    MvnError::ConfigNotFound { path: path.into() }
}

/// Creates a declaration file parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MvnError {
    MvnError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
