//! Observed state record errors

use super::MvnError;

/// Creates a state read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> MvnError {
    MvnError::StateReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a state write failed error
pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> MvnError {
    MvnError::StateWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
