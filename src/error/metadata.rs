//! Repository metadata errors

use super::MvnError;

/// Creates a metadata unavailable error
pub fn unavailable(url: impl Into<String>, reason: impl ToString) -> MvnError {
    MvnError::MetadataUnavailable {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a checksum mismatch error
pub fn checksum_mismatch(
    url: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> MvnError {
    MvnError::ChecksumMismatch {
        url: url.into(),
        expected: expected.into(),
        actual: actual.into(),
    }
}
