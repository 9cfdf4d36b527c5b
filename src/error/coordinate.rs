//! Coordinate and version range errors

use super::MvnError;

/// Creates a missing coordinate field error
pub fn missing_field(field: impl Into<String>) -> MvnError {
    MvnError::MissingCoordinateField {
        field: field.into(),
    }
}

/// Creates a malformed range bound error
pub fn malformed_range_bound(bound: impl Into<String>, range: impl Into<String>) -> MvnError {
    MvnError::MalformedRangeBound {
        bound: bound.into(),
        range: range.into(),
    }
}

/// Creates an empty range error
pub fn no_version_in_range(range: impl Into<String>) -> MvnError {
    MvnError::NoVersionInRange {
        range: range.into(),
    }
}
