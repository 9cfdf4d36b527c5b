//! Error types and handling for mvnfetch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`coordinate`]: Coordinate construction and version range errors
//! - [`metadata`]: Repository metadata errors
//! - [`fs`]: File system and materialization errors
//! - [`state`]: Observed state record errors
//! - [`config`]: Declaration file errors
//!
//! Command-level errors have no constructor module.

pub mod config;
pub mod coordinate;
pub mod fs;
pub mod metadata;
pub mod state;

pub use coordinate::{malformed_range_bound, missing_field, no_version_in_range};
pub use fs::{invalid_path, io_error, materialization_failure};
pub use metadata::unavailable as metadata_unavailable;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mvnfetch operations
#[derive(Error, Diagnostic, Debug)]
pub enum MvnError {
    // Coordinate errors
    #[error("Missing required coordinate field: {field}")]
    #[diagnostic(
        code(mvnfetch::coordinate::missing_field),
        help("Both --group-id and --artifact-id must be specified")
    )]
    MissingCoordinateField { field: String },

    #[error("Malformed bound '{bound}' in version range {range}")]
    #[diagnostic(
        code(mvnfetch::coordinate::malformed_range_bound),
        help("Range bounds look like major[.minor[.micro]][-qualifier], e.g. [1.0,2.0)")
    )]
    MalformedRangeBound { bound: String, range: String },

    #[error("No version found in range {range}")]
    #[diagnostic(
        code(mvnfetch::coordinate::no_version_in_range),
        help("Run 'mvnfetch versions' to list what the repository publishes")
    )]
    NoVersionInRange { range: String },

    // Repository errors
    #[error("Repository metadata unavailable at {url}: {reason}")]
    #[diagnostic(
        code(mvnfetch::metadata::unavailable),
        help("Check that the repository URL is correct and reachable")
    )]
    MetadataUnavailable { url: String, reason: String },

    #[error("Checksum mismatch for {url} (expected {expected}, got {actual})")]
    #[diagnostic(code(mvnfetch::metadata::checksum_mismatch))]
    ChecksumMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    // File system errors
    #[error("Failed to materialize {path}: {reason}")]
    #[diagnostic(code(mvnfetch::fs::materialization_failed))]
    MaterializationFailure { path: String, reason: String },

    #[error("Invalid path '{path}': {reason}")]
    #[diagnostic(code(mvnfetch::fs::invalid_path))]
    InvalidPath { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mvnfetch::fs::io_error))]
    IoError { message: String },

    // State errors
    #[error("Failed to read state file: {path}: {reason}")]
    #[diagnostic(
        code(mvnfetch::state::read_failed),
        help("Remove the state file to forget previously fetched artifacts")
    )]
    StateReadFailed { path: String, reason: String },

    #[error("Failed to write state file: {path}: {reason}")]
    #[diagnostic(code(mvnfetch::state::write_failed))]
    StateWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Declaration file not found: {path}")]
    #[diagnostic(
        code(mvnfetch::config::not_found),
        help("Pass the declaration file with --file or create mvnfetch.yaml")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse declaration file: {path}: {reason}")]
    #[diagnostic(code(mvnfetch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Command errors
    #[error("{failed} of {total} artifact(s) failed to converge")]
    #[diagnostic(code(mvnfetch::converge::failed))]
    ConvergenceFailed { failed: usize, total: usize },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(mvnfetch::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for MvnError {
    fn from(err: std::io::Error) -> Self {
        MvnError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MvnError {
    fn from(err: serde_yaml::Error) -> Self {
        MvnError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MvnError {
    fn from(err: serde_json::Error) -> Self {
        MvnError::StateReadFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MvnError>;
