//! Idempotent convergence of an artifact onto a local path
//!
//! One invocation walks a single linear pass:
//!
//! 1. Resolve the coordinate to a download URL (failure ends in `Failed`)
//! 2. Compare with the URL recorded for the destination; if they match and the
//!    destination exists, nothing needs doing (`Unchanged`)
//! 3. In dry-run mode stop and report what would change (`WouldChange`)
//! 4. Materialize the file, then record the new URL (`Changed` or `Failed`)
//!
//! The observed record is only written after a successful materialization, so
//! a failed run leaves the next run free to try again.
//!
//! The record is read once and written at most once without locking; callers
//! must not converge the same destination from two processes at once.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::MetadataSource;
use crate::coordinate::Coordinate;
use crate::error::{MvnError, Result, materialization_failure};
use crate::resolver::CoordinateResolver;
use crate::version::VersionSpecifier;

/// Local file system as seen by the controller
pub trait FileState {
    fn path_exists(&self, path: &Path) -> bool;

    /// Ensure `destination` holds the content at `source_url`
    ///
    /// `checksum_url` points at the MD5 published next to the source.
    fn materialize_file(
        &self,
        destination: &Path,
        source_url: &str,
        checksum_url: &str,
        create_parent_dirs: bool,
    ) -> Result<MaterializeSummary>;
}

/// Key-value record of what was last materialized where
pub trait ObservedStateStore {
    fn read_observed_state(&self, key: &str) -> Result<Option<String>>;
    fn write_observed_state(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: FileState + ?Sized> FileState for &T {
    fn path_exists(&self, path: &Path) -> bool {
        (**self).path_exists(path)
    }

    fn materialize_file(
        &self,
        destination: &Path,
        source_url: &str,
        checksum_url: &str,
        create_parent_dirs: bool,
    ) -> Result<MaterializeSummary> {
        (**self).materialize_file(destination, source_url, checksum_url, create_parent_dirs)
    }
}

impl<T: ObservedStateStore + ?Sized> ObservedStateStore for &T {
    fn read_observed_state(&self, key: &str) -> Result<Option<String>> {
        (**self).read_observed_state(key)
    }

    fn write_observed_state(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_observed_state(key, value)
    }
}

/// What a materialization did on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeSummary {
    pub bytes_written: u64,
    /// MD5 the content was verified against, when the repository published one
    pub checksum: Option<String>,
    /// Whether an existing file was overwritten
    pub replaced: bool,
}

/// URL materialized at a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedState {
    pub url: String,
    pub path: PathBuf,
}

/// Outcome of one convergence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConvergenceResult {
    Unchanged {
        current: ObservedState,
    },
    WouldChange {
        old: Option<ObservedState>,
        new: ObservedState,
    },
    Changed {
        old: Option<ObservedState>,
        new: ObservedState,
        summary: MaterializeSummary,
    },
    Failed {
        code: Option<String>,
        reason: String,
    },
}

impl ConvergenceResult {
    /// Report `err` as a failed convergence
    pub fn from_error(err: &MvnError) -> Self {
        use miette::Diagnostic;

        warn!(error = %err, "convergence failed");
        ConvergenceResult::Failed {
            code: err.code().map(|code| code.to_string()),
            reason: err.to_string(),
        }
    }

    /// The destination holds the desired artifact
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ConvergenceResult::Unchanged { .. } | ConvergenceResult::Changed { .. }
        )
    }

    /// A dry run found work to do
    pub fn is_pending(&self) -> bool {
        matches!(self, ConvergenceResult::WouldChange { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ConvergenceResult::Failed { .. })
    }
}

/// Key under which the observed URL for a destination is recorded
pub fn state_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Drives resolution and materialization for a destination path
pub struct ConvergenceController<S, F, P> {
    resolver: CoordinateResolver<S>,
    files: F,
    state: P,
}

impl<S, F, P> ConvergenceController<S, F, P>
where
    S: MetadataSource,
    F: FileState,
    P: ObservedStateStore,
{
    pub fn new(resolver: CoordinateResolver<S>, files: F, state: P) -> Self {
        Self {
            resolver,
            files,
            state,
        }
    }

    /// Converge `target` using the URL recorded for it in the state store
    pub fn apply(
        &self,
        coordinate: &Coordinate,
        specifier: &VersionSpecifier,
        target: &Path,
        dry_run: bool,
    ) -> ConvergenceResult {
        let prior = match self.state.read_observed_state(&state_key(target)) {
            Ok(prior) => prior,
            Err(err) => return ConvergenceResult::from_error(&err),
        };
        debug!(target = %target.display(), prior = ?prior, "read observed state");
        self.apply_with_prior(coordinate, specifier, target, dry_run, prior.as_deref())
    }

    /// Converge `target` given the URL previously observed there
    pub fn apply_with_prior(
        &self,
        coordinate: &Coordinate,
        specifier: &VersionSpecifier,
        target: &Path,
        dry_run: bool,
        prior_observed_url: Option<&str>,
    ) -> ConvergenceResult {
        let resolved = match self.resolver.resolve(coordinate, specifier) {
            Ok(resolved) => resolved,
            Err(err) => return ConvergenceResult::from_error(&err),
        };

        let new = ObservedState {
            url: resolved.download_url.clone(),
            path: target.to_path_buf(),
        };
        let old = prior_observed_url.map(|url| ObservedState {
            url: url.to_string(),
            path: target.to_path_buf(),
        });

        if prior_observed_url == Some(resolved.download_url.as_str())
            && self.files.path_exists(target)
        {
            info!(url = %new.url, target = %target.display(), "artifact already in place");
            return ConvergenceResult::Unchanged { current: new };
        }

        if dry_run {
            info!(url = %new.url, target = %target.display(), "dry run, not fetching");
            return ConvergenceResult::WouldChange { old, new };
        }

        let summary = match self.files.materialize_file(
            target,
            &resolved.download_url,
            &resolved.checksum_url(),
            true,
        ) {
            Ok(summary) => summary,
            Err(err @ MvnError::MaterializationFailure { .. }) => {
                return ConvergenceResult::from_error(&err);
            }
            Err(err) => {
                let err = materialization_failure(target.display().to_string(), err.to_string());
                return ConvergenceResult::from_error(&err);
            }
        };

        if let Err(err) = self
            .state
            .write_observed_state(&state_key(target), &resolved.download_url)
        {
            let mut failed = ConvergenceResult::from_error(&err);
            if let ConvergenceResult::Failed { reason, .. } = &mut failed {
                *reason = format!(
                    "{} was saved to {} but not recorded: {reason}",
                    new.url,
                    target.display()
                );
            }
            return failed;
        }

        info!(url = %new.url, target = %target.display(), bytes = summary.bytes_written, "artifact materialized");
        ConvergenceResult::Changed { old, new, summary }
    }
}
