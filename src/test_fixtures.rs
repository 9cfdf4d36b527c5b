//! Test fixtures and fake collaborators for unit tests.
//!
//! The engine only talks to the outside world through [`MetadataSource`],
//! [`FileState`] and [`ObservedStateStore`]. The fakes here implement those
//! traits in memory and record every call, so tests can assert both on results
//! and on which side effects happened.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeRepository, coordinate};
//!
//! let repo = FakeRepository::new().with_versions(&coordinate(), Some("1.2"), &["1.0", "1.2"]);
//! let resolver = CoordinateResolver::new(&repo);
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::catalog::metadata::parse_metadata;
use crate::catalog::{MavenMetadata, MetadataSource, VersionCatalog};
use crate::converge::{FileState, MaterializeSummary, ObservedStateStore};
use crate::coordinate::Coordinate;
use crate::error::state::{read_failed, write_failed};
use crate::error::{Result, materialization_failure, metadata_unavailable};

/// Repository base URL used by [`coordinate`]
pub const REPO_URL: &str = "https://repo.example.com/maven2";

/// `org.example:demo:jar` in [`REPO_URL`]
#[must_use]
pub fn coordinate() -> Coordinate {
    Coordinate::builder()
        .repository_url(REPO_URL)
        .group_id("org.example")
        .artifact_id("demo")
        .build()
        .expect("fixture coordinate is valid")
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Lowercase hex MD5 of `bytes`
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

/// Artifact-level metadata document
pub fn versions_document(release: Option<&str>, versions: &[&str]) -> String {
    let release = release
        .map(|r| format!("<release>{r}</release>"))
        .unwrap_or_default();
    let versions: String = versions
        .iter()
        .map(|v| format!("<version>{v}</version>"))
        .collect();
    format!(
        "<metadata><groupId>org.example</groupId><artifactId>demo</artifactId>\
         <versioning>{release}<versions>{versions}</versions></versioning></metadata>"
    )
}

/// Version-level metadata document of a snapshot
pub fn snapshot_document(version: &str, timestamp: &str, build_number: &str) -> String {
    format!(
        "<metadata><groupId>org.example</groupId><artifactId>demo</artifactId>\
         <version>{version}</version><versioning><snapshot>\
         <timestamp>{timestamp}</timestamp><buildNumber>{build_number}</buildNumber>\
         </snapshot></versioning></metadata>"
    )
}

/// In-memory repository serving metadata documents by URL
#[derive(Default)]
pub struct FakeRepository {
    documents: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, xml: impl Into<String>) -> Self {
        self.documents.insert(url.into(), xml.into());
        self
    }

    pub fn with_versions(
        self,
        coordinate: &Coordinate,
        release: Option<&str>,
        versions: &[&str],
    ) -> Self {
        let url = VersionCatalog::<&Self>::metadata_url(coordinate, None);
        self.with_document(url, versions_document(release, versions))
    }

    pub fn with_snapshot(
        self,
        coordinate: &Coordinate,
        version: &str,
        timestamp: &str,
        build_number: &str,
    ) -> Self {
        let url = VersionCatalog::<&Self>::metadata_url(coordinate, Some(version));
        self.with_document(url, snapshot_document(version, timestamp, build_number))
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl MetadataSource for FakeRepository {
    fn fetch_metadata_document(&self, url: &str) -> Result<MavenMetadata> {
        self.requests.borrow_mut().push(url.to_string());
        let xml = self
            .documents
            .get(url)
            .ok_or_else(|| metadata_unavailable(url, "HTTP 404 Not Found"))?;
        parse_metadata(xml).map_err(|e| metadata_unavailable(url, e))
    }
}

/// One recorded `materialize_file` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeCall {
    pub destination: PathBuf,
    pub source_url: String,
    pub checksum_url: String,
    pub create_parent_dirs: bool,
}

/// File system fake: paths "exist" once materialized
#[derive(Default)]
pub struct FakeFiles {
    existing: RefCell<HashSet<PathBuf>>,
    calls: RefCell<Vec<MaterializeCall>>,
    failure: Option<String>,
}

impl FakeFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(self, path: impl Into<PathBuf>) -> Self {
        self.existing.borrow_mut().insert(path.into());
        self
    }

    /// Make every materialization fail with `reason`
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn remove(&self, path: &Path) {
        self.existing.borrow_mut().remove(path);
    }

    pub fn calls(&self) -> Vec<MaterializeCall> {
        self.calls.borrow().clone()
    }
}

impl FileState for FakeFiles {
    fn path_exists(&self, path: &Path) -> bool {
        self.existing.borrow().contains(path)
    }

    fn materialize_file(
        &self,
        destination: &Path,
        source_url: &str,
        checksum_url: &str,
        create_parent_dirs: bool,
    ) -> Result<MaterializeSummary> {
        self.calls.borrow_mut().push(MaterializeCall {
            destination: destination.to_path_buf(),
            source_url: source_url.to_string(),
            checksum_url: checksum_url.to_string(),
            create_parent_dirs,
        });

        if let Some(reason) = &self.failure {
            return Err(materialization_failure(
                destination.display().to_string(),
                reason.clone(),
            ));
        }

        let replaced = !self.existing.borrow_mut().insert(destination.to_path_buf());
        Ok(MaterializeSummary {
            bytes_written: 42,
            checksum: None,
            replaced,
        })
    }
}

/// Observed state kept in a map, counting writes
#[derive(Default)]
pub struct MemoryStateStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Every read fails as an unreadable state file would
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write fails as an unwritable state file would
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl ObservedStateStore for MemoryStateStore {
    fn read_observed_state(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(read_failed("memory", "permission denied"));
        }
        Ok(self.get(key))
    }

    fn write_observed_state(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(write_failed("memory", "disk full"));
        }
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
