//! Version catalog backed by repository metadata
//!
//! The catalog answers three questions about an artifact: which versions exist,
//! which one is the latest, and which concrete build a snapshot version points
//! at. All three are read from `maven-metadata.xml` documents fetched through a
//! [`MetadataSource`], so the catalog itself never touches the network.

pub mod metadata;

use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{Result, metadata_unavailable, no_version_in_range};
use crate::version::{ParsedVersion, VersionSpecifier};

pub use metadata::MavenMetadata;

/// File name of the metadata document at each repository level
pub const METADATA_FILE: &str = "maven-metadata.xml";

/// Fetches and parses metadata documents
///
/// Implementations report every failure (transport, HTTP status, malformed
/// XML) as `MetadataUnavailable`.
pub trait MetadataSource {
    fn fetch_metadata_document(&self, url: &str) -> Result<MavenMetadata>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn fetch_metadata_document(&self, url: &str) -> Result<MavenMetadata> {
        (**self).fetch_metadata_document(url)
    }
}

/// Timestamp and build number of the newest build of a snapshot version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDescriptor {
    pub timestamp: String,
    pub build_number: String,
}

impl SnapshotDescriptor {
    /// Replace the `SNAPSHOT` token of `version` with `{timestamp}-{buildNumber}`
    pub fn apply_to(&self, version: &str) -> String {
        version.replace(
            "SNAPSHOT",
            &format!("{}-{}", self.timestamp, self.build_number),
        )
    }
}

/// Listed versions in ascending order
///
/// Labels that aren't `major[.minor[.micro]][-qualifier]` can't be ordered and
/// follow the rest, in the order they were listed.
pub fn sort_versions(listed: &[String]) -> Vec<String> {
    let mut conforming = Vec::new();
    let mut other = Vec::new();
    for label in listed {
        match ParsedVersion::parse(label).into_version() {
            Some(parsed) => conforming.push((parsed, label.clone())),
            None => other.push(label.clone()),
        }
    }
    conforming.sort_by(|a, b| a.0.cmp(&b.0));
    conforming
        .into_iter()
        .map(|(_, label)| label)
        .chain(other)
        .collect()
}

/// Reads version information for coordinates from a metadata source
pub struct VersionCatalog<S> {
    source: S,
}

impl<S: MetadataSource> VersionCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// URL of the metadata document for an artifact, or for one of its versions
    pub fn metadata_url(coordinate: &Coordinate, version: Option<&str>) -> String {
        match version {
            Some(version) => format!("{}/{}", coordinate.version_url(version), METADATA_FILE),
            None => format!("{}/{}", coordinate.artifact_url(), METADATA_FILE),
        }
    }

    /// All listed versions, in document order
    pub fn fetch_all(&self, coordinate: &Coordinate) -> Result<Vec<String>> {
        Ok(self.fetch_artifact_metadata(coordinate)?.versions().to_vec())
    }

    /// Release marker if the document has one, otherwise the last listed version
    pub fn fetch_latest(&self, coordinate: &Coordinate) -> Result<String> {
        let metadata = self.fetch_artifact_metadata(coordinate)?;

        if let Some(release) = metadata.release() {
            debug!(%coordinate, release, "using release marker");
            return Ok(release.to_string());
        }

        let last = metadata
            .versions()
            .last()
            .ok_or_else(|| no_version_in_range(VersionSpecifier::Latest.to_string()))?;
        debug!(%coordinate, version = %last, "no release marker, using last listed version");
        Ok(last.clone())
    }

    /// Newest build of a snapshot version
    pub fn fetch_snapshot_descriptor(
        &self,
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<SnapshotDescriptor> {
        let url = Self::metadata_url(coordinate, Some(version));
        debug!(%url, "fetching snapshot metadata");
        let metadata = self.source.fetch_metadata_document(&url)?;

        let snapshot = metadata
            .snapshot()
            .ok_or_else(|| metadata_unavailable(&url, "document has no snapshot element"))?;
        let timestamp = snapshot
            .timestamp
            .clone()
            .ok_or_else(|| metadata_unavailable(&url, "snapshot has no timestamp"))?;
        let build_number = snapshot
            .build_number
            .clone()
            .ok_or_else(|| metadata_unavailable(&url, "snapshot has no buildNumber"))?;

        Ok(SnapshotDescriptor {
            timestamp,
            build_number,
        })
    }

    /// The artifact-level metadata document
    pub fn fetch_artifact_metadata(&self, coordinate: &Coordinate) -> Result<MavenMetadata> {
        let url = Self::metadata_url(coordinate, None);
        debug!(%url, "fetching artifact metadata");
        self.source.fetch_metadata_document(&url)
    }
}

#[cfg(test)]
mod tests;
