//! Coordinate resolution
//!
//! Turns a coordinate plus a version specifier into one concrete download URL:
//! - Absent version: the catalog's latest version
//! - Exact version: used verbatim, without asking the repository
//! - Range: the greatest listed version inside the range
//!
//! Snapshot versions (`*-SNAPSHOT`) keep their symbolic name in the directory
//! part of the URL, while the file name carries the timestamped build
//! (`2.3-SNAPSHOT/demo-2.3-20230101.120000-7.jar`).

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{MetadataSource, VersionCatalog};
use crate::coordinate::Coordinate;
use crate::error::{Result, no_version_in_range};
use crate::version::{ParsedVersion, RangeSpec, VersionSpecifier, is_snapshot};

/// Extension of the checksum published next to every artifact file
pub const CHECKSUM_EXTENSION: &str = "md5";

/// Concrete artifact chosen for a resolution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtifact {
    /// Version as it appears in the repository directory layout
    pub version: String,
    /// Version segment of the file name (timestamped for snapshots)
    pub file_version: String,
    pub download_url: String,
}

impl ResolvedArtifact {
    /// URL of the MD5 checksum published next to the artifact
    pub fn checksum_url(&self) -> String {
        format!("{}.{}", self.download_url, CHECKSUM_EXTENSION)
    }
}

/// Resolves coordinates against a version catalog
pub struct CoordinateResolver<S> {
    catalog: VersionCatalog<S>,
}

impl<S: MetadataSource> CoordinateResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            catalog: VersionCatalog::new(source),
        }
    }

    /// Resolve `coordinate` at `specifier` to a concrete artifact
    pub fn resolve(
        &self,
        coordinate: &Coordinate,
        specifier: &VersionSpecifier,
    ) -> Result<ResolvedArtifact> {
        let version = match specifier {
            VersionSpecifier::Latest => self.catalog.fetch_latest(coordinate)?,
            VersionSpecifier::Exact(version) => version.clone(),
            VersionSpecifier::Range(range) => self.select_in_range(coordinate, range)?,
        };

        let file_version = if is_snapshot(&version) {
            self.catalog
                .fetch_snapshot_descriptor(coordinate, &version)?
                .apply_to(&version)
        } else {
            version.clone()
        };

        let download_url = format!(
            "{}/{}",
            coordinate.version_url(&version),
            coordinate.file_name(&file_version)
        );

        info!(%coordinate, %specifier, %version, url = %download_url, "resolved artifact");

        Ok(ResolvedArtifact {
            version,
            file_version,
            download_url,
        })
    }

    fn select_in_range(&self, coordinate: &Coordinate, range: &RangeSpec) -> Result<String> {
        let listed = self.catalog.fetch_all(coordinate)?;
        let candidates = listed.iter().filter_map(|raw| {
            let parsed = ParsedVersion::parse(raw).into_version();
            if parsed.is_none() {
                debug!(version = %raw, "skipping non-conforming version label");
            }
            parsed
        });

        range
            .select_max(candidates)
            .map(|version| version.to_string())
            .ok_or_else(|| no_version_in_range(range.as_str()))
    }
}
