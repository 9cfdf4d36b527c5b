//! `maven-metadata.xml` documents
//!
//! The same document shape appears at two levels of a repository: next to the
//! version directories (listing versions plus `release`/`latest` markers) and
//! inside a snapshot version directory (carrying the timestamp and build
//! number of the newest snapshot build).

use quick_xml::de::from_str;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MavenMetadata {
    #[serde(default)]
    pub versioning: Option<Versioning>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Versioning {
    pub release: Option<String>,
    #[serde(default)]
    pub versions: Versions,
    pub snapshot: Option<Snapshot>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Versions {
    #[serde(default, rename = "version")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub timestamp: Option<String>,
    #[serde(rename = "buildNumber")]
    pub build_number: Option<String>,
}

impl MavenMetadata {
    /// Listed versions in document order
    pub fn versions(&self) -> &[String] {
        self.versioning
            .as_ref()
            .map(|versioning| versioning.versions.items.as_slice())
            .unwrap_or_default()
    }

    /// Explicit release marker, if the document has a non-blank one
    pub fn release(&self) -> Option<&str> {
        self.versioning
            .as_ref()
            .and_then(|versioning| versioning.release.as_deref())
            .map(str::trim)
            .filter(|release| !release.is_empty())
    }

    /// Snapshot block of a version-level document
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.versioning
            .as_ref()
            .and_then(|versioning| versioning.snapshot.as_ref())
    }
}

/// Parse a metadata document
pub fn parse_metadata(text: &str) -> Result<MavenMetadata, quick_xml::DeError> {
    from_str(text)
}
