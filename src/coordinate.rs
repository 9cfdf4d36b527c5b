//! Artifact coordinates
//!
//! A [`Coordinate`] names an artifact family in a Maven-layout repository,
//! independent of version. It owns the repository path conventions: group ids
//! map to nested directories (`org.example` -> `org/example`), and artifact files
//! are named `{artifactId}-{version}[-{classifier}].{packaging}`.

use std::fmt;

use crate::error::{Result, missing_field};

/// Repository used when none is configured
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2/";

/// Packaging used when none is configured
pub const DEFAULT_PACKAGING: &str = "jar";

/// Group/artifact coordinate in a specific repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    repository_url: String,
    group_id: String,
    artifact_id: String,
    classifier: Option<String>,
    packaging: String,
}

impl Coordinate {
    pub fn builder() -> CoordinateBuilder {
        CoordinateBuilder::default()
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    /// Group id as a repository path (`org.example` -> `org/example`)
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// URL of the artifact directory that holds one subdirectory per version
    pub fn artifact_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.repository_url.trim_end_matches('/'),
            self.group_path(),
            self.artifact_id
        )
    }

    /// URL of a single version directory
    pub fn version_url(&self, directory_version: &str) -> String {
        format!("{}/{}", self.artifact_url(), directory_version)
    }

    /// File name for an artifact built as `file_version`
    pub fn file_name(&self, file_version: &str) -> String {
        match self.classifier() {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, file_version, classifier, self.packaging
            ),
            None => format!("{}-{}.{}", self.artifact_id, file_version, self.packaging),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.packaging)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// Builder that validates required fields once, at construction
#[derive(Debug, Clone, Default)]
pub struct CoordinateBuilder {
    repository_url: Option<String>,
    group_id: Option<String>,
    artifact_id: Option<String>,
    classifier: Option<String>,
    packaging: Option<String>,
}

impl CoordinateBuilder {
    pub fn repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn classifier(mut self, classifier: Option<impl Into<String>>) -> Self {
        self.classifier = classifier.map(Into::into);
        self
    }

    pub fn packaging(mut self, packaging: Option<impl Into<String>>) -> Self {
        self.packaging = packaging.map(Into::into);
        self
    }

    /// Build the coordinate
    ///
    /// Fails with `MissingCoordinateField` when the group or artifact id is
    /// absent or blank. Blank classifiers are dropped and a blank packaging
    /// falls back to `jar`.
    pub fn build(self) -> Result<Coordinate> {
        let group_id = non_blank(self.group_id).ok_or_else(|| missing_field("group_id"))?;
        let artifact_id =
            non_blank(self.artifact_id).ok_or_else(|| missing_field("artifact_id"))?;

        Ok(Coordinate {
            repository_url: non_blank(self.repository_url)
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
            group_id,
            artifact_id,
            classifier: non_blank(self.classifier),
            packaging: non_blank(self.packaging).unwrap_or_else(|| DEFAULT_PACKAGING.to_string()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
