//! Declaration file (mvnfetch.yaml) data structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::config::{not_found, parse_failed};
use crate::error::{MvnError, Result};
use crate::target::target_path;
use crate::version::VersionSpecifier;

/// Declaration file read by `mvnfetch apply` when none is given
pub const DEFAULT_DECLARATION_FILE: &str = "mvnfetch.yaml";

/// Artifacts to keep in place, from mvnfetch.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationFile {
    /// Repository used by artifacts that don't name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    #[serde(default)]
    pub artifacts: Vec<ArtifactDeclaration>,
}

/// One artifact entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactDeclaration {
    /// Logical name; also the target directory when `save_to` is absent
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    /// Exact version or range; latest when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    /// Packaging, which is also the file extension
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_as: Option<String>,
}

impl DeclarationFile {
    /// Parse a declaration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let declaration: Self = serde_yaml::from_str(yaml)?;
        declaration.validate()?;
        Ok(declaration)
    }

    /// Read and parse the declaration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = match std::fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(not_found(path.display().to_string()));
            }
            Err(e) => return Err(parse_failed(path.display().to_string(), e.to_string())),
        };

        Self::from_yaml(&yaml).map_err(|err| match err {
            MvnError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Every artifact needs a name
    pub fn validate(&self) -> Result<()> {
        for (index, artifact) in self.artifacts.iter().enumerate() {
            if artifact.name.trim().is_empty() {
                return Err(parse_failed(
                    "unknown",
                    format!("artifact #{} has an empty name", index + 1),
                ));
            }
        }
        Ok(())
    }
}

impl ArtifactDeclaration {
    /// Coordinate of the entry, falling back to `default_repo_url`
    pub fn coordinate(&self, default_repo_url: Option<&str>) -> Result<Coordinate> {
        let mut builder = Coordinate::builder();
        if let Some(url) = self.repo_url.as_deref().or(default_repo_url) {
            builder = builder.repository_url(url);
        }
        if let Some(group_id) = &self.group_id {
            builder = builder.group_id(group_id);
        }
        if let Some(artifact_id) = &self.artifact_id {
            builder = builder.artifact_id(artifact_id);
        }
        builder
            .classifier(self.classifier.as_deref())
            .packaging(self.packaging.as_deref())
            .build()
    }

    pub fn specifier(&self) -> Result<VersionSpecifier> {
        VersionSpecifier::parse(self.version.as_deref())
    }

    /// Destination file of the entry
    pub fn target(&self, coordinate: &Coordinate) -> Result<PathBuf> {
        target_path(
            &self.name,
            coordinate,
            self.save_to.as_deref(),
            self.save_as.as_deref(),
        )
    }
}
