use clap::Args;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::version::VersionSpecifier;

/// Repository and group/artifact ids
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// Repository base URL [default: https://repo1.maven.org/maven2/]
    #[arg(long, env = "MVNFETCH_REPO_URL")]
    pub repo_url: Option<String>,

    /// Group id (e.g. org.slf4j)
    #[arg(long, short = 'g')]
    pub group_id: Option<String>,

    /// Artifact id (e.g. slf4j-api)
    #[arg(long, short = 'a')]
    pub artifact_id: Option<String>,
}

/// Full artifact coordinate with version specifier
#[derive(Args, Debug, Clone, Default)]
pub struct CoordinateArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,

    /// Exact version or range such as [1.0,2.0); latest when omitted
    #[arg(long)]
    pub version: Option<String>,

    /// Artifact classifier (e.g. sources)
    #[arg(long)]
    pub classifier: Option<String>,

    /// Artifact type, also used as file extension [default: jar]
    #[arg(long = "type", value_name = "TYPE")]
    pub packaging: Option<String>,
}

impl ArtifactArgs {
    /// Coordinate with default classifier and packaging
    pub fn coordinate(&self) -> Result<Coordinate> {
        self.builder().build()
    }

    fn builder(&self) -> crate::coordinate::CoordinateBuilder {
        let mut builder = Coordinate::builder();
        if let Some(url) = &self.repo_url {
            builder = builder.repository_url(url);
        }
        if let Some(group_id) = &self.group_id {
            builder = builder.group_id(group_id);
        }
        if let Some(artifact_id) = &self.artifact_id {
            builder = builder.artifact_id(artifact_id);
        }
        builder
    }
}

impl CoordinateArgs {
    pub fn coordinate(&self) -> Result<Coordinate> {
        self.artifact
            .builder()
            .classifier(self.classifier.as_deref())
            .packaging(self.packaging.as_deref())
            .build()
    }

    pub fn specifier(&self) -> Result<VersionSpecifier> {
        VersionSpecifier::parse(self.version.as_deref())
    }
}
