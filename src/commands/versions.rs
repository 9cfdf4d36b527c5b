//! Versions command implementation

use console::Style;
use serde::Serialize;

use crate::catalog::{VersionCatalog, sort_versions};
use crate::cli::VersionsArgs;
use crate::error::Result;
use crate::report;
use crate::repository::RepositoryClient;

/// Published versions, oldest first
#[derive(Debug, Serialize)]
struct VersionListing {
    release: Option<String>,
    versions: Vec<String>,
}

/// Run versions command
pub fn run(args: VersionsArgs) -> Result<()> {
    let coordinate = args.artifact.coordinate()?;
    let client = RepositoryClient::new()?;
    let metadata = VersionCatalog::new(&client).fetch_artifact_metadata(&coordinate)?;

    let listing = VersionListing {
        release: metadata.release().map(str::to_string),
        versions: sort_versions(metadata.versions()),
    };

    if args.json {
        println!("{}", report::render_json(&listing)?);
        return Ok(());
    }

    for version in &listing.versions {
        if listing.release.as_deref() == Some(version.as_str()) {
            println!(
                "{} {}",
                Style::new().bold().green().apply_to(version),
                Style::new().dim().apply_to("(release)")
            );
        } else {
            println!("{version}");
        }
    }
    Ok(())
}
