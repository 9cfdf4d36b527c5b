//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - coordinate: Coordinate arguments shared by several commands
//! - get: Get command arguments
//! - resolve: Resolve command arguments
//! - versions: Versions command arguments
//! - apply: Apply command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod apply;
pub mod completions;
pub mod coordinate;
pub mod get;
pub mod resolve;
pub mod versions;

pub use apply::ApplyArgs;
pub use completions::CompletionsArgs;
pub use coordinate::{ArtifactArgs, CoordinateArgs};
pub use get::GetArgs;
pub use resolve::ResolveArgs;
pub use versions::VersionsArgs;

/// mvnfetch - Maven artifact fetcher
///
/// Resolve artifacts in Maven repositories and keep local copies in place.
#[derive(Parser, Debug)]
#[command(
    name = "mvnfetch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve Maven artifacts and keep local copies up to date",
    long_about = "mvnfetch resolves a Maven coordinate (group, artifact, version or version range, \
                  classifier, type) against a Maven-layout repository and saves the artifact to a \
                  local path. Runs are idempotent: an artifact already in place is not fetched again.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mvnfetch get /opt/lib -g org.slf4j -a slf4j-api          \x1b[90m# Latest release\x1b[0m\n   \
                  mvnfetch get /opt/lib -g org.slf4j -a slf4j-api --version '[1.7,2.0)'\n   \
                  mvnfetch resolve -g org.slf4j -a slf4j-api                \x1b[90m# Print the download URL\x1b[0m\n   \
                  mvnfetch versions -g org.slf4j -a slf4j-api               \x1b[90m# List published versions\x1b[0m\n   \
                  mvnfetch apply --dry-run                                  \x1b[90m# Preview mvnfetch.yaml\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// State file recording what was saved where
    #[arg(long, global = true, env = "MVNFETCH_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save an artifact to a local path unless it is already there
    Get(GetArgs),

    /// Print the version and download URL an artifact resolves to
    Resolve(ResolveArgs),

    /// List the versions a repository publishes for an artifact
    Versions(VersionsArgs),

    /// Converge every artifact declared in mvnfetch.yaml
    Apply(ApplyArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
