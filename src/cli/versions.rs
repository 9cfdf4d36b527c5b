use clap::Parser;

use super::ArtifactArgs;

/// Arguments for the versions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List published versions, oldest first:\n    mvnfetch versions -g org.slf4j -a slf4j-api")]
pub struct VersionsArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
