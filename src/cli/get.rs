use clap::Parser;

use super::CoordinateArgs;

/// Arguments for the get command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Save the latest release to /opt/lib/slf4j-api.jar:\n    mvnfetch get /opt/lib -g org.slf4j -a slf4j-api\n\n\
                  Save the newest 1.x release under a fixed file name:\n    mvnfetch get slf4j -g org.slf4j -a slf4j-api --version '[1.0,2.0)' --save-as ~/lib/slf4j.jar\n\n\
                  Show what would change without fetching:\n    mvnfetch get /opt/lib -g org.slf4j -a slf4j-api --dry-run")]
pub struct GetArgs {
    /// Logical name; also the target directory when --save-to is not given
    pub name: String,

    #[command(flatten)]
    pub coordinate: CoordinateArgs,

    /// Directory to save the artifact to, as {artifactId}.{type}
    #[arg(long)]
    pub save_to: Option<String>,

    /// File to save the artifact as (overrides --save-to)
    #[arg(long)]
    pub save_as: Option<String>,

    /// Report what would change without fetching or recording anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
