use clap::Parser;

use super::CoordinateArgs;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve the latest release:\n    mvnfetch resolve -g org.slf4j -a slf4j-api\n\n\
                  Resolve the newest version in a range:\n    mvnfetch resolve -g org.slf4j -a slf4j-api --version '[1.7,1.8)'")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub coordinate: CoordinateArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
