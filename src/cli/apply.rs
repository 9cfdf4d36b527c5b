use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_DECLARATION_FILE;

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Converge artifacts declared in ./mvnfetch.yaml:\n    mvnfetch apply\n\n\
                  Preview another declaration file:\n    mvnfetch apply -f deploy/artifacts.yaml --dry-run")]
pub struct ApplyArgs {
    /// Declaration file
    #[arg(long, short = 'f', default_value = DEFAULT_DECLARATION_FILE)]
    pub file: PathBuf,

    /// Report what would change without fetching or recording anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}
