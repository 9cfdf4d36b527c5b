//! mvnfetch - Maven artifact fetcher
//!
//! Resolves artifact coordinates against Maven-layout repositories and keeps
//! local copies of the resolved artifacts in place, fetching only when the
//! resolution changed or the file went missing.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod converge;
mod coordinate;
mod error;
mod logging;
mod materialize;
mod report;
mod repository;
mod resolver;
mod state;
mod target;
mod version;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Get(args) => commands::get::run(cli.state_file, args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Versions(args) => commands::versions::run(args),
        Commands::Apply(args) => commands::apply::run(cli.state_file, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
