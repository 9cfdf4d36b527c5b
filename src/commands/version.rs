//! Version command implementation

use crate::coordinate::DEFAULT_REPOSITORY_URL;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("mvnfetch {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Default repository: {DEFAULT_REPOSITORY_URL}");

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
