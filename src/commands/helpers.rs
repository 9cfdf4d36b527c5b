//! Command helper utilities

use std::path::PathBuf;

use tracing::debug;

use crate::converge::ConvergenceResult;
use crate::error::Result;
use crate::report::{self, ArtifactReport};
use crate::state::{JsonStateStore, default_state_path};

/// Open the state file given on the command line, or the default one
pub fn state_store(state_file: Option<PathBuf>) -> Result<JsonStateStore> {
    let path = match state_file {
        Some(path) => path,
        None => default_state_path()?,
    };
    debug!(path = %path.display(), "using state file");
    Ok(JsonStateStore::new(path))
}

/// Print one result in the requested format
pub fn print_result(name: &str, result: &ConvergenceResult, json: bool) -> Result<()> {
    if json {
        println!("{}", report::render_json(&ArtifactReport::new(name, result))?);
    } else {
        println!("{}", report::render_human(name, result));
    }
    Ok(())
}
