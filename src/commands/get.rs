//! Get command implementation

use std::path::PathBuf;

use tracing::debug;

use crate::cli::GetArgs;
use crate::commands::helpers::{print_result, state_store};
use crate::converge::ConvergenceController;
use crate::error::{MvnError, Result};
use crate::materialize::RepositoryMaterializer;
use crate::repository::RepositoryClient;
use crate::resolver::CoordinateResolver;
use crate::target::target_path;

/// Run get command
pub fn run(state_file: Option<PathBuf>, args: GetArgs) -> Result<()> {
    let coordinate = args.coordinate.coordinate()?;
    let specifier = args.coordinate.specifier()?;
    let target = target_path(
        &args.name,
        &coordinate,
        args.save_to.as_deref(),
        args.save_as.as_deref(),
    )?;
    debug!(%coordinate, %specifier, target = %target.display(), "converging artifact");

    let store = state_store(state_file)?;
    let client = RepositoryClient::new()?;
    let materializer = RepositoryMaterializer::new(&client).with_progress(!args.json);
    let controller =
        ConvergenceController::new(CoordinateResolver::new(&client), &materializer, &store);

    let result = controller.apply(&coordinate, &specifier, &target, args.dry_run);
    print_result(&args.name, &result, args.json)?;

    if result.is_failed() {
        return Err(MvnError::ConvergenceFailed {
            failed: 1,
            total: 1,
        });
    }
    Ok(())
}
