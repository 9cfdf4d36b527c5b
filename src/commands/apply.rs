//! Apply command implementation
//!
//! Converges every artifact of a declaration file in order. A failing entry is
//! reported and the remaining entries are still applied.

use std::path::PathBuf;

use tracing::info;

use crate::catalog::MetadataSource;
use crate::cli::ApplyArgs;
use crate::commands::helpers::{print_result, state_store};
use crate::config::{ArtifactDeclaration, DeclarationFile};
use crate::converge::{ConvergenceController, ConvergenceResult, FileState, ObservedStateStore};
use crate::error::{MvnError, Result};
use crate::materialize::RepositoryMaterializer;
use crate::report::{self, ArtifactReport};
use crate::repository::RepositoryClient;
use crate::resolver::CoordinateResolver;

/// Run apply command
pub fn run(state_file: Option<PathBuf>, args: ApplyArgs) -> Result<()> {
    let declaration = DeclarationFile::load(&args.file)?;
    info!(file = %args.file.display(), artifacts = declaration.artifacts.len(), "applying declaration");

    let store = state_store(state_file)?;
    let client = RepositoryClient::new()?;
    let materializer = RepositoryMaterializer::new(&client).with_progress(!args.json);
    let controller =
        ConvergenceController::new(CoordinateResolver::new(&client), &materializer, &store);

    let mut results = Vec::with_capacity(declaration.artifacts.len());
    for artifact in &declaration.artifacts {
        let result = converge_entry(
            &controller,
            artifact,
            declaration.repo_url.as_deref(),
            args.dry_run,
        );
        // JSON is printed as one document at the end
        if !args.json {
            print_result(&artifact.name, &result, false)?;
        }
        results.push(result);
    }

    if args.json {
        let reports: Vec<ArtifactReport<'_>> = declaration
            .artifacts
            .iter()
            .zip(&results)
            .map(|(artifact, result)| ArtifactReport::new(&artifact.name, result))
            .collect();
        println!("{}", report::render_json(&reports)?);
    }

    let failed = results.iter().filter(|r| r.is_failed()).count();
    info!(
        converged = results.iter().filter(|r| r.is_success()).count(),
        pending = results.iter().filter(|r| r.is_pending()).count(),
        failed,
        "declaration applied"
    );
    if failed > 0 {
        return Err(MvnError::ConvergenceFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Converge one declared artifact; bad declarations become failed results
fn converge_entry<S, F, P>(
    controller: &ConvergenceController<S, F, P>,
    artifact: &ArtifactDeclaration,
    default_repo_url: Option<&str>,
    dry_run: bool,
) -> ConvergenceResult
where
    S: MetadataSource,
    F: FileState,
    P: ObservedStateStore,
{
    let prepared = artifact.coordinate(default_repo_url).and_then(|coordinate| {
        let specifier = artifact.specifier()?;
        let target = artifact.target(&coordinate)?;
        Ok((coordinate, specifier, target))
    });

    match prepared {
        Ok((coordinate, specifier, target)) => {
            controller.apply(&coordinate, &specifier, &target, dry_run)
        }
        Err(err) => ConvergenceResult::from_error(&err),
    }
}
