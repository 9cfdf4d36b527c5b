//! Resolve command implementation

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::report;
use crate::repository::RepositoryClient;
use crate::resolver::CoordinateResolver;

/// Run resolve command
pub fn run(args: ResolveArgs) -> Result<()> {
    let coordinate = args.coordinate.coordinate()?;
    let specifier = args.coordinate.specifier()?;

    let client = RepositoryClient::new()?;
    let resolved = CoordinateResolver::new(&client).resolve(&coordinate, &specifier)?;

    if args.json {
        println!("{}", report::render_json(&resolved)?);
    } else {
        println!("{}", report::render_resolved(&resolved));
    }
    Ok(())
}
