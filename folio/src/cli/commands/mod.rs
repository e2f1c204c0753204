//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod completions;
pub mod list;
pub mod render;
pub mod validate;
pub mod version;

use folio_core::catalog::{LoadedCatalog, load_catalog};

use crate::cli::args::{CatalogArgs, Cli, Commands};
use crate::error::FolioError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Commands::Build(args) => build::run(&args, cli.quiet),
        Commands::Render(args) => render::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::List(args) => list::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Load the catalog selected by `--catalog`, or the built-in one.
fn load(args: &CatalogArgs) -> Result<LoadedCatalog, FolioError> {
    let loaded = load_catalog(args.catalog.as_deref())?;
    tracing::info!(
        source = %loaded.source,
        categories = loaded.catalog.categories.len(),
        projects = loaded.catalog.project_count(),
        "catalog loaded"
    );
    Ok(loaded)
}
