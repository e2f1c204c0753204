//! `folio build`: validate, render, and write the static site.

use folio_core::error::Severity;
use folio_render::render_page;

use crate::cli::args::BuildArgs;
use crate::cli::commands::load;
use crate::cli::commands::validate::{collect_issues, ensure_publishable};
use crate::error::FolioError;
use crate::site::{copy_assets, write_page};

/// Execute `build`.
///
/// Warnings are logged and only abort the build with `--strict`. Assets
/// are copied before the page is written so a stray `index.html` in the
/// assets directory never replaces the generated page.
///
/// # Errors
///
/// Returns an error if the catalog is invalid or the site cannot be written.
pub fn run(args: &BuildArgs, quiet: bool) -> Result<(), FolioError> {
    let loaded = load(&args.catalog)?;

    let issues = collect_issues(&loaded, args.assets.as_deref());
    for issue in &issues {
        match issue.severity {
            Severity::Error => tracing::error!(path = %issue.path, "{}", issue.message),
            Severity::Warning => tracing::warn!(path = %issue.path, "{}", issue.message),
        }
    }
    ensure_publishable(&loaded, issues, args.strict)?;

    let copied = match args.assets {
        Some(ref assets) => copy_assets(assets, &args.output)?,
        None => 0,
    };

    let html = render_page(&loaded.catalog);
    let index = write_page(&args.output, &html)?;

    tracing::info!(
        output = %index.display(),
        assets = copied,
        "site built"
    );

    if !quiet {
        eprintln!(
            "Wrote {} ({} categories, {} projects, {copied} assets)",
            index.display(),
            loaded.catalog.categories.len(),
            loaded.catalog.project_count(),
        );
    }

    Ok(())
}
