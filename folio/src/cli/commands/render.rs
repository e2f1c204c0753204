//! `folio render`: print the page to stdout.

use std::io::Write;

use folio_render::render_page;

use crate::cli::args::RenderArgs;
use crate::cli::commands::load;
use crate::error::FolioError;

/// Render the catalog and write the HTML to stdout.
///
/// No validation is applied; the page renders whatever the catalog holds.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout is closed.
pub fn run(args: &RenderArgs) -> Result<(), FolioError> {
    let loaded = load(&args.catalog)?;
    let html = render_page(&loaded.catalog);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
