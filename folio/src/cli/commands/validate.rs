//! `folio validate`: report catalog issues without writing anything.

use std::path::Path;

use folio_core::catalog::{LoadedCatalog, validate_catalog};
use folio_core::error::{ConfigError, Severity, ValidationIssue};
use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::commands::load;
use crate::error::FolioError;
use crate::site::check_assets;

/// JSON shape of a validation report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    catalog: String,
    valid: bool,
    summary: Summary,
    issues: &'a [ValidationIssue],
}

#[derive(Debug, Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

/// Execute `validate`.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` when the catalog has errors, or
/// warnings in strict mode.
pub fn run(args: &ValidateArgs) -> Result<(), FolioError> {
    let loaded = load(&args.catalog)?;
    let issues = collect_issues(&loaded, args.assets.as_deref());

    let errors = count(&issues, Severity::Error);
    let warnings = count(&issues, Severity::Warning);
    let valid = !issues.iter().any(|i| i.is_blocking(args.strict));

    match args.format {
        OutputFormat::Human => {
            for issue in &issues {
                println!("{issue}");
            }
            if valid {
                println!("{}: valid ({errors} error(s), {warnings} warning(s))", loaded.source);
            } else {
                println!("{}: invalid ({errors} error(s), {warnings} warning(s))", loaded.source);
            }
        }
        OutputFormat::Json => {
            let report = Report {
                catalog: loaded.source.to_string(),
                valid,
                summary: Summary { errors, warnings },
                issues: &issues,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    ensure_publishable(&loaded, issues, args.strict)
}

/// Run catalog validation plus, when an assets directory is given, the
/// asset existence check.
pub(crate) fn collect_issues(loaded: &LoadedCatalog, assets: Option<&Path>) -> Vec<ValidationIssue> {
    let mut issues = validate_catalog(&loaded.catalog);
    if let Some(assets) = assets {
        issues.extend(check_assets(&loaded.catalog, assets));
    }
    issues
}

/// Fail with the blocking issues, if any.
pub(crate) fn ensure_publishable(
    loaded: &LoadedCatalog,
    issues: Vec<ValidationIssue>,
    strict: bool,
) -> Result<(), FolioError> {
    let blocking: Vec<_> = issues
        .into_iter()
        .filter(|i| i.is_blocking(strict))
        .collect();

    if blocking.is_empty() {
        return Ok(());
    }

    Err(ConfigError::ValidationError {
        path: loaded.source.to_string(),
        errors: blocking,
    }
    .into())
}

fn count(issues: &[ValidationIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}
