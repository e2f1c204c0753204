//! Site output: writing the rendered page and copying static assets.

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::catalog::{Catalog, local_assets};
use folio_core::error::ValidationIssue;

use crate::error::SiteError;

/// File name of the generated page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Writes `html` to `<output>/index.html`, creating the directory.
///
/// # Errors
///
/// Returns `SiteError::Write` if the directory or file cannot be written.
pub fn write_page(output: &Path, html: &str) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(output).map_err(|source| SiteError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let index = output.join(INDEX_FILE);
    fs::write(&index, html).map_err(|source| SiteError::Write {
        path: index.clone(),
        source,
    })?;

    tracing::debug!(path = %index.display(), bytes = html.len(), "page written");
    Ok(index)
}

/// Copies every file under `assets` into `output`, keeping relative paths.
///
/// Returns the number of files copied. When `output` lies inside `assets`,
/// files already under `output` are skipped so earlier builds are never
/// copied into themselves.
///
/// # Errors
///
/// Returns `SiteError::MissingAssets` if `assets` is not a directory,
/// `SiteError::OutputIsAssets` if both paths name the same directory, and
/// `SiteError::Copy` / `SiteError::Write` on I/O failures.
pub fn copy_assets(assets: &Path, output: &Path) -> Result<usize, SiteError> {
    if !assets.is_dir() {
        return Err(SiteError::MissingAssets(assets.to_path_buf()));
    }

    fs::create_dir_all(output).map_err(|source| SiteError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let assets = assets.canonicalize().map_err(|source| SiteError::Copy {
        path: assets.to_path_buf(),
        source,
    })?;
    let output = output.canonicalize().map_err(|source| SiteError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    if assets == output {
        return Err(SiteError::OutputIsAssets(output));
    }

    let pattern = format!(
        "{}/**/*",
        glob::Pattern::escape(&assets.display().to_string())
    );

    let mut copied = 0;
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|e| SiteError::Copy {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;

        if !path.is_file() || path.starts_with(&output) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(&assets) else {
            continue;
        };
        let target = output.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::copy(&path, &target).map_err(|source| SiteError::Copy {
            path: path.clone(),
            source,
        })?;
        tracing::trace!(from = %path.display(), to = %target.display(), "asset copied");
        copied += 1;
    }

    Ok(copied)
}

/// Reports catalog asset references with no matching file under `assets`.
///
/// Missing assets degrade to broken images or dead links, so they are
/// warnings rather than errors.
#[must_use]
pub fn check_assets(catalog: &Catalog, assets: &Path) -> Vec<ValidationIssue> {
    local_assets(catalog)
        .into_iter()
        .filter(|asset| !assets.join(asset.relative_path()).is_file())
        .map(|asset| {
            ValidationIssue::warning(
                asset.field,
                format!(
                    "asset \"{}\" not found in {}",
                    asset.path,
                    assets.display()
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::catalog::builtin;
    use folio_core::error::Severity;

    #[test]
    fn test_write_page_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("dist");

        let index = write_page(&output, "<html></html>").unwrap();
        assert_eq!(index, output.join(INDEX_FILE));
        assert_eq!(fs::read_to_string(index).unwrap(), "<html></html>");
    }

    #[test]
    fn test_copy_assets_preserves_layout() {
        let assets = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::create_dir_all(assets.path().join("project_imgs")).unwrap();
        fs::write(assets.path().join("profilepic.png"), b"png").unwrap();
        fs::write(assets.path().join("project_imgs").join("chat_pdf.png"), b"img").unwrap();

        let copied = copy_assets(assets.path(), output.path()).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(fs::read(output.path().join("profilepic.png")).unwrap(), b"png");
        assert_eq!(
            fs::read(output.path().join("project_imgs").join("chat_pdf.png")).unwrap(),
            b"img"
        );
    }

    #[test]
    fn test_copy_assets_missing_directory() {
        let output = tempfile::tempdir().unwrap();
        let result = copy_assets(Path::new("/nonexistent/folio/assets"), output.path());
        assert!(matches!(result, Err(SiteError::MissingAssets(_))));
    }

    #[test]
    fn test_copy_assets_into_itself_is_rejected() {
        let assets = tempfile::tempdir().unwrap();
        let image = assets.path().join("profilepic.png");
        fs::write(&image, b"portrait bytes").unwrap();

        let result = copy_assets(assets.path(), assets.path());
        assert!(matches!(result, Err(SiteError::OutputIsAssets(_))));
        assert_eq!(fs::read(&image).unwrap(), b"portrait bytes");
    }

    #[test]
    fn test_copy_assets_same_directory_via_relative_path() {
        let assets = tempfile::tempdir().unwrap();
        fs::create_dir_all(assets.path().join("public")).unwrap();
        fs::write(assets.path().join("public").join("cv.pdf"), b"resume").unwrap();

        let output = assets.path().join("public").join("..").join("public");
        let result = copy_assets(&assets.path().join("public"), &output);
        assert!(matches!(result, Err(SiteError::OutputIsAssets(_))));
        assert_eq!(
            fs::read(assets.path().join("public").join("cv.pdf")).unwrap(),
            b"resume"
        );
    }

    #[test]
    fn test_copy_assets_skips_nested_output() {
        let assets = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("profilepic.png"), b"png").unwrap();
        let output = assets.path().join("dist");

        for _ in 0..3 {
            let copied = copy_assets(assets.path(), &output).unwrap();
            assert_eq!(copied, 1);
        }

        assert_eq!(fs::read(output.join("profilepic.png")).unwrap(), b"png");
        assert!(!output.join("dist").exists());
    }

    #[test]
    fn test_check_assets_reports_missing() {
        let assets = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("profilepic.png"), b"png").unwrap();

        let catalog = builtin();
        let issues = check_assets(catalog, assets.path());

        // resume + ten project images
        assert_eq!(issues.len(), 1 + catalog.project_count());
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues.iter().any(|i| i.path == "profile.resume"));
        assert!(!issues.iter().any(|i| i.path == "profile.image"));
    }
}
