//! Catalog loading
//!
//! Resolves a catalog from an optional file path, falling back to the
//! embedded catalog.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::builtin::{BUILTIN_LABEL, builtin};
use crate::catalog::schema::Catalog;
use crate::error::ConfigError;

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog embedded in the binary
    Builtin,
    /// A catalog file on disk
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str(BUILTIN_LABEL),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A catalog together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Origin, used in diagnostics
    pub source: CatalogSource,
    /// The parsed catalog
    pub catalog: Catalog,
}

/// Loads the catalog at `path`, or the built-in catalog when `None`.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if the file cannot be read and
/// `ConfigError::ParseError` if it is not a valid catalog document.
pub fn load_catalog(path: Option<&Path>) -> Result<LoadedCatalog, ConfigError> {
    let Some(path) = path else {
        return Ok(LoadedCatalog {
            source: CatalogSource::Builtin,
            catalog: builtin().clone(),
        });
    };

    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    Ok(LoadedCatalog {
        source: CatalogSource::File(path.to_path_buf()),
        catalog: parse_catalog(&content, path)?,
    })
}

/// Parses catalog YAML; `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` with the failing line when available.
pub fn parse_catalog(content: &str, path: &Path) -> Result<Catalog, ConfigError> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}
