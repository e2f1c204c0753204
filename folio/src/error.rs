//! Error types for `folio`
//!
//! Top-level error hierarchy and the exit codes each variant maps to.

use thiserror::Error;

pub use folio_core::error::{ConfigError, Severity, ValidationIssue};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `folio` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Catalog error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, unknown category)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `folio` operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Catalog loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Site output or asset copy error
    #[error(transparent)]
    Site(#[from] SiteError),

    /// Invalid command-line usage
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Site(_) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Site Output Errors
// ============================================================================

/// Errors writing the generated site to disk.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Output directory could not be created or written
    #[error("cannot write {path}: {source}")]
    Write {
        /// Path being written
        path: std::path::PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Asset directory does not exist
    #[error("assets directory not found: {0}")]
    MissingAssets(std::path::PathBuf),

    /// Output directory is the assets directory
    #[error("output directory {0} is the assets directory")]
    OutputIsAssets(std::path::PathBuf),

    /// Asset glob pattern was invalid
    #[error("invalid asset pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Asset could not be copied
    #[error("cannot copy asset {path}: {source}")]
    Copy {
        /// Source path of the asset
        path: std::path::PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for `folio` operations.
pub type Result<T> = std::result::Result<T, FolioError>;
