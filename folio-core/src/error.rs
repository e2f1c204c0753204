//! Core error types for Folio
//!
//! Catalog loading and validation errors shared across the workspace.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Catalog Errors
// ============================================================================

/// Catalog loading and validation errors.
///
/// Rendering itself never fails; these cover reading a catalog document
/// and rejecting one that breaks a hard invariant.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the catalog file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Catalog validation failed
    #[error("validation failed for {path}: {} issue(s)", errors.len())]
    ValidationError {
        /// Path (or label) of the catalog that failed
        path: String,
        /// Issues that caused the failure
        errors: Vec<ValidationIssue>,
    },

    /// Referenced catalog file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g. "categories[1].projects[0].link")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-level issue.
    #[must_use]
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-level issue.
    #[must_use]
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Returns `true` if this issue blocks a build, given the strictness.
    #[must_use]
    pub fn is_blocking(&self, strict: bool) -> bool {
        self.severity == Severity::Error || strict
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - breaks an invariant; the catalog must not be published
    Error,
    /// Warning - degrades visually but still renders
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}
