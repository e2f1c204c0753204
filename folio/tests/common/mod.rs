//! Shared integration-test harness for running the `folio` binary as a
//! child process.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Environment variables that would leak host configuration into tests.
const FOLIO_ENV: &[&str] = &[
    "FOLIO_CATALOG",
    "FOLIO_OUTPUT",
    "FOLIO_ASSETS",
    "FOLIO_COLOR",
    "FOLIO_LOG_FORMAT",
    "FOLIO_LOG_LEVEL",
];

/// Helpers for invoking the compiled `folio` binary.
pub struct FolioProcess;

impl FolioProcess {
    /// Builds a `Command` for the binary with a clean `FOLIO_*` environment.
    #[must_use]
    pub fn command(args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        for var in FOLIO_ENV {
            cmd.env_remove(var);
        }
        cmd.args(args);
        cmd
    }

    /// Runs the binary to completion and returns its output.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command(args)
            .output()
            .expect("failed to run folio")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Returns a fixture path as `&str`-friendly `String`.
    #[must_use]
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name).display().to_string()
    }
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
#[must_use]
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
