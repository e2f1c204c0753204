//! Folio Core — portfolio catalog types and validation
//!
//! This crate provides the catalog schema, the embedded default catalog,
//! and the error types shared across `folio` (CLI) and `folio-render`
//! (HTML generation).

pub mod catalog;
pub mod error;
