//! `folio` - static portfolio page generator
//!
//! Loads a portfolio catalog, validates it, and writes a single
//! self-contained HTML page plus its static assets.

pub mod cli;
pub mod error;
pub mod observability;
pub mod site;
