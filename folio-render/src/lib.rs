//! Folio Render — static HTML generation from portfolio catalogs
//!
//! Turns a [`folio_core::catalog::Catalog`] into a single self-contained
//! HTML page. Rendering is pure: no I/O, no failure modes.

pub mod html;

pub use html::{render_card, render_page};
