//! Portfolio catalog: schema, built-in content, loading and validation.

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validation;

pub use builtin::builtin;
pub use loader::{CatalogSource, LoadedCatalog, load_catalog, parse_catalog};
pub use schema::{Catalog, CategoryRecord, ProjectRecord, Profile, Site};
pub use validation::{AssetRef, local_assets, validate_catalog};
