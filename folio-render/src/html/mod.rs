//! HTML generation for portfolio catalogs.
//!
//! - `escape`: text and attribute escaping
//! - `card`: one project card
//! - `page`: hero, project grid, and document shell
//! - `icons`, `style`: inline SVGs and the embedded stylesheet

pub mod card;
pub mod escape;
pub mod icons;
pub mod page;
pub mod style;

pub use card::render_card;
pub use page::{render_hero, render_page, render_projects};
