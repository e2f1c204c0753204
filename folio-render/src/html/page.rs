//! Full page composition.
//!
//! Assembles the document shell, the hero section, and the project
//! categories into a single HTML file. Output depends only on the catalog,
//! so the same catalog always renders byte-identical HTML.

use folio_core::catalog::{Catalog, CategoryRecord, Profile, Site};

use crate::html::card::{NEW_CONTEXT_ATTRS, render_card};
use crate::html::escape::{attr, escape_text};
use crate::html::icons::Icon;
use crate::html::style::STYLESHEET;

/// Render the complete page for a catalog.
#[must_use]
pub fn render_page(catalog: &Catalog) -> String {
    let mut sections = Vec::new();

    sections.push("<!DOCTYPE html>".to_string());
    sections.push(format!("<html {}>", attr("lang", &catalog.site.lang)));
    sections.push("<head>".to_string());
    sections.push("<meta charset=\"utf-8\">".to_string());
    sections.push(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    sections.push(format!(
        "<meta name=\"generator\" content=\"folio {}\">",
        env!("CARGO_PKG_VERSION")
    ));
    sections.push(format!("<title>{}</title>", escape_text(&catalog.page_title())));
    sections.push("<style>".to_string());
    sections.push(STYLESHEET.trim_end().to_string());
    sections.push("</style>".to_string());
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push(render_hero(&catalog.profile));
    sections.push(render_projects(&catalog.site, &catalog.categories));
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());

    let mut page = sections.join("\n");
    page.push('\n');
    page
}

/// Render the hero section: portrait, name, role, bio, contacts, resume.
#[must_use]
pub fn render_hero(profile: &Profile) -> String {
    let mut lines = Vec::new();

    lines.push("<section class=\"container hero\">".to_string());
    lines.push("  <div class=\"hero-portrait\">".to_string());
    lines.push(format!(
        "    <img {} alt=\"Profile picture\">",
        attr("src", &profile.image)
    ));
    lines.push("  </div>".to_string());
    lines.push("  <div class=\"hero-text\">".to_string());
    lines.push(format!(
        "    <h1 class=\"hero-name\">{}</h1>",
        escape_text(&profile.name)
    ));
    lines.push(format!(
        "    <h2 class=\"hero-role\">{}</h2>",
        escape_text(&profile.role)
    ));

    if !profile.bio.is_empty() {
        let bio: Vec<String> = profile.bio.iter().map(|line| escape_text(line)).collect();
        lines.push(format!("    <p class=\"hero-bio\">{}</p>", bio.join("<br>")));
    }

    lines.push("    <div class=\"contacts\">".to_string());
    lines.push(format!(
        "      <a class=\"contact\" {}>{}{}</a>",
        attr("href", &format!("mailto:{}", profile.email)),
        Icon::Envelope.svg(),
        escape_text(&profile.email)
    ));
    lines.push(format!(
        "      <a class=\"contact\" {} {NEW_CONTEXT_ATTRS}>{}LinkedIn</a>",
        attr("href", &profile.linkedin),
        Icon::LinkedIn.svg()
    ));
    lines.push(format!(
        "      <a class=\"contact\" {} {NEW_CONTEXT_ATTRS}>{}GitHub</a>",
        attr("href", &profile.github),
        Icon::GitHub.svg()
    ));
    lines.push("    </div>".to_string());
    lines.push(format!(
        "    <a class=\"button resume\" {} download>{}Download CV/Resume</a>",
        attr("href", &profile.resume),
        Icon::DocumentDownload.svg()
    ));
    lines.push("  </div>".to_string());
    lines.push("</section>".to_string());

    lines.join("\n")
}

/// Render the projects section: one heading and card grid per category,
/// in catalog order.
#[must_use]
pub fn render_projects(site: &Site, categories: &[CategoryRecord]) -> String {
    let mut lines = Vec::new();

    lines.push("<section class=\"container projects\">".to_string());
    lines.push("  <div class=\"section-title\">".to_string());
    lines.push("    <div class=\"rule\"></div>".to_string());
    lines.push(format!("    <h2>{}</h2>", escape_text(&site.projects_heading)));
    lines.push("    <div class=\"rule\"></div>".to_string());
    lines.push("  </div>".to_string());
    lines.push("  <div class=\"categories\">".to_string());

    for (index, category) in categories.iter().enumerate() {
        lines.push(render_category(category, index));
    }

    lines.push("  </div>".to_string());
    lines.push("</section>".to_string());

    lines.join("\n")
}

/// Render one category heading followed by its card grid.
///
/// Card markup is inserted verbatim, without re-indentation.
fn render_category(category: &CategoryRecord, index: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("    <div class=\"category\" data-key=\"{index}\">"));
    lines.push(format!(
        "      <h3 class=\"category-heading\">{}</h3>",
        escape_text(&category.name)
    ));
    lines.push("      <div class=\"grid\">".to_string());
    for (i, project) in category.projects.iter().enumerate() {
        lines.push(render_card(project, i));
    }
    lines.push("      </div>".to_string());
    lines.push("    </div>".to_string());

    lines.join("\n")
}
