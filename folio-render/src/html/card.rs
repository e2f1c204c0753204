//! Project card rendering.
//!
//! A card is a self-contained `<article>`: image or placeholder, title,
//! description, one chip per tag, and the outbound link.

use folio_core::catalog::ProjectRecord;

use crate::html::escape::{attr, escape_text};

/// Attributes that open a link in a new browsing context without giving
/// the destination a handle on this page.
pub const NEW_CONTEXT_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Render one project as a card.
///
/// `index` is the card's position within its category and becomes the
/// card's `data-key`. Chips are keyed by position as well, since the same
/// tag text can appear on several cards.
#[must_use]
pub fn render_card(project: &ProjectRecord, index: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("<article class=\"card\" data-key=\"{index}\">"));
    lines.push(format!("  {}", render_image(project)));
    lines.push("  <div class=\"card-body\">".to_string());
    lines.push(format!(
        "    <h3 class=\"card-title\">{}</h3>",
        escape_text(&project.title)
    ));
    lines.push(format!(
        "    <p class=\"card-description\">{}</p>",
        escape_text(&project.description)
    ));
    lines.push(render_chips(&project.tags));
    lines.push(format!("    {}", render_link(project)));
    lines.push("  </div>".to_string());
    lines.push("</article>".to_string());

    lines.join("\n")
}

/// Image element, or a placeholder box when the project has no image.
fn render_image(project: &ProjectRecord) -> String {
    match project.image() {
        Some(src) => format!(
            "<img class=\"card-image\" {} {} loading=\"lazy\">",
            attr("src", src),
            attr("alt", &project.title)
        ),
        None => "<div class=\"card-placeholder\" aria-hidden=\"true\"></div>".to_string(),
    }
}

/// Chip row; an empty tag list yields an empty row.
fn render_chips(tags: &[String]) -> String {
    if tags.is_empty() {
        return "    <div class=\"chips\"></div>".to_string();
    }

    let mut lines = vec!["    <div class=\"chips\">".to_string()];
    for (i, tag) in tags.iter().enumerate() {
        lines.push(format!(
            "      <span class=\"chip\" data-key=\"{i}\">{}</span>",
            escape_text(tag)
        ));
    }
    lines.push("    </div>".to_string());
    lines.join("\n")
}

/// Outbound link control.
///
/// A blank link renders as a disabled control rather than an anchor, so
/// the card never points at the current page.
fn render_link(project: &ProjectRecord) -> String {
    let label = escape_text(project.link_label());
    if project.link.trim().is_empty() {
        return format!(
            "<span class=\"card-link card-link-disabled\" aria-disabled=\"true\">{label}</span>"
        );
    }

    format!(
        "<a class=\"card-link\" {} {NEW_CONTEXT_ATTRS}>{label}</a>",
        attr("href", &project.link)
    )
}
