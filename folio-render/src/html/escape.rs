//! HTML escaping for text nodes and attribute values.
//!
//! Catalog strings are free-form ("Q&A system", "Machine Learning & Deep
//! Learning") and must never be able to open a tag or close an attribute.

/// Escape text for use between tags.
///
/// Replaces `&`, `<` and `>` with their named entities.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
///
/// Like [`escape_text`], plus both quote characters. A browser decodes the
/// result back to the original string, so `href` values stay literal.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `name="value"` with the value escaped.
#[must_use]
pub fn attr(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attr(value))
}
