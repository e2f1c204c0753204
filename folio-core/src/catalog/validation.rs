//! Catalog validation
//!
//! Rendering is permissive: a catalog with missing images or empty tag
//! lists still renders. Validation surfaces those gaps as warnings and
//! rejects only what breaks a hard invariant, such as an outbound link
//! that is not an absolute URL.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::schema::{Catalog, CategoryRecord, ProjectRecord, Profile};
use crate::error::ValidationIssue;

static ABSOLUTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("valid regex")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// A reference from the catalog to a file served from the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef<'a> {
    /// Catalog field holding the reference
    pub field: String,
    /// Site-root path as written in the catalog (e.g. `/profilepic.png`)
    pub path: &'a str,
}

impl AssetRef<'_> {
    /// Path relative to the site root, without the leading slash.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

/// Returns `true` if `value` is an absolute URL (`scheme://host...`).
#[must_use]
pub fn is_absolute_url(value: &str) -> bool {
    ABSOLUTE_URL_RE.is_match(value)
}

/// Returns `true` if `value` looks like an email address.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validates a catalog, returning every issue found.
///
/// An empty list means the catalog is clean.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_profile(&catalog.profile, &mut issues);

    for (index, category) in catalog.categories.iter().enumerate() {
        validate_category(category, index, &mut issues);
    }

    issues.extend(detect_duplicate_titles(catalog));
    issues
}

/// Lists every local asset the catalog references, in page order.
///
/// Absolute URLs are skipped since they are not served from the site root.
#[must_use]
pub fn local_assets(catalog: &Catalog) -> Vec<AssetRef<'_>> {
    let mut assets = Vec::new();

    let profile = &catalog.profile;
    for (field, path) in [("profile.image", &profile.image), ("profile.resume", &profile.resume)] {
        if !path.trim().is_empty() && !is_absolute_url(path) {
            assets.push(AssetRef {
                field: field.to_string(),
                path,
            });
        }
    }

    for (c, category) in catalog.categories.iter().enumerate() {
        for (p, project) in category.projects.iter().enumerate() {
            if let Some(image) = project.image() {
                if !is_absolute_url(image) {
                    assets.push(AssetRef {
                        field: format!("categories[{c}].projects[{p}].image"),
                        path: image,
                    });
                }
            }
        }
    }

    assets
}

fn validate_profile(profile: &Profile, issues: &mut Vec<ValidationIssue>) {
    if profile.name.trim().is_empty() {
        issues.push(ValidationIssue::warning("profile.name", "name is empty"));
    }

    if !is_plausible_email(&profile.email) {
        issues.push(ValidationIssue::error(
            "profile.email",
            format!("expected an email address, got \"{}\"", profile.email),
        ));
    }

    for (field, url) in [("profile.linkedin", &profile.linkedin), ("profile.github", &profile.github)] {
        if !is_absolute_url(url) {
            issues.push(ValidationIssue::error(
                field,
                format!("expected an absolute URL, got \"{url}\""),
            ));
        }
    }

    if profile.image.trim().is_empty() {
        issues.push(ValidationIssue::warning("profile.image", "profile image is empty"));
    }

    if profile.resume.trim().is_empty() {
        issues.push(ValidationIssue::warning("profile.resume", "resume path is empty"));
    }
}

fn validate_category(category: &CategoryRecord, index: usize, issues: &mut Vec<ValidationIssue>) {
    let path = format!("categories[{index}]");

    if category.name.trim().is_empty() {
        issues.push(ValidationIssue::warning(format!("{path}.name"), "category name is empty"));
    }

    if category.projects.is_empty() {
        issues.push(ValidationIssue::warning(&path, "category has no projects"));
    }

    for (p, project) in category.projects.iter().enumerate() {
        validate_project(project, &format!("{path}.projects[{p}]"), issues);
    }
}

fn validate_project(project: &ProjectRecord, path: &str, issues: &mut Vec<ValidationIssue>) {
    if project.title.trim().is_empty() {
        issues.push(ValidationIssue::warning(format!("{path}.title"), "title is empty"));
    }

    if project.link.trim().is_empty() {
        issues.push(ValidationIssue::error(format!("{path}.link"), "link is empty"));
    } else if !is_absolute_url(&project.link) {
        issues.push(ValidationIssue::error(
            format!("{path}.link"),
            format!("expected an absolute URL, got \"{}\"", project.link),
        ));
    }

    if project.image().is_none() {
        issues.push(ValidationIssue::warning(
            format!("{path}.image"),
            "no image, a placeholder will be rendered",
        ));
    }

    if project.tags.is_empty() {
        issues.push(ValidationIssue::warning(format!("{path}.tags"), "no tags"));
    }

    for (t, tag) in project.tags.iter().enumerate() {
        if tag.trim().is_empty() {
            issues.push(ValidationIssue::warning(format!("{path}.tags[{t}]"), "tag is empty"));
        }
    }
}

/// Flags project titles that appear more than once (case-insensitive).
fn detect_duplicate_titles(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut issues = Vec::new();

    for (c, category) in catalog.categories.iter().enumerate() {
        for (p, project) in category.projects.iter().enumerate() {
            let key = project.title.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            let path = format!("categories[{c}].projects[{p}].title");
            if let Some(first) = seen.get(&key) {
                issues.push(ValidationIssue::warning(
                    &path,
                    format!("duplicate title \"{}\", first seen at {first}", project.title),
                ));
            } else {
                seen.insert(key, path);
            }
        }
    }

    issues
}
