//! Catalog schema types
//!
//! These types are deserialized from catalog YAML documents. Field names
//! follow one convention (`tags`, `link`, `image`); older spellings are
//! accepted as aliases so historical catalogs keep loading.

use serde::{Deserialize, Serialize};

/// Default label for a project's outbound link.
pub const DEFAULT_LINK_LABEL: &str = "View on GitHub";

/// Default heading above the project grid.
pub const DEFAULT_PROJECTS_HEADING: &str = "Main projects";

// ============================================================================
// Top-Level Catalog
// ============================================================================

/// The full portfolio: site settings, hero profile, and ordered categories.
///
/// A catalog is loaded once and never mutated; rendering borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Document-level settings
    #[serde(default)]
    pub site: Site,

    /// Hero section content
    pub profile: Profile,

    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

impl Catalog {
    /// Total number of projects across all categories.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.categories.iter().map(|c| c.projects.len()).sum()
    }

    /// Iterates over every project in display order.
    pub fn projects(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.categories.iter().flat_map(|c| c.projects.iter())
    }

    /// Looks up a category by exact name (case-insensitive).
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryRecord> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Suggests the closest category name for a misspelled lookup.
    ///
    /// Returns `None` when nothing is reasonably close.
    #[must_use]
    pub fn closest_category(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        self.categories
            .iter()
            .map(|c| {
                let score = strsim::jaro_winkler(&needle, &c.name.to_lowercase());
                (c.name.as_str(), score)
            })
            .filter(|(_, score)| *score >= 0.7)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }

    /// Document title, falling back to `"{name} | {role}"`.
    #[must_use]
    pub fn page_title(&self) -> String {
        self.site
            .title
            .clone()
            .unwrap_or_else(|| format!("{} | {}", self.profile.name, self.profile.role))
    }
}

// ============================================================================
// Site & Profile
// ============================================================================

/// Document-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// `<title>` of the page; derived from the profile when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Heading shown above the project categories
    #[serde(default = "default_projects_heading")]
    pub projects_heading: String,

    /// Value of the document `lang` attribute
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: None,
            projects_heading: default_projects_heading(),
            lang: default_lang(),
        }
    }
}

fn default_projects_heading() -> String {
    DEFAULT_PROJECTS_HEADING.to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,

    /// Professional title shown under the name
    pub role: String,

    /// Bio lines, rendered separated by line breaks
    #[serde(default)]
    pub bio: Vec<String>,

    /// Contact address for the `mailto:` link
    pub email: String,

    /// Professional-network profile URL
    pub linkedin: String,

    /// Code-hosting profile URL
    pub github: String,

    /// Profile picture path under the site root
    pub image: String,

    /// Downloadable resume path under the site root
    pub resume: String,
}

// ============================================================================
// Categories & Projects
// ============================================================================

/// A named group of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Heading label
    pub name: String,

    /// Projects in display order
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// One portfolio project, rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Card title
    pub title: String,

    /// Card body text
    #[serde(default)]
    pub description: String,

    /// Tag chips in display order
    #[serde(default, alias = "technologies")]
    pub tags: Vec<String>,

    /// Outbound link (absolute URL)
    #[serde(default, alias = "github_url", alias = "githubUrl")]
    pub link: String,

    /// Link text; defaults to [`DEFAULT_LINK_LABEL`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,

    /// Preview image path or URL
    #[serde(
        default,
        alias = "image_src",
        alias = "imageSrc",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl ProjectRecord {
    /// Preview image, treating a blank reference as absent.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Link text shown on the card.
    #[must_use]
    pub fn link_label(&self) -> &str {
        self.link_label.as_deref().unwrap_or(DEFAULT_LINK_LABEL)
    }

    /// Returns `true` if the project carries the tag (case-insensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
