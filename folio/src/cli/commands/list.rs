//! `folio list`: show the categories and projects of a catalog.

use folio_core::catalog::{Catalog, CategoryRecord, ProjectRecord};
use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::load;
use crate::error::FolioError;

/// A category after filters are applied.
#[derive(Debug, Serialize)]
struct ListedCategory<'a> {
    name: &'a str,
    projects: Vec<ListedProject<'a>>,
}

#[derive(Debug, Serialize)]
struct ListedProject<'a> {
    title: &'a str,
    tags: &'a [String],
    link: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

impl<'a> From<&'a ProjectRecord> for ListedProject<'a> {
    fn from(project: &'a ProjectRecord) -> Self {
        Self {
            title: &project.title,
            tags: &project.tags,
            link: &project.link,
            image: project.image(),
        }
    }
}

/// Execute `list`.
///
/// # Errors
///
/// Returns `FolioError::Usage` if `--category` names no category in the
/// catalog.
pub fn run(args: &ListArgs) -> Result<(), FolioError> {
    let loaded = load(&args.catalog)?;
    let listed = select(&loaded.catalog, args.category.as_deref(), args.tag.as_deref())?;

    match args.format {
        OutputFormat::Human => {
            if listed.is_empty() {
                println!("No projects found");
            }
            for category in &listed {
                println!("{} ({})", category.name, category.projects.len());
                for project in &category.projects {
                    if project.tags.is_empty() {
                        println!("  {}", project.title);
                    } else {
                        println!("  {}  [{}]", project.title, project.tags.join(", "));
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
    }

    Ok(())
}

/// Apply the category and tag filters.
///
/// With a tag filter, categories left without projects are dropped.
fn select<'a>(
    catalog: &'a Catalog,
    category: Option<&str>,
    tag: Option<&str>,
) -> Result<Vec<ListedCategory<'a>>, FolioError> {
    let categories: Vec<&CategoryRecord> = match category {
        Some(name) => {
            let found = catalog.category(name).ok_or_else(|| {
                let hint = catalog
                    .closest_category(name)
                    .map(|s| format!(" (did you mean \"{s}\"?)"))
                    .unwrap_or_default();
                FolioError::Usage(format!("unknown category \"{name}\"{hint}"))
            })?;
            vec![found]
        }
        None => catalog.categories.iter().collect(),
    };

    Ok(categories
        .into_iter()
        .map(|c| ListedCategory {
            name: &c.name,
            projects: c
                .projects
                .iter()
                .filter(|p| tag.is_none_or(|t| p.has_tag(t)))
                .map(ListedProject::from)
                .collect(),
        })
        .filter(|c| tag.is_none() || !c.projects.is_empty())
        .collect())
}
