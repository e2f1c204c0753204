//! Built-in portfolio catalog
//!
//! The default catalog is embedded in the binary at compile time so
//! `folio build` works with zero configuration.

use std::sync::LazyLock;

use crate::catalog::schema::Catalog;

/// Label used in diagnostics for the embedded catalog.
pub const BUILTIN_LABEL: &str = "<built-in>";

/// Raw YAML of the embedded catalog.
pub const BUILTIN_YAML: &str = include_str!("../../catalog/portfolio.yaml");

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    serde_yaml::from_str(BUILTIN_YAML).expect("embedded catalog is valid YAML")
});

/// Returns the embedded catalog.
#[must_use]
pub fn builtin() -> &'static Catalog {
    &BUILTIN_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validation::validate_catalog;
    use crate::error::Severity;

    #[test]
    fn test_builtin_parses() {
        let catalog = builtin();
        assert_eq!(catalog.profile.name, "Andrea Ricciardelli");
        assert_eq!(catalog.profile.role, "Data Scientist");
        assert_eq!(catalog.profile.bio.len(), 2);
    }

    #[test]
    fn test_builtin_category_order() {
        let names: Vec<_> = builtin().categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Machine Learning & Deep Learning",
                "Generative AI",
                "NLP, Big Data, SQL",
            ]
        );
    }

    #[test]
    fn test_builtin_project_counts() {
        let counts: Vec<_> = builtin()
            .categories
            .iter()
            .map(|c| c.projects.len())
            .collect();
        assert_eq!(counts, vec![4, 3, 3]);
        assert_eq!(builtin().project_count(), 10);
    }

    #[test]
    fn test_builtin_first_project() {
        let first = &builtin().categories[0].projects[0];
        assert_eq!(first.title, "Toxic comments filter");
        assert_eq!(
            first.tags,
            vec!["TensorFlow", "biLSTM", "Multilabel classification"]
        );
        assert_eq!(
            first.link,
            "https://github.com/laufragor/filtro-commenti-tossici"
        );
        assert_eq!(first.image(), Some("/project_imgs/toxic_comments.png"));
    }

    #[test]
    fn test_builtin_has_no_errors() {
        let issues = validate_catalog(builtin());
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect();
        assert!(errors.is_empty(), "built-in catalog has errors: {errors:?}");
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }
}
