//! Project identity and the metadata strings synthesized from it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::overrides::ProjectOverrides;

/// Author roster, in citation order.
const DEFAULT_AUTHORS: [&str; 9] = [
    "Nicolas Barrier",
    "Yunne-Jai Shin",
    "Philippe Verley",
    "Morgane Travers",
    "Laure Velez",
    "Ricardo Oliveros-Ramos",
    "Arnaud Grüss",
    "Alaia Morell",
    "Hanna Schenk",
];

/// Where the Maven build descriptor sits relative to the documentation root.
const DEFAULT_DESCRIPTOR: &str = "../pom.xml";

/// Identity of the documented project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Display name used in titles and output file names.
    pub name: String,
    /// Author roster, in citation order.
    pub authors: Vec<String>,
    /// Build descriptor the release version is read from; relative paths are
    /// resolved against the documentation root.
    pub descriptor: PathBuf,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: "OSMOSE".to_string(),
            authors: DEFAULT_AUTHORS.iter().map(|s| s.to_string()).collect(),
            descriptor: PathBuf::from(DEFAULT_DESCRIPTOR),
        }
    }
}

impl ProjectInfo {
    /// Replace identity fields from an override section.
    pub fn apply(&mut self, overrides: &ProjectOverrides) {
        if let Some(name) = &overrides.name {
            self.name = name.clone();
        }
        if let Some(authors) = &overrides.authors {
            self.authors = authors.clone();
        }
        if let Some(descriptor) = &overrides.descriptor {
            self.descriptor = descriptor.clone();
        }
    }

    /// Authors joined for the generator's `author` value.
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Copyright notice: the given date stamp followed by the author line.
    pub fn copyright_line(&self, date_stamp: &str) -> String {
        format!("{}, {}", date_stamp, self.author_line())
    }

    /// Authors joined with the `\and` separator for the LaTeX title page.
    pub fn latex_author(&self) -> String {
        self.authors.join("\\and ")
    }

    /// Descriptor path resolved against the documentation root.
    pub fn descriptor_path(&self, doc_root: &Path) -> PathBuf {
        if self.descriptor.is_absolute() {
            self.descriptor.clone()
        } else {
            doc_root.join(&self.descriptor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let project = ProjectInfo::default();
        assert_eq!(project.name, "OSMOSE");
        assert_eq!(project.authors.len(), 9);
        assert_eq!(project.descriptor, PathBuf::from("../pom.xml"));
    }

    #[test]
    fn test_author_line_joins_with_commas() {
        let project = ProjectInfo {
            authors: vec!["Ada".to_string(), "Grace".to_string()],
            ..ProjectInfo::default()
        };
        assert_eq!(project.author_line(), "Ada, Grace");
    }

    #[test]
    fn test_copyright_line_is_date_then_authors() {
        let project = ProjectInfo {
            authors: vec!["Ada".to_string()],
            ..ProjectInfo::default()
        };
        assert_eq!(project.copyright_line("2017-08-08"), "2017-08-08, Ada");
    }

    #[test]
    fn test_latex_author_uses_and_separator() {
        let project = ProjectInfo {
            authors: vec!["Ada".to_string(), "Grace".to_string(), "Edsger".to_string()],
            ..ProjectInfo::default()
        };
        assert_eq!(project.latex_author(), "Ada\\and Grace\\and Edsger");
    }

    #[test]
    fn test_descriptor_path_resolution() {
        let project = ProjectInfo::default();
        assert_eq!(
            project.descriptor_path(Path::new("/docs/osmose/doc")),
            PathBuf::from("/docs/osmose/doc/../pom.xml")
        );

        let absolute = ProjectInfo {
            descriptor: PathBuf::from("/ci/pom.xml"),
            ..ProjectInfo::default()
        };
        assert_eq!(
            absolute.descriptor_path(Path::new("doc")),
            PathBuf::from("/ci/pom.xml")
        );
    }

    #[test]
    fn test_apply_replaces_only_given_fields() {
        let mut project = ProjectInfo::default();
        project.apply(&crate::overrides::ProjectOverrides {
            name: Some("Ichthyop".to_string()),
            authors: None,
            descriptor: None,
        });
        assert_eq!(project.name, "Ichthyop");
        assert_eq!(project.authors.len(), 9);
    }
}
