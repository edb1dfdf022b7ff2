//! Optional `docconf.toml` overrides.
//!
//! A documentation root may carry a small TOML file that replaces parts of
//! the built-in configuration: the project identity for forks, and the few
//! source options that vary between checkouts. Everything else is fixed at
//! resolution time.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the override file, looked up at the documentation root.
pub const OVERRIDES_FILE: &str = "docconf.toml";

/// Contents of `docconf.toml`; absent sections leave the defaults alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    #[serde(default)]
    pub project: Option<ProjectOverrides>,
    #[serde(default)]
    pub source: Option<SourceOverrides>,
}

/// Replacements for the project identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectOverrides {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    /// Build descriptor location, relative to the documentation root unless
    /// absolute.
    #[serde(default)]
    pub descriptor: Option<PathBuf>,
}

/// Replacements for source discovery options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceOverrides {
    #[serde(default)]
    pub exclude_patterns: Option<Vec<String>>,
    #[serde(default)]
    pub language: Option<String>,
}

impl Overrides {
    /// Load overrides from the documentation root, or the empty set when no
    /// override file exists there.
    pub fn load(doc_root: &Path) -> Result<Self, ConfigError> {
        let path = doc_root.join(OVERRIDES_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        let overrides: Overrides =
            toml::from_str(&contents).map_err(|source| ConfigError::InvalidOverrides {
                path: path.clone(),
                source,
            })?;

        debug!("Loaded overrides from {}", path.display());
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let overrides = Overrides::load(dir.path()).unwrap();
        assert!(overrides.project.is_none());
        assert!(overrides.source.is_none());
    }

    #[test]
    fn test_partial_sections_parse() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(OVERRIDES_FILE),
            r#"
[project]
name = "Ichthyop"
descriptor = "build/pom.xml"
"#,
        )
        .unwrap();

        let overrides = Overrides::load(dir.path()).unwrap();
        let project = overrides.project.unwrap();
        assert_eq!(project.name.as_deref(), Some("Ichthyop"));
        assert_eq!(project.descriptor, Some(PathBuf::from("build/pom.xml")));
        assert!(project.authors.is_none());
        assert!(overrides.source.is_none());
    }

    #[test]
    fn test_invalid_toml_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(OVERRIDES_FILE), "[project\nname=").unwrap();

        match Overrides::load(dir.path()) {
            Err(ConfigError::InvalidOverrides { path, .. }) => {
                assert!(path.ends_with(OVERRIDES_FILE));
            }
            other => panic!("expected InvalidOverrides, got {:?}", other),
        }
    }
}
