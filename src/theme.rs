//! HTML output options.
//!
//! Models the theme and static-asset surface of the HTML builder: which
//! theme renders the pages, which directories get published under
//! `_static/`, and the order stylesheets are injected in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A stylesheet injected into every generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Path relative to the published static directory.
    pub path: String,
    /// Loading priority (lower = earlier in document).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    200
}

/// Priority tier for stylesheets registered by the setup hook, so they land
/// after the configured ones and can override them.
fn extra_priority() -> i32 {
    default_priority() + 100
}

/// Options for the HTML builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Theme rendering the HTML pages.
    pub theme: String,
    /// Directories published under `_static/`, relative to the
    /// documentation root.
    pub static_paths: Vec<PathBuf>,
    /// Stylesheets injected after the theme's own, in order.
    pub css_files: Vec<String>,
    /// Stylesheets registered by the setup hook, appended after `css_files`.
    pub extra_css: Vec<String>,
    /// Output base name for the HTML help builder.
    pub htmlhelp_basename: String,
    /// Number figures and allow referencing them by number.
    pub numfig: bool,
    /// Section depth figure numbers are scoped to.
    pub numfig_secnum_depth: u8,
}

impl HtmlOptions {
    /// Standard theme and asset layout for a named project, with the HTML
    /// help basename derived from the name.
    pub fn for_project(name: &str) -> Self {
        Self {
            theme: "sphinx_rtd_theme".to_string(),
            static_paths: vec![PathBuf::from("_static")],
            css_files: vec!["css/hacks.css".to_string()],
            extra_css: vec!["theme_overrides.css".to_string()],
            htmlhelp_basename: format!("{}doc", name),
            numfig: true,
            numfig_secnum_depth: 1,
        }
    }

    /// All stylesheets to inject, in final load order: configured files
    /// first, setup-hook extras last.
    pub fn stylesheets(&self) -> Vec<Stylesheet> {
        let mut sheets: Vec<Stylesheet> = self
            .css_files
            .iter()
            .map(|path| Stylesheet {
                path: path.clone(),
                priority: default_priority(),
            })
            .collect();
        sheets.extend(self.extra_css.iter().map(|path| Stylesheet {
            path: path.clone(),
            priority: extra_priority(),
        }));
        // Stable sort keeps declaration order within a tier.
        sheets.sort_by_key(|sheet| sheet.priority);
        sheets
    }

    /// Configured static paths that do not exist under the documentation
    /// root.
    pub fn missing_static_paths(&self, doc_root: &Path) -> Vec<PathBuf> {
        self.static_paths
            .iter()
            .filter(|path| !doc_root.join(path).is_dir())
            .cloned()
            .collect()
    }

    /// Number of files the static paths would publish.
    pub fn published_file_count(&self, doc_root: &Path) -> usize {
        self.static_paths
            .iter()
            .map(|path| {
                WalkDir::new(doc_root.join(path))
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .count()
            })
            .sum()
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::for_project("OSMOSE")
    }
}
