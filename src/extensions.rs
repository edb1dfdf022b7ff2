//! Generator extension roster and per-extension option groups.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension modules enabled for the build, in load order.
pub fn default_extensions() -> Vec<String> {
    [
        "sphinx.ext.todo",
        "sphinx.ext.mathjax",
        "sphinx.ext.intersphinx",
        "sphinx.ext.githubpages",
        "sphinxcontrib.bibtex",
        "sphinxcontrib.programoutput",
        "IPython.sphinxext.ipython_directive",
        "IPython.sphinxext.ipython_console_highlighting",
        "matplotlib.sphinxext.plot_directive",
        "sphinxcontrib.mermaid",
        "sphinx_rtd_theme",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Options for the todo extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoOptions {
    /// Render todo directives into the output instead of dropping them.
    pub include_todos: bool,
    /// Emit a build warning for every todo encountered.
    pub emit_warnings: bool,
}

impl Default for TodoOptions {
    fn default() -> Self {
        Self {
            include_todos: true,
            emit_warnings: true,
        }
    }
}

/// Options for the bibliography extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibtexOptions {
    /// Bibliography databases, relative to the documentation root.
    pub bib_files: Vec<PathBuf>,
    /// Citation reference style.
    pub reference_style: String,
}

impl Default for BibtexOptions {
    fn default() -> Self {
        Self {
            bib_files: vec![PathBuf::from("_static/biblio.bib")],
            reference_style: "author_year".to_string(),
        }
    }
}

/// External diagram tooling knobs (PlantUML and Mermaid).
///
/// The PlantUML values are carried even though the PlantUML extension is not
/// on the default roster; they configure it as soon as a build enables it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramOptions {
    /// PlantUML executable.
    pub plantuml: String,
    /// PlantUML output format for HTML builders.
    pub plantuml_output_format: String,
    /// PlantUML output format for the LaTeX builder.
    pub plantuml_latex_output_format: String,
    /// pdfcrop executable used on Mermaid PDF output.
    pub mermaid_pdfcrop: String,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            plantuml: "plantuml".to_string(),
            plantuml_output_format: "svg_img".to_string(),
            plantuml_latex_output_format: "pdf".to_string(),
            mermaid_pdfcrop: "pdfcrop".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_order_is_stable() {
        let extensions = default_extensions();
        assert_eq!(extensions.len(), 11);
        assert_eq!(extensions[0], "sphinx.ext.todo");
        assert_eq!(extensions.last().unwrap(), "sphinx_rtd_theme");
    }

    #[test]
    fn test_todos_are_rendered_and_warned_by_default() {
        let todo = TodoOptions::default();
        assert!(todo.include_todos);
        assert!(todo.emit_warnings);
    }
}
