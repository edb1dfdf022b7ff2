//! Resolved documentation build configuration.
//!
//! Everything the generator needs is gathered here once, at startup, into an
//! immutable [`DocConfig`]: project identity, the release version read from
//! the build descriptor, source discovery options, and the per-output
//! groupings. Downstream code only reads the resolved value.

use crate::descriptor::BuildDescriptor;
use crate::error::ConfigError;
use crate::extensions::{default_extensions, BibtexOptions, DiagramOptions, TodoOptions};
use crate::outputs::{LatexDocument, LatexElements, ManPage, TexinfoDocument};
use crate::overrides::{Overrides, SourceOverrides};
use crate::project::ProjectInfo;
use crate::theme::HtmlOptions;
use chrono::Local;
use glob::Pattern;
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// How reStructuredText sources are discovered.
#[derive(Debug, Clone, Serialize)]
pub struct SourceOptions {
    /// Filename extension of source documents, including the dot.
    pub suffix: String,
    /// Document the toctree grows from, without suffix.
    pub master_doc: String,
    /// Template directories, relative to the documentation root.
    pub templates_path: Vec<String>,
    /// Pygments style for highlighted code blocks.
    pub pygments_style: String,
    /// Content language, when set explicitly.
    pub language: Option<String>,
    /// Glob patterns for files and directories skipped during discovery.
    /// These also apply to the static and extra paths.
    pub exclude_patterns: Vec<String>,
    /// File whose contents are prepended to every source document.
    pub prolog_file: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            suffix: ".rst".to_string(),
            master_doc: "index".to_string(),
            templates_path: vec!["_templates".to_string()],
            pygments_style: "sphinx".to_string(),
            language: None,
            exclude_patterns: [
                "_build",
                "Thumbs.db",
                ".DS_Store",
                "alias.rst",
                "index_private.rst",
                "index_public.rst",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            prolog_file: "alias.rst".to_string(),
        }
    }
}

impl SourceOptions {
    /// Replace discovery fields from an override section.
    pub fn apply(&mut self, overrides: &SourceOverrides) {
        if let Some(patterns) = &overrides.exclude_patterns {
            self.exclude_patterns = patterns.clone();
        }
        if let Some(language) = &overrides.language {
            self.language = Some(language.clone());
        }
    }
}

/// A non-fatal problem found while inspecting the documentation tree.
#[derive(Debug, Clone, Serialize)]
pub struct CheckFinding {
    /// Configuration value the finding is about.
    pub subject: String,
    pub detail: String,
}

impl CheckFinding {
    pub fn new(subject: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            detail: detail.into(),
        }
    }
}

/// The complete resolved configuration.
///
/// Built by [`DocConfig::resolve`] and never mutated afterwards. Every
/// generator value derives from these fields.
#[derive(Debug, Clone, Serialize)]
pub struct DocConfig {
    /// Documentation root all relative paths resolve against.
    pub doc_root: PathBuf,
    pub project: ProjectInfo,
    /// Release version read verbatim from the build descriptor.
    pub version: String,
    /// Copyright notice shown in page footers.
    pub copyright: String,
    pub source: SourceOptions,
    /// Generator extension modules, in load order.
    pub extensions: Vec<String>,
    pub todo: TodoOptions,
    pub bibtex: BibtexOptions,
    pub diagrams: DiagramOptions,
    pub html: HtmlOptions,
    pub latex_elements: LatexElements,
    pub latex_documents: Vec<LatexDocument>,
    pub man_pages: Vec<ManPage>,
    pub texinfo_documents: Vec<TexinfoDocument>,
    /// Prolog text prepended to every source document.
    pub prolog: String,
}

impl DocConfig {
    /// Resolve the configuration for the documentation tree at `doc_root`,
    /// stamping the copyright notice with today's date.
    pub fn resolve(doc_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let stamp = Local::now().format("%Y-%m-%d").to_string();
        Self::resolve_at(doc_root, &stamp)
    }

    /// Resolve with an explicit copyright date stamp.
    pub fn resolve_at(doc_root: impl Into<PathBuf>, date_stamp: &str) -> Result<Self, ConfigError> {
        let doc_root = doc_root.into();
        let overrides = Overrides::load(&doc_root)?;

        let mut project = ProjectInfo::default();
        if let Some(section) = &overrides.project {
            project.apply(section);
        }
        let mut source = SourceOptions::default();
        if let Some(section) = &overrides.source {
            source.apply(section);
        }

        let descriptor = BuildDescriptor::new(project.descriptor_path(&doc_root));
        let version = descriptor.extract_version()?;

        // Malformed exclusion globs fail resolution, not the later checks.
        compile_exclude_patterns(&source.exclude_patterns)?;

        let prolog_path = doc_root.join(&source.prolog_file);
        let prolog =
            fs::read_to_string(&prolog_path).map_err(|e| ConfigError::io(&prolog_path, e))?;

        let copyright = project.copyright_line(date_stamp);
        let title = format!("{} Documentation", project.name);
        let html = HtmlOptions::for_project(&project.name);

        let latex_documents = vec![LatexDocument::new(
            source.master_doc.clone(),
            format!("{}.tex", project.name),
            title.clone(),
            project.latex_author(),
            "manual",
        )];
        let man_pages = vec![ManPage::new(
            source.master_doc.clone(),
            project.name.to_lowercase(),
            title.clone(),
            vec![project.author_line()],
            1,
        )];
        let texinfo_documents = vec![TexinfoDocument::new(
            source.master_doc.clone(),
            project.name.clone(),
            title,
            project.author_line(),
            project.name.clone(),
            "One line description of project.",
            "Miscellaneous",
        )];

        info!(
            "Resolved {} {} from {}",
            project.name,
            version,
            descriptor.path().display()
        );

        Ok(Self {
            doc_root,
            project,
            version,
            copyright,
            source,
            extensions: default_extensions(),
            todo: TodoOptions::default(),
            bibtex: BibtexOptions::default(),
            diagrams: DiagramOptions::default(),
            html,
            latex_elements: LatexElements::default(),
            latex_documents,
            man_pages,
            texinfo_documents,
            prolog,
        })
    }

    /// Inspect the documentation tree for problems the generator would only
    /// surface as warnings mid-build. Nothing here fails resolution.
    pub fn check(&self) -> Vec<CheckFinding> {
        let mut findings = Vec::new();

        for path in &self.source.templates_path {
            if !self.doc_root.join(path).is_dir() {
                findings.push(CheckFinding::new(
                    "templates_path",
                    format!("directory {} does not exist", path),
                ));
            }
        }

        for path in self.html.missing_static_paths(&self.doc_root) {
            findings.push(CheckFinding::new(
                "html_static_path",
                format!("directory {} does not exist", path.display()),
            ));
        }

        for bib in &self.bibtex.bib_files {
            if !self.doc_root.join(bib).is_file() {
                findings.push(CheckFinding::new(
                    "bibtex_bibfiles",
                    format!("file {} does not exist", bib.display()),
                ));
            }
        }

        let master = format!("{}{}", self.source.master_doc, self.source.suffix);
        if !self.doc_root.join(&master).is_file() {
            findings.push(CheckFinding::new(
                "master_doc",
                format!("source file {} does not exist", master),
            ));
        }

        // The prolog file is injected into every document; left discoverable
        // it would also be rendered standalone and every alias defined twice.
        let patterns: Vec<Pattern> = self
            .source
            .exclude_patterns
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        if !patterns
            .iter()
            .any(|pattern| pattern.matches(&self.source.prolog_file))
        {
            findings.push(CheckFinding::new(
                "exclude_patterns",
                format!("{} is not excluded from discovery", self.source.prolog_file),
            ));
        }

        debug!(
            "{} files under the static paths",
            self.html.published_file_count(&self.doc_root)
        );

        findings
    }
}

/// Compile exclusion globs, rejecting the configuration when one is
/// malformed.
fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scaffold() -> TempDir {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("doc");
        fs::create_dir_all(doc.join("_static").join("css")).unwrap();
        fs::create_dir_all(doc.join("_templates")).unwrap();
        fs::write(doc.join("_static").join("css").join("hacks.css"), "body {}\n").unwrap();
        fs::write(
            doc.join("_static").join("biblio.bib"),
            "@book{shin2004, title={Osmose}}\n",
        )
        .unwrap();
        fs::write(doc.join("alias.rst"), ".. |os| replace:: OSMOSE\n").unwrap();
        fs::write(doc.join("index.rst"), "OSMOSE\n======\n").unwrap();
        fs::write(
            dir.path().join("pom.xml"),
            "<project>\n    <version>4.3.3</version>\n</project>\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_source_defaults() {
        let source = SourceOptions::default();
        assert_eq!(source.suffix, ".rst");
        assert_eq!(source.master_doc, "index");
        assert_eq!(source.templates_path, vec!["_templates".to_string()]);
        assert_eq!(source.pygments_style, "sphinx");
        assert!(source.language.is_none());
        assert_eq!(source.exclude_patterns.len(), 6);
        assert!(source.exclude_patterns.contains(&"_build".to_string()));
    }

    #[test]
    fn test_resolve_reads_version_and_stamps_copyright() {
        let dir = scaffold();
        let config = DocConfig::resolve_at(dir.path().join("doc"), "2024-05-01").unwrap();
        assert_eq!(config.version, "4.3.3");
        assert!(config.copyright.starts_with("2024-05-01, Nicolas Barrier"));
        assert_eq!(config.prolog, ".. |os| replace:: OSMOSE\n");
    }

    #[test]
    fn test_resolve_derives_output_groupings_from_identity() {
        let dir = scaffold();
        let config = DocConfig::resolve_at(dir.path().join("doc"), "2024-05-01").unwrap();
        assert_eq!(config.latex_documents[0].target, "OSMOSE.tex");
        assert_eq!(config.latex_documents[0].document_class, "manual");
        assert_eq!(config.man_pages[0].name, "osmose");
        assert_eq!(config.man_pages[0].section, 1);
        assert_eq!(config.texinfo_documents[0].category, "Miscellaneous");
        assert_eq!(config.html.htmlhelp_basename, "OSMOSEdoc");
    }

    #[test]
    fn test_resolve_fails_without_prolog_file() {
        let dir = scaffold();
        fs::remove_file(dir.path().join("doc").join("alias.rst")).unwrap();
        let err = DocConfig::resolve_at(dir.path().join("doc"), "2024-05-01").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_check_passes_on_complete_tree() {
        let dir = scaffold();
        let config = DocConfig::resolve_at(dir.path().join("doc"), "2024-05-01").unwrap();
        assert!(config.check().is_empty());
    }

    #[test]
    fn test_check_reports_missing_directories() {
        let dir = scaffold();
        let doc = dir.path().join("doc");
        fs::remove_dir_all(doc.join("_templates")).unwrap();
        let config = DocConfig::resolve_at(&doc, "2024-05-01").unwrap();
        let findings = config.check();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].subject, "templates_path");
    }

    #[test]
    fn test_check_flags_discoverable_prolog() {
        let dir = scaffold();
        let mut config = DocConfig::resolve_at(dir.path().join("doc"), "2024-05-01").unwrap();
        config.source.exclude_patterns.retain(|p| p != "alias.rst");
        let findings = config.check();
        assert!(findings
            .iter()
            .any(|finding| finding.subject == "exclude_patterns"));
    }

    #[test]
    fn test_malformed_exclude_pattern_is_rejected() {
        let err = compile_exclude_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidExcludePattern { .. }));
    }
}
