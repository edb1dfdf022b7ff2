//! LaTeX, manual-page, and Texinfo output groupings.

use serde::{Deserialize, Serialize};

/// LaTeX preamble and layout elements. Unset members fall back to the
/// generator's defaults and are omitted from emission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatexElements {
    /// Paper size ('letterpaper' or 'a4paper').
    #[serde(skip_serializing_if = "Option::is_none")]
    pub papersize: Option<String>,
    /// Font size ('10pt', '11pt' or '12pt').
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointsize: Option<String>,
    /// Additional preamble material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    /// Figure (float) alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure_align: Option<String>,
}

impl LatexElements {
    pub fn is_empty(&self) -> bool {
        self.papersize.is_none()
            && self.pointsize.is_none()
            && self.preamble.is_none()
            && self.figure_align.is_none()
    }
}

/// Grouping of the document tree into a LaTeX file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexDocument {
    /// Source start file.
    pub start_doc: String,
    /// Target file name.
    pub target: String,
    pub title: String,
    pub author: String,
    /// Document class: howto, manual, or a custom class.
    pub document_class: String,
}

impl LatexDocument {
    pub fn new(
        start_doc: impl Into<String>,
        target: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        document_class: impl Into<String>,
    ) -> Self {
        Self {
            start_doc: start_doc.into(),
            target: target.into(),
            title: title.into(),
            author: author.into(),
            document_class: document_class.into(),
        }
    }
}

/// One manual page entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManPage {
    /// Source start file.
    pub start_doc: String,
    /// Page name.
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    /// Manual section.
    pub section: u8,
}

impl ManPage {
    pub fn new(
        start_doc: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        authors: Vec<String>,
        section: u8,
    ) -> Self {
        Self {
            start_doc: start_doc.into(),
            name: name.into(),
            description: description.into(),
            authors,
            section,
        }
    }
}

/// Grouping of the document tree into a Texinfo file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TexinfoDocument {
    /// Source start file.
    pub start_doc: String,
    /// Target file name.
    pub target: String,
    pub title: String,
    pub author: String,
    /// Dir menu entry.
    pub dir_entry: String,
    pub description: String,
    pub category: String,
}

impl TexinfoDocument {
    pub fn new(
        start_doc: impl Into<String>,
        target: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        dir_entry: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            start_doc: start_doc.into(),
            target: target.into(),
            title: title.into(),
            author: author.into(),
            dir_entry: dir_entry.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}
