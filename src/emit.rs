//! Generator value emission.
//!
//! Flattens a resolved [`DocConfig`] into the named values the documentation
//! generator consumes and renders them as JSON or YAML. Emission order is
//! stable so rendered documents diff cleanly across runs.

use crate::config::DocConfig;
use indexmap::IndexMap;
use serde_json::{json, Value};

/// Named generator values in emission order.
pub type GeneratorValues = IndexMap<String, Value>;

/// Flatten the resolved configuration into named generator values.
///
/// Identity values lead, followed by extensions and their options, source
/// discovery, HTML output, and the non-HTML output groupings. `language` is
/// only present when set explicitly.
pub fn generator_values(config: &DocConfig) -> GeneratorValues {
    let mut values = GeneratorValues::new();

    values.insert("project".to_string(), json!(config.project.name));
    values.insert("author".to_string(), json!(config.project.author_line()));
    values.insert("copyright".to_string(), json!(config.copyright));
    values.insert("version".to_string(), json!(config.version));

    values.insert("extensions".to_string(), json!(config.extensions));
    values.insert(
        "todo_include_todos".to_string(),
        json!(config.todo.include_todos),
    );
    values.insert(
        "todo_emit_warnings".to_string(),
        json!(config.todo.emit_warnings),
    );
    values.insert("bibtex_bibfiles".to_string(), json!(config.bibtex.bib_files));
    values.insert(
        "bibtex_reference_style".to_string(),
        json!(config.bibtex.reference_style),
    );
    values.insert("plantuml".to_string(), json!(config.diagrams.plantuml));
    values.insert(
        "plantuml_output_format".to_string(),
        json!(config.diagrams.plantuml_output_format),
    );
    values.insert(
        "plantuml_latex_output_format".to_string(),
        json!(config.diagrams.plantuml_latex_output_format),
    );
    values.insert(
        "mermaid_pdfcrop".to_string(),
        json!(config.diagrams.mermaid_pdfcrop),
    );

    values.insert(
        "templates_path".to_string(),
        json!(config.source.templates_path),
    );
    values.insert("source_suffix".to_string(), json!(config.source.suffix));
    values.insert("master_doc".to_string(), json!(config.source.master_doc));
    if let Some(language) = &config.source.language {
        values.insert("language".to_string(), json!(language));
    }
    values.insert(
        "exclude_patterns".to_string(),
        json!(config.source.exclude_patterns),
    );
    values.insert(
        "pygments_style".to_string(),
        json!(config.source.pygments_style),
    );
    values.insert("rst_prolog".to_string(), json!(config.prolog));
    values.insert("numfig".to_string(), json!(config.html.numfig));
    values.insert(
        "numfig_secnum_depth".to_string(),
        json!(config.html.numfig_secnum_depth),
    );

    values.insert("html_theme".to_string(), json!(config.html.theme));
    values.insert(
        "html_static_path".to_string(),
        json!(config.html.static_paths),
    );
    let css: Vec<String> = config
        .html
        .stylesheets()
        .into_iter()
        .map(|sheet| sheet.path)
        .collect();
    values.insert("html_css_files".to_string(), json!(css));
    values.insert(
        "htmlhelp_basename".to_string(),
        json!(config.html.htmlhelp_basename),
    );

    values.insert("latex_elements".to_string(), latex_elements_value(config));
    let latex_documents: Vec<Value> = config
        .latex_documents
        .iter()
        .map(|doc| {
            json!([
                doc.start_doc,
                doc.target,
                doc.title,
                doc.author,
                doc.document_class
            ])
        })
        .collect();
    values.insert("latex_documents".to_string(), Value::Array(latex_documents));

    let man_pages: Vec<Value> = config
        .man_pages
        .iter()
        .map(|page| {
            json!([
                page.start_doc,
                page.name,
                page.description,
                page.authors,
                page.section
            ])
        })
        .collect();
    values.insert("man_pages".to_string(), Value::Array(man_pages));

    let texinfo_documents: Vec<Value> = config
        .texinfo_documents
        .iter()
        .map(|doc| {
            json!([
                doc.start_doc,
                doc.target,
                doc.title,
                doc.author,
                doc.dir_entry,
                doc.description,
                doc.category
            ])
        })
        .collect();
    values.insert(
        "texinfo_documents".to_string(),
        Value::Array(texinfo_documents),
    );

    values
}

// Unset elements are omitted so the generator's own defaults apply.
fn latex_elements_value(config: &DocConfig) -> Value {
    let elements = &config.latex_elements;
    let mut map = serde_json::Map::new();
    if let Some(papersize) = &elements.papersize {
        map.insert("papersize".to_string(), json!(papersize));
    }
    if let Some(pointsize) = &elements.pointsize {
        map.insert("pointsize".to_string(), json!(pointsize));
    }
    if let Some(preamble) = &elements.preamble {
        map.insert("preamble".to_string(), json!(preamble));
    }
    if let Some(figure_align) = &elements.figure_align {
        map.insert("figure_align".to_string(), json!(figure_align));
    }
    Value::Object(map)
}

/// Render the values as pretty-printed JSON.
pub fn to_json(values: &GeneratorValues) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(values)
}

/// Render the values as YAML.
pub fn to_yaml(values: &GeneratorValues) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(values)
}
