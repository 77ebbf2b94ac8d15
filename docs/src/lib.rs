//! EthOn documentation generator.
//!
//! Reads the ontology, annotates every class and property, and renders two
//! documents through tera templates: the HTML specification and the
//! Markdown glossary.
//!
//! # Entry Points
//!
//! ```no_run
//! use ethon_docs::{generate, DocsConfig};
//!
//! let report = generate(&DocsConfig::default()).expect("Documentation generation failed");
//! println!("{} classes documented", report.class_count);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! EthOn.rdf ─► Ontology ─► annotator ─► AnnotatedOntology ─┬─► renderer ─► EthOn_spec.html
//!                 │                                        │      ▲
//!                 └──────► extractor ─► MetadataRecord ────┼──────┘
//!                                                          └─► glossary ─► renderer ─► EthOn_glossary.md
//! ```
//!
//! Both documents are rendered before either file is written, so a missing
//! or broken template leaves existing outputs untouched.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotator;
pub mod config;
pub mod extractor;
pub mod glossary;
pub mod linker;
pub mod renderer;
pub mod writer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use ethon_ontology::{Ontology, PropertyKind};
use tracing::info;

pub use annotator::{annotate, AnnotatedOntology, AnnotatedTerm, TermRef};
pub use config::DocsConfig;
pub use extractor::{extract_metadata, MetadataRecord};
pub use glossary::{build_glossary, glossary_for, Glossary};
pub use renderer::{RenderError, Renderer};

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// IRI of the documented ontology resource.
    pub ontology_uri: String,
    /// Number of classes documented.
    pub class_count: usize,
    /// Number of properties documented.
    pub property_count: usize,
    /// Number of annotation properties.
    pub annotation_property_count: usize,
    /// Number of datatype properties.
    pub datatype_property_count: usize,
    /// Number of object properties.
    pub object_property_count: usize,
    /// Number of glossary entries across all letters.
    pub glossary_entries: usize,
    /// Files written.
    pub files: Vec<PathBuf>,
}

/// The two rendered documents, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedDocuments {
    /// HTML specification.
    pub spec: String,
    /// Markdown glossary.
    pub glossary: String,
}

/// Loads the ontology and renders both documents in memory.
///
/// # Errors
///
/// Returns an error if the ontology cannot be loaded or a template is
/// missing or fails to render.
pub fn render(config: &DocsConfig) -> Result<(RenderedDocuments, GenerationReport)> {
    let namespaces = config.namespace_map()?;
    let format = config.resolved_format();
    let ontology = Ontology::load(&config.ontology, format, namespaces)
        .with_context(|| format!("Failed to load ontology {}", config.ontology.display()))?;

    let annotated = annotate(&ontology, &config.suggested_string_predicate);
    let meta = extract_metadata(&ontology);
    let glossary = glossary_for(&annotated);

    let renderer = Renderer::from_dir(&config.template_dir)
        .with_context(|| format!("Failed to load templates from {}", config.template_dir.display()))?;
    let spec = renderer
        .render_spec(&config.spec_template, &meta, &annotated)
        .context("Failed to render the specification")?;
    let glossary_md = renderer
        .render_glossary(&config.glossary_template, &glossary)
        .context("Failed to render the glossary")?;

    let count = |kind| annotated.properties_of_kind(kind).len();
    let report = GenerationReport {
        ontology_uri: ontology.uri.clone(),
        class_count: annotated.classes.len(),
        property_count: annotated.properties.len(),
        annotation_property_count: count(PropertyKind::Annotation),
        datatype_property_count: count(PropertyKind::Datatype),
        object_property_count: count(PropertyKind::Object),
        glossary_entries: glossary.entry_count(),
        files: Vec::new(),
    };

    Ok((
        RenderedDocuments {
            spec,
            glossary: glossary_md,
        },
        report,
    ))
}

/// Generates the specification and glossary described by `config`.
///
/// # Errors
///
/// Returns an error if the ontology cannot be loaded, a template cannot be
/// rendered, or an output file cannot be written. Nothing is written unless
/// both documents rendered.
pub fn generate(config: &DocsConfig) -> Result<GenerationReport> {
    let (documents, mut report) = render(config)?;

    writer::write_html(&config.spec_out, &documents.spec)?;
    report.files.push(config.spec_out.clone());
    writer::write_text(&config.glossary_out, &documents.glossary)?;
    report.files.push(config.glossary_out.clone());

    info!(
        ontology = %report.ontology_uri,
        classes = report.class_count,
        properties = report.property_count,
        glossary_entries = report.glossary_entries,
        "documentation generated"
    );
    Ok(report)
}
