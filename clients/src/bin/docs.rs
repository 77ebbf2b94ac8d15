//! `ethon-docs`: generates the EthOn specification and glossary.
//!
//! **Outputs:**
//! - `EthOn_spec.html`: HTML specification rendered from `EthOn_spec_template.html`
//! - `EthOn_glossary.md`: Markdown glossary rendered from `EthOn_glossary_template.md`
//!
//! **Usage:**
//! ```text
//! ethon-docs [--ontology <path>] [--format <rdfxml|turtle|ntriples>]
//!            [--templates <dir>] [--spec-template <name>] [--glossary-template <name>]
//!            [--spec-out <path>] [--glossary-out <path>]
//!            [--suggested-string-predicate <iri>] [--namespace <prefix=iri>]...
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ethon_docs::config::{
    DEFAULT_GLOSSARY_OUT, DEFAULT_GLOSSARY_TEMPLATE, DEFAULT_ONTOLOGY, DEFAULT_SPEC_OUT,
    DEFAULT_SPEC_TEMPLATE, DEFAULT_TEMPLATE_DIR,
};
use ethon_docs::{generate, DocsConfig};
use ethon_ontology::{vocab, RdfFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate the EthOn HTML specification and Markdown glossary.
#[derive(Parser)]
#[command(
    name = "ethon-docs",
    about = "Generate the EthOn HTML specification and Markdown glossary"
)]
struct Args {
    /// Ontology document to document.
    #[arg(long, default_value = DEFAULT_ONTOLOGY)]
    ontology: PathBuf,

    /// Ontology serialization (rdfxml, turtle, ntriples); guessed from the extension if omitted.
    #[arg(long)]
    format: Option<RdfFormat>,

    /// Directory containing the templates.
    #[arg(long, default_value = DEFAULT_TEMPLATE_DIR)]
    templates: PathBuf,

    /// HTML specification template name.
    #[arg(long, default_value = DEFAULT_SPEC_TEMPLATE)]
    spec_template: String,

    /// Markdown glossary template name.
    #[arg(long, default_value = DEFAULT_GLOSSARY_TEMPLATE)]
    glossary_template: String,

    /// Path of the generated HTML specification.
    #[arg(long, default_value = DEFAULT_SPEC_OUT)]
    spec_out: PathBuf,

    /// Path of the generated Markdown glossary.
    #[arg(long, default_value = DEFAULT_GLOSSARY_OUT)]
    glossary_out: PathBuf,

    /// Predicate read as each term's suggested string representation.
    #[arg(long, default_value = vocab::ETHON_SUGGESTED_STRING_REPRESENTATION)]
    suggested_string_predicate: String,

    /// Extra namespace binding for qualified names, as `prefix=iri`. Repeatable.
    #[arg(long = "namespace", value_name = "PREFIX=IRI")]
    namespaces: Vec<String>,
}

impl From<Args> for DocsConfig {
    fn from(args: Args) -> Self {
        Self {
            ontology: args.ontology,
            format: args.format,
            template_dir: args.templates,
            spec_template: args.spec_template,
            glossary_template: args.glossary_template,
            spec_out: args.spec_out,
            glossary_out: args.glossary_out,
            suggested_string_predicate: args.suggested_string_predicate,
            namespaces: args.namespaces,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DocsConfig::from(Args::parse());
    info!(
        ontology = %config.ontology.display(),
        format = %config.resolved_format(),
        templates = %config.template_dir.display(),
        "generating documentation"
    );
    let report = generate(&config)?;

    println!("Documentation generated successfully.");
    println!("  Ontology: {}", report.ontology_uri);
    println!(
        "  Terms: {} classes, {} properties ({} annotation, {} datatype, {} object)",
        report.class_count,
        report.property_count,
        report.annotation_property_count,
        report.datatype_property_count,
        report.object_property_count,
    );
    println!("  Glossary entries: {}", report.glossary_entries);
    for file in &report.files {
        println!("  Wrote: {}", file.display());
    }

    Ok(())
}
