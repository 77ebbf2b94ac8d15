//! Reads ontology documents with the sophia parsers.
//!
//! Parsing goes through `sophia_xml` (RDF/XML) or `sophia_turtle` (Turtle,
//! N-Triples) into a `sophia_inmem` graph, which is then copied into the
//! owned [`RdfGraph`] index.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use sophia_api::graph::Graph;
use sophia_api::iri::Iri;
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_inmem::graph::FastGraph;
use sophia_turtle::parser::turtle::TurtleParser;
use sophia_xml::parser::RdfXmlParser;
use tracing::debug;

use crate::error::OntologyError;
use crate::graph::{Node, RdfGraph};

/// Serialization of an ontology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// RDF/XML (`.rdf`, `.owl`, `.xml`).
    RdfXml,
    /// Turtle 1.1 (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
}

impl RdfFormat {
    /// Guesses the format from a file extension.
    ///
    /// Unknown or missing extensions fall back to RDF/XML, the format
    /// ontology editors export by default.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("ttl") => RdfFormat::Turtle,
            Some("nt") => RdfFormat::NTriples,
            _ => RdfFormat::RdfXml,
        }
    }

    /// Short name used in messages and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RdfFormat::RdfXml => "rdfxml",
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "ntriples",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RdfFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rdfxml" | "rdf" | "xml" | "owl" => Ok(RdfFormat::RdfXml),
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "nt" => Ok(RdfFormat::NTriples),
            other => Err(format!(
                "unknown RDF format `{other}` (expected rdfxml, turtle or ntriples)"
            )),
        }
    }
}

/// Reads and parses the ontology document at `path`.
///
/// Relative IRIs in the document (`rdf:about=""`, `<#Account>`) resolve
/// against the file's `file://` IRI unless the document sets its own base.
///
/// # Errors
///
/// Returns [`OntologyError::Io`] if the file cannot be read and
/// [`OntologyError::Parse`] if the parser rejects it.
pub fn load(path: &Path, format: RdfFormat) -> Result<RdfGraph, OntologyError> {
    let content = fs::read_to_string(path).map_err(|source| OntologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base = file_iri(path);
    parse_str_with_base(
        &content,
        format,
        &path.display().to_string(),
        base.as_deref(),
    )
}

/// Parses an in-memory document. `origin` names the input in errors.
///
/// # Errors
///
/// Returns [`OntologyError::Parse`] if the parser rejects the document.
pub fn parse_str(content: &str, format: RdfFormat, origin: &str) -> Result<RdfGraph, OntologyError> {
    parse_str_with_base(content, format, origin, None)
}

/// Parses an in-memory document, resolving relative IRIs against `base`.
///
/// N-Triples has no relative IRIs, so `base` only affects RDF/XML and Turtle.
///
/// # Errors
///
/// Returns [`OntologyError::Parse`] if `base` is not an absolute IRI or the
/// parser rejects the document.
pub fn parse_str_with_base(
    content: &str,
    format: RdfFormat,
    origin: &str,
    base: Option<&str>,
) -> Result<RdfGraph, OntologyError> {
    let parse_error = |message: String| OntologyError::Parse {
        origin: origin.to_string(),
        format: format.as_str(),
        message,
    };

    let base = base
        .map(|iri| Iri::new(iri.to_string()))
        .transpose()
        .map_err(|e| parse_error(format!("invalid base IRI: {e}")))?;

    let parsed: FastGraph = match format {
        RdfFormat::RdfXml => RdfXmlParser { base }
            .parse_str(content)
            .collect_triples()
            .map_err(|e| parse_error(e.to_string()))?,
        RdfFormat::Turtle => TurtleParser { base }
            .parse_str(content)
            .collect_triples()
            .map_err(|e| parse_error(e.to_string()))?,
        RdfFormat::NTriples => sophia_turtle::parser::nt::parse_str(content)
            .collect_triples()
            .map_err(|e| parse_error(e.to_string()))?,
    };

    let mut triples = Vec::new();
    for triple in parsed.triples() {
        let triple = triple.map_err(|e| parse_error(e.to_string()))?;
        let subject = node_from_term(triple.s());
        let predicate = iri_from_term(triple.p());
        let object = node_from_term(triple.o());
        // Generalized triples (variables, quoted triples) never describe terms.
        if let (Some(s), Some(p), Some(o)) = (subject, predicate, object) {
            triples.push((s, p, o));
        }
    }
    // The in-memory store iterates in hash order.
    triples.sort();
    let graph = RdfGraph::from_triples(triples);

    debug!(origin, format = format.as_str(), triples = graph.len(), "parsed RDF document");
    Ok(graph)
}

/// `file://` IRI of `path`, or `None` when it cannot be made absolute or
/// is not a valid IRI.
fn file_iri(path: &Path) -> Option<String> {
    let absolute = fs::canonicalize(path).ok()?;
    let mut iri = String::from("file://");
    for component in absolute.to_string_lossy().split(['/', '\\']) {
        if component.is_empty() {
            continue;
        }
        iri.push('/');
        iri.push_str(&component.replace('%', "%25").replace(' ', "%20"));
    }
    match Iri::new(iri.as_str()) {
        Ok(_) => Some(iri),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no file IRI; relative IRIs will not resolve");
            None
        }
    }
}

fn iri_from_term<T: Term>(term: T) -> Option<String> {
    term.iri().map(|iri| iri.as_str().to_string())
}

fn node_from_term<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => iri_from_term(term).map(Node::Iri),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_string())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?;
            Some(Node::Literal {
                lexical: String::from(&*lexical),
                language: term.language_tag().map(|tag| tag.as_str().to_string()),
                datatype: term.datatype().map(|dt| dt.as_str().to_string()),
            })
        }
        _ => None,
    }
}
