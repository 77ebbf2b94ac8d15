//! Errors raised while loading and introspecting an ontology.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an ontology file into an [`Ontology`](crate::Ontology).
///
/// Missing predicate values are never errors; they degrade to empty values
/// at the query site.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// The ontology file could not be read.
    #[error("cannot read ontology file {path}")]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The RDF parser rejected the document.
    #[error("cannot parse {format} document {origin}: {message}")]
    Parse {
        /// Path of the file, or `<string>` for in-memory input.
        origin: String,
        /// Serialization the parser expected.
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// The graph declares no `owl:Ontology` resource to document.
    #[error("no owl:Ontology resource found in {origin}")]
    NoOntology {
        /// Path of the file, or `<string>` for in-memory input.
        origin: String,
    },

    /// A namespace binding was malformed.
    #[error("invalid namespace binding `{binding}`: expected prefix=iri")]
    InvalidNamespace {
        /// The binding as given.
        binding: String,
    },
}
