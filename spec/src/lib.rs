//! OWL/RDF ontology loading and introspection.
//!
//! The `ethon-ontology` crate parses an ontology document (RDF/XML, Turtle
//! or N-Triples) and exposes what a documentation generator needs: the root
//! `owl:Ontology` resource, every class and property with its display and
//! qualified names, the property kinds, and the class and property
//! hierarchies.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use ethon_ontology::{NamespaceMap, Ontology, RdfFormat};
//!
//! let path = Path::new("EthOn.rdf");
//! let onto = Ontology::load(path, RdfFormat::from_path(path), NamespaceMap::with_builtins())
//!     .expect("ontology loads");
//! println!("{} classes", onto.classes.len());
//! ```
//!
//! # Queries
//!
//! Every value lookup is "all objects of predicate P on subject S":
//!
//! ```
//! use ethon_ontology::{vocab, Node, RdfGraph};
//!
//! let graph = RdfGraph::from_triples([(
//!     Node::iri("http://example.org/A"),
//!     vocab::RDFS_LABEL.to_string(),
//!     Node::literal("A"),
//! )]);
//! assert_eq!(graph.joined("http://example.org/A", vocab::RDFS_LABEL, ", "), "A");
//! assert_eq!(graph.joined("http://example.org/A", vocab::RDFS_COMMENT, ", "), "");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
pub mod namespaces;
pub mod vocab;

pub use error::OntologyError;
pub use graph::{Node, RdfGraph};
pub use loader::RdfFormat;
pub use model::{Ontology, PropertyKind, Term, TermKind, TreeNode};
pub use namespaces::{local_name, NamespaceMap};
