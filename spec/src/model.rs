//! Introspected ontology model.
//!
//! An [`Ontology`] is built once from an [`RdfGraph`] and is immutable
//! afterwards. Classes and properties are [`Term`]s sorted by qualified
//! name; hierarchies are exposed as forests of [`TreeNode`]s borrowed from
//! the term lists.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::info;

use crate::error::OntologyError;
use crate::graph::RdfGraph;
use crate::loader::{self, RdfFormat};
use crate::namespaces::{local_name, NamespaceMap};
use crate::vocab;

/// Whether a property is a datatype, object, annotation, or plain RDF property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to a literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
    /// `owl:AnnotationProperty`: used for documentation; not for reasoning.
    Annotation,
    /// `rdf:Property` or an OWL property characteristic without a more
    /// specific declaration.
    Plain,
}

impl PropertyKind {
    /// Returns the lowercase name used in templates.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Datatype => "datatype",
            PropertyKind::Object => "object",
            PropertyKind::Annotation => "annotation",
            PropertyKind::Plain => "plain",
        }
    }
}

/// Class or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// An `owl:Class` or `rdfs:Class`.
    Class,
    /// A property of the given kind.
    Property(PropertyKind),
}

/// A class or property declared in the ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Full IRI.
    pub uri: String,
    /// Display name: the local part of the IRI. May be empty.
    pub locale: String,
    /// `prefix:locale` when the namespace is bound, otherwise the IRI.
    pub qname: String,
    /// Class or property, with the property kind.
    pub kind: TermKind,
    /// IRIs of direct super-terms of the same sort
    /// (`rdfs:subClassOf` / `rdfs:subPropertyOf`).
    pub parents: Vec<String>,
    /// IRIs of direct sub-terms, in term order.
    pub children: Vec<String>,
}

impl Term {
    /// Returns the property kind, or `None` for classes.
    #[must_use]
    pub fn property_kind(&self) -> Option<PropertyKind> {
        match self.kind {
            TermKind::Class => None,
            TermKind::Property(kind) => Some(kind),
        }
    }
}

/// A node in a term hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeNode<T> {
    /// The term at this node.
    pub term: T,
    /// Direct sub-terms.
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Rebuilds the tree with every term passed through `f`.
    pub fn map<U, F>(self, f: &mut F) -> TreeNode<U>
    where
        F: FnMut(T) -> U,
    {
        TreeNode {
            term: f(self.term),
            children: self.children.into_iter().map(|c| c.map(f)).collect(),
        }
    }
}

/// A loaded ontology.
#[derive(Debug)]
pub struct Ontology {
    /// The parsed triples.
    pub graph: RdfGraph,
    /// IRI of the documented `owl:Ontology` resource.
    pub uri: String,
    /// Every `owl:Ontology` resource in the document, in IRI order.
    pub ontologies: Vec<String>,
    /// All classes, sorted by qualified name.
    pub classes: Vec<Term>,
    /// All properties, sorted by qualified name.
    pub properties: Vec<Term>,
    /// Prefixes used for qualified names.
    pub namespaces: NamespaceMap,
}

impl Ontology {
    /// Loads and introspects the ontology document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or declares no
    /// `owl:Ontology`.
    pub fn load(
        path: &Path,
        format: RdfFormat,
        namespaces: NamespaceMap,
    ) -> Result<Self, OntologyError> {
        let graph = loader::load(path, format)?;
        Self::from_graph(graph, namespaces, &path.display().to_string())
    }

    /// Introspects an already parsed graph. `origin` names the input in errors.
    ///
    /// The first `owl:Ontology` resource in IRI order is the documented root.
    /// When the root declares `vann:preferredNamespacePrefix`, that prefix is
    /// bound to its `vann:preferredNamespaceUri` (or to the root IRI itself
    /// if that ends in `/` or `#`).
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::NoOntology`] if no `owl:Ontology` exists.
    pub fn from_graph(
        graph: RdfGraph,
        mut namespaces: NamespaceMap,
        origin: &str,
    ) -> Result<Self, OntologyError> {
        let ontologies = graph.subjects_of_type(&[vocab::OWL_ONTOLOGY]);
        let uri = ontologies
            .first()
            .cloned()
            .ok_or_else(|| OntologyError::NoOntology {
                origin: origin.to_string(),
            })?;

        bind_preferred_namespace(&graph, &uri, &mut namespaces);

        let classes = collect_terms(
            &graph,
            &namespaces,
            &graph.subjects_of_type(vocab::CLASS_TYPES),
            vocab::RDFS_SUB_CLASS_OF,
            |_| TermKind::Class,
        );
        let properties = collect_terms(
            &graph,
            &namespaces,
            &graph.subjects_of_type(vocab::PROPERTY_TYPES),
            vocab::RDFS_SUB_PROPERTY_OF,
            |iri| TermKind::Property(property_kind(&graph, iri)),
        );

        info!(
            origin,
            root = %uri,
            triples = graph.len(),
            classes = classes.len(),
            properties = properties.len(),
            "loaded ontology"
        );

        Ok(Self {
            graph,
            uri,
            ontologies,
            classes,
            properties,
            namespaces,
        })
    }

    /// Properties of one kind, in term order.
    #[must_use]
    pub fn properties_of_kind(&self, kind: PropertyKind) -> Vec<&Term> {
        self.properties
            .iter()
            .filter(|p| p.property_kind() == Some(kind))
            .collect()
    }

    /// The `owl:AnnotationProperty` terms.
    #[must_use]
    pub fn annotation_properties(&self) -> Vec<&Term> {
        self.properties_of_kind(PropertyKind::Annotation)
    }

    /// The `owl:DatatypeProperty` terms.
    #[must_use]
    pub fn datatype_properties(&self) -> Vec<&Term> {
        self.properties_of_kind(PropertyKind::Datatype)
    }

    /// The `owl:ObjectProperty` terms.
    #[must_use]
    pub fn object_properties(&self) -> Vec<&Term> {
        self.properties_of_kind(PropertyKind::Object)
    }

    /// The class hierarchy, rooted at classes without a parent class.
    #[must_use]
    pub fn class_tree(&self) -> Vec<TreeNode<&Term>> {
        build_forest(&self.classes)
    }

    /// The property hierarchy, rooted at properties without a parent property.
    #[must_use]
    pub fn property_tree(&self) -> Vec<TreeNode<&Term>> {
        build_forest(&self.properties)
    }
}

fn bind_preferred_namespace(graph: &RdfGraph, root: &str, namespaces: &mut NamespaceMap) {
    let Some(prefix) = graph
        .values(root, vocab::VANN_PREFERRED_NAMESPACE_PREFIX)
        .into_iter()
        .next()
    else {
        return;
    };
    let declared = graph
        .values(root, vocab::VANN_PREFERRED_NAMESPACE_URI)
        .into_iter()
        .next();
    let iri = match declared {
        Some(iri) => iri,
        None if root.ends_with('/') || root.ends_with('#') => root.to_string(),
        None => return,
    };
    namespaces.bind(prefix, iri);
}

fn property_kind(graph: &RdfGraph, iri: &str) -> PropertyKind {
    let types = graph.objects(iri, vocab::RDF_TYPE);
    let declared = |t: &str| types.iter().any(|n| n.as_iri() == Some(t));
    if declared(vocab::OWL_OBJECT_PROPERTY) {
        PropertyKind::Object
    } else if declared(vocab::OWL_DATATYPE_PROPERTY) {
        PropertyKind::Datatype
    } else if declared(vocab::OWL_ANNOTATION_PROPERTY) {
        PropertyKind::Annotation
    } else {
        PropertyKind::Plain
    }
}

/// Builds sorted terms with parent and child links restricted to `iris`.
fn collect_terms<F>(
    graph: &RdfGraph,
    namespaces: &NamespaceMap,
    iris: &[String],
    parent_predicate: &str,
    kind_of: F,
) -> Vec<Term>
where
    F: Fn(&str) -> TermKind,
{
    let known: BTreeSet<&str> = iris.iter().map(String::as_str).collect();

    let mut terms: Vec<Term> = iris
        .iter()
        .map(|iri| {
            let mut parents: Vec<String> = Vec::new();
            for parent in graph.objects(iri, parent_predicate) {
                if let Some(p) = parent.as_iri() {
                    if p != iri && known.contains(p) && !parents.iter().any(|q| q == p) {
                        parents.push(p.to_string());
                    }
                }
            }
            Term {
                uri: iri.clone(),
                locale: local_name(iri).to_string(),
                qname: namespaces.qname(iri),
                kind: kind_of(iri),
                parents,
                children: Vec::new(),
            }
        })
        .collect();

    terms.sort_by(|a, b| a.qname.cmp(&b.qname).then_with(|| a.uri.cmp(&b.uri)));

    let mut children: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for term in &terms {
        for parent in &term.parents {
            children
                .entry(parent.clone())
                .or_default()
                .push(term.uri.clone());
        }
    }
    for term in &mut terms {
        if let Some(kids) = children.remove(&term.uri) {
            term.children = kids;
        }
    }
    terms
}

fn build_forest(terms: &[Term]) -> Vec<TreeNode<&Term>> {
    let by_uri: BTreeMap<&str, &Term> = terms.iter().map(|t| (t.uri.as_str(), t)).collect();
    let mut path = Vec::new();
    terms
        .iter()
        .filter(|t| t.parents.is_empty())
        .map(|t| grow(t, &by_uri, &mut path))
        .collect()
}

/// Expands `term` depth-first. A child already on the current path is a
/// cycle and is not expanded again.
fn grow<'a>(
    term: &'a Term,
    by_uri: &BTreeMap<&str, &'a Term>,
    path: &mut Vec<&'a str>,
) -> TreeNode<&'a Term> {
    path.push(term.uri.as_str());
    let mut children = Vec::new();
    for child in &term.children {
        let Some(child) = by_uri.get(child.as_str()).copied() else {
            continue;
        };
        if path.contains(&child.uri.as_str()) {
            continue;
        }
        children.push(grow(child, by_uri, path));
    }
    path.pop();
    TreeNode { term, children }
}
