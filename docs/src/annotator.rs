//! Annotates every class and property with the values the templates print.
//!
//! Annotation never touches the [`Ontology`]: each term is read through a
//! fixed set of predicates and returned as a new [`AnnotatedTerm`]. The
//! renderer takes the resulting [`AnnotatedOntology`] as a parameter.

use std::collections::{BTreeMap, BTreeSet};

use ethon_ontology::{vocab, Ontology, PropertyKind, RdfGraph, Term, TermKind, TreeNode};
use serde::Serialize;
use tracing::{debug, info};

use crate::linker;

/// A reference to another resource, linked when it is a documented term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRef {
    /// Full IRI.
    pub uri: String,
    /// Qualified name of the term, or the compacted IRI for other resources.
    pub qname: String,
    /// In-page anchor when the resource is documented on the page.
    pub anchor: Option<String>,
}

/// A class or property with its documentation values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedTerm {
    /// Full IRI.
    pub uri: String,
    /// Display name (local part of the IRI).
    pub locale: String,
    /// Qualified name.
    pub qname: String,
    /// In-page anchor.
    pub anchor: String,
    /// `"class"` or `"property"`.
    pub kind: &'static str,
    /// Property kind; `None` for classes.
    pub property_kind: Option<PropertyKind>,
    /// `rdfs:comment` values joined with `", "`.
    pub comment: String,
    /// `rdfs:label` values joined with `", "`.
    pub label: String,
    /// Suggested string representation values joined with `", "`.
    pub suggested_string_representation: String,
    /// `vs:term_status` values joined with `", "`.
    pub term_status: String,
    /// `rdfs:seeAlso` values.
    pub see_also: Vec<String>,
    /// `rdfs:isDefinedBy` values.
    pub is_defined_by: Vec<String>,
    /// Direct super-terms.
    pub parents: Vec<TermRef>,
    /// Direct sub-terms.
    pub children: Vec<TermRef>,
    /// `rdfs:domain` values (properties).
    pub domain: Vec<TermRef>,
    /// `rdfs:range` values (properties).
    pub range: Vec<TermRef>,
}

/// All annotated terms, partitioned and arranged the way the templates use them.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedOntology {
    /// Classes in term order.
    pub classes: Vec<AnnotatedTerm>,
    /// Properties in term order.
    pub properties: Vec<AnnotatedTerm>,
    /// Class hierarchy.
    pub class_tree: Vec<TreeNode<TermRef>>,
    /// Property hierarchy.
    pub property_tree: Vec<TreeNode<TermRef>>,
}

impl AnnotatedOntology {
    /// Properties of one kind, in term order.
    pub fn properties_of_kind(&self, kind: PropertyKind) -> Vec<&AnnotatedTerm> {
        self.properties
            .iter()
            .filter(|p| p.property_kind == Some(kind))
            .collect()
    }
}

/// Reads term annotations out of one graph.
pub struct Annotator<'a> {
    graph: &'a RdfGraph,
    ontology: &'a Ontology,
    suggested_string_predicate: &'a str,
    anchors: BTreeMap<(&'static str, &'a str), String>,
}

impl<'a> Annotator<'a> {
    /// Creates an annotator reading `suggested_string_predicate` as the
    /// suggested string representation.
    ///
    /// Anchors are unique across the page: when two terms slug to the same
    /// anchor, the later one in term order gets a numeric suffix.
    pub fn new(ontology: &'a Ontology, suggested_string_predicate: &'a str) -> Self {
        let mut anchors = BTreeMap::new();
        let mut taken = BTreeSet::new();
        for term in ontology.classes.iter().chain(ontology.properties.iter()) {
            let key = (kind_name(term), term.uri.as_str());
            if anchors.contains_key(&key) {
                continue;
            }
            let base = anchor_for(term);
            let mut anchor = base.clone();
            let mut n = 2;
            while taken.contains(&anchor) {
                anchor = format!("{base}-{n}");
                n += 1;
            }
            if anchor != base {
                debug!(term = %term.qname, %anchor, "anchor already taken; suffixed");
            }
            taken.insert(anchor.clone());
            anchors.insert(key, anchor);
        }
        Self {
            graph: &ontology.graph,
            ontology,
            suggested_string_predicate,
            anchors,
        }
    }

    /// Annotates one term.
    pub fn annotate_term(&self, term: &Term) -> AnnotatedTerm {
        let graph = self.graph;
        let uri = term.uri.as_str();
        let joined = |predicate: &str| graph.joined(uri, predicate, ", ");
        let is_property = term.property_kind().is_some();

        AnnotatedTerm {
            uri: term.uri.clone(),
            locale: term.locale.clone(),
            qname: term.qname.clone(),
            anchor: self
                .anchors
                .get(&(kind_name(term), uri))
                .cloned()
                .unwrap_or_else(|| anchor_for(term)),
            kind: kind_name(term),
            property_kind: term.property_kind(),
            comment: joined(vocab::RDFS_COMMENT),
            label: joined(vocab::RDFS_LABEL),
            suggested_string_representation: joined(self.suggested_string_predicate),
            term_status: joined(vocab::VS_TERM_STATUS),
            see_also: graph.values(uri, vocab::RDFS_SEE_ALSO),
            is_defined_by: graph.values(uri, vocab::RDFS_IS_DEFINED_BY),
            parents: term.parents.iter().map(|p| self.term_ref(p)).collect(),
            children: term.children.iter().map(|c| self.term_ref(c)).collect(),
            domain: if is_property {
                self.refs(uri, vocab::RDFS_DOMAIN)
            } else {
                Vec::new()
            },
            range: if is_property {
                self.refs(uri, vocab::RDFS_RANGE)
            } else {
                Vec::new()
            },
        }
    }

    /// Annotates every class and property and rebuilds both hierarchies.
    pub fn annotate(&self) -> AnnotatedOntology {
        let classes: Vec<AnnotatedTerm> = self
            .ontology
            .classes
            .iter()
            .map(|t| self.annotate_term(t))
            .collect();
        let properties: Vec<AnnotatedTerm> = self
            .ontology
            .properties
            .iter()
            .map(|t| self.annotate_term(t))
            .collect();

        let mut to_ref = |t: &Term| self.term_ref(&t.uri);
        let class_tree = self
            .ontology
            .class_tree()
            .into_iter()
            .map(|n| n.map(&mut to_ref))
            .collect();
        let property_tree = self
            .ontology
            .property_tree()
            .into_iter()
            .map(|n| n.map(&mut to_ref))
            .collect();

        info!(
            classes = classes.len(),
            properties = properties.len(),
            "annotated terms"
        );
        for term in classes.iter().chain(properties.iter()) {
            if term.comment.is_empty() {
                debug!(term = %term.qname, "term has no rdfs:comment");
            }
        }

        AnnotatedOntology {
            classes,
            properties,
            class_tree,
            property_tree,
        }
    }

    fn term_ref(&self, uri: &str) -> TermRef {
        TermRef {
            uri: uri.to_string(),
            qname: self.ontology.namespaces.qname(uri),
            anchor: ["class", "property"]
                .iter()
                .find_map(|kind| self.anchors.get(&(*kind, uri)))
                .cloned(),
        }
    }

    fn refs(&self, subject: &str, predicate: &str) -> Vec<TermRef> {
        self.graph
            .objects(subject, predicate)
            .iter()
            .filter_map(|node| node.as_iri())
            .map(|iri| self.term_ref(iri))
            .collect()
    }
}

/// Annotates every class and property of `ontology`.
pub fn annotate(ontology: &Ontology, suggested_string_predicate: &str) -> AnnotatedOntology {
    Annotator::new(ontology, suggested_string_predicate).annotate()
}

fn kind_name(term: &Term) -> &'static str {
    match term.kind {
        TermKind::Class => "class",
        TermKind::Property(_) => "property",
    }
}

fn anchor_for(term: &Term) -> String {
    linker::anchor(kind_name(term), &term.qname)
}
