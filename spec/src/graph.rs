//! Owned, query-oriented view of a parsed RDF graph.
//!
//! The parser's graph is converted once into [`RdfGraph`], which indexes
//! objects by `(subject, predicate)`. Every lookup the generator performs is
//! "all objects of predicate P on subject S", so this is the only index.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// An RDF term in owned form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// An IRI reference.
    Iri(String),
    /// A blank node, by its document-local identifier.
    Blank(String),
    /// A literal value.
    Literal {
        /// Lexical form.
        lexical: String,
        /// Language tag, for language-tagged strings.
        language: Option<String>,
        /// Datatype IRI, when the parser reported one.
        datatype: Option<String>,
    },
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Creates a plain string literal.
    pub fn literal(lexical: impl Into<String>) -> Self {
        Node::Literal {
            lexical: lexical.into(),
            language: None,
            datatype: None,
        }
    }

    /// Returns the IRI if this node is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the text a template sees for this node: the IRI, the
    /// lexical form of a literal, or the blank node identifier.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Node::Iri(iri) => iri,
            Node::Blank(id) => id,
            Node::Literal { lexical, .. } => lexical,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A set of triples indexed by subject and predicate.
///
/// Objects of one `(subject, predicate)` pair keep the order in which they
/// were inserted, and duplicates are dropped, so the same input always
/// yields the same query results.
#[derive(Debug, Default, Clone)]
pub struct RdfGraph {
    index: BTreeMap<Node, BTreeMap<String, Vec<Node>>>,
    seen: BTreeSet<(Node, String, Node)>,
}

impl RdfGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(subject, predicate, object)` triples.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (Node, String, Node)>,
    {
        let mut graph = Self::new();
        for (s, p, o) in triples {
            graph.insert(s, p, o);
        }
        graph
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, subject: Node, predicate: String, object: Node) -> bool {
        let key = (subject, predicate, object);
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key.clone());
        let (subject, predicate, object) = key;
        self.index
            .entry(subject)
            .or_default()
            .entry(predicate)
            .or_default()
            .push(object);
        true
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// All objects of `predicate` on the IRI `subject`, in insertion order.
    ///
    /// An unknown subject or predicate yields an empty slice.
    #[must_use]
    pub fn objects(&self, subject: &str, predicate: &str) -> &[Node] {
        self.index
            .get(&Node::Iri(subject.to_string()))
            .and_then(|by_predicate| by_predicate.get(predicate))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The text of every object of `predicate` on `subject`.
    #[must_use]
    pub fn values(&self, subject: &str, predicate: &str) -> Vec<String> {
        self.objects(subject, predicate)
            .iter()
            .map(|node| node.text().to_string())
            .collect()
    }

    /// The text of every object of `predicate` on `subject`, joined by
    /// `separator`. Zero matches give the empty string.
    #[must_use]
    pub fn joined(&self, subject: &str, predicate: &str, separator: &str) -> String {
        self.values(subject, predicate).join(separator)
    }

    /// IRI subjects typed (`rdf:type`) with any of `types`, in IRI order.
    ///
    /// Blank-node subjects are skipped: anonymous class expressions and
    /// restrictions are not documented terms.
    #[must_use]
    pub fn subjects_of_type(&self, types: &[&str]) -> Vec<String> {
        self.index
            .iter()
            .filter_map(|(subject, by_predicate)| {
                let iri = subject.as_iri()?;
                let declared = by_predicate
                    .get(crate::vocab::RDF_TYPE)?
                    .iter()
                    .any(|t| t.as_iri().is_some_and(|t| types.contains(&t)));
                declared.then(|| iri.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    fn sample() -> RdfGraph {
        RdfGraph::from_triples([
            (
                Node::iri("http://ex.org/A"),
                vocab::RDF_TYPE.to_string(),
                Node::iri(vocab::OWL_CLASS),
            ),
            (
                Node::iri("http://ex.org/A"),
                vocab::RDFS_COMMENT.to_string(),
                Node::literal("first"),
            ),
            (
                Node::iri("http://ex.org/A"),
                vocab::RDFS_COMMENT.to_string(),
                Node::literal("second"),
            ),
            (
                Node::Blank("b0".to_string()),
                vocab::RDF_TYPE.to_string(),
                Node::iri(vocab::OWL_CLASS),
            ),
        ])
    }

    #[test]
    fn objects_keep_insertion_order() {
        let graph = sample();
        assert_eq!(
            graph.values("http://ex.org/A", vocab::RDFS_COMMENT),
            vec!["first", "second"]
        );
        assert_eq!(
            graph.joined("http://ex.org/A", vocab::RDFS_COMMENT, ", "),
            "first, second"
        );
    }

    #[test]
    fn missing_predicate_is_empty() {
        let graph = sample();
        assert!(graph.objects("http://ex.org/A", vocab::RDFS_LABEL).is_empty());
        assert_eq!(graph.joined("http://ex.org/Nope", vocab::RDFS_LABEL, ", "), "");
    }

    #[test]
    fn duplicate_triples_are_dropped() {
        let mut graph = sample();
        let before = graph.len();
        assert!(!graph.insert(
            Node::iri("http://ex.org/A"),
            vocab::RDFS_COMMENT.to_string(),
            Node::literal("first"),
        ));
        assert_eq!(graph.len(), before);
    }

    #[test]
    fn typed_subjects_skip_blank_nodes() {
        let graph = sample();
        assert_eq!(
            graph.subjects_of_type(vocab::CLASS_TYPES),
            vec!["http://ex.org/A".to_string()]
        );
    }
}
