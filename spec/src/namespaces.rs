//! Prefix bindings used to print qualified names such as `ethon:Account`.

use std::collections::BTreeMap;

use crate::error::OntologyError;
use crate::vocab;

/// Prefixes every ontology is printed with unless overridden.
const BUILTIN: &[(&str, &str)] = &[
    ("rdf", vocab::RDF),
    ("rdfs", vocab::RDFS),
    ("owl", vocab::OWL),
    ("xsd", vocab::XSD),
    ("dc", vocab::DC),
    ("dcterms", vocab::DCTERMS),
    ("vann", vocab::VANN),
    ("vs", vocab::VS),
    ("ethon", vocab::ETHON),
];

/// A prefix → namespace IRI table.
///
/// Binding a prefix twice replaces the earlier IRI.
#[derive(Debug, Clone, Default)]
pub struct NamespaceMap {
    bindings: BTreeMap<String, String>,
}

impl NamespaceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding the built-in vocabulary prefixes.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut map = Self::new();
        for (prefix, iri) in BUILTIN {
            map.bind(*prefix, *iri);
        }
        map
    }

    /// Binds `prefix` to `iri`.
    pub fn bind(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.bindings.insert(prefix.into(), iri.into());
    }

    /// Parses and binds a `prefix=iri` pair.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::InvalidNamespace`] if either side is empty
    /// or the `=` separator is missing.
    pub fn bind_pair(&mut self, binding: &str) -> Result<(), OntologyError> {
        match binding.split_once('=') {
            Some((prefix, iri)) if !prefix.trim().is_empty() && !iri.trim().is_empty() => {
                self.bind(prefix.trim(), iri.trim());
                Ok(())
            }
            _ => Err(OntologyError::InvalidNamespace {
                binding: binding.to_string(),
            }),
        }
    }

    /// The IRI bound to `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// All bindings in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    /// Compacts `iri` to `prefix:local` using the longest matching namespace.
    ///
    /// Returns the IRI unchanged when no namespace matches.
    #[must_use]
    pub fn qname(&self, iri: &str) -> String {
        self.bindings
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{}:{}", prefix, &iri[ns.len()..]))
            .unwrap_or_else(|| iri.to_string())
    }
}

/// The display name of a term: the IRI part after the last `#`, or after
/// the last `/` when there is no `#`. May be empty.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rfind('#') {
        Some(i) => &iri[i + 1..],
        None => iri.rsplit('/').next().unwrap_or(iri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_prefers_hash() {
        assert_eq!(local_name("http://www.w3.org/2002/07/owl#Class"), "Class");
        assert_eq!(local_name("http://consensys.net/ethereum-ontology/Account"), "Account");
        assert_eq!(local_name("http://consensys.net/ethereum-ontology/"), "");
        assert_eq!(local_name("urn:x#"), "");
        assert_eq!(local_name("Account"), "Account");
    }

    #[test]
    fn qname_uses_longest_namespace() {
        let mut map = NamespaceMap::with_builtins();
        map.bind("ex", "http://example.org/");
        map.bind("exv", "http://example.org/vocab/");
        assert_eq!(map.qname("http://example.org/vocab/Thing"), "exv:Thing");
        assert_eq!(map.qname("http://example.org/Other"), "ex:Other");
        assert_eq!(map.qname(&format!("{}Account", vocab::ETHON)), "ethon:Account");
        assert_eq!(map.qname("urn:unbound"), "urn:unbound");
    }

    #[test]
    fn bind_pair_validates() {
        let mut map = NamespaceMap::new();
        assert!(map.bind_pair("ex=http://example.org/").is_ok());
        assert_eq!(map.get("ex"), Some("http://example.org/"));
        assert!(map.bind_pair("ex").is_err());
        assert!(map.bind_pair("=http://example.org/").is_err());
        assert!(map.bind_pair("ex=").is_err());
    }
}
