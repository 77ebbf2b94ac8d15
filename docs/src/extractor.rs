//! Extracts the ontology-level metadata shown in the specification header.

use ethon_ontology::{vocab, Ontology, RdfGraph};
use serde::Serialize;

/// Header metadata read off the root `owl:Ontology` resource.
///
/// The serialized key set is fixed whatever the graph contains: joined
/// fields are strings (empty when the predicate is absent) and `imports`
/// and `seeAlso` are sequences (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    /// `rdfs:comment` values joined with newlines.
    pub comment: String,
    /// `dc:contributor` values.
    pub contributors: String,
    /// `dc:creator` values.
    pub creators: String,
    /// `vann:preferredNamespacePrefix` values.
    pub prefix: String,
    /// `dc:title` values.
    pub title: String,
    /// `vs:term_status` values.
    pub term_status: String,
    /// `owl:imports` values, unjoined.
    pub imports: Vec<String>,
    /// `owl:versionIRI` values.
    #[serde(rename = "versionIRI")]
    pub version_iri: String,
    /// `owl:versionInfo` values.
    #[serde(rename = "versionInfo")]
    pub version_info: String,
    /// IRI of the root resource itself.
    pub uri: String,
    /// `rdfs:seeAlso` values, unjoined.
    #[serde(rename = "seeAlso")]
    pub see_also: Vec<String>,
}

/// Separator for values that are single-valued by convention.
const LIST_SEPARATOR: &str = ", ";

/// Builds the metadata record for the ontology's root resource.
pub fn extract_metadata(ontology: &Ontology) -> MetadataRecord {
    metadata_for(&ontology.graph, &ontology.uri)
}

/// Builds the metadata record for `root` in `graph`.
pub fn metadata_for(graph: &RdfGraph, root: &str) -> MetadataRecord {
    let joined = |predicate: &str| graph.joined(root, predicate, LIST_SEPARATOR);

    MetadataRecord {
        comment: graph.joined(root, vocab::RDFS_COMMENT, "\n"),
        contributors: joined(vocab::DC_CONTRIBUTOR),
        creators: joined(vocab::DC_CREATOR),
        prefix: joined(vocab::VANN_PREFERRED_NAMESPACE_PREFIX),
        title: joined(vocab::DC_TITLE),
        term_status: joined(vocab::VS_TERM_STATUS),
        imports: graph.values(root, vocab::OWL_IMPORTS),
        version_iri: joined(vocab::OWL_VERSION_IRI),
        version_info: joined(vocab::OWL_VERSION_INFO),
        uri: root.to_string(),
        see_also: graph.values(root, vocab::RDFS_SEE_ALSO),
    }
}
