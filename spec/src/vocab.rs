//! Fixed vocabulary IRIs read by the generator.
//!
//! Namespaces first, then the individual terms built from them. Only the
//! predicates and classes the introspection and extraction passes actually
//! query are listed here.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// Dublin Core elements 1.1.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// Dublin Core terms.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
/// VANN vocabulary for annotating vocabulary descriptions.
pub const VANN: &str = "http://purl.org/vocab/vann/";
/// W3C vocabulary status namespace.
pub const VS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#";
/// Ethereum ontology namespace.
pub const ETHON: &str = "http://consensys.net/ethereum-ontology/";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";

/// `rdfs:Class`.
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:seeAlso`.
pub const RDFS_SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
/// `rdfs:isDefinedBy`.
pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
/// `rdfs:subClassOf`.
pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:subPropertyOf`.
pub const RDFS_SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
/// `rdfs:domain`.
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

/// `owl:Ontology`.
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:AnnotationProperty`.
pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
/// `owl:FunctionalProperty`.
pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
/// `owl:InverseFunctionalProperty`.
pub const OWL_INVERSE_FUNCTIONAL_PROPERTY: &str =
    "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
/// `owl:TransitiveProperty`.
pub const OWL_TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
/// `owl:SymmetricProperty`.
pub const OWL_SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
/// `owl:imports`.
pub const OWL_IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
/// `owl:versionIRI`.
pub const OWL_VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
/// `owl:versionInfo`.
pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";

/// `dc:contributor`.
pub const DC_CONTRIBUTOR: &str = "http://purl.org/dc/elements/1.1/contributor";
/// `dc:creator`.
pub const DC_CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
/// `dc:title`.
pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";

/// `vann:preferredNamespacePrefix`.
pub const VANN_PREFERRED_NAMESPACE_PREFIX: &str =
    "http://purl.org/vocab/vann/preferredNamespacePrefix";
/// `vann:preferredNamespaceUri`.
pub const VANN_PREFERRED_NAMESPACE_URI: &str = "http://purl.org/vocab/vann/preferredNamespaceUri";

/// `vs:term_status`.
pub const VS_TERM_STATUS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#term_status";

/// `ethon:suggestedStringRepresentation`.
pub const ETHON_SUGGESTED_STRING_REPRESENTATION: &str =
    "http://consensys.net/ethereum-ontology/suggestedStringRepresentation";

/// Types that declare a resource as a class.
pub const CLASS_TYPES: &[&str] = &[OWL_CLASS, RDFS_CLASS];

/// Types that declare a resource as a property.
///
/// The OWL property characteristics are listed because a functional or
/// transitive property is frequently typed only by its characteristic.
pub const PROPERTY_TYPES: &[&str] = &[
    RDF_PROPERTY,
    OWL_OBJECT_PROPERTY,
    OWL_DATATYPE_PROPERTY,
    OWL_ANNOTATION_PROPERTY,
    OWL_FUNCTIONAL_PROPERTY,
    OWL_INVERSE_FUNCTIONAL_PROPERTY,
    OWL_TRANSITIVE_PROPERTY,
    OWL_SYMMETRIC_PROPERTY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_iris_live_in_their_namespace() {
        for iri in [RDFS_COMMENT, RDFS_LABEL, RDFS_SEE_ALSO, RDFS_IS_DEFINED_BY] {
            assert!(iri.starts_with(RDFS), "{iri} is not an RDFS term");
        }
        for iri in [OWL_IMPORTS, OWL_VERSION_IRI, OWL_VERSION_INFO, OWL_ONTOLOGY] {
            assert!(iri.starts_with(OWL), "{iri} is not an OWL term");
        }
        for iri in [DC_CONTRIBUTOR, DC_CREATOR, DC_TITLE] {
            assert!(iri.starts_with(DC), "{iri} is not a DC term");
        }
        assert!(VS_TERM_STATUS.starts_with(VS));
        assert!(VANN_PREFERRED_NAMESPACE_PREFIX.starts_with(VANN));
        assert!(ETHON_SUGGESTED_STRING_REPRESENTATION.starts_with(ETHON));
    }
}
