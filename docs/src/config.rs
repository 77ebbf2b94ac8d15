//! Generator configuration.
//!
//! [`DocsConfig::default`] reproduces the fixed layout the generator has
//! always used: `EthOn.rdf` in the working directory, templates under
//! `doc_resources/templates`, outputs next to the ontology.

use std::path::PathBuf;

use anyhow::Result;
use ethon_ontology::{vocab, NamespaceMap, RdfFormat};

/// Default ontology document.
pub const DEFAULT_ONTOLOGY: &str = "EthOn.rdf";
/// Default template directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "doc_resources/templates";
/// Default specification template name.
pub const DEFAULT_SPEC_TEMPLATE: &str = "EthOn_spec_template.html";
/// Default glossary template name.
pub const DEFAULT_GLOSSARY_TEMPLATE: &str = "EthOn_glossary_template.md";
/// Default specification output.
pub const DEFAULT_SPEC_OUT: &str = "EthOn_spec.html";
/// Default glossary output.
pub const DEFAULT_GLOSSARY_OUT: &str = "EthOn_glossary.md";

/// Inputs and outputs of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    /// Ontology document to read.
    pub ontology: PathBuf,
    /// Serialization of the ontology; guessed from the extension when `None`.
    pub format: Option<RdfFormat>,
    /// Directory holding the templates.
    pub template_dir: PathBuf,
    /// Name of the HTML specification template inside `template_dir`.
    pub spec_template: String,
    /// Name of the Markdown glossary template inside `template_dir`.
    pub glossary_template: String,
    /// Where to write the specification.
    pub spec_out: PathBuf,
    /// Where to write the glossary.
    pub glossary_out: PathBuf,
    /// Predicate read as each term's suggested string representation.
    pub suggested_string_predicate: String,
    /// Extra `prefix=iri` namespace bindings for qualified names.
    pub namespaces: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            ontology: PathBuf::from(DEFAULT_ONTOLOGY),
            format: None,
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            spec_template: DEFAULT_SPEC_TEMPLATE.to_string(),
            glossary_template: DEFAULT_GLOSSARY_TEMPLATE.to_string(),
            spec_out: PathBuf::from(DEFAULT_SPEC_OUT),
            glossary_out: PathBuf::from(DEFAULT_GLOSSARY_OUT),
            suggested_string_predicate: vocab::ETHON_SUGGESTED_STRING_REPRESENTATION.to_string(),
            namespaces: Vec::new(),
        }
    }
}

impl DocsConfig {
    /// The configured format, or the one implied by the ontology's extension.
    pub fn resolved_format(&self) -> RdfFormat {
        self.format
            .unwrap_or_else(|| RdfFormat::from_path(&self.ontology))
    }

    /// Built-in prefixes plus the configured bindings.
    ///
    /// # Errors
    ///
    /// Returns an error if a binding is not of the form `prefix=iri`.
    pub fn namespace_map(&self) -> Result<NamespaceMap> {
        let mut map = NamespaceMap::with_builtins();
        for binding in &self.namespaces {
            map.bind_pair(binding)?;
        }
        Ok(map)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let config = DocsConfig::default();
        assert_eq!(config.ontology, PathBuf::from("EthOn.rdf"));
        assert_eq!(config.resolved_format(), RdfFormat::RdfXml);
        assert_eq!(config.spec_out, PathBuf::from("EthOn_spec.html"));
        assert_eq!(config.glossary_out, PathBuf::from("EthOn_glossary.md"));
    }

    #[test]
    fn explicit_format_wins() {
        let config = DocsConfig {
            ontology: PathBuf::from("EthOn.rdf"),
            format: Some(RdfFormat::Turtle),
            ..DocsConfig::default()
        };
        assert_eq!(config.resolved_format(), RdfFormat::Turtle);
    }

    #[test]
    fn namespace_bindings() {
        let mut config = DocsConfig::default();
        config.namespaces.push("erc20=http://example.org/erc20#".to_string());
        let map = config.namespace_map().unwrap();
        assert_eq!(map.get("erc20"), Some("http://example.org/erc20#"));
        assert_eq!(map.get("ethon"), Some(vocab::ETHON));

        config.namespaces.push("broken".to_string());
        assert!(config.namespace_map().is_err());
    }
}
