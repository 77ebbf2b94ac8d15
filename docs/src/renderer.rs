//! Renders the specification and glossary through tera templates.
//!
//! Every `.html` and `.md` file under the template directory is loaded, so
//! templates may `{% import %}` shared macro files such as `macros.html`.
//! Other files (stylesheets, images) are left alone. Templates whose name
//! ends in `.html` are auto-escaped; the Markdown glossary is not.

use std::path::{Path, PathBuf};

use ethon_ontology::PropertyKind;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

use crate::annotator::AnnotatedOntology;
use crate::extractor::MetadataRecord;
use crate::glossary::Glossary;

/// Failure to load or render a template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template directory does not exist.
    #[error("template directory not found: {0}")]
    MissingDirectory(PathBuf),

    /// The directory does not contain the requested template.
    #[error("template `{name}` not found in {dir}")]
    MissingTemplate {
        /// Requested template name.
        name: String,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The template engine failed to parse or render.
    #[error("template engine error in `{name}`")]
    Engine {
        /// Template being loaded or rendered.
        name: String,
        /// Engine error, with its own chain of causes.
        #[source]
        source: tera::Error,
    },
}

/// Loaded templates.
pub struct Renderer {
    tera: Tera,
    dir: PathBuf,
}

impl Renderer {
    /// Loads every `.html` and `.md` template under `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist or a template fails to parse.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        if !dir.is_dir() {
            return Err(RenderError::MissingDirectory(dir.to_path_buf()));
        }
        let glob = format!("{}/**/*.{{html,md}}", dir.display());
        let tera = Tera::new(&glob).map_err(|source| RenderError::Engine {
            name: glob.clone(),
            source,
        })?;
        debug!(
            dir = %dir.display(),
            templates = tera.get_template_names().count(),
            "loaded templates"
        );
        Ok(Self {
            tera,
            dir: dir.to_path_buf(),
        })
    }

    /// Returns true if a template called `name` was loaded.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Renders the HTML specification.
    ///
    /// Bound variables: `meta`, `classes_tree`, `properties_tree`,
    /// `classes`, `properties`, `a_properties`, `d_properties`,
    /// `o_properties`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or fails to render.
    pub fn render_spec(
        &self,
        template: &str,
        meta: &MetadataRecord,
        annotated: &AnnotatedOntology,
    ) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("meta", meta);
        context.insert("classes_tree", &annotated.class_tree);
        context.insert("properties_tree", &annotated.property_tree);
        context.insert("classes", &annotated.classes);
        context.insert("properties", &annotated.properties);
        context.insert(
            "a_properties",
            &annotated.properties_of_kind(PropertyKind::Annotation),
        );
        context.insert(
            "d_properties",
            &annotated.properties_of_kind(PropertyKind::Datatype),
        );
        context.insert(
            "o_properties",
            &annotated.properties_of_kind(PropertyKind::Object),
        );
        self.render(template, &context)
    }

    /// Renders the Markdown glossary. Bound variable: `glossary`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or fails to render.
    pub fn render_glossary(&self, template: &str, glossary: &Glossary) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("glossary", glossary);
        self.render(template, &context)
    }

    fn render(&self, template: &str, context: &Context) -> Result<String, RenderError> {
        if !self.has_template(template) {
            return Err(RenderError::MissingTemplate {
                name: template.to_string(),
                dir: self.dir.clone(),
            });
        }
        self.tera
            .render(template, context)
            .map_err(|source| RenderError::Engine {
                name: template.to_string(),
                source,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;
    use crate::glossary::build_glossary;

    #[test]
    fn missing_directory() {
        let err = Renderer::from_dir(Path::new("no/such/templates")).err().unwrap();
        assert!(matches!(err, RenderError::MissingDirectory(_)));
    }

    #[test]
    fn missing_template() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.md"), "x").unwrap();
        let renderer = Renderer::from_dir(dir.path()).unwrap();
        let err = renderer
            .render_glossary("glossary.md", &build_glossary([("A", "a")]))
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingTemplate { ref name, .. } if name == "glossary.md"));
    }

    #[test]
    fn glossary_binding() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("glossary.md"),
            "{% for letter, entries in glossary %}{% if entries %}{{ letter }}:{% for name, comment in entries %} {{ name }}={{ comment }}{% endfor %};{% endif %}{% endfor %}",
        )
        .unwrap();
        let renderer = Renderer::from_dir(dir.path()).unwrap();
        let glossary = build_glossary([("apple", "<b>"), ("Apple", "x"), ("Banana", "y")]);
        let out = renderer.render_glossary("glossary.md", &glossary).unwrap();
        // Markdown output is not HTML-escaped.
        assert_eq!(out, "A: Apple=x apple=<b>;B: Banana=y;");
    }

    #[test]
    fn html_templates_are_escaped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("g.html"), "{{ glossary.A.apple }}").unwrap();
        let renderer = Renderer::from_dir(dir.path()).unwrap();
        let glossary = build_glossary([("apple", "<b>")]);
        let out = renderer.render_glossary("g.html", &glossary).unwrap();
        assert_eq!(out, "&lt;b&gt;");
    }

    #[test]
    fn non_template_assets_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("glossary.md"), "{{ glossary.N.Nonce }}").unwrap();
        fs::write(dir.path().join("style.css"), "/* {# not a template */ body {}").unwrap();
        fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();

        let renderer = Renderer::from_dir(dir.path()).unwrap();
        assert!(!renderer.has_template("style.css"));
        let glossary = build_glossary([("Nonce", "A counter.")]);
        assert_eq!(renderer.render_glossary("glossary.md", &glossary).unwrap(), "A counter.");
    }
}
