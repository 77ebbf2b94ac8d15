//! Writes the rendered specification and glossary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Writes the HTML specification, replacing any existing file and creating
/// parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_html(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write HTML: {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "wrote specification");
    Ok(())
}

/// Writes a text document (the Markdown glossary) to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "wrote glossary");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("EthOn_spec.html");
        write_html(&path, "<p>first</p>").unwrap();
        write_html(&path, "<p>second</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>second</p>");
    }
}
