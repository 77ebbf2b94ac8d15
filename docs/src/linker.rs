//! Builds HTML anchors for documented terms.

/// Returns the in-page anchor for a term: `class-ethon-Account`,
/// `property-ethon-hasCode`.
///
/// Characters outside `[A-Za-z0-9_-]` in the qualified name become `-`, so
/// unbound IRIs still yield a valid fragment.
pub fn anchor(kind: &str, qname: &str) -> String {
    let fragment: String = qname
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}-{}", kind, fragment.trim_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names_become_fragments() {
        assert_eq!(anchor("class", "ethon:Account"), "class-ethon-Account");
        assert_eq!(anchor("property", "ethon:has_code"), "property-ethon-has_code");
    }

    #[test]
    fn unbound_iris_are_sanitized() {
        assert_eq!(
            anchor("class", "http://example.org/A#B"),
            "class-http---example-org-A-B"
        );
    }
}
