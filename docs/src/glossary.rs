//! Groups term comments into A–Z glossary buckets.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::annotator::AnnotatedOntology;

/// Term display name → comment, grouped by uppercase first letter.
///
/// All 26 letters are present, in order, even when a bucket is empty.
/// Within a bucket entries are sorted by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Glossary {
    buckets: BTreeMap<String, BTreeMap<String, String>>,
}

impl Glossary {
    /// The bucket for `letter` (case-insensitive).
    pub fn bucket(&self, letter: char) -> Option<&BTreeMap<String, String>> {
        self.buckets.get(&letter.to_ascii_uppercase().to_string())
    }

    /// Iterates the buckets in letter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }
}

/// Builds the glossary from `(display name, comment)` pairs.
///
/// A later pair with the same display name replaces an earlier one. Names
/// that are empty or do not start with an ASCII letter land in no bucket.
pub fn build_glossary<I, K, V>(entries: I) -> Glossary
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut terms: BTreeMap<String, String> = BTreeMap::new();
    for (name, comment) in entries {
        terms.insert(name.into(), comment.into());
    }

    let mut buckets: BTreeMap<String, BTreeMap<String, String>> = ('A'..='Z')
        .map(|letter| (letter.to_string(), BTreeMap::new()))
        .collect();

    for (name, comment) in terms {
        match name.chars().next() {
            Some(first) if first.is_ascii_alphabetic() => {
                let letter = first.to_ascii_uppercase().to_string();
                if let Some(bucket) = buckets.get_mut(&letter) {
                    bucket.insert(name, comment);
                }
            }
            _ => warn!(term = %name, "display name has no leading letter; left out of glossary"),
        }
    }

    let glossary = Glossary { buckets };
    info!(entries = glossary.entry_count(), "built glossary");
    glossary
}

/// Builds the glossary over every class, then every property, keyed by
/// display name.
pub fn glossary_for(annotated: &AnnotatedOntology) -> Glossary {
    build_glossary(
        annotated
            .classes
            .iter()
            .chain(annotated.properties.iter())
            .map(|t| (t.locale.as_str(), t.comment.as_str())),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn all_letters_present() {
        let glossary = build_glossary(Vec::<(String, String)>::new());
        let letters: String = glossary.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(glossary.iter().all(|(_, b)| b.is_empty()));
    }

    #[test]
    fn case_variants_share_a_sorted_bucket() {
        let glossary = build_glossary([
            ("Apple", "A fruit"),
            ("apple", "lowercase"),
            ("Banana", "A fruit-like thing"),
        ]);
        let a: Vec<(&str, &str)> = glossary
            .bucket('A')
            .unwrap()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(a, vec![("Apple", "A fruit"), ("apple", "lowercase")]);
        let b = glossary.bucket('b').unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b["Banana"], "A fruit-like thing");
    }

    #[test]
    fn later_entries_win() {
        let glossary = build_glossary([("account", "class comment"), ("account", "property comment")]);
        assert_eq!(glossary.bucket('A').unwrap()["account"], "property comment");
        assert_eq!(glossary.entry_count(), 1);
    }

    #[test]
    fn non_letter_names_are_excluded() {
        let glossary = build_glossary([
            ("", "empty"),
            ("1stBlock", "digit"),
            ("_private", "underscore"),
            ("Ärger", "non-ascii"),
            ("Zeta", "kept"),
        ]);
        assert_eq!(glossary.entry_count(), 1);
        assert_eq!(glossary.bucket('Z').unwrap()["Zeta"], "kept");
    }

    #[test]
    fn bucket_keys_match_their_letter() {
        let glossary = build_glossary([
            ("gas", "g"),
            ("Gas", "G"),
            ("GasPrice", "GP"),
            ("block", "b"),
            ("Uncle", "u"),
        ]);
        for (letter, bucket) in glossary.iter() {
            let keys: Vec<&String> = bucket.keys().collect();
            for key in &keys {
                assert!(key.to_ascii_uppercase().starts_with(letter));
            }
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }
        let g: Vec<&str> = glossary.bucket('G').unwrap().keys().map(String::as_str).collect();
        assert_eq!(g, vec!["Gas", "GasPrice", "gas"]);
    }

    #[test]
    fn serializes_as_letter_map() {
        let glossary = build_glossary([("Nonce", "A counter.")]);
        let value = serde_json::to_value(&glossary).unwrap();
        assert_eq!(value["N"]["Nonce"], "A counter.");
        assert!(value["A"].as_object().unwrap().is_empty());
    }
}
