use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in a dictionary: display text (plain or inline HTML) or a nested table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Table(BTreeMap<String, Entry>),
}

/// Localized strings for one language, addressed by dotted paths such as
/// `contact.form.email.label`. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: BTreeMap<String, Entry>,
}

impl Dictionary {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_json_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }

    /// Entry at `path`. Any missing segment yields `None`.
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        if path.is_empty() {
            return None;
        }
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            match current {
                Entry::Table(table) => current = table.get(segment)?,
                Entry::Text(_) => return None,
            }
        }
        Some(current)
    }

    /// Display text at `path`. Tables are not displayable and resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        match self.lookup(path)? {
            Entry::Text(text) => Some(text.as_str()),
            Entry::Table(_) => None,
        }
    }

    /// All text paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        fn walk(prefix: &str, table: &BTreeMap<String, Entry>, out: &mut Vec<String>) {
            for (key, entry) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match entry {
                    Entry::Text(_) => out.push(path),
                    Entry::Table(nested) => walk(&path, nested, out),
                }
            }
        }

        let mut out = Vec::new();
        walk("", &self.root, &mut out);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_resolve() {
        let dict = Dictionary::from_json_str(r#"{"a":{"b":"X"}}"#).unwrap();
        assert_eq!(dict.resolve("a.b"), Some("X"));
        assert_eq!(dict.resolve("a.c"), None);
        assert_eq!(dict.resolve("a"), None, "tables are not display strings");
        assert_eq!(dict.resolve("a.b.c"), None, "cannot descend into text");
        assert_eq!(dict.resolve(""), None);
        assert_eq!(dict.resolve("z"), None);
    }

    #[test]
    fn markup_values_are_kept_verbatim() {
        let dict =
            Dictionary::from_json_str(r##"{"consent":{"label":"I accept the <a href=\"#\">policy</a>."}}"##)
                .unwrap();
        assert_eq!(
            dict.resolve("consent.label"),
            Some(r##"I accept the <a href="#">policy</a>."##)
        );
    }

    #[test]
    fn non_string_leaves_are_rejected() {
        assert!(Dictionary::from_json_str(r#"{"a":{"b":3}}"#).is_err());
        assert!(Dictionary::from_json_str(r#"["a"]"#).is_err());
    }

    #[test]
    fn paths_are_flattened_and_sorted() {
        let dict = Dictionary::from_json_str(r#"{"b":"1","a":{"y":"2","x":{"z":"3"}}}"#).unwrap();
        assert_eq!(dict.paths(), vec!["a.x.z", "a.y", "b"]);
        assert!(!dict.is_empty());
        assert!(Dictionary::default().is_empty());
    }
}
