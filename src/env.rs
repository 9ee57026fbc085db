// Settings store shared by layers (global) or owned by one layer (local)

use crate::diagnostic::Diagnostic;
use std::collections::BTreeMap;

/// String key/value settings with insert-once, fill-if-absent and
/// replace semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    params: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` only if it is absent. A second insert leaves the store
    /// unchanged and returns a diagnostic for the caller to report.
    #[must_use = "a rejected insert returns a diagnostic that should be recorded"]
    pub fn insert(&mut self, key: &str, value: &str) -> Option<Diagnostic> {
        if self.params.contains_key(key) {
            return Some(Diagnostic::DuplicateSetting { key: key.to_string() });
        }
        self.params.insert(key.to_string(), value.to_string());
        None
    }

    /// Set `key` only if it is absent, silently.
    pub fn fill(&mut self, key: &str, value: &str) {
        self.params
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    pub fn replace(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    /// Stored value, or `default` when the key is absent.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.params
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Stored value, or the empty string when the key is absent.
    pub fn get(&self, key: &str) -> String {
        self.get_or(key, "")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_first_writer_wins() {
        let mut env = Environment::new();
        assert_eq!(env.insert("color", "red"), None);
        let diag = env.insert("color", "blue");
        assert_eq!(diag, Some(Diagnostic::DuplicateSetting { key: "color".to_string() }));
        assert_eq!(env.get("color"), "red");
    }

    #[test]
    fn test_fill() {
        let mut env = Environment::new();
        env.fill("shape", "7");
        assert_eq!(env.get("shape"), "7");
        env.fill("shape", "8");
        assert_eq!(env.get("shape"), "7");
    }

    #[test]
    fn test_replace_overwrites() {
        let mut env = Environment::new();
        assert!(env.insert("file", "a.dat").is_none());
        env.replace("file", "b.dat");
        assert_eq!(env.get("file"), "b.dat");
    }

    #[test]
    fn test_get_defaults() {
        let env = Environment::new();
        assert_eq!(env.get("missing"), "");
        assert_eq!(env.get_or("missing", "1"), "1");
        assert!(!env.contains("missing"));
    }

    #[test]
    fn test_empty_value_counts_as_set() {
        let mut env = Environment::new();
        assert!(env.insert("file", "").is_none());
        assert!(env.contains("file"));
        assert_eq!(env.get_or("file", "x.dat"), "");
        assert!(env.insert("file", "x.dat").is_some());
    }

    #[test]
    fn test_iter_sorted() {
        let mut env = Environment::new();
        env.fill("y_data", "2");
        env.fill("color", "black");
        let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "y_data"]);
    }
}
