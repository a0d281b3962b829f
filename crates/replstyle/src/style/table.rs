//! Scope-keyed style tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::attrs::Attrs;

/// One theme's worth of scope → attribute rules.
///
/// Order-irrelevant: a scope identifies at most one rule, and inserting an
/// existing scope replaces it. Code styles key under the `pygments.*`
/// namespace, UI styles under widget scope names; the two kinds are kept
/// apart by convention only — nothing here type-checks scope names.
///
/// # Example
///
/// ```rust
/// use replstyle::{Attrs, StyleTable};
///
/// let table = StyleTable::new()
///     .add("prompt", Attrs::parse("bold"))
///     .add("sidebar.title", Attrs::parse("bg:#668866 #ffffff"));
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get("prompt").is_some_and(|a| a.bold));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    rules: BTreeMap<String, Attrs>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(scope, attribute string)` literal pairs.
    ///
    /// Each value goes through [`Attrs::parse`]; duplicate scopes keep the
    /// last pair.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(scope, spec)| (scope.to_string(), Attrs::parse(spec)))
            .collect()
    }

    /// Adds a rule, returning the table for chaining. Replaces any
    /// existing rule for the scope.
    pub fn add(mut self, scope: impl Into<String>, attrs: Attrs) -> Self {
        self.rules.insert(scope.into(), attrs);
        self
    }

    /// Inserts a rule in place. Replaces any existing rule for the scope.
    pub fn set(&mut self, scope: impl Into<String>, attrs: Attrs) {
        self.rules.insert(scope.into(), attrs);
    }

    /// Looks up the rule for an exact scope name.
    ///
    /// No hierarchical fallback happens here; that belongs to the
    /// renderer.
    pub fn get(&self, scope: &str) -> Option<&Attrs> {
        self.rules.get(scope)
    }

    /// Returns true if the exact scope has a rule.
    pub fn contains(&self, scope: &str) -> bool {
        self.rules.contains_key(scope)
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over `(scope, attrs)` pairs in scope order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attrs)> {
        self.rules.iter().map(|(scope, attrs)| (scope.as_str(), attrs))
    }

    /// Extends this table with every rule from `other`.
    ///
    /// Rules from `other` win on collision.
    pub fn extend_from(&mut self, other: &StyleTable) {
        for (scope, attrs) in &other.rules {
            self.rules.insert(scope.clone(), attrs.clone());
        }
    }
}

impl FromIterator<(String, Attrs)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (String, Attrs)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Attrs>> for StyleTable {
    fn from(rules: BTreeMap<String, Attrs>) -> Self {
        Self { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let table = StyleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let table = StyleTable::new().add("prompt", Attrs::parse("bold"));
        assert!(table.contains("prompt"));
        assert!(table.get("prompt").is_some_and(|a| a.bold));
        assert_eq!(table.get("sidebar"), None);
    }

    #[test]
    fn test_set_replaces() {
        let mut table = StyleTable::new().add("out", Attrs::parse("#ff0000"));
        table.set("out", Attrs::parse("#00ff00"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("out").unwrap().fg.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_from_pairs_last_wins() {
        let table = StyleTable::from_pairs(&[("a", "#111111"), ("a", "#222222")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a").unwrap().fg.as_deref(), Some("#222222"));
    }

    #[test]
    fn test_empty_value_is_present() {
        // An empty rule is distinct from no rule: it stops inheritance.
        let table = StyleTable::from_pairs(&[("prompt.dots", "")]);
        assert!(table.contains("prompt.dots"));
        assert!(table.get("prompt.dots").unwrap().is_empty());
        assert!(!table.contains("prompt"));
    }

    #[test]
    fn test_extend_from_other_wins() {
        let mut base = StyleTable::from_pairs(&[("keep", "#111111"), ("clash", "#111111")]);
        let layer = StyleTable::from_pairs(&[("clash", "#222222"), ("new", "bold")]);

        base.extend_from(&layer);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("keep").unwrap().fg.as_deref(), Some("#111111"));
        assert_eq!(base.get("clash").unwrap().fg.as_deref(), Some("#222222"));
        assert!(base.get("new").unwrap().bold);
    }

    #[test]
    fn test_iter_is_scope_ordered() {
        let table = StyleTable::from_pairs(&[("b", ""), ("a", ""), ("c", "")]);
        let scopes: Vec<&str> = table.iter().map(|(scope, _)| scope).collect();
        assert_eq!(scopes, ["a", "b", "c"]);
    }

    #[test]
    fn test_serde_transparent_map() {
        let table = StyleTable::from_pairs(&[("prompt", "bold")]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"prompt":"bold"}"#);

        let back: StyleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
