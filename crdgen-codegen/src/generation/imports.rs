//! Import alias allocation.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Assigns a unique local alias to every imported path.
///
/// The first path to claim an alias keeps it; later paths wanting the same
/// alias get a numeric suffix (`v1`, `v11`, `v12`, ...). Assignment depends
/// only on registration order, so the same sequence of registrations always
/// yields the same aliases.
///
/// # Example
///
/// ```
/// use crdgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// assert_eq!(imports.add("k8s.io/api/core/v1", "v1"), "v1");
/// assert_eq!(imports.add("example.com/apis/v1", "v1"), "v11");
/// assert_eq!(imports.add("k8s.io/api/core/v1", "core"), "v1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Import path -> alias, in registration order.
    imports: IndexMap<String, String>,
    taken: BTreeSet<String>,
    reserved: BTreeSet<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collector that never hands out any of `words` as an alias.
    pub fn with_reserved<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            reserved: words.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Register `path`, preferring `alias`. Returns the alias in effect.
    pub fn add(&mut self, path: &str, alias: &str) -> String {
        if let Some(existing) = self.imports.get(path) {
            return existing.clone();
        }

        let mut unique = alias.to_string();
        let mut i = 0;
        while self.is_unavailable(&unique) {
            i += 1;
            unique = format!("{alias}{i}");
        }

        self.taken.insert(unique.clone());
        self.imports.insert(path.to_string(), unique.clone());
        unique
    }

    /// Alias of an already registered path.
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.imports.get(path).map(String::as_str)
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Iterate over `(path, alias)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    /// `(path, alias)` pairs ordered by path.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut imports: Vec<_> = self.iter().collect();
        imports.sort_by_key(|(path, _)| *path);
        imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    fn is_unavailable(&self, alias: &str) -> bool {
        self.taken.contains(alias) || self.reserved.contains(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_same_alias() {
        let mut imports = ImportCollector::new();
        let a = imports.add("k8s.io/apimachinery/pkg/runtime", "runtime");
        let b = imports.add("k8s.io/apimachinery/pkg/runtime", "other");
        assert_eq!(a, b);
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_collision_suffix() {
        let mut imports = ImportCollector::new();
        assert_eq!(imports.add("a/v1", "v1"), "v1");
        assert_eq!(imports.add("b/v1", "v1"), "v11");
        assert_eq!(imports.add("c/v1", "v1"), "v12");
    }

    #[test]
    fn test_reserved_words_skipped() {
        let mut imports = ImportCollector::with_reserved(["type", "string"]);
        assert_eq!(imports.add("example.com/type", "type"), "type1");
    }

    #[test]
    fn test_sorted_by_path() {
        let mut imports = ImportCollector::new();
        imports.add("k8s.io/b", "b");
        imports.add("encoding/json", "json");
        let paths: Vec<_> = imports.sorted().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, ["encoding/json", "k8s.io/b"]);
        let order: Vec<_> = imports.iter().map(|(p, _)| p).collect();
        assert_eq!(order, ["k8s.io/b", "encoding/json"]);
    }
}
