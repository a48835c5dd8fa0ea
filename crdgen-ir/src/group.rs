//! Definitions grouped by API group.

use std::collections::BTreeMap;

use crate::quote::Quote;

/// A top-level object that the emitter turns into a constructor.
pub trait Resource: Quote + Clone + Send + Sync {
    /// Identifier of the definition inside its group. The constructor is
    /// named after it.
    fn definition_name(&self) -> &str;

    /// API group the definition belongs to.
    fn group(&self) -> &str;

    /// Insert or overwrite a single metadata annotation.
    fn annotate(&mut self, key: &str, value: &str);
}

/// Definitions of one API group, iterated in name order.
#[derive(Debug, Clone)]
pub struct Group<R> {
    name: String,
    definitions: BTreeMap<String, R>,
}

impl<R: Resource> Group<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definitions: BTreeMap::new(),
        }
    }

    /// Add a definition, returning the one it replaced.
    pub fn insert(&mut self, definition: R) -> Option<R> {
        self.definitions
            .insert(definition.definition_name().to_string(), definition)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definitions(&self) -> impl Iterator<Item = (&str, &R)> {
        self.definitions.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn definitions_mut(&mut self) -> impl Iterator<Item = &mut R> {
        self.definitions.values_mut()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// A Go package holding the types of one group version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Package {
    /// Go import path, e.g. `example.com/apis/apps.example.com/v1`.
    pub path: String,
    pub group: String,
    pub version: String,
}

impl Package {
    pub fn new(path: impl Into<String>, group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            group: group.into(),
            version: version.into(),
        }
    }
}
