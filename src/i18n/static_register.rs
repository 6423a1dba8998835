//! Namespaced key-value store used to hold registered items by name.
//!
//! The store has no merge semantics of its own: the last write for a given
//! name wins. Iteration follows first-insertion order, so listing the values
//! is deterministic within a process run.

use std::collections::HashMap;
use tracing::trace;

/// A namespaced, insertion-ordered registry of named values.
///
/// The namespace only identifies the logical domain of the store (e.g.
/// `"languagesDictionaries"`) so several independent registries can coexist
/// without key collisions.
#[derive(Debug, Clone)]
pub struct NamedRegistry<V> {
    namespace: String,
    items: HashMap<String, V>,
    order: Vec<String>,
}

impl<V> NamedRegistry<V> {
    /// Create an empty registry for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The namespace this registry was created for.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// # Returns
    /// `true` if a previous value was replaced, `false` for a new name.
    pub fn register(&mut self, name: impl Into<String>, value: V) -> bool {
        let name = name.into();
        trace!(namespace = %self.namespace, name = %name, "Registering item");

        if self.items.contains_key(&name) {
            self.items.insert(name, value);
            return true;
        }

        self.order.push(name.clone());
        self.items.insert(name, value);
        false
    }

    /// Get the value registered under `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.items.get(name)
    }

    /// Check whether `name` was registered.
    pub fn has(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// All registered values, in the order their names were first registered.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|name| self.items.get(name))
    }

    /// All registered names, in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct registered names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
