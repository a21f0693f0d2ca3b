//! Registry mapping qualified names to semantic tags.

use std::collections::{HashMap, HashSet};

use super::types::{AttributeKind, ElementKind};

/// Registry mapping `(namespace, local name)` pairs to tags.
///
/// Names without a namespace are registered and looked up with `None`.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    elements: HashMap<String, HashMap<String, ElementKind>>,
    attributes: HashMap<String, HashMap<String, AttributeKind>>,
}

/// Namespace key used for names that are not in any namespace.
const NO_NAMESPACE: &str = "";

fn key(namespace: Option<&str>) -> &str {
    namespace.unwrap_or(NO_NAMESPACE)
}

impl NameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element name.
    pub fn register_element(
        &mut self,
        namespace: Option<&str>,
        local_name: impl Into<String>,
        kind: ElementKind,
    ) {
        self.elements
            .entry(key(namespace).to_string())
            .or_default()
            .insert(local_name.into(), kind);
    }

    /// Register an attribute name.
    pub fn register_attribute(
        &mut self,
        namespace: Option<&str>,
        local_name: impl Into<String>,
        kind: AttributeKind,
    ) {
        self.attributes
            .entry(key(namespace).to_string())
            .or_default()
            .insert(local_name.into(), kind);
    }

    /// Classify an element; unregistered names are `ElementKind::Other`.
    #[must_use]
    pub fn element(&self, namespace: Option<&str>, local_name: &str) -> ElementKind {
        self.elements
            .get(key(namespace))
            .and_then(|names| names.get(local_name))
            .copied()
            .unwrap_or(ElementKind::Other)
    }

    /// Classify an attribute; unregistered names yield `None`.
    #[must_use]
    pub fn attribute(&self, namespace: Option<&str>, local_name: &str) -> Option<AttributeKind> {
        self.attributes
            .get(key(namespace))
            .and_then(|names| names.get(local_name))
            .copied()
    }

    /// Check if an element name is registered.
    #[must_use]
    pub fn has_element(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self.element(namespace, local_name) != ElementKind::Other
    }

    /// Return the set of namespaces any name is registered under.
    #[must_use]
    pub fn namespaces(&self) -> HashSet<&str> {
        self.elements
            .keys()
            .chain(self.attributes.keys())
            .map(String::as_str)
            .filter(|ns| !ns.is_empty())
            .collect()
    }
}
