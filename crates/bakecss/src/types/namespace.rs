//! Compiled namespaces: the lookup table handed back to the caller.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Lookup key: the emitted property plus its condition texts (path order).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceKey {
    pub property: String,
    pub conditions: Vec<String>,
}

impl NamespaceKey {
    pub fn new(property: impl Into<String>, conditions: Vec<String>) -> Self {
        Self {
            property: property.into(),
            conditions,
        }
    }

    /// An unconditioned key.
    pub fn plain(property: impl Into<String>) -> Self {
        Self::new(property, Vec::new())
    }
}

/// What a key compiled to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassRef {
    /// A generated class name.
    Class(String),
    /// A custom-property reference such as `var(--x1abc)`.
    Variable(String),
    /// The key was authored as `null`.
    Unset,
}

impl ClassRef {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Class(s) | Self::Variable(s) => Some(s),
            Self::Unset => None,
        }
    }
}

/// Mapping from `(property, conditions)` to generated names.
///
/// Entries are kept sorted so two compilations of the same definition produce
/// identical namespaces regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledNamespace {
    name: String,
    entries: BTreeMap<NamespaceKey, ClassRef>,
}

impl CompiledNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, key: NamespaceKey, value: ClassRef) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &NamespaceKey) -> Option<&ClassRef> {
        self.entries.get(key)
    }

    /// Looks up an unconditioned property.
    pub fn class_for(&self, property: &str) -> Option<&str> {
        self.get(&NamespaceKey::plain(property))
            .and_then(ClassRef::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&NamespaceKey, &ClassRef)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every generated name for `property`, across all conditions, space-joined.
    ///
    /// Returns `None` when the property is absent or only ever unset.
    pub fn class_list(&self, property: &str) -> Option<String> {
        let names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(key, _)| key.property == property)
            .filter_map(|(_, value)| value.as_str())
            .collect();
        (!names.is_empty()).then(|| names.join(" "))
    }

    /// All distinct properties, sorted.
    pub fn properties(&self) -> Vec<&str> {
        let mut properties: Vec<&str> = self.entries.keys().map(|k| k.property.as_str()).collect();
        properties.dedup();
        properties
    }

    /// The object substituted for the authored literal: property → class list
    /// (or `null`), plus a `"$$css": true` marker when any class was generated.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        let has_classes = self
            .entries
            .values()
            .any(|value| matches!(value, ClassRef::Class(_)));
        if has_classes {
            map.insert("$$css".to_string(), Value::Bool(true));
        }
        for property in self.properties() {
            let value = self
                .class_list(property)
                .map_or(Value::Null, Value::String);
            map.insert(property.to_string(), value);
        }
        Value::Object(map)
    }
}
