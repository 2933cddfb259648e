//! Style definitions: the compiler's input.
//!
//! A [`StyleDefinition`] maps property names to [`StyleValue`] expressions.
//! Values are literals, fallback lists, or conditional maps keyed by
//! `default` plus selector/at-rule strings; conditional maps nest.
//!
//! ```rust
//! use bakecss::types::{StyleDefinition, StyleValue};
//!
//! let def = StyleDefinition::new()
//!     .with("color", StyleValue::conditional([
//!         ("default", StyleValue::from("red")),
//!         (":hover", StyleValue::from("blue")),
//!     ]))
//!     .with("position", StyleValue::fallbacks(["sticky", "fixed"]))
//!     .with("margin", 10);
//!
//! assert_eq!(def.len(), 3);
//! ```

use crate::error::CompilationError;
use crate::parser::format_number;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Unsets the property; no rule is generated.
    Null,
    String(String),
    Number(f64),
    /// Fallback chain, least preferred first.
    Fallbacks(Vec<StyleValue>),
    /// `default` plus condition keys, in authored order.
    Conditional(Vec<(String, StyleValue)>),
}

impl StyleValue {
    /// Builds a fallback chain from anything convertible to a value.
    pub fn fallbacks<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StyleValue>,
    {
        Self::Fallbacks(values.into_iter().map(Into::into).collect())
    }

    /// Builds a conditional map. A repeated key replaces the earlier value in place.
    pub fn conditional<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        let mut map = Vec::new();
        for (key, value) in entries {
            upsert(&mut map, key.into(), value.into());
        }
        Self::Conditional(map)
    }

    /// A short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Fallbacks(_) => "array",
            Self::Conditional(_) => "object",
        }
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::String(s) => out.push_str(&Value::String(s.clone()).to_string()),
            Self::Number(n) => out.push_str(&format_number(*n)),
            Self::Fallbacks(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_canonical(out);
                }
                out.push(']');
            }
            Self::Conditional(entries) => write_entries(entries, out),
        }
    }

    /// Converts a JSON value. Booleans and arrays nested in arrays are rejected.
    pub fn from_json_value(property: &str, value: &Value) -> Result<Self, CompilationError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| CompilationError::unsupported(property, "non-finite number")),
            Value::Bool(_) => Err(CompilationError::unsupported(property, "boolean")),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) | Value::Bool(_) => {
                        Err(CompilationError::unsupported(
                            property,
                            format!("{} inside a fallback list", json_type_name(item)),
                        ))
                    }
                    other => Self::from_json_value(property, other),
                })
                .collect::<Result<Vec<_>, CompilationError>>()
                .map(Self::Fallbacks),
            Value::Object(map) => map
                .iter()
                .map(|(key, v)| Ok((key.clone(), Self::from_json_value(property, v)?)))
                .collect::<Result<Vec<_>, CompilationError>>()
                .map(Self::Conditional),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn write_entries(entries: &[(String, StyleValue)], out: &mut String) {
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&Value::String(key.clone()).to_string());
        out.push(':');
        value.write_canonical(out);
    }
    out.push('}');
}

fn upsert(entries: &mut Vec<(String, StyleValue)>, key: String, value: StyleValue) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for StyleValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        Self::fallbacks(values)
    }
}

/// One namespace's style description: property → value expression.
///
/// Entries keep their authored order; inserting an existing key replaces its
/// value without moving it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDefinition {
    entries: Vec<(String, StyleValue)>,
}

impl StyleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        let mut def = Self::new();
        for (key, value) in entries {
            def.insert(key, value);
        }
        def
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        upsert(&mut self.entries, property.into(), value.into());
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deterministic text form of the whole definition, used for hashing.
    pub fn canonical_text(&self) -> String {
        let mut out = String::new();
        write_entries(&self.entries, &mut out);
        out
    }

    /// Content hash of [`canonical_text`](Self::canonical_text).
    pub fn canonical_hash(&self) -> u64 {
        seahash::hash(self.canonical_text().as_bytes())
    }

    /// Converts a JSON object. Each property's value is checked independently
    /// and the first unsupported one is reported.
    pub fn from_json_value(value: &Value) -> Result<Self, CompilationError> {
        let Value::Object(map) = value else {
            return Err(CompilationError::unsupported(
                "<definition>",
                json_type_name(value),
            ));
        };
        let mut def = Self::new();
        for (property, value) in map {
            def.insert(property.clone(), StyleValue::from_json_value(property, value)?);
        }
        Ok(def)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> Extend<(K, V)> for StyleDefinition {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for StyleDefinition {
    type Item = (String, StyleValue);
    type IntoIter = std::vec::IntoIter<(String, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de> Deserialize<'de> for StyleDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let def = StyleDefinition::new()
            .with("color", "red")
            .with("margin", 1)
            .with("color", "blue");
        let keys: Vec<_> = def.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "margin"]);
        assert_eq!(def.get("color"), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn canonical_text_is_order_sensitive_and_stable() {
        let a = StyleDefinition::new().with("color", "red").with("margin", 1.0);
        let b = StyleDefinition::new().with("color", "red").with("margin", 1);
        assert_eq!(a.canonical_text(), r#"{"color":"red","margin":1}"#);
        assert_eq!(a.canonical_hash(), b.canonical_hash());
    }

    #[test]
    fn json_booleans_are_unsupported() {
        let value: Value = serde_json::from_str(r#"{"display": true}"#).unwrap();
        let err = StyleDefinition::from_json_value(&value).unwrap_err();
        assert_eq!(
            err,
            CompilationError::UnsupportedValueType {
                property: "display".into(),
                found: "boolean".into()
            }
        );
    }

    #[test]
    fn json_objects_become_conditionals() {
        let def: StyleDefinition =
            serde_json::from_str(r#"{"color": {"default": "red", ":hover": null}}"#).unwrap();
        assert_eq!(
            def.get("color"),
            Some(&StyleValue::Conditional(vec![
                ("default".into(), StyleValue::from("red")),
                (":hover".into(), StyleValue::Null),
            ]))
        );
    }
}
