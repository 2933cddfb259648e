//! Flattened declarations produced by the property expander.

use super::condition::{Condition, ConditionPath, path_texts};
use std::fmt;

/// One flattened unit of a definition: a property, its canonical value(s)
/// and the conditions it applies under.
///
/// `values` holds more than one entry for a fallback chain (least preferred
/// first) and is empty when the authored value was `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// Dashed property name, e.g. `margin-top` or `--accent`.
    pub property: String,
    pub values: Vec<String>,
    pub conditions: ConditionPath,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            values: vec![value.into()],
            conditions: ConditionPath::new(),
        }
    }

    /// A declaration that unsets its property.
    pub fn null(property: impl Into<String>, conditions: ConditionPath) -> Self {
        Self {
            property: property.into(),
            values: Vec::new(),
            conditions,
        }
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions = conditions.into_iter().collect();
        self
    }

    pub fn is_null(&self) -> bool {
        self.values.is_empty()
    }

    /// Condition texts in path order.
    pub fn condition_texts(&self) -> Vec<String> {
        path_texts(&self.conditions)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for condition in &self.conditions {
            write!(f, "{} ", condition)?;
        }
        if self.is_null() {
            write!(f, "{}:null", self.property)
        } else {
            write!(f, "{}:{}", self.property, self.values.join(", "))
        }
    }
}
