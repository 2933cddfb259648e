//! Core data types flowing through the pipeline.
//!
//! - [`StyleDefinition`] / [`StyleValue`]: authored input
//! - [`Condition`] / [`ConditionPath`]: selectors and at-rules a value is nested under
//! - [`Declaration`]: one flattened `(property, value, conditions)` unit
//! - [`AtomicRule`]: compiled CSS for one declaration
//! - [`CompiledNamespace`]: the lookup table returned to the caller

pub mod condition;
pub mod declaration;
pub mod definition;
pub mod namespace;
pub mod rule;

pub use condition::{
    AtRuleKind, Condition, ConditionKinds, ConditionPath, condition_kinds, path_texts,
};
pub use declaration::Declaration;
pub use definition::{StyleDefinition, StyleValue};
pub use namespace::{ClassRef, CompiledNamespace, NamespaceKey};
pub use rule::AtomicRule;
