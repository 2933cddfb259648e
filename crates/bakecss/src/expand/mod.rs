//! Property expansion and conditional flattening.
//!
//! A definition is a tree: properties map to literals, fallback lists, or
//! conditional maps whose values nest further. Expansion walks that tree once
//! and produces a flat list of [`Declaration`]s, each carrying the stack of
//! conditions it was found under (outermost first). Shorthands are split into
//! logical longhands on the way.
//!
//! ```rust
//! use bakecss::CompileOptions;
//! use bakecss::expand::expand_property;
//! use bakecss::types::StyleValue;
//!
//! let expansion = expand_property("color", &StyleValue::conditional([
//!     ("default", StyleValue::from("red")),
//!     (":hover", StyleValue::from("blue")),
//! ]), &CompileOptions::default());
//!
//! assert_eq!(expansion.declarations.len(), 2);
//! assert_eq!(expansion.declarations[1].to_string(), ":hover color:blue");
//! ```
//!
//! Flattening rules:
//!
//! - `default` contributes at the current path; every other key is pushed
//!   onto the path while its value is walked
//! - fallback lists become one declaration with several values
//! - `null` becomes a declaration with no values (the key is unset)
//! - a top-level `::pseudo` key whose value is a map is a group of
//!   properties styled under that pseudo-element; any other top-level key
//!   starting with `:` or `@` is rejected, since conditions only nest inside
//!   a property's value

pub mod shorthands;

use crate::error::CompilationError;
use crate::normalize::{dashify, normalize_value, transform_number};
use crate::options::CompileOptions;
use crate::parser::{has_top_level_slash, split_value};
use crate::priority::is_known_pseudo_class;
use crate::types::{Condition, ConditionPath, Declaration, StyleDefinition, StyleValue};
use shorthands::{Shorthand, shorthand_for};

/// The result of flattening one property or a whole definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub declarations: Vec<Declaration>,
    /// One entry per leaf that failed.
    pub errors: Vec<CompilationError>,
    /// Number of leaves walked, failed ones included.
    pub attempted: usize,
}

impl Expansion {
    fn merge(&mut self, other: Expansion) {
        self.declarations.extend(other.declarations);
        self.errors.extend(other.errors);
        self.attempted += other.attempted;
    }

    /// Records a top-level entry that failed without being walked.
    fn reject(&mut self, error: CompilationError) {
        log::warn!("dropping `{}`: {}", error.property(), error);
        self.attempted += 1;
        self.errors.push(error);
    }

    /// True when every attempted leaf failed.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.errors.len() == self.attempted
    }
}

/// Flattens every property of a definition, in authored order.
pub fn expand_definition(definition: &StyleDefinition, options: &CompileOptions) -> Expansion {
    let mut expansion = Expansion::default();
    for (key, value) in definition.entries() {
        match value {
            StyleValue::Conditional(group) if key.starts_with("::") => {
                let mut path = ConditionPath::new();
                path.push(Condition::parse(key));
                for (property, value) in group {
                    let mut walker = Walker::new(dashify(property), options);
                    walker.walk(value, &mut path);
                    expansion.merge(walker.finish());
                }
            }
            other if key.starts_with("::") => expansion.reject(CompilationError::unsupported(
                key,
                format!("{} for a pseudo-element group", other.type_name()),
            )),
            _ if key.starts_with(':') || key.starts_with('@') => expansion.reject(
                CompilationError::unsupported(key, "condition key in place of a property"),
            ),
            _ => expansion.merge(expand_property(key, value, options)),
        }
    }
    log::debug!(
        "expanded {} properties into {} declarations ({} failed)",
        definition.len(),
        expansion.declarations.len(),
        expansion.errors.len()
    );
    expansion
}

/// Flattens one property. `property` may be camelCase or dashed.
pub fn expand_property(property: &str, value: &StyleValue, options: &CompileOptions) -> Expansion {
    let mut walker = Walker::new(dashify(property), options);
    walker.walk(value, &mut ConditionPath::new());
    walker.finish()
}

struct Walker<'a> {
    property: String,
    shorthand: Option<&'static Shorthand>,
    options: &'a CompileOptions,
    expansion: Expansion,
}

impl<'a> Walker<'a> {
    fn new(property: String, options: &'a CompileOptions) -> Self {
        let shorthand = if property.starts_with("--") {
            None
        } else {
            shorthand_for(&property)
        };
        Self {
            property,
            shorthand,
            options,
            expansion: Expansion::default(),
        }
    }

    fn finish(self) -> Expansion {
        self.expansion
    }

    fn walk(&mut self, value: &StyleValue, path: &mut ConditionPath) {
        match value {
            StyleValue::Conditional(entries) => {
                for (key, nested) in entries {
                    if key == "default" {
                        self.walk(nested, path);
                        continue;
                    }
                    let condition = Condition::parse(key);
                    warn_if_unrecognized(&self.property, &condition);
                    path.push(condition);
                    self.walk(nested, path);
                    path.pop();
                }
            }
            leaf => {
                self.expansion.attempted += 1;
                match self.leaf(leaf, path) {
                    Ok(declarations) => {
                        for declaration in &declarations {
                            log::trace!("declaration {}", declaration);
                        }
                        self.expansion.declarations.extend(declarations);
                    }
                    Err(error) => {
                        log::warn!("dropping `{}`: {}", self.property, error);
                        self.expansion.errors.push(error);
                    }
                }
            }
        }
    }

    fn leaf(
        &self,
        value: &StyleValue,
        path: &ConditionPath,
    ) -> Result<Vec<Declaration>, CompilationError> {
        let with_path = |property: &str, values: Vec<String>| Declaration {
            property: property.to_string(),
            values,
            conditions: path.clone(),
        };

        match (value, self.shorthand) {
            (StyleValue::Null, Some(shorthand)) => Ok(shorthand
                .longhands()
                .iter()
                .map(|&longhand| Declaration::null(longhand, path.clone()))
                .collect()),
            (StyleValue::Null, None) => Ok(vec![Declaration::null(&self.property, path.clone())]),
            (StyleValue::Fallbacks(_), Some(_)) => {
                Err(CompilationError::ArrayNotAllowedForShorthand {
                    property: self.property.clone(),
                })
            }
            (StyleValue::Fallbacks(items), None) => {
                let values = items
                    .iter()
                    .map(|item| self.literal(&self.property, item))
                    .collect::<Result<Vec<_>, CompilationError>>()?;
                if values.is_empty() {
                    return Err(CompilationError::unsupported(
                        &self.property,
                        "empty fallback list",
                    ));
                }
                Ok(vec![with_path(&self.property, values)])
            }
            (StyleValue::String(raw), Some(shorthand)) => {
                if self.property == "border-radius" && has_top_level_slash(raw) {
                    let value = normalize_value(&self.property, raw, self.options)?;
                    return Ok(vec![with_path(&self.property, vec![value])]);
                }
                let parts = split_value(raw)
                    .map_err(|reason| CompilationError::malformed(&self.property, raw, reason))?;
                shorthand
                    .distribute(&self.property, &parts)?
                    .into_iter()
                    .map(|(longhand, part)| {
                        normalize_value(longhand, &part, self.options)
                            .map(|value| with_path(longhand, vec![value]))
                    })
                    .collect()
            }
            (StyleValue::Number(n), Some(shorthand)) => Ok(shorthand
                .longhands()
                .iter()
                .map(|&longhand| {
                    with_path(longhand, vec![transform_number(longhand, *n, self.options)])
                })
                .collect()),
            (literal, None) => Ok(vec![with_path(
                &self.property,
                vec![self.literal(&self.property, literal)?],
            )]),
            // Conditionals are walked, never passed here.
            (StyleValue::Conditional(_), Some(_)) => Err(CompilationError::unsupported(
                &self.property,
                "object",
            )),
        }
    }

    fn literal(&self, property: &str, value: &StyleValue) -> Result<String, CompilationError> {
        match value {
            StyleValue::String(raw) => normalize_value(property, raw, self.options),
            StyleValue::Number(n) => Ok(transform_number(property, *n, self.options)),
            other => Err(CompilationError::unsupported(
                property,
                format!("{} inside a fallback list", other.type_name()),
            )),
        }
    }
}

fn warn_if_unrecognized(property: &str, condition: &Condition) {
    let recognized = match condition {
        Condition::PseudoClass(_) => is_known_pseudo_class(condition),
        Condition::Other(_) => false,
        _ => true,
    };
    if !recognized {
        log::warn!(
            "unrecognized selector `{}` on `{}`; compiled with the generic low priority",
            condition,
            property
        );
    }
}
