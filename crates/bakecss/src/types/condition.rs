//! Conditions a declaration can be nested under.
//!
//! A condition is one key of a conditional map other than `default`. Keys are
//! classified once, when the definition is flattened, so every later stage
//! (priority, rule text, class naming) can match on the category instead of
//! re-inspecting strings.

use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;

/// Kinds of at-rule the priority assigner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtRuleKind {
    Media,
    Supports,
    Container,
    StartingStyle,
    /// Any other `@` rule. Compiled with the lowest at-rule weight.
    Other,
}

/// A single selector or at-rule a declaration applies under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    /// `:hover`, `:nth-child(2n)`, … The text includes the leading colon.
    PseudoClass(String),
    /// `::before`, `::placeholder`, …
    PseudoElement(String),
    /// `@media …`, `@supports …`, … with whitespace collapsed.
    AtRule { kind: AtRuleKind, text: String },
    /// Anything else (attribute selectors, `&`-less fragments). Appended to
    /// the selector verbatim and given the generic low priority.
    Other(String),
}

impl Condition {
    /// Classifies a conditional-map key.
    ///
    /// ```rust
    /// use bakecss::types::{AtRuleKind, Condition};
    ///
    /// assert_eq!(Condition::parse(":hover"), Condition::PseudoClass(":hover".into()));
    /// assert!(matches!(
    ///     Condition::parse("@media  (min-width: 600px)"),
    ///     Condition::AtRule { kind: AtRuleKind::Media, .. }
    /// ));
    /// ```
    pub fn parse(key: &str) -> Self {
        crate::parser::parse_condition(key)
    }

    /// The condition as it appears in generated CSS.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PseudoClass(text)
            | Self::PseudoElement(text)
            | Self::AtRule { text, .. }
            | Self::Other(text) => text,
        }
    }

    /// The pseudo-class name without arguments, e.g. `:nth-child` for `:nth-child(2)`.
    pub fn pseudo_name(&self) -> Option<&str> {
        match self {
            Self::PseudoClass(text) | Self::PseudoElement(text) => {
                Some(text.split('(').next().unwrap_or(text))
            }
            _ => None,
        }
    }

    pub fn is_at_rule(&self) -> bool {
        matches!(self, Self::AtRule { .. })
    }

    pub fn is_pseudo_element(&self) -> bool {
        matches!(self, Self::PseudoElement(_))
    }

    /// The category flag for this condition.
    pub fn kind(&self) -> ConditionKinds {
        match self {
            Self::PseudoClass(_) => ConditionKinds::PSEUDO_CLASS,
            Self::PseudoElement(_) => ConditionKinds::PSEUDO_ELEMENT,
            Self::AtRule { .. } => ConditionKinds::AT_RULE,
            Self::Other(_) => ConditionKinds::OTHER,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// The set of condition categories present in a path.
    ///
    /// # Example
    ///
    /// ```
    /// use bakecss::types::{Condition, ConditionKinds, condition_kinds};
    ///
    /// let path = [Condition::parse("@media print"), Condition::parse(":hover")];
    /// let kinds = condition_kinds(&path);
    /// assert!(kinds.contains(ConditionKinds::AT_RULE | ConditionKinds::PSEUDO_CLASS));
    /// assert!(!kinds.contains(ConditionKinds::PSEUDO_ELEMENT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ConditionKinds: u8 {
        const PSEUDO_CLASS   = 0b0001;
        const PSEUDO_ELEMENT = 0b0010;
        const AT_RULE        = 0b0100;
        const OTHER          = 0b1000;
    }
}

/// The ordered stack of conditions a declaration applies under, outermost first.
pub type ConditionPath = SmallVec<[Condition; 2]>;

/// Collects the categories present in a path.
pub fn condition_kinds(path: &[Condition]) -> ConditionKinds {
    path.iter()
        .fold(ConditionKinds::empty(), |acc, c| acc | c.kind())
}

/// Renders a path as the list of its condition texts.
pub fn path_texts(path: &[Condition]) -> Vec<String> {
    path.iter().map(|c| c.as_str().to_string()).collect()
}
