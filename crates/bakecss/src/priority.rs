//! Priority and layer assignment.
//!
//! Every rule gets an integer priority computed from the shape of its
//! selector alone, never from where it was authored:
//!
//! ```text
//! priority = 10 + 10 × condition_score + property_rank
//! ```
//!
//! The condition score sums a weight per condition. Pseudo-classes follow a
//! fixed table ordered so that interaction states win in the usual
//! link → hover → focus → active order; pseudo-elements outrank every
//! pseudo-class; at-rules outrank everything and stack with nesting depth.
//! The property rank puts shorthands before the longhands they would
//! otherwise override.
//!
//! ## Example
//!
//! ```rust
//! use bakecss::priority::{Layer, Priority};
//! use bakecss::types::Condition;
//!
//! let plain = Priority::for_declaration("color", &[]);
//! let hover = Priority::for_declaration("color", &[Condition::parse(":hover")]);
//! let active = Priority::for_declaration("color", &[Condition::parse(":active")]);
//! assert!(plain < hover && hover < active);
//! assert_eq!(hover.layer(), Layer::PseudoClass);
//! ```

use crate::types::{AtRuleKind, Condition};
use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of a pseudo-class missing from [`PSEUDO_CLASS_WEIGHTS`], and of
/// any `Other` selector fragment.
pub const UNKNOWN_SELECTOR_WEIGHT: u32 = 40;
pub const PSEUDO_ELEMENT_WEIGHT: u32 = 5000;
/// Non-at-rule conditions never reach the at-rule range.
const MAX_SELECTOR_SCORE: u32 = 9999;

/// Fixed pseudo-class weights.
pub static PSEUDO_CLASS_WEIGHTS: phf::Map<&'static str, u32> = phf_map! {
    ":is" => 40,
    ":where" => 40,
    ":not" => 40,
    ":has" => 45,
    ":dir" => 50,
    ":lang" => 51,
    ":first-child" => 52,
    ":first-of-type" => 53,
    ":last-child" => 54,
    ":last-of-type" => 55,
    ":only-child" => 56,
    ":only-of-type" => 57,
    ":nth-child" => 60,
    ":nth-last-child" => 61,
    ":nth-of-type" => 62,
    ":nth-last-of-type" => 63,
    ":empty" => 70,
    ":link" => 80,
    ":any-link" => 81,
    ":local-link" => 82,
    ":target-within" => 83,
    ":target" => 84,
    ":visited" => 85,
    ":enabled" => 91,
    ":disabled" => 92,
    ":required" => 93,
    ":optional" => 94,
    ":read-only" => 95,
    ":read-write" => 96,
    ":placeholder-shown" => 97,
    ":in-range" => 98,
    ":out-of-range" => 99,
    ":default" => 100,
    ":checked" => 101,
    ":indeterminate" => 101,
    ":blank" => 102,
    ":valid" => 103,
    ":invalid" => 104,
    ":user-invalid" => 105,
    ":autofill" => 110,
    ":picture-in-picture" => 120,
    ":modal" => 121,
    ":fullscreen" => 122,
    ":paused" => 123,
    ":playing" => 124,
    ":current" => 125,
    ":past" => 126,
    ":future" => 127,
    ":hover" => 130,
    ":focus-within" => 140,
    ":focus" => 150,
    ":focus-visible" => 160,
    ":active" => 170,
};

/// Shorthands whose longhands include other shorthands.
static SHORTHANDS_OF_SHORTHANDS: phf::Set<&'static str> = phf_set! {
    "all",
    "border",
    "border-block",
    "border-color",
    "border-inline",
    "border-style",
    "border-width",
    "font",
    "grid",
    "inset",
    "margin",
    "mask",
    "padding",
    "scroll-margin",
    "scroll-padding",
};

/// Shorthands made only of longhands.
static SHORTHANDS_OF_LONGHANDS: phf::Set<&'static str> = phf_set! {
    "animation",
    "background",
    "border-block-end",
    "border-block-start",
    "border-bottom",
    "border-image",
    "border-inline-end",
    "border-inline-start",
    "border-left",
    "border-radius",
    "border-right",
    "border-top",
    "column-rule",
    "columns",
    "contain-intrinsic-size",
    "container",
    "flex",
    "flex-flow",
    "font-variant",
    "gap",
    "grid-area",
    "grid-column",
    "grid-row",
    "grid-template",
    "inset-block",
    "inset-inline",
    "list-style",
    "margin-block",
    "margin-inline",
    "mask-border",
    "offset",
    "outline",
    "overflow",
    "padding-block",
    "padding-inline",
    "place-content",
    "place-items",
    "place-self",
    "scroll-margin-block",
    "scroll-margin-inline",
    "scroll-padding-block",
    "scroll-padding-inline",
    "text-decoration",
    "text-emphasis",
    "transition",
};

/// A named cascade layer, in ascending cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Base,
    PseudoClass,
    PseudoElement,
    AtRule,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::Base,
        Layer::PseudoClass,
        Layer::PseudoElement,
        Layer::AtRule,
    ];

    /// The identifier used in `@layer` statements.
    pub fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::PseudoClass => "pseudo-class",
            Layer::PseudoElement => "pseudo-element",
            Layer::AtRule => "at-rule",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule's position in the output; lower sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(pub u32);

impl Priority {
    /// `:root` variable definitions.
    pub const VARIABLES: Priority = Priority(0);
    /// Theme classes; they must follow the variables they override.
    pub const THEME: Priority = Priority(1);
    /// Keyframes, `@position-try` and view-transition rules.
    pub const AUXILIARY: Priority = Priority(0);

    pub fn value(self) -> u32 {
        self.0
    }

    /// Computes the priority of `property` under `conditions`.
    pub fn for_declaration(property: &str, conditions: &[Condition]) -> Priority {
        Priority(10 + 10 * condition_score(conditions) + property_rank(property))
    }

    /// The layer bucket this priority falls into.
    pub fn layer(self) -> Layer {
        match self.0.saturating_sub(10) / 10 {
            s if s < UNKNOWN_SELECTOR_WEIGHT => Layer::Base,
            s if s < PSEUDO_ELEMENT_WEIGHT => Layer::PseudoClass,
            s if s <= MAX_SELECTOR_SCORE => Layer::PseudoElement,
            _ => Layer::AtRule,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weight contributed by one condition.
pub fn condition_weight(condition: &Condition) -> u32 {
    match condition {
        Condition::PseudoClass(_) => condition
            .pseudo_name()
            .and_then(|name| PSEUDO_CLASS_WEIGHTS.get(name))
            .copied()
            .unwrap_or(UNKNOWN_SELECTOR_WEIGHT),
        Condition::PseudoElement(_) => PSEUDO_ELEMENT_WEIGHT,
        Condition::AtRule { kind, .. } => match kind {
            AtRuleKind::Supports => 10_000,
            AtRuleKind::Media => 20_000,
            AtRuleKind::Container => 30_000,
            AtRuleKind::StartingStyle | AtRuleKind::Other => 10_000,
        },
        Condition::Other(_) => UNKNOWN_SELECTOR_WEIGHT,
    }
}

/// Sums condition weights. Selector weights are capped below the at-rule
/// range; at-rule weights accumulate with nesting.
pub fn condition_score(conditions: &[Condition]) -> u32 {
    let (at_rules, selectors): (Vec<&Condition>, Vec<&Condition>) =
        conditions.iter().partition(|c| c.is_at_rule());
    let selector_score = selectors
        .into_iter()
        .map(condition_weight)
        .sum::<u32>()
        .min(MAX_SELECTOR_SCORE);
    let at_rule_score: u32 = at_rules.into_iter().map(condition_weight).sum();
    selector_score + at_rule_score
}

/// 0 for custom properties and shorthands of shorthands, 1 for shorthands of
/// longhands, 2 for everything else.
pub fn property_rank(property: &str) -> u32 {
    if property.starts_with("--") || SHORTHANDS_OF_SHORTHANDS.contains(property) {
        0
    } else if SHORTHANDS_OF_LONGHANDS.contains(property) {
        1
    } else {
        2
    }
}

/// Whether the pseudo-class has a fixed weight.
pub fn is_known_pseudo_class(condition: &Condition) -> bool {
    matches!(condition, Condition::PseudoClass(_))
        && condition
            .pseudo_name()
            .is_some_and(|name| PSEUDO_CLASS_WEIGHTS.contains_key(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priority(property: &str, keys: &[&str]) -> Priority {
        let path: Vec<Condition> = keys.iter().map(|k| Condition::parse(k)).collect();
        Priority::for_declaration(property, &path)
    }

    #[test]
    fn interaction_states_are_ordered() {
        let order = [":link", ":visited", ":hover", ":focus-within", ":focus", ":focus-visible", ":active"];
        let priorities: Vec<_> = order.iter().map(|k| priority("color", &[*k])).collect();
        assert!(priorities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn plain_declaration_values() {
        assert_eq!(priority("color", &[]), Priority(12));
        assert_eq!(priority("border", &[]), Priority(10));
        assert_eq!(priority("animation", &[]), Priority(11));
        assert_eq!(priority("--accent", &[]), Priority(10));
        assert_eq!(priority("color", &[":hover"]), Priority(1312));
    }

    #[test]
    fn pseudo_elements_follow_pseudo_classes() {
        assert!(priority("color", &["::before"]) > priority("color", &[":active"]));
        assert_eq!(priority("color", &["::before"]).layer(), Layer::PseudoElement);
    }

    #[test]
    fn at_rules_stack_with_nesting() {
        let media = priority("color", &["@media (min-width: 600px)"]);
        let nested = priority("color", &[":hover", "@media (min-width: 600px)"]);
        let supports = priority("color", &["@supports (display: grid)"]);
        let container = priority("color", &["@container (min-width: 1px)"]);
        assert!(media < nested);
        assert!(supports < media && media < container);
        assert_eq!(nested.layer(), Layer::AtRule);
    }

    #[test]
    fn other_at_rules_share_the_supports_weight() {
        let before = priority("color", &["::before"]);
        let supports = priority("color", &["@supports (display: grid)"]);
        for key in ["@scope (.card)", "@starting-style"] {
            let p = priority("color", &[key]);
            assert_eq!(p, Priority(10 + 10 * 10_000 + 2));
            assert_eq!(p, supports);
            assert!(p > before);
            assert_eq!(p.layer(), Layer::AtRule);
        }
    }

    #[test]
    fn unknown_selectors_use_low_weight() {
        assert_eq!(
            priority("color", &[":unknown-state"]),
            priority("color", &["[data-open]"])
        );
        assert!(priority("color", &[":unknown-state"]) < priority("color", &[":hover"]));
        assert_eq!(priority("color", &[":unknown-state"]).layer(), Layer::PseudoClass);
    }

    #[test]
    fn selector_score_is_capped() {
        let deep = priority("color", &["::before", "::after", ":hover"]);
        assert_eq!(deep, Priority(10 + 10 * 9999 + 2));
        assert_eq!(deep.layer(), Layer::PseudoElement);
    }

    #[test]
    fn fixed_priorities_are_base() {
        assert_eq!(Priority::VARIABLES.layer(), Layer::Base);
        assert_eq!(Priority::THEME.layer(), Layer::Base);
    }

    #[test]
    fn known_pseudo_class_lookup_ignores_arguments() {
        assert!(is_known_pseudo_class(&Condition::parse(":nth-child(2n)")));
        assert!(!is_known_pseudo_class(&Condition::parse(":unknown")));
        assert!(!is_known_pseudo_class(&Condition::parse("::before")));
    }
}
