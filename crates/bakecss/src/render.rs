//! Rendering declarations into atomic rules.
//!
//! The selector for a class `.c` is built as:
//!
//! 1. `.c`, repeated once more for every enclosing at-rule so that
//!    conditional rules outrank their unconditioned counterparts
//! 2. pseudo-classes and other selector fragments, in path order
//! 3. pseudo-elements, in path order
//!
//! At-rules then wrap the rule, sorted, the first one outermost.
//!
//! ```rust
//! use bakecss::CompileOptions;
//! use bakecss::render::render_rule;
//! use bakecss::types::{Condition, Declaration};
//!
//! let declaration = Declaration::new("color", "blue")
//!     .with_conditions([Condition::parse("@media print"), Condition::parse(":hover")]);
//! assert_eq!(
//!     render_rule(".c", &declaration),
//!     "@media print{.c.c:hover{color:blue}}"
//! );
//! ```

use crate::direction::{physical_forms, scope_ltr, scope_rtl};
use crate::naming::class_name;
use crate::options::CompileOptions;
use crate::priority::Priority;
use crate::types::{AtomicRule, Condition, Declaration};

/// Vendor selectors a `::thumb` pseudo-element stands for.
const THUMB_SELECTORS: [&str; 3] = ["::-webkit-slider-thumb", "::-moz-range-thumb", "::-ms-thumb"];

/// Compiles one declaration. Unset (`null`) declarations produce no rule.
pub fn build_rule(declaration: &Declaration, options: &CompileOptions) -> Option<AtomicRule> {
    if declaration.is_null() {
        return None;
    }
    let class_name = class_name(declaration, options);
    let priority = Priority::for_declaration(&declaration.property, &declaration.conditions);
    let base = format!(".{}", class_name);

    let rule = match physical_forms(declaration, options) {
        (ltr, None) => AtomicRule::new(&class_name, render_rule(&base, &ltr), priority),
        (ltr, Some(rtl)) => AtomicRule::new(
            &class_name,
            render_scoped(&base, &ltr, scope_ltr),
            priority,
        )
        .with_rtl(render_scoped(&base, &rtl, scope_rtl)),
    };
    log::trace!("{} -> {}", declaration, rule.ltr);
    Some(rule)
}

/// Renders a declaration as a complete rule for the base selector.
pub fn render_rule(base: &str, declaration: &Declaration) -> String {
    render_scoped(base, declaration, |selector| selector.to_string())
}

fn render_scoped(base: &str, declaration: &Declaration, scope: impl Fn(&str) -> String) -> String {
    let selectors: Vec<String> = build_selectors(base, &declaration.conditions)
        .iter()
        .map(|selector| scope(selector.as_str()))
        .collect();
    wrap_at_rules(
        format!("{}{{{}}}", selectors.join(","), render_body(declaration)),
        &declaration.conditions,
    )
}

/// `prop:value` pairs joined by `;`, one per fallback value.
pub fn render_body(declaration: &Declaration) -> String {
    declaration
        .values
        .iter()
        .map(|value| format!("{}:{}", declaration.property, value))
        .collect::<Vec<_>>()
        .join(";")
}

/// Builds the selector list for `base` under `conditions`.
///
/// Usually a single selector; `::thumb` fans out into one selector per
/// vendor form.
pub fn build_selectors(base: &str, conditions: &[Condition]) -> Vec<String> {
    let at_rules = conditions.iter().filter(|c| c.is_at_rule()).count();
    let mut selector = base.repeat(at_rules + 1);
    for condition in conditions {
        if matches!(condition, Condition::PseudoClass(_) | Condition::Other(_)) {
            selector.push_str(condition.as_str());
        }
    }

    let mut selectors = vec![selector];
    for condition in conditions.iter().filter(|c| c.is_pseudo_element()) {
        let suffixes: Vec<&str> = if condition.as_str() == "::thumb" {
            THUMB_SELECTORS.to_vec()
        } else {
            vec![condition.as_str()]
        };
        selectors = selectors
            .iter()
            .flat_map(|selector| suffixes.iter().map(move |suffix| format!("{}{}", selector, suffix)))
            .collect();
    }
    selectors
}

/// Wraps a rule in its at-rules, sorted with the first outermost.
pub fn wrap_at_rules(rule: String, conditions: &[Condition]) -> String {
    let mut at_rules: Vec<&str> = conditions
        .iter()
        .filter(|c| c.is_at_rule())
        .map(Condition::as_str)
        .collect();
    at_rules.sort_unstable();
    at_rules
        .into_iter()
        .rev()
        .fold(rule, |inner, at_rule| format!("{}{{{}}}", at_rule, inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(keys: &[&str], property: &str, value: &str) -> Declaration {
        Declaration::new(property, value).with_conditions(keys.iter().map(|k| Condition::parse(k)))
    }

    #[test]
    fn plain_rule() {
        assert_eq!(render_rule(".a", &Declaration::new("color", "red")), ".a{color:red}");
    }

    #[test]
    fn fallbacks_repeat_the_property() {
        let mut declaration = Declaration::new("position", "sticky");
        declaration.values.push("fixed".to_string());
        assert_eq!(
            render_rule(".a", &declaration),
            ".a{position:sticky;position:fixed}"
        );
    }

    #[test]
    fn pseudo_elements_come_last() {
        let declaration = with(&["::before", ":hover"], "color", "red");
        assert_eq!(render_rule(".a", &declaration), ".a:hover::before{color:red}");
    }

    #[test]
    fn thumb_fans_out() {
        let declaration = with(&["::thumb"], "width", "4px");
        assert_eq!(
            render_rule(".a", &declaration),
            ".a::-webkit-slider-thumb,.a::-moz-range-thumb,.a::-ms-thumb{width:4px}"
        );
    }

    #[test]
    fn at_rules_nest_sorted() {
        let declaration = with(
            &["@supports (display: grid)", "@media print"],
            "display",
            "grid",
        );
        assert_eq!(
            render_rule(".a", &declaration),
            "@media print{@supports (display: grid){.a.a.a{display:grid}}}"
        );
    }

    #[test]
    fn directional_rule_is_scoped_both_ways() {
        let rule = build_rule(&Declaration::new("margin-start", "10px"), &CompileOptions::default())
            .unwrap();
        let class = &rule.class_name;
        assert_eq!(
            rule.ltr,
            format!("html:not([dir='rtl']) .{}{{margin-left:10px}}", class)
        );
        assert_eq!(
            rule.rtl.as_deref(),
            Some(format!("html[dir='rtl'] .{}{{margin-right:10px}}", class).as_str())
        );
    }

    #[test]
    fn unset_declarations_have_no_rule() {
        let declaration = Declaration::null("color", Default::default());
        assert!(build_rule(&declaration, &CompileOptions::default()).is_none());
    }
}
