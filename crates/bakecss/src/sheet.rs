//! Stylesheet assembly.
//!
//! A [`Sheet`] is the deduplicated, priority-ordered set of rules a build
//! accumulated. Serialization is either flat (rules in ascending priority)
//! or layered: one `@layer` statement naming the non-empty buckets, then one
//! `@layer` block per bucket in the same order.
//!
//! ```rust
//! use bakecss::priority::Priority;
//! use bakecss::sheet::Sheet;
//! use bakecss::types::AtomicRule;
//!
//! let sheet = Sheet::new([
//!     AtomicRule::new("b", ".b:hover{color:blue}", Priority(1312)),
//!     AtomicRule::new("a", ".a{color:red}", Priority(12)),
//!     AtomicRule::new("a", ".a{color:red}", Priority(12)),
//! ]);
//!
//! assert_eq!(sheet.len(), 2);
//! assert_eq!(sheet.to_css(false), ".a{color:red}\n.b:hover{color:blue}");
//! ```

use crate::options::CompileOptions;
use crate::priority::Layer;
use crate::types::AtomicRule;
use std::collections::HashSet;

/// An ordered, deduplicated collection of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    rules: Vec<AtomicRule>,
}

impl Sheet {
    /// Deduplicates by class name (first copy wins) and stable-sorts by
    /// priority, so ties keep first-seen order.
    pub fn new(rules: impl IntoIterator<Item = AtomicRule>) -> Self {
        let mut seen = HashSet::new();
        let mut rules: Vec<AtomicRule> = rules
            .into_iter()
            .filter(|rule| seen.insert(rule.class_name.clone()))
            .collect();
        rules.sort_by_key(|rule| rule.priority);
        Self { rules }
    }

    pub fn rules(&self) -> &[AtomicRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// A sheet holding only the rules for the given class names.
    pub fn subset<'a>(&self, class_names: impl IntoIterator<Item = &'a str>) -> Sheet {
        let wanted: HashSet<&str> = class_names.into_iter().collect();
        Sheet {
            rules: self
                .rules
                .iter()
                .filter(|rule| wanted.contains(rule.class_name.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Non-empty layer buckets in cascade order.
    pub fn layers(&self) -> Vec<(Layer, Vec<&AtomicRule>)> {
        Layer::ALL
            .iter()
            .map(|&layer| {
                let rules: Vec<&AtomicRule> =
                    self.rules.iter().filter(|r| r.layer() == layer).collect();
                (layer, rules)
            })
            .filter(|(_, rules)| !rules.is_empty())
            .collect()
    }

    /// Serializes the sheet.
    pub fn to_css(&self, use_layers: bool) -> String {
        if use_layers {
            self.to_layered_css()
        } else {
            render_rules(self.rules.iter())
        }
    }

    fn to_layered_css(&self) -> String {
        let layers = self.layers();
        if layers.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = layers.iter().map(|(layer, _)| layer.name()).collect();
        let mut out = format!("@layer {};", names.join(", "));
        for (layer, rules) in layers {
            out.push_str(&format!(
                "\n@layer {}{{\n{}\n}}",
                layer.name(),
                render_rules(rules.into_iter())
            ));
        }
        out
    }
}

impl FromIterator<AtomicRule> for Sheet {
    fn from_iter<I: IntoIterator<Item = AtomicRule>>(iter: I) -> Self {
        Sheet::new(iter)
    }
}

fn render_rules<'a>(rules: impl Iterator<Item = &'a AtomicRule>) -> String {
    rules
        .flat_map(AtomicRule::texts)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a sheet and serializes it with the layering `options` ask for.
pub fn build_sheet(rules: impl IntoIterator<Item = AtomicRule>, options: &CompileOptions) -> String {
    Sheet::new(rules).to_css(options.use_css_layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::Priority;

    fn rule(class: &str, text: &str, priority: u32) -> AtomicRule {
        AtomicRule::new(class, text, Priority(priority))
    }

    fn sample() -> Sheet {
        Sheet::new([
            rule("active", ".active:active{color:red}", 1712),
            rule("hover", ".hover:hover{color:red}", 1312),
            rule("plain", ".plain{color:red}", 12),
            rule("focus", ".focus:focus{color:red}", 1512),
        ])
    }

    #[test]
    fn sorted_by_priority() {
        let classes: Vec<_> = sample().rules().iter().map(|r| r.class_name.clone()).collect();
        assert_eq!(classes, vec!["plain", "hover", "focus", "active"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let sheet = Sheet::new([rule("b", ".b{}", 12), rule("a", ".a{}", 12), rule("c", ".c{}", 10)]);
        let classes: Vec<_> = sheet.rules().iter().map(|r| r.class_name.as_str()).collect();
        assert_eq!(classes, vec!["c", "b", "a"]);
    }

    #[test]
    fn rtl_follows_ltr() {
        let sheet = Sheet::new([rule("m", "html:not([dir='rtl']) .m{margin-left:1px}", 12)
            .with_rtl("html[dir='rtl'] .m{margin-right:1px}")]);
        insta::assert_snapshot!(sheet.to_css(false), @r"
        html:not([dir='rtl']) .m{margin-left:1px}
        html[dir='rtl'] .m{margin-right:1px}
        ");
    }

    #[test]
    fn layered_output_lists_non_empty_buckets() {
        let css = sample().to_css(true);
        insta::assert_snapshot!(css, @r"
        @layer base, pseudo-class;
        @layer base{
        .plain{color:red}
        }
        @layer pseudo-class{
        .hover:hover{color:red}
        .focus:focus{color:red}
        .active:active{color:red}
        }
        ");
    }

    #[test]
    fn layered_output_with_every_bucket() {
        let sheet = Sheet::new([
            rule("m", "@media print{.m.m{color:red}}", 200012),
            rule("e", ".e::before{color:red}", 50012),
            rule("p", ".p{color:red}", 12),
        ]);
        let names: Vec<_> = sheet.layers().iter().map(|(layer, _)| layer.name()).collect();
        assert_eq!(names, vec!["base", "pseudo-element", "at-rule"]);
        assert!(sheet.to_css(true).starts_with("@layer base, pseudo-element, at-rule;\n"));
    }

    #[test]
    fn flat_output_has_no_layer_syntax() {
        assert!(!sample().to_css(false).contains("@layer"));
    }

    #[test]
    fn empty_sheet() {
        assert_eq!(Sheet::default().to_css(true), "");
        assert_eq!(Sheet::default().to_css(false), "");
    }

    #[test]
    fn subset_keeps_order() {
        let subset = sample().subset(["active", "plain", "missing"]);
        assert_eq!(subset.to_css(false), ".plain{color:red}\n.active:active{color:red}");
    }
}
