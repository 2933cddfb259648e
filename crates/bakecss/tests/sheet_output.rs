//! Integration tests for stylesheet output.
//!
//! Rules from separately compiled namespaces are merged into one sheet; the
//! output order depends only on selector shape.

use bakecss::{
    CompileOptions, Sheet, StyleDefinition, StyleValue, build_sheet, compile_namespace,
};

fn rules_for(definition: &StyleDefinition) -> Vec<bakecss::AtomicRule> {
    compile_namespace("test", definition, &CompileOptions::default())
        .unwrap()
        .rules
}

fn states(order: &[&str]) -> StyleDefinition {
    let mut entries = vec![("default".to_string(), StyleValue::from("black"))];
    for state in order {
        entries.push((state.to_string(), StyleValue::from(format!("c{}", &state[1..]))));
    }
    StyleDefinition::new().with("color", StyleValue::Conditional(entries))
}

fn condition_order(css: &str) -> Vec<&str> {
    css.lines()
        .map(|line| {
            if line.contains(":active") {
                "active"
            } else if line.contains(":focus") {
                "focus"
            } else if line.contains(":hover") {
                "hover"
            } else {
                "plain"
            }
        })
        .collect()
}

// ============================================================================
// PRIORITY ORDER
// ============================================================================

#[test]
fn test_pseudo_classes_sort_independently_of_authoring_order() {
    let forward = Sheet::new(rules_for(&states(&[":hover", ":focus", ":active"]))).to_css(false);
    let backward = Sheet::new(rules_for(&states(&[":active", ":focus", ":hover"]))).to_css(false);

    assert_eq!(condition_order(&forward), vec!["plain", "hover", "focus", "active"]);
    assert_eq!(forward, backward);
}

#[test]
fn test_media_rules_follow_pseudo_elements() {
    let definition = StyleDefinition::new()
        .with(
            "color",
            StyleValue::conditional([("default", "red"), ("@media print", "black")]),
        )
        .with("::before", StyleValue::conditional([("content", "x")]));
    let css = Sheet::new(rules_for(&definition)).to_css(false);
    let lines: Vec<_> = css.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("{color:red}"));
    assert!(lines[1].contains("::before{content:\"x\"}"));
    assert!(lines[2].starts_with("@media print{"));
}

#[test]
fn test_duplicates_across_namespaces_are_emitted_once() {
    let mut rules = rules_for(&StyleDefinition::new().with("color", "red"));
    rules.extend(rules_for(&StyleDefinition::new().with("color", "red").with("top", 0)));
    let sheet = Sheet::new(rules);
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.to_css(false).matches("color:red").count(), 1);
}

// ============================================================================
// LAYERS
// ============================================================================

#[test]
fn test_layer_statement_matches_blocks() {
    let options = CompileOptions::default().with_layers(true);
    let definition = states(&[":hover"]).with(
        "display",
        StyleValue::conditional([("default", "block"), ("@media print", "none")]),
    );
    let css = build_sheet(rules_for(&definition), &options);

    let mut lines = css.lines();
    assert_eq!(lines.next(), Some("@layer base, pseudo-class, at-rule;"));
    let blocks: Vec<_> = css
        .lines()
        .filter_map(|line| line.strip_prefix("@layer "))
        .filter_map(|rest| rest.strip_suffix('{'))
        .collect();
    assert_eq!(blocks, vec!["base", "pseudo-class", "at-rule"]);
}

#[test]
fn test_flat_output_has_no_layers() {
    let css = build_sheet(
        rules_for(&states(&[":hover"])),
        &CompileOptions::default(),
    );
    assert!(!css.contains("@layer"));
    assert_eq!(css.lines().count(), 2);
}
