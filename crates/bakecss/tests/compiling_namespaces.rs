//! Integration tests for namespace compilation.
//!
//! Covers the guarantees the rest of a build relies on:
//! - Determinism: equal declarations get equal class names across calls
//! - Idempotence: recompiling yields identical output
//! - Shorthand expansion, fallback chains and direction pairs
//! - Per-declaration error isolation

use bakecss::types::{ClassRef, NamespaceKey};
use bakecss::{
    CompilationError, CompileOptions, StyleDefinition, StyleValue, compile_namespace,
};

fn compile(definition: &StyleDefinition) -> bakecss::CompiledStyles {
    compile_namespace("test", definition, &CompileOptions::default()).unwrap()
}

// ============================================================================
// DETERMINISM AND IDEMPOTENCE
// ============================================================================

#[test]
fn test_same_declaration_same_class_across_namespaces() {
    let card = StyleDefinition::new().with("color", "red").with("width", 10);
    let badge = StyleDefinition::new().with("display", "flex").with("color", "red");

    let a = compile_namespace("card", &card, &CompileOptions::default()).unwrap();
    let b = compile_namespace("badge", &badge, &CompileOptions::default()).unwrap();

    assert_eq!(a.namespace.class_for("color"), b.namespace.class_for("color"));
    let rule_a = a.rules.iter().find(|r| r.ltr.contains("color:red")).unwrap();
    let rule_b = b.rules.iter().find(|r| r.ltr.contains("color:red")).unwrap();
    assert_eq!(rule_a, rule_b);
}

#[test]
fn test_equivalent_spellings_share_a_class() {
    let a = compile(&StyleDefinition::new().with("marginTop", "0px"));
    let b = compile(&StyleDefinition::new().with("margin-top", 0));
    assert_eq!(
        a.namespace.class_for("margin-top"),
        b.namespace.class_for("margin-top")
    );
}

#[test]
fn test_different_values_different_classes() {
    let a = compile(&StyleDefinition::new().with("color", "red"));
    let b = compile(&StyleDefinition::new().with("color", "blue"));
    assert_ne!(a.namespace.class_for("color"), b.namespace.class_for("color"));
}

#[test]
fn test_compilation_is_idempotent() {
    let definition = StyleDefinition::new()
        .with(
            "color",
            StyleValue::conditional([("default", "red"), (":hover", "blue")]),
        )
        .with("margin", "1px 2px")
        .with("position", StyleValue::fallbacks(["sticky", "fixed"]));
    assert_eq!(compile(&definition), compile(&definition));
}

#[test]
fn test_prefix_is_applied() {
    let options = CompileOptions::default().with_prefix("app");
    let compiled =
        compile_namespace("test", &StyleDefinition::new().with("color", "red"), &options).unwrap();
    assert!(compiled.namespace.class_for("color").unwrap().starts_with("app"));
}

// ============================================================================
// SHORTHANDS AND FALLBACKS
// ============================================================================

#[test]
fn test_margin_expands_to_four_longhands() {
    let compiled = compile(&StyleDefinition::new().with("margin", 10));
    assert_eq!(compiled.rules.len(), 4);
    for longhand in ["margin-top", "margin-end", "margin-bottom", "margin-start"] {
        assert!(compiled.namespace.class_for(longhand).is_some(), "{}", longhand);
    }
    let top = compiled
        .rules
        .iter()
        .find(|r| r.ltr.contains("margin-top"))
        .unwrap();
    assert!(top.ltr.ends_with("{margin-top:10px}"));
}

#[test]
fn test_fallback_chain_is_one_rule_in_order() {
    let compiled = compile(
        &StyleDefinition::new().with("position", StyleValue::fallbacks(["sticky", "fixed"])),
    );
    assert_eq!(compiled.rules.len(), 1);
    assert!(compiled.rules[0].ltr.contains("position:sticky;position:fixed"));
}

#[test]
fn test_fallback_array_on_shorthand_fails() {
    let result = compile_namespace(
        "test",
        &StyleDefinition::new().with("padding", StyleValue::fallbacks([1, 2])),
        &CompileOptions::default(),
    );
    let error = result.unwrap_err();
    assert_eq!(error.namespace, "test");
    assert_eq!(
        error.error,
        CompilationError::ArrayNotAllowedForShorthand {
            property: "padding".into()
        }
    );
}

// ============================================================================
// DIRECTION
// ============================================================================

#[test]
fn test_logical_margin_has_two_physical_rules() {
    let compiled = compile(&StyleDefinition::new().with("marginStart", 10));
    assert_eq!(compiled.rules.len(), 1);
    let rule = &compiled.rules[0];
    let class = compiled.namespace.class_for("margin-start").unwrap();
    assert_eq!(rule.class_name, class);
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
fn test_physical_properties_are_not_scoped() {
    let compiled = compile(&StyleDefinition::new().with("marginLeft", 10));
    let rule = &compiled.rules[0];
    assert!(rule.rtl.is_none());
    assert!(rule.ltr.starts_with('.'));
}

// ============================================================================
// CONDITIONS AND NULL
// ============================================================================

#[test]
fn test_conditions_are_keyed_in_the_namespace() {
    let compiled = compile(&StyleDefinition::new().with(
        "color",
        StyleValue::conditional([
            ("default", StyleValue::from("red")),
            (
                "@media (min-width: 600px)",
                StyleValue::conditional([("default", "green"), (":hover", "blue")]),
            ),
        ]),
    ));
    assert_eq!(compiled.rules.len(), 3);
    let key = NamespaceKey::new(
        "color",
        vec!["@media (min-width: 600px)".into(), ":hover".into()],
    );
    let ClassRef::Class(class) = compiled.namespace.get(&key).unwrap() else {
        panic!("expected a class");
    };
    let rule = compiled
        .rules
        .iter()
        .find(|r| &r.class_name == class)
        .unwrap();
    assert_eq!(
        rule.ltr,
        format!("@media (min-width: 600px){{.{c}.{c}:hover{{color:blue}}}}", c = class)
    );
    assert_eq!(compiled.namespace.class_list("color").unwrap().split(' ').count(), 3);
}

#[test]
fn test_null_unsets_without_a_rule() {
    let compiled = compile(&StyleDefinition::new().with(
        "outline",
        StyleValue::conditional([
            ("default", StyleValue::Null),
            (":focus-visible", StyleValue::from("2px solid blue")),
        ]),
    ));
    assert_eq!(compiled.rules.len(), 1);
    assert_eq!(
        compiled.namespace.get(&NamespaceKey::plain("outline")),
        Some(&ClassRef::Unset)
    );
}

#[test]
fn test_namespace_json_output() {
    let compiled = compile(&StyleDefinition::new().with("color", "red").with("opacity", StyleValue::Null));
    let json = compiled.namespace.to_json();
    assert_eq!(json["$$css"], serde_json::Value::Bool(true));
    assert_eq!(
        json["color"].as_str(),
        compiled.namespace.class_for("color")
    );
    assert!(json["opacity"].is_null());
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_malformed_value_drops_only_that_declaration() {
    let compiled = compile(
        &StyleDefinition::new()
            .with("width", "calc(100% - 10px")
            .with("color", "red"),
    );
    assert_eq!(compiled.rules.len(), 1);
    assert!(compiled.namespace.class_for("width").is_none());
    assert_eq!(compiled.errors.len(), 1);
    assert_eq!(compiled.errors[0].property(), "width");
    assert!(matches!(
        compiled.errors[0].error,
        CompilationError::MalformedValue { .. }
    ));
}

#[test]
fn test_all_declarations_failing_is_an_error() {
    let result = compile_namespace(
        "broken",
        &StyleDefinition::new().with("width", "min(1px"),
        &CompileOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ref e) if matches!(e.error, CompilationError::MalformedValue { .. })
    ));
}

#[test]
fn test_misplaced_top_level_keys_are_reported() {
    let compiled = compile(
        &StyleDefinition::new()
            .with("::before", "x")
            .with(":hover", StyleValue::conditional([("color", "red")]))
            .with("color", "blue"),
    );
    assert_eq!(compiled.rules.len(), 1);
    assert!(compiled.rules[0].ltr.ends_with("{color:blue}"));
    let failed: Vec<&str> = compiled.errors.iter().map(|e| e.property()).collect();
    assert_eq!(failed, vec!["::before", ":hover"]);
    assert!(compiled.errors.iter().all(|e| matches!(
        e.error,
        CompilationError::UnsupportedValueType { .. }
    )));
}

#[test]
fn test_json_definition() {
    let definition: StyleDefinition = serde_json::from_str(
        r##"{ "backgroundColor": { "default": "white", ":hover": "#eee" }, "zIndex": 2 }"##,
    )
    .unwrap();
    let compiled = compile(&definition);
    assert_eq!(compiled.rules.len(), 3);
    assert!(compiled.rules.iter().any(|r| r.ltr.ends_with("{z-index:2}")));
}
