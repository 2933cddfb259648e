//! Content-addressed names.
//!
//! A class name is a pure function of a declaration's canonical text: no
//! registry, no counter. Two compilations that never see each other still
//! agree on every name.
//!
//! The canonical text of a declaration is
//!
//! ```text
//! "<>" + property + values.join(", ") + modifiers
//! ```
//!
//! where `modifiers` is the sorted selector conditions followed by the sorted
//! at-rule conditions, or `null` for an unconditioned declaration. Sorting
//! makes `{":hover": {"@media print": …}}` and `{"@media print": {":hover": …}}`
//! name the same rule.

use crate::options::CompileOptions;
use crate::types::{Condition, Declaration};

/// Hashes text into a short base-36 string.
///
/// The 64-bit seahash digest is folded to 32 bits, which keeps names short
/// while staying far from collisions at stylesheet scale.
///
/// ```rust
/// use bakecss::naming::hash;
///
/// assert_eq!(hash("color:red"), hash("color:red"));
/// assert_ne!(hash("color:red"), hash("color:blue"));
/// assert!(hash("x").chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn hash(text: &str) -> String {
    let digest = seahash::hash(text.as_bytes());
    let folded = (digest ^ (digest >> 32)) as u32;
    to_base36(folded)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(7);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// The text hashed to name a declaration.
pub fn canonical_text(property: &str, values: &[String], conditions: &[Condition]) -> String {
    let mut selectors: Vec<&str> = conditions
        .iter()
        .filter(|c| !c.is_at_rule())
        .map(Condition::as_str)
        .collect();
    let mut at_rules: Vec<&str> = conditions
        .iter()
        .filter(|c| c.is_at_rule())
        .map(Condition::as_str)
        .collect();
    selectors.sort_unstable();
    at_rules.sort_unstable();

    let modifiers = if selectors.is_empty() && at_rules.is_empty() {
        "null".to_string()
    } else {
        format!("{}{}", selectors.concat(), at_rules.concat())
    };
    format!("<>{}{}{}", property, values.join(", "), modifiers)
}

/// The class name for a declaration.
///
/// With `debug` enabled the dashed property is prepended so generated CSS is
/// readable, e.g. `margin-top-x1q2w3e`.
pub fn class_name(declaration: &Declaration, options: &CompileOptions) -> String {
    let digest = hash(&canonical_text(
        &declaration.property,
        &declaration.values,
        &declaration.conditions,
    ));
    if options.debug {
        format!(
            "{}-{}{}",
            declaration.property.trim_start_matches('-'),
            options.class_name_prefix,
            digest
        )
    } else {
        format!("{}{}", options.class_name_prefix, digest)
    }
}

/// The custom property name for `key` in a variable group.
///
/// Variable names are hashed under their own `vars:` namespace so they can
/// never coincide with a class name built from the same text.
///
/// ```rust
/// use bakecss::CompileOptions;
/// use bakecss::naming::variable_name;
///
/// let name = variable_name("tokens", "accent", &CompileOptions::default());
/// assert!(name.starts_with("--x"));
/// assert_ne!(name, variable_name("tokens", "surface", &CompileOptions::default()));
/// ```
pub fn variable_name(namespace: &str, key: &str, options: &CompileOptions) -> String {
    format!(
        "--{}{}",
        options.class_name_prefix,
        hash(&format!("vars:{}.{}", namespace, key))
    )
}

/// A prefixed name derived from arbitrary text, for auxiliary constructs.
pub fn prefixed_hash(text: &str, options: &CompileOptions) -> String {
    format!("{}{}", options.class_name_prefix, hash(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u32::MAX), "1z141z3");
    }

    #[test]
    fn unconditioned_text() {
        assert_eq!(
            canonical_text("color", &["red".to_string()], &[]),
            "<>colorrednull"
        );
    }

    #[test]
    fn modifiers_are_sorted_by_category() {
        let a = [Condition::parse("@media print"), Condition::parse(":hover")];
        let b = [Condition::parse(":hover"), Condition::parse("@media print")];
        let values = ["red".to_string()];
        assert_eq!(canonical_text("color", &values, &a), canonical_text("color", &values, &b));
        assert_eq!(
            canonical_text("color", &values, &a),
            "<>colorred:hover@media print"
        );
    }

    #[test]
    fn fallbacks_are_part_of_the_name() {
        let one = Declaration::new("position", "fixed");
        let mut two = one.clone();
        two.values.insert(0, "sticky".to_string());
        let options = CompileOptions::default();
        assert_ne!(class_name(&one, &options), class_name(&two, &options));
    }

    #[test]
    fn prefix_and_debug() {
        let declaration = Declaration::new("margin-top", "10px");
        let plain = class_name(&declaration, &CompileOptions::default().with_prefix("s"));
        assert!(plain.starts_with('s'));
        let debug = CompileOptions {
            debug: true,
            ..CompileOptions::default()
        };
        let named = class_name(&declaration, &debug);
        assert!(named.starts_with("margin-top-x"));
        assert!(named.ends_with(&plain[1..]));
    }
}
