//! Value normalization.
//!
//! Turns one authored `(property, value)` pair into the canonical text that is
//! hashed and emitted. Two spellings of the same value (`0px` / `0`,
//! `0.5s` / `500ms`, `'a'` / `"a"`) must normalize identically or they would
//! produce two classes for one declaration.
//!
//! String values go through these steps in order:
//!
//! 1. reject unclosed function calls and unterminated strings
//! 2. whitespace: collapse runs, none around `,` and `/` or inside parentheses
//! 3. timings: `ms` values of 10 or more become seconds
//! 4. zero dimensions: `0px` → `0`, `0rad` → `0deg`, `0ms` → `0s`
//!    (skipped inside math functions, where units are required)
//! 5. leading zeros: `0.50` → `.5`
//! 6. quotes: single-quoted strings become double-quoted when possible
//! 7. property lists: camelCase names in `transition-property` and
//!    `will-change` are dashed
//! 8. with `enable_length_to_rem`, `font-size` pixel lengths become `rem`
//!
//! ```rust
//! use bakecss::CompileOptions;
//! use bakecss::normalize::normalize_value;
//!
//! let options = CompileOptions::default();
//! assert_eq!(normalize_value("margin", "0px  auto", &options).unwrap(), "0 auto");
//! assert_eq!(normalize_value("transition-duration", "500ms", &options).unwrap(), ".5s");
//! assert_eq!(normalize_value("color", "rgba(0, 0, 0, 0.5)", &options).unwrap(), "rgba(0,0,0,.5)");
//! ```

pub mod properties;

use crate::error::CompilationError;
use crate::options::CompileOptions;
use crate::parser::units::{ANGLE_UNITS, LENGTH_UNITS, TIME_UNITS};
use crate::parser::{ValueNode, format_number, has_unclosed_function, parse_value, stringify};
use properties::{
    CONTENT_FUNCTIONS, CONTENT_KEYWORDS, CONTENT_PROPERTIES, MATH_FUNCTIONS,
    PROPERTY_LIST_PROPERTIES, TIME_PROPERTIES, UNITLESS_PROPERTIES,
};

/// Root font size used for `px` → `rem` conversion.
const ROOT_FONT_SIZE: f64 = 16.0;

/// Converts a property key to its dashed CSS form.
///
/// Custom properties (`--name`) are returned unchanged.
///
/// ```rust
/// use bakecss::normalize::dashify;
///
/// assert_eq!(dashify("marginInlineStart"), "margin-inline-start");
/// assert_eq!(dashify("WebkitAppearance"), "-webkit-appearance");
/// assert_eq!(dashify("--brandColor"), "--brandColor");
/// ```
pub fn dashify(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c.is_ascii_uppercase() && prev.is_none_or(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    out
}

/// The unit appended to a bare number for `property`.
pub fn number_suffix(property: &str) -> &'static str {
    if property.starts_with("--") || UNITLESS_PROPERTIES.contains(property) {
        ""
    } else if TIME_PROPERTIES.contains(property) {
        "ms"
    } else {
        "px"
    }
}

/// Renders a numeric value with the property's unit, then normalizes it.
///
/// ```rust
/// use bakecss::CompileOptions;
/// use bakecss::normalize::transform_number;
///
/// let options = CompileOptions::default();
/// assert_eq!(transform_number("width", 10.0, &options), "10px");
/// assert_eq!(transform_number("opacity", 0.25, &options), ".25");
/// assert_eq!(transform_number("animation-duration", 1500.0, &options), "1.5s");
/// assert_eq!(transform_number("margin-top", 0.0, &options), "0");
/// ```
pub fn transform_number(property: &str, value: f64, options: &CompileOptions) -> String {
    let text = format!("{}{}", format_number(value), number_suffix(property));
    // A formatted number always tokenizes, so the fallback is never taken.
    normalize_value(property, &text, options).unwrap_or(text)
}

/// Normalizes a string value for `property` (already dashed).
pub fn normalize_value(
    property: &str,
    raw: &str,
    options: &CompileOptions,
) -> Result<String, CompilationError> {
    if CONTENT_PROPERTIES.contains(property) {
        return normalize_content(property, raw);
    }
    if raw.trim().is_empty() {
        return Err(CompilationError::malformed(property, raw, "empty value"));
    }

    let nodes = parse_checked(property, raw)?;
    let nodes = collapse_whitespace(nodes);
    let nodes = map_numbers(nodes, false, &mut |node: ValueNode, in_math: bool| {
        let node = convert_timing(node);
        let node = if in_math { node } else { strip_zero_unit(node) };
        trim_leading_zero(node)
    });
    let nodes = normalize_quotes(nodes);
    let nodes = if PROPERTY_LIST_PROPERTIES.contains(property) {
        dash_property_names(nodes)
    } else {
        nodes
    };
    let nodes = if options.enable_length_to_rem && property == "font-size" {
        map_numbers(nodes, false, &mut |node: ValueNode, _| px_to_rem(node))
    } else {
        nodes
    };

    let normalized = stringify(&nodes);
    if normalized != raw {
        log::trace!("normalized {}: {:?} -> {:?}", property, raw, normalized);
    }
    Ok(normalized)
}

fn parse_checked(property: &str, raw: &str) -> Result<Vec<ValueNode>, CompilationError> {
    let nodes =
        parse_value(raw).map_err(|reason| CompilationError::malformed(property, raw, reason))?;
    if has_unclosed_function(&nodes) {
        return Err(CompilationError::malformed(
            property,
            raw,
            "unclosed function call",
        ));
    }
    Ok(nodes)
}

fn normalize_content(property: &str, raw: &str) -> Result<String, CompilationError> {
    let value = raw.trim();
    if is_css_content(value) {
        parse_checked(property, value)?;
        return Ok(value.to_string());
    }
    Ok(format!("\"{}\"", value.replace('"', "\\\"")))
}

fn is_css_content(value: &str) -> bool {
    if CONTENT_FUNCTIONS.iter().any(|f| value.contains(f)) || CONTENT_KEYWORDS.contains(value) {
        return true;
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first == last && (first == '"' || first == '\''),
        _ => false,
    }
}

fn collapse_whitespace(nodes: Vec<ValueNode>) -> Vec<ValueNode> {
    let mut out: Vec<ValueNode> = Vec::with_capacity(nodes.len());
    let mut pending_space = false;
    for node in nodes {
        match node {
            ValueNode::Space => pending_space = true,
            ValueNode::Div(c) => {
                pending_space = false;
                out.push(ValueNode::Div(c));
            }
            other => {
                if pending_space && !out.is_empty() && !matches!(out.last(), Some(ValueNode::Div(_)))
                {
                    out.push(ValueNode::Space);
                }
                pending_space = false;
                out.push(match other {
                    ValueNode::Function { name, args, closed } => ValueNode::Function {
                        name,
                        args: collapse_whitespace(args),
                        closed,
                    },
                    other => other,
                });
            }
        }
    }
    out
}

/// Applies `f` to every number, recursing into function arguments.
fn map_numbers<F>(nodes: Vec<ValueNode>, in_math: bool, f: &mut F) -> Vec<ValueNode>
where
    F: FnMut(ValueNode, bool) -> ValueNode,
{
    nodes
        .into_iter()
        .map(|node| match node {
            ValueNode::Number(_) => f(node, in_math),
            ValueNode::Function { name, args, closed } => {
                let math = in_math || MATH_FUNCTIONS.contains(name.to_ascii_lowercase().as_str());
                ValueNode::Function {
                    args: map_numbers(args, math, f),
                    name,
                    closed,
                }
            }
            other => other,
        })
        .collect()
}

fn convert_timing(node: ValueNode) -> ValueNode {
    match node {
        ValueNode::Number(mut dim) if dim.unit.eq_ignore_ascii_case("ms") => {
            let value = dim.value();
            if value.abs() >= 10.0 {
                dim.number = format_number(value / 1000.0);
                dim.unit = "s".to_string();
            }
            ValueNode::Number(dim)
        }
        other => other,
    }
}

fn strip_zero_unit(node: ValueNode) -> ValueNode {
    match node {
        ValueNode::Number(mut dim) if dim.is_zero() => {
            let unit = dim.unit.to_ascii_lowercase();
            dim.number = "0".to_string();
            dim.unit = if LENGTH_UNITS.contains(&unit.as_str()) {
                String::new()
            } else if ANGLE_UNITS.contains(&unit.as_str()) {
                "deg".to_string()
            } else if TIME_UNITS.contains(&unit.as_str()) {
                "s".to_string()
            } else {
                dim.unit
            };
            ValueNode::Number(dim)
        }
        other => other,
    }
}

fn trim_leading_zero(node: ValueNode) -> ValueNode {
    match node {
        ValueNode::Number(mut dim) => {
            dim.number = trim_number(&dim.number);
            ValueNode::Number(dim)
        }
        other => other,
    }
}

/// `0.50` → `.5`, `-0.5` → `-.5`, `+1` → `1`, `2.0` → `2`.
fn trim_number(text: &str) -> String {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut digits = digits;
    if digits.contains('.') {
        digits = digits.trim_end_matches('0').trim_end_matches('.');
    }
    let trimmed = digits.trim_start_matches('0');
    let digits = if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed
    } else {
        digits
    };
    if digits.is_empty() {
        return "0".to_string();
    }
    if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

fn normalize_quotes(nodes: Vec<ValueNode>) -> Vec<ValueNode> {
    nodes
        .into_iter()
        .map(|node| match node {
            ValueNode::String { quote: '\'', content } if !content.contains('"') => {
                ValueNode::String {
                    quote: '"',
                    content,
                }
            }
            ValueNode::Function { name, args, closed } => ValueNode::Function {
                name,
                args: normalize_quotes(args),
                closed,
            },
            other => other,
        })
        .collect()
}

fn dash_property_names(nodes: Vec<ValueNode>) -> Vec<ValueNode> {
    nodes
        .into_iter()
        .map(|node| match node {
            ValueNode::Word(word) => ValueNode::Word(dashify(&word)),
            other => other,
        })
        .collect()
}

fn px_to_rem(node: ValueNode) -> ValueNode {
    match node {
        ValueNode::Number(mut dim) if dim.unit.eq_ignore_ascii_case("px") => {
            dim.number = trim_number(&format_number(dim.value() / ROOT_FONT_SIZE));
            dim.unit = "rem".to_string();
            ValueNode::Number(dim)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(property: &str, value: &str) -> String {
        normalize_value(property, value, &CompileOptions::default()).unwrap()
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize("margin", "  10px    20px "), "10px 20px");
        assert_eq!(normalize("grid-area", "1 / 2 / 3"), "1/2/3");
        assert_eq!(
            normalize("transform", "translate( 10px , 20px )"),
            "translate(10px,20px)"
        );
    }

    #[test]
    fn math_functions_keep_zero_units_and_operators() {
        assert_eq!(normalize("width", "calc(100% - 0px)"), "calc(100% - 0px)");
        assert_eq!(normalize("width", "calc( 0.5rem + 2px )"), "calc(.5rem + 2px)");
    }

    #[test]
    fn zero_dimensions() {
        assert_eq!(normalize("margin", "0px"), "0");
        assert_eq!(normalize("margin", "-0em"), "0");
        assert_eq!(normalize("transform", "rotate(0rad)"), "rotate(0deg)");
        assert_eq!(normalize("transition-delay", "0ms"), "0s");
        assert_eq!(normalize("flex-basis", "0%"), "0%");
        assert_eq!(normalize("grid-template-columns", "0fr 1fr"), "0fr 1fr");
    }

    #[test]
    fn timings_move_to_seconds() {
        assert_eq!(normalize("transition-duration", "1500ms"), "1.5s");
        assert_eq!(normalize("transition-duration", "5ms"), "5ms");
        assert_eq!(normalize("animation", "fade 250ms ease-in"), "fade .25s ease-in");
    }

    #[test]
    fn leading_and_trailing_zeros() {
        assert_eq!(trim_number("0.50"), ".5");
        assert_eq!(trim_number("-0.5"), "-.5");
        assert_eq!(trim_number("+3"), "3");
        assert_eq!(trim_number("2.0"), "2");
        assert_eq!(trim_number("10"), "10");
        assert_eq!(trim_number("0"), "0");
    }

    #[test]
    fn quotes_prefer_double() {
        assert_eq!(normalize("font-family", "'Helvetica Neue', Arial"), "\"Helvetica Neue\",Arial");
        assert_eq!(normalize("quotes", r#"'"' '"'"#), r#"'"' '"'"#);
    }

    #[test]
    fn property_lists_are_dashed() {
        assert_eq!(
            normalize("transition-property", "opacity, backgroundColor"),
            "opacity,background-color"
        );
        assert_eq!(normalize("will-change", "--myVar"), "--myVar");
    }

    #[test]
    fn font_size_rem_conversion_is_opt_in() {
        let options = CompileOptions {
            enable_length_to_rem: true,
            ..CompileOptions::default()
        };
        assert_eq!(normalize_value("font-size", "24px", &options).unwrap(), "1.5rem");
        assert_eq!(normalize_value("width", "24px", &options).unwrap(), "24px");
        assert_eq!(normalize("font-size", "24px"), "24px");
        assert_eq!(transform_number("font-size", 14.0, &options), ".875rem");
    }

    #[test]
    fn content_is_quoted_unless_already_css() {
        assert_eq!(normalize("content", "hello"), "\"hello\"");
        assert_eq!(normalize("content", "say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(normalize("content", "''"), "''");
        assert_eq!(normalize("content", "attr(data-label)"), "attr(data-label)");
        assert_eq!(normalize("content", "open-quote"), "open-quote");
        assert_eq!(normalize("hyphenate-character", "-"), "\"-\"");
    }

    #[test]
    fn unclosed_function_is_malformed() {
        let err = normalize_value("width", "calc(100% - 10px", &CompileOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            CompilationError::MalformedValue {
                property: "width".into(),
                value: "calc(100% - 10px".into(),
                reason: "unclosed function call".into(),
            }
        );
        assert!(normalize_value("content", "attr(x", &CompileOptions::default()).is_err());
    }

    #[test]
    fn suffixes() {
        assert_eq!(number_suffix("z-index"), "");
        assert_eq!(number_suffix("--gap"), "");
        assert_eq!(number_suffix("transition-delay"), "ms");
        assert_eq!(number_suffix("top"), "px");
    }
}
