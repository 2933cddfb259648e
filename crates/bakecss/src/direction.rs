//! Logical → physical direction handling.
//!
//! Logical properties (`margin-start`, `border-top-end-radius`, `end`, …) and
//! logical keywords in a few values (`float: start`) are rewritten to their
//! physical form twice: once for left-to-right documents and once for
//! right-to-left ones. When both forms print the same, only the LTR form is
//! kept and the rule is not scoped to a direction.
//!
//! ```rust
//! use bakecss::CompileOptions;
//! use bakecss::direction::{generate_ltr, generate_rtl};
//! use bakecss::types::Declaration;
//!
//! let options = CompileOptions::default();
//! let start = Declaration::new("margin-start", "10px");
//! assert_eq!(generate_ltr(&start, &options).to_string(), "margin-left:10px");
//! assert_eq!(generate_rtl(&start, &options).unwrap().to_string(), "margin-right:10px");
//!
//! let top = Declaration::new("margin-top", "10px");
//! assert!(generate_rtl(&top, &options).is_none());
//! ```

use crate::options::CompileOptions;
use crate::parser::{ValueNode, parse_value, stringify};
use crate::types::Declaration;
use phf::phf_map;

static LTR_PROPERTIES: phf::Map<&'static str, &'static str> = phf_map! {
    "margin-start" => "margin-left",
    "margin-end" => "margin-right",
    "padding-start" => "padding-left",
    "padding-end" => "padding-right",
    "border-start" => "border-left",
    "border-end" => "border-right",
    "border-start-width" => "border-left-width",
    "border-end-width" => "border-right-width",
    "border-start-color" => "border-left-color",
    "border-end-color" => "border-right-color",
    "border-start-style" => "border-left-style",
    "border-end-style" => "border-right-style",
    "border-top-start-radius" => "border-top-left-radius",
    "border-top-end-radius" => "border-top-right-radius",
    "border-bottom-start-radius" => "border-bottom-left-radius",
    "border-bottom-end-radius" => "border-bottom-right-radius",
    "start" => "left",
    "end" => "right",
};

static RTL_PROPERTIES: phf::Map<&'static str, &'static str> = phf_map! {
    "margin-start" => "margin-right",
    "margin-end" => "margin-left",
    "padding-start" => "padding-right",
    "padding-end" => "padding-left",
    "border-start" => "border-right",
    "border-end" => "border-left",
    "border-start-width" => "border-right-width",
    "border-end-width" => "border-left-width",
    "border-start-color" => "border-right-color",
    "border-end-color" => "border-left-color",
    "border-start-style" => "border-right-style",
    "border-end-style" => "border-left-style",
    "border-top-start-radius" => "border-top-right-radius",
    "border-top-end-radius" => "border-top-left-radius",
    "border-bottom-start-radius" => "border-bottom-right-radius",
    "border-bottom-end-radius" => "border-bottom-left-radius",
    "start" => "right",
    "end" => "left",
};

static CURSOR_FLIPS: phf::Map<&'static str, &'static str> = phf_map! {
    "e-resize" => "w-resize",
    "w-resize" => "e-resize",
    "ne-resize" => "nw-resize",
    "nw-resize" => "ne-resize",
    "se-resize" => "sw-resize",
    "sw-resize" => "se-resize",
    "nesw-resize" => "nwse-resize",
    "nwse-resize" => "nesw-resize",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    fn start(self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }

    fn end(self) -> &'static str {
        match self {
            Direction::Ltr => "right",
            Direction::Rtl => "left",
        }
    }
}

/// The left-to-right physical form of a declaration.
pub fn generate_ltr(declaration: &Declaration, options: &CompileOptions) -> Declaration {
    physical(declaration, Direction::Ltr, options)
}

/// The right-to-left physical form, or `None` when it matches the LTR form.
pub fn generate_rtl(declaration: &Declaration, options: &CompileOptions) -> Option<Declaration> {
    let rtl = physical(declaration, Direction::Rtl, options);
    (rtl != generate_ltr(declaration, options)).then_some(rtl)
}

/// Both physical forms at once.
pub fn physical_forms(
    declaration: &Declaration,
    options: &CompileOptions,
) -> (Declaration, Option<Declaration>) {
    let ltr = generate_ltr(declaration, options);
    let rtl = physical(declaration, Direction::Rtl, options);
    if rtl == ltr {
        (ltr, None)
    } else {
        (ltr, Some(rtl))
    }
}

/// Restricts a selector to left-to-right documents.
pub fn scope_ltr(selector: &str) -> String {
    format!("html:not([dir='rtl']) {}", selector)
}

/// Restricts a selector to right-to-left documents.
pub fn scope_rtl(selector: &str) -> String {
    format!("html[dir='rtl'] {}", selector)
}

fn physical(declaration: &Declaration, direction: Direction, options: &CompileOptions) -> Declaration {
    let table = match direction {
        Direction::Ltr => &LTR_PROPERTIES,
        Direction::Rtl => &RTL_PROPERTIES,
    };
    let property = table
        .get(declaration.property.as_str())
        .copied()
        .unwrap_or(declaration.property.as_str())
        .to_string();
    let values = declaration
        .values
        .iter()
        .map(|value| physical_value(&declaration.property, value, direction, options))
        .collect();
    Declaration {
        property,
        values,
        conditions: declaration.conditions.clone(),
    }
}

fn physical_value(
    property: &str,
    value: &str,
    direction: Direction,
    options: &CompileOptions,
) -> String {
    match property {
        "float" | "clear" => match value {
            "start" | "inline-start" => direction.start().to_string(),
            "end" | "inline-end" => direction.end().to_string(),
            _ => value.to_string(),
        },
        "background-position" => value
            .split(' ')
            .map(|word| match word {
                "start" => direction.start(),
                "end" => direction.end(),
                other => other,
            })
            .collect::<Vec<_>>()
            .join(" "),
        "box-shadow" | "text-shadow"
            if direction == Direction::Rtl && options.enable_legacy_value_flipping =>
        {
            flip_shadow(value)
        }
        "cursor" if direction == Direction::Rtl && options.enable_legacy_value_flipping => {
            CURSOR_FLIPS
                .get(value)
                .map_or_else(|| value.to_string(), |flipped| flipped.to_string())
        }
        _ => value.to_string(),
    }
}

/// Negates the horizontal offset (first length) of every shadow in a list.
fn flip_shadow(value: &str) -> String {
    let Ok(nodes) = parse_value(value) else {
        return value.to_string();
    };
    let mut flipped = Vec::with_capacity(nodes.len());
    let mut pending = true;
    for node in nodes {
        match node {
            ValueNode::Div(',') => {
                pending = true;
                flipped.push(node);
            }
            ValueNode::Number(mut dim) if pending => {
                pending = false;
                if !dim.is_zero() {
                    dim.number = match dim.number.strip_prefix('-') {
                        Some(positive) => positive.to_string(),
                        None => format!("-{}", dim.number.trim_start_matches('+')),
                    };
                }
                flipped.push(ValueNode::Number(dim));
            }
            other => flipped.push(other),
        }
    }
    stringify(&flipped)
}
