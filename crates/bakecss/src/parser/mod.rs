//! CSS value and condition-key parsing.
//!
//! The compiler never needs a full CSS parser: property values are tokenized
//! into a shallow tree of [`ValueNode`]s (enough to normalize units, quotes and
//! whitespace and to split shorthands), and condition keys such as `:hover` or
//! `@media (min-width: 600px)` are classified into
//! [`Condition`](crate::types::Condition)s.
//!
//! ## Submodules
//!
//! - [`values`]: token parsers for words, strings, functions and separators
//! - [`units`]: numbers, unit suffixes and number formatting
//! - [`selectors`]: condition-key classification
//!
//! ## Example
//!
//! ```rust
//! use bakecss::parser::{parse_value, stringify};
//!
//! let nodes = parse_value("rgb(0,  0, 0)   solid").unwrap();
//! assert_eq!(stringify(&nodes), "rgb(0, 0, 0) solid");
//! ```

pub mod selectors;
pub mod units;
pub mod values;

pub use crate::parser::selectors::parse_condition;
pub use crate::parser::units::{Dimension, format_number};

use crate::parser::values::parse_nodes;

/// One token (or nested function) of a CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    /// A bare word: keyword, hex color, custom property name, operator.
    Word(String),
    /// A number with an optional unit.
    Number(Dimension),
    /// A quoted string; `content` excludes the quotes.
    String { quote: char, content: String },
    /// A function call; `name` is empty for bare parentheses.
    Function {
        name: String,
        args: Vec<ValueNode>,
        closed: bool,
    },
    /// A run of whitespace.
    Space,
    /// A `,` or `/` separator.
    Div(char),
}

impl ValueNode {
    pub fn is_space(&self) -> bool {
        matches!(self, ValueNode::Space)
    }
}

/// Tokenizes a CSS value.
///
/// Fails with a short reason when the value has an unterminated string or an
/// unmatched `)`. Unclosed function calls are *not* rejected here; they are
/// returned with `closed: false` so normalization can report them.
pub fn parse_value(input: &str) -> Result<Vec<ValueNode>, String> {
    let (remaining, nodes) = parse_nodes(input).map_err(|e| e.to_string())?;

    if let Some(c) = remaining.chars().next() {
        return Err(match c {
            ')' => "unmatched `)`".to_string(),
            '\'' | '"' => "unterminated string".to_string(),
            _ => format!("unexpected input `{}`", remaining),
        });
    }

    Ok(nodes)
}

/// Serializes nodes back to CSS text.
pub fn stringify(nodes: &[ValueNode]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[ValueNode], out: &mut String) {
    for node in nodes {
        match node {
            ValueNode::Word(word) => out.push_str(word),
            ValueNode::Number(dim) => {
                out.push_str(&dim.number);
                out.push_str(&dim.unit);
            }
            ValueNode::String { quote, content } => {
                out.push(*quote);
                out.push_str(content);
                out.push(*quote);
            }
            ValueNode::Function { name, args, closed } => {
                out.push_str(name);
                out.push('(');
                write_nodes(args, out);
                if *closed {
                    out.push(')');
                }
            }
            ValueNode::Space => out.push(' '),
            ValueNode::Div(c) => out.push(*c),
        }
    }
}

/// Returns true if any function call in the tree is missing its `)`.
pub fn has_unclosed_function(nodes: &[ValueNode]) -> bool {
    nodes.iter().any(|node| match node {
        ValueNode::Function { closed, args, .. } => !closed || has_unclosed_function(args),
        _ => false,
    })
}

/// Splits a value on top-level whitespace, keeping function calls intact.
///
/// ```rust
/// use bakecss::parser::split_value;
///
/// assert_eq!(
///     split_value("calc(1px + 2px) 0  auto").unwrap(),
///     vec!["calc(1px + 2px)", "0", "auto"]
/// );
/// ```
pub fn split_value(input: &str) -> Result<Vec<String>, String> {
    let nodes = parse_value(input.trim())?;
    let mut parts = Vec::new();
    let mut current: Vec<ValueNode> = Vec::new();
    for node in nodes {
        if node.is_space() {
            if !current.is_empty() {
                parts.push(stringify(&current));
                current.clear();
            }
        } else {
            current.push(node);
        }
    }
    if !current.is_empty() {
        parts.push(stringify(&current));
    }
    Ok(parts)
}

/// Returns true if the value contains a top-level `/` separator.
pub fn has_top_level_slash(input: &str) -> bool {
    parse_value(input)
        .map(|nodes| nodes.iter().any(|n| matches!(n, ValueNode::Div('/'))))
        .unwrap_or(false)
}
