//! Procedural macros for stylebake.
//!
//! This crate provides the `styles!` proc macro for writing style
//! definitions with JSON-like syntax.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod codegen;
mod parse;

/// Builds a `StyleDefinition` from a JSON-like literal.
///
/// # Syntax
///
/// ```ignore
/// let base = styles! { display: "flex" };
///
/// let button = styles! {
///     // identifiers use snake_case for dashes
///     padding_inline: 8,
///
///     // conditional maps: `default` plus selector or at-rule keys
///     color: {
///         default: "black",
///         ":hover": "blue",
///         "@media (prefers-color-scheme: dark)": { default: "white" },
///     },
///
///     // fallback lists, least preferred first
///     position: ["sticky", "fixed"],
///
///     // `null` unsets a key
///     outline: null,
///
///     // a pseudo-element group
///     "::before": { content: "''" },
///
///     // spread another definition's entries
///     ..base,
/// };
/// ```
///
/// # Value Mapping
///
/// - `{ ... }` becomes `StyleValue::conditional(...)`
/// - `[ ... ]` becomes `StyleValue::Fallbacks(...)`
/// - `null` becomes `StyleValue::Null`
/// - any other expression `e` becomes `StyleValue::from(e)`
///
/// Later keys replace earlier ones in place, so a spread followed by a key
/// overrides the spread value.
#[proc_macro]
pub fn styles(input: TokenStream) -> TokenStream {
    let root = parse_macro_input!(input as parse::StylesRoot);
    codegen::generate(root).into()
}
