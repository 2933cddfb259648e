//! DSL parsing for the styles! macro.

use syn::{
    Expr, Ident, LitStr, Result, Token, braced, bracketed,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    token,
};

/// A whole definition: entries and spreads, in authored order.
#[derive(Debug)]
pub struct StylesRoot {
    pub items: Vec<EntryItem>,
}

/// A definition item - either a `key: value` entry or a spread (..expr).
#[derive(Debug)]
pub enum EntryItem {
    Entry(Entry),
    Spread(Expr),
}

/// A single `key: value` pair.
#[derive(Debug)]
pub struct Entry {
    /// Property or condition key, already in CSS spelling for identifiers.
    pub key: String,
    pub value: ValueNode,
}

/// A value expression.
#[derive(Debug)]
pub enum ValueNode {
    /// `null`
    Null,
    /// `[a, b]`
    Fallbacks(Vec<ValueNode>),
    /// `{ default: a, ":hover": b }`
    Conditional(Vec<Entry>),
    /// Any Rust expression convertible into a style value.
    Expr(Expr),
}

/// Parse a key. Identifiers use snake_case for dashes (`padding_inline`);
/// string literals are taken as written (`":hover"`, `"@media print"`).
fn parse_key(input: ParseStream) -> Result<String> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(lit.value());
    }
    let ident = Ident::parse_any(input)?;
    Ok(ident.unraw().to_string().replace('_', "-"))
}

fn parse_entries(input: ParseStream) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    while !input.is_empty() {
        entries.push(input.parse()?);
        if input.is_empty() {
            break;
        }
        let _comma: Token![,] = input.parse()?;
    }
    Ok(entries)
}

impl Parse for StylesRoot {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut items = Vec::new();

        while !input.is_empty() {
            if input.peek(Token![..]) {
                let _dotdot: Token![..] = input.parse()?;
                items.push(EntryItem::Spread(input.parse()?));
            } else {
                items.push(EntryItem::Entry(input.parse()?));
            }
            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }

        Ok(StylesRoot { items })
    }
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> Result<Self> {
        let key = parse_key(input)?;
        let _colon: Token![:] = input.parse()?;
        let value = input.parse()?;
        Ok(Entry { key, value })
    }
}

impl Parse for ValueNode {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(token::Brace) {
            let content;
            braced!(content in input);
            return Ok(ValueNode::Conditional(parse_entries(&content)?));
        }

        if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            let mut values = Vec::new();
            while !content.is_empty() {
                values.push(content.parse()?);
                if content.is_empty() {
                    break;
                }
                let _comma: Token![,] = content.parse()?;
            }
            if values.is_empty() {
                return Err(content.error("fallback list must not be empty"));
            }
            return Ok(ValueNode::Fallbacks(values));
        }

        // `null` on its own is the unset marker; anything longer is an expression
        let fork = input.fork();
        if fork.parse::<Ident>().is_ok_and(|ident| ident == "null")
            && (fork.is_empty() || fork.peek(Token![,]))
        {
            let _null: Ident = input.parse()?;
            return Ok(ValueNode::Null);
        }

        Ok(ValueNode::Expr(input.parse()?))
    }
}
