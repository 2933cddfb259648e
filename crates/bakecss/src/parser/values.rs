//! Token parsers for CSS property values.
//!
//! Each parser recognizes one [`ValueNode`]:
//!
//! - Whitespace runs: collapsed into [`ValueNode::Space`]
//! - Separators: `,` and `/` as [`ValueNode::Div`]
//! - Quoted strings: `'a'`, `"b"` (escapes preserved)
//! - Function calls: `rgb(…)`, `calc(…)`, bare parentheses `(…)`
//! - Dimensions: `10px`, `-.5em`, `50%`
//! - Words: everything else (`auto`, `#fff`, `--token`, `-webkit-box`)
//!
//! `url(…)` arguments are taken verbatim since unquoted URLs may contain
//! characters that are meaningful elsewhere in a value.

use super::ValueNode;
use super::units::parse_dimension;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace1, one_of},
    combinator::{map, opt, recognize},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::terminated,
};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a sequence of value nodes, stopping at `)` or the end of input.
pub fn parse_nodes(input: &str) -> IResult<&str, Vec<ValueNode>> {
    many0(parse_node)(input)
}

fn parse_node(input: &str) -> IResult<&str, ValueNode> {
    alt((
        map(multispace1, |_| ValueNode::Space),
        map(one_of(",/"), ValueNode::Div),
        parse_string,
        parse_function,
        parse_number_node,
        parse_word,
    ))(input)
}

/// Parses a quoted string, keeping escape sequences as written.
fn parse_string(input: &str) -> IResult<&str, ValueNode> {
    let (rest, quote) = one_of("'\"")(input)?;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            c if c == quote => {
                return Ok((
                    &rest[i + c.len_utf8()..],
                    ValueNode::String {
                        quote,
                        content: rest[..i].to_string(),
                    },
                ));
            }
            _ => {}
        }
    }
    // Unterminated string
    Err(nom::Err::Error(Error::new(input, ErrorKind::Char)))
}

/// Parses `name(args)`. A missing closing parenthesis is recorded rather than
/// rejected so the caller can report a precise error.
fn parse_function(input: &str) -> IResult<&str, ValueNode> {
    let (input, name) = terminated(opt(parse_ident), char('('))(input)?;
    let name = name.unwrap_or_default();

    if name.eq_ignore_ascii_case("url") {
        let (input, raw) = take_while(|c: char| c != ')')(input)?;
        let (input, close) = opt(char(')'))(input)?;
        return Ok((
            input,
            ValueNode::Function {
                name: name.to_string(),
                args: vec![ValueNode::Word(raw.to_string())],
                closed: close.is_some(),
            },
        ));
    }

    let (input, args) = parse_nodes(input)?;
    let (input, close) = opt(char(')'))(input)?;
    Ok((
        input,
        ValueNode::Function {
            name: name.to_string(),
            args,
            closed: close.is_some(),
        },
    ))
}

fn parse_number_node(input: &str) -> IResult<&str, ValueNode> {
    let (rest, dimension) = parse_dimension(input)?;
    // `10px-foo` or `1a2` is a word, not a dimension followed by junk
    if rest.starts_with(|c: char| c.is_alphanumeric() || c == '-' || c == '_' || c == '.') {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Digit)));
    }
    Ok((rest, ValueNode::Number(dimension)))
}

fn parse_word(input: &str) -> IResult<&str, ValueNode> {
    map(
        recognize(take_while1(|c: char| {
            !c.is_whitespace() && !matches!(c, ',' | '/' | '(' | ')' | '\'' | '"')
        })),
        |s: &str| ValueNode::Word(s.to_string()),
    )(input)
}
