use crate::parser::values::parse_ident;
use crate::types::{AtRuleKind, Condition};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, recognize},
    sequence::{pair, preceded},
};

/// Classifies a conditional-map key (anything except `default`).
///
/// Whitespace runs are collapsed first, so `@media  (a)` and `@media (a)`
/// compile to the same rule.
pub fn parse_condition(key: &str) -> Condition {
    let text = key.split_whitespace().collect::<Vec<_>>().join(" ");

    match classify(&text) {
        Ok((_, kind)) => match kind {
            Prefix::PseudoElement => Condition::PseudoElement(text),
            Prefix::PseudoClass => Condition::PseudoClass(text),
            Prefix::AtRule(name) => Condition::AtRule {
                kind: at_rule_kind(&name),
                text,
            },
        },
        Err(_) => Condition::Other(text),
    }
}

enum Prefix {
    PseudoElement,
    PseudoClass,
    AtRule(String),
}

fn classify(input: &str) -> IResult<&str, Prefix> {
    alt((
        map(preceded(tag("::"), parse_ident), |_| Prefix::PseudoElement),
        map(preceded(char(':'), parse_ident), |_| Prefix::PseudoClass),
        map(recognize(pair(char('@'), parse_ident)), |name: &str| {
            Prefix::AtRule(name.to_ascii_lowercase())
        }),
    ))(input)
}

fn at_rule_kind(name: &str) -> AtRuleKind {
    match name {
        "@media" => AtRuleKind::Media,
        "@supports" => AtRuleKind::Supports,
        "@container" => AtRuleKind::Container,
        "@starting-style" => AtRuleKind::StartingStyle,
        _ => AtRuleKind::Other,
    }
}
