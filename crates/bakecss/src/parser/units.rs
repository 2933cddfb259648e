//! Numeric value and unit parsing.
//!
//! Dimensions keep the number exactly as written so that normalization can
//! decide how to reformat it; nothing here rounds or rescales.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
};

/// A number with an optional unit suffix, e.g. `-0.5em`, `10`, `50%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    /// The numeric part as written, sign included.
    pub number: String,
    /// The unit suffix, empty for plain numbers.
    pub unit: String,
}

impl Dimension {
    pub fn value(&self) -> f64 {
        self.number.parse().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

/// Units that measure length. Zero lengths drop their unit.
pub const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "svw", "svh", "lvw", "lvh", "dvw",
    "dvh", "cm", "mm", "in", "pt", "pc", "q", "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax", "lh",
    "rlh", "vi", "vb",
];

/// Units that measure angles. Zero angles normalize to `0deg`.
pub const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

/// Units that measure time. Zero durations normalize to `0s`.
pub const TIME_UNITS: &[&str] = &["ms", "s"];

/// Parse a floating point or integer number, keeping its textual form.
///
/// Accepts an optional sign and a leading-dot form such as `.5`.
pub fn parse_number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(tuple((digit1, opt(pair(char('.'), digit0))))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)
}

/// Parse the unit suffix (e.g. `px`, `%`, `fr`). May be empty.
fn parse_unit_suffix(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(char('%')),
        take_while(|c: char| c.is_ascii_alphabetic()),
    ))(input)
}

/// Parse a single dimension (e.g. "10", "50%", "-.5em").
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    let (input, number) = parse_number(input)?;
    let (input, unit) = parse_unit_suffix(input)?;

    Ok((
        input,
        Dimension {
            number: number.to_string(),
            unit: unit.to_string(),
        },
    ))
}

/// Renders a number the way the compiler prints numeric input.
///
/// Values are rounded to four decimal places; integral values print without a
/// fractional part and negative zero prints as `0`.
///
/// ```rust
/// use bakecss::parser::units::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.123456), "0.1235");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{:.0}", rounded)
    } else {
        format!("{}", rounded)
    }
}
