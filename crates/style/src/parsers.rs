//! nom parsers turning raw attribute strings into typed [`Value`]s.
//!
//! Each attribute kind tries, in order: a percentage (`50%`), an integer pixel
//! count, the kind's keywords, then the `auto` literal. The `inherit` literal is
//! accepted for every kind before anything numeric is attempted.

use crate::attribute::{AttributeName, ValueKind};
use crate::error::StyleError;
use crate::flow::Flow;
use crate::text::TextAlign;
use crate::value::Value;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, i32 as integer};
use nom::combinator::{all_consuming, map, map_res, value};
use nom::number::complete::recognize_float;
use nom::sequence::terminated;
use nom::{IResult, Parser};

const INHERIT: &str = "inherit";

// --- Primitive parsers ---

fn percentage(input: &str) -> IResult<&str, Value> {
    map_res(terminated(recognize_float, char('%')), |s: &str| {
        s.parse::<f64>().map(Value::Percent)
    })
    .parse(input)
}

fn pixels(input: &str) -> IResult<&str, Value> {
    map(integer, Value::Pixels).parse(input)
}

fn auto(input: &str) -> IResult<&str, Value> {
    value(Value::Auto, tag("auto")).parse(input)
}

fn flow(input: &str) -> IResult<&str, Value> {
    map(
        alt((
            value(Flow::XY, tag("xy")),
            value(Flow::X, tag("x")),
            value(Flow::Y, tag("y")),
            value(Flow::None, tag("none")),
        )),
        Value::Flow,
    )
    .parse(input)
}

fn flag(input: &str) -> IResult<&str, Value> {
    alt((
        value(Value::Flag(true), tag("true")),
        value(Value::Flag(false), tag("false")),
    ))
    .parse(input)
}

fn align(input: &str) -> IResult<&str, Value> {
    map(
        alt((
            value(TextAlign::Left, tag("left")),
            value(TextAlign::Center, tag("center")),
            value(TextAlign::Right, tag("right")),
        )),
        Value::Align,
    )
    .parse(input)
}

/// Runs `parser` over the whole input, rejecting trailing garbage.
fn run<'a, P>(parser: P, input: &'a str) -> Option<Value>
where
    P: Parser<&'a str, Output = Value, Error = nom::error::Error<&'a str>>,
{
    all_consuming(parser).parse(input).ok().map(|(_, parsed)| parsed)
}

fn reference(input: &str, none_keyword: Option<&str>) -> Option<Value> {
    if input.is_empty() {
        return None;
    }
    match none_keyword {
        Some(keyword) if input == keyword => Some(Value::Reference(None)),
        _ => Some(Value::Reference(Some(input.to_string()))),
    }
}

/// Parses a raw value of the given kind. Returns `None` if it does not match.
pub fn parse_kind(kind: ValueKind, input: &str) -> Option<Value> {
    let input = input.trim();
    if input == INHERIT {
        return Some(Value::Inherit);
    }
    match kind {
        ValueKind::Size => run(alt((percentage, pixels, auto)), input),
        ValueKind::Bound => run(alt((percentage, pixels)), input),
        ValueKind::Offset => run(alt((pixels, auto)), input),
        ValueKind::Pixels => run(pixels, input),
        ValueKind::Flow => run(flow, input),
        ValueKind::Flag => run(flag, input),
        ValueKind::Align => run(align, input),
        ValueKind::Font => reference(input, Some("default")),
        ValueKind::OptionalReference => reference(input, Some("none")),
        ValueKind::Reference => reference(input, None),
    }
}

/// Parses the raw string bound to attribute `name`.
pub fn parse_value(name: AttributeName, raw: &str) -> Result<Value, StyleError> {
    let kind = name.kind();
    parse_kind(kind, raw).ok_or_else(|| StyleError::MalformedAttributeValue {
        name: name.as_str().to_string(),
        value: raw.to_string(),
        expected: kind.expected(),
    })
}
