//! Parser for canonical primitive type strings.
//!
//! Fixed-form names are looked up directly; `fixed[N]` and
//! `decimal(P, S)` go through small `nom` combinators. The whole input must
//! be consumed, surrounding whitespace is not trimmed.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace1},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, pair, separated_pair},
};

use crate::error::TypeParseError;

use super::PrimitiveType;

/// Parse a canonical type string (case-insensitive) into a [`PrimitiveType`].
///
/// `decimal` accepts one or more whitespace characters after the comma;
/// [`PrimitiveType`]'s `Display` always renders exactly one space, so the
/// two are inverses for every representable value.
pub fn primitive_type_from_string(type_string: &str) -> Result<PrimitiveType, TypeParseError> {
    let lower = type_string.to_ascii_lowercase();
    if let Some(fixed_form) = fixed_form(&lower) {
        return Ok(fixed_form);
    }

    all_consuming(alt((fixed, decimal)))(lower.as_str())
        .map(|(_, parsed)| parsed)
        .map_err(|_| TypeParseError::new(type_string))
}

fn fixed_form(name: &str) -> Option<PrimitiveType> {
    let parsed = match name {
        "boolean" => PrimitiveType::Boolean,
        "int" => PrimitiveType::Int,
        "long" => PrimitiveType::Long,
        "float" => PrimitiveType::Float,
        "double" => PrimitiveType::Double,
        "date" => PrimitiveType::Date,
        "time" => PrimitiveType::time_without_zone(),
        "timetz" => PrimitiveType::time_with_zone(),
        "timestamp" => PrimitiveType::timestamp_without_zone(),
        "timestamptz" => PrimitiveType::timestamp_with_zone(),
        "string" => PrimitiveType::String,
        "uuid" => PrimitiveType::Uuid,
        "binary" => PrimitiveType::Binary,
        _ => return None,
    };
    Some(parsed)
}

fn fixed(input: &str) -> IResult<&str, PrimitiveType> {
    map(
        delimited(tag("fixed["), number, char(']')),
        PrimitiveType::Fixed,
    )(input)
}

fn decimal(input: &str) -> IResult<&str, PrimitiveType> {
    map(
        delimited(
            tag("decimal("),
            separated_pair(number, pair(char(','), multispace1), number),
            char(')'),
        ),
        |(precision, scale)| PrimitiveType::Decimal { precision, scale },
    )(input)
}

/// Unsigned decimal integer; values that overflow `u32` fail.
fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>())(input)
}
