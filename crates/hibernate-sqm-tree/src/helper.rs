//! Literal and parameter construction from query text
//!
//! Each operation takes any [`SqmCreationContext`]; the node builder it
//! yields decides the literal's canonical type.

use crate::{ParameterName, SqmCreationContext, SqmLiteral, SqmParameter};
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_parser::{parse_date, parse_integer, parse_literal, parse_long, parse_time, parse_timestamp};
use hibernate_sqm_types::{BindableType, LiteralKind, LiteralValue, SqlDate};

pub use hibernate_sqm_types::{to_sqm_type, try_to_sqm_type};

/// Timestamp literal from `2023-05-01T10:15:30` or `{ts '2023-05-01 10:15:30'}`
pub fn timestamp_literal_from<C: SqmCreationContext + ?Sized>(text: &str, context: &C) -> Result<SqmLiteral> {
    let timestamp = parse_timestamp(text)?;
    context.node_builder().literal(LiteralValue::Timestamp(timestamp))
}

/// Date literal; the value is the epoch day of the parsed date
pub fn date_literal_from<C: SqmCreationContext + ?Sized>(text: &str, context: &C) -> Result<SqmLiteral> {
    let date = parse_date(text)?;
    context
        .node_builder()
        .literal(LiteralValue::Date(SqlDate::from_naive(date)))
}

/// Time literal; sub-second precision is dropped
pub fn time_literal_from<C: SqmCreationContext + ?Sized>(text: &str, context: &C) -> Result<SqmLiteral> {
    let time = parse_time(text)?;
    context.node_builder().literal(LiteralValue::time(time))
}

pub fn integer_literal_from<C: SqmCreationContext + ?Sized>(text: &str, context: &C) -> Result<SqmLiteral> {
    let value = parse_integer(text)?;
    Ok(integer_literal(value, context))
}

pub fn integer_literal<C: SqmCreationContext + ?Sized>(value: i32, context: &C) -> SqmLiteral {
    context.node_builder().integer_literal(value)
}

pub fn long_literal_from<C: SqmCreationContext + ?Sized>(text: &str, context: &C) -> Result<SqmLiteral> {
    let value = parse_long(text)?;
    context.node_builder().literal(LiteralValue::Long(value))
}

/// Literal of any parseable kind
pub fn literal_from<C: SqmCreationContext + ?Sized>(kind: LiteralKind, text: &str, context: &C) -> Result<SqmLiteral> {
    let value = parse_literal(kind, text)?.into_value();
    context.node_builder().literal(value)
}

pub fn parameter<C: SqmCreationContext + ?Sized>(
    name: ParameterName,
    anticipated: Option<&dyn BindableType>,
    context: &C,
) -> Result<SqmParameter> {
    context.node_builder().parameter(name, anticipated)
}
