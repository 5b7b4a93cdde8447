//! Integer and long literal parsing

use crate::combinators::{Input, PResult};
use crate::literal_error;
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_types::LiteralKind;
use std::str::FromStr;
use winnow::Parser;
use winnow::ascii::digit1;
use winnow::combinator::opt;
use winnow::error::{StrContext, StrContextValue};
use winnow::token::one_of;

/// Optionally signed decimal digits, converted with `T::from_str`
fn signed<T>(input: &mut Input<'_>) -> PResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    (
        opt(one_of(['+', '-'])),
        digit1.context(StrContext::Expected(StrContextValue::Description("digit"))),
    )
        .take()
        .try_map(str::parse::<T>)
        .context(StrContext::Label("number"))
        .parse_next(input)
}

fn parse_number<T>(kind: LiteralKind, text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    signed::<T>
        .parse(text)
        .map_err(|e| literal_error(kind, text, e.offset(), &e.inner().to_string()))
}

/// Parse a 32-bit integer literal: optional sign followed by decimal digits
pub fn parse_integer(text: &str) -> Result<i32> {
    parse_number(LiteralKind::Integer, text)
}

/// Parse a 64-bit integer literal: optional sign followed by decimal digits
pub fn parse_long(text: &str) -> Result<i64> {
    parse_number(LiteralKind::Long, text)
}
