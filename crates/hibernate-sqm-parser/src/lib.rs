//! SQL literal text parser using Winnow
//!
//! Turns the text of integer, long and temporal literals into canonical
//! values. Temporal literals accept both the ISO form and the JDBC escape
//! form (`{ts '...'}`, `{d '...'}`, `{t '...'}`).

mod combinators;
mod number;
mod temporal;

pub use number::{parse_integer, parse_long};
pub use temporal::{parse_date, parse_time, parse_timestamp};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use hibernate_sqm_diagnostics::{ErrorBuilder, Result, SQM0007, SQM0008, Span, SqmError};
use hibernate_sqm_types::{LiteralKind, LiteralValue, SqlDate};

/// A literal as parsed, before conversion to its canonical representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLiteral {
    Integer(i32),
    Long(i64),
    Timestamp(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl ParsedLiteral {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::Integer(_) => LiteralKind::Integer,
            Self::Long(_) => LiteralKind::Long,
            Self::Timestamp(_) => LiteralKind::Timestamp,
            Self::Date(_) => LiteralKind::Date,
            Self::Time(_) => LiteralKind::Time,
        }
    }

    /// Canonical value: dates become epoch days, times lose sub-second precision
    pub fn into_value(self) -> LiteralValue {
        match self {
            Self::Integer(v) => LiteralValue::Integer(v),
            Self::Long(v) => LiteralValue::Long(v),
            Self::Timestamp(ts) => LiteralValue::Timestamp(ts),
            Self::Date(date) => LiteralValue::Date(SqlDate::from_naive(date)),
            Self::Time(time) => LiteralValue::time(time),
        }
    }
}

impl From<ParsedLiteral> for LiteralValue {
    fn from(parsed: ParsedLiteral) -> Self {
        parsed.into_value()
    }
}

/// Parse literal text with the grammar of `kind`
pub fn parse_literal(kind: LiteralKind, text: &str) -> Result<ParsedLiteral> {
    match kind {
        LiteralKind::Integer => parse_integer(text).map(ParsedLiteral::Integer),
        LiteralKind::Long => parse_long(text).map(ParsedLiteral::Long),
        LiteralKind::Timestamp => parse_timestamp(text).map(ParsedLiteral::Timestamp),
        LiteralKind::Date => parse_date(text).map(ParsedLiteral::Date),
        LiteralKind::Time => parse_time(text).map(ParsedLiteral::Time),
    }
}

pub(crate) fn literal_error(kind: LiteralKind, text: &str, offset: usize, detail: &str) -> SqmError {
    let code = if kind.is_temporal() { SQM0008 } else { SQM0007 };
    let detail = detail
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    let context = if detail.is_empty() {
        format!("expected {}", kind.pattern())
    } else {
        format!("{}; expected {}", detail, kind.pattern())
    };

    ErrorBuilder::new(code, format!("Invalid {} literal '{}'", kind, text))
        .span(Span::point(offset.min(text.len())), text)
        .context(context)
        .parse(text)
}
