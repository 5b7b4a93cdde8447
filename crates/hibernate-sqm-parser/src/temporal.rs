//! Timestamp, date and time literal parsing
//!
//! Grammar and range validation are separate steps: the combinators accept
//! any two-digit month, and chrono decides whether the calendar date or time
//! of day exists.

use crate::combinators::{
    DateParts, Input, PResult, TimeParts, fraction_nanos, iso_date, iso_time, jdbc_clock, jdbc_date,
    jdbc_escape, separator,
};
use crate::literal_error;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_types::LiteralKind;
use winnow::Parser;
use winnow::combinator::{alt, cut_err, opt, preceded};

/// `HH:mm:ss[.fffffffff]`, the clock part of a `{ts '...'}` escape
fn jdbc_timestamp_clock(input: &mut Input<'_>) -> PResult<TimeParts> {
    let mut parts = jdbc_clock(input)?;
    if let Some(nanos) = opt(preceded('.', cut_err(fraction_nanos))).parse_next(input)? {
        parts.nanos = nanos;
    }
    Ok(parts)
}

fn timestamp(input: &mut Input<'_>) -> PResult<(DateParts, TimeParts)> {
    alt((
        jdbc_escape("ts", (jdbc_date, preceded(separator(' '), jdbc_timestamp_clock))),
        (iso_date, preceded(separator('T'), iso_time)),
    ))
    .parse_next(input)
}

fn date(input: &mut Input<'_>) -> PResult<DateParts> {
    alt((jdbc_escape("d", jdbc_date), iso_date)).parse_next(input)
}

fn time(input: &mut Input<'_>) -> PResult<TimeParts> {
    alt((jdbc_escape("t", jdbc_clock), iso_time)).parse_next(input)
}

fn to_date(kind: LiteralKind, text: &str, parts: DateParts) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day).ok_or_else(|| {
        literal_error(
            kind,
            text,
            0,
            &format!(
                "no such calendar date {:04}-{:02}-{:02}",
                parts.year, parts.month, parts.day
            ),
        )
    })
}

fn to_time(kind: LiteralKind, text: &str, parts: TimeParts) -> Result<NaiveTime> {
    NaiveTime::from_hms_nano_opt(parts.hour, parts.minute, parts.second, parts.nanos).ok_or_else(
        || {
            literal_error(
                kind,
                text,
                0,
                &format!(
                    "no such time of day {:02}:{:02}:{:02}",
                    parts.hour, parts.minute, parts.second
                ),
            )
        },
    )
}

fn run<O>(
    kind: LiteralKind,
    text: &str,
    mut parser: impl for<'a> FnMut(&mut Input<'a>) -> PResult<O>,
) -> Result<O> {
    parser
        .parse(text)
        .map_err(|e| literal_error(kind, text, e.offset(), &e.inner().to_string()))
}

/// Parse a timestamp literal
///
/// Accepts `2023-05-01T10:15:30.5` and `{ts '2023-05-01 10:15:30.5'}`.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let kind = LiteralKind::Timestamp;
    let (date_parts, time_parts) = run(kind, text, timestamp)?;
    let date = to_date(kind, text, date_parts)?;
    let time = to_time(kind, text, time_parts)?;
    Ok(NaiveDateTime::new(date, time))
}

/// Parse a date literal: `2023-05-01` or `{d '2023-05-01'}`
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let kind = LiteralKind::Date;
    let parts = run(kind, text, date)?;
    to_date(kind, text, parts)
}

/// Parse a time literal: `10:15[:30[.5]]` or `{t '10:15:30'}`
///
/// The fraction is kept here; the canonical time value drops it.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    let kind = LiteralKind::Time;
    let parts = run(kind, text, time)?;
    to_time(kind, text, parts)
}
