//! Tests for parsing literal text
//!
//! Covers every literal kind in both the ISO and JDBC escape forms, the
//! conversions to canonical values, and rejection of malformed text.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use hibernate_sqm_diagnostics::{SQM0007, SQM0008, SqmError};
use hibernate_sqm_parser::{
    ParsedLiteral, parse_date, parse_integer, parse_literal, parse_long, parse_time,
    parse_timestamp,
};
use hibernate_sqm_types::{LiteralKind, LiteralValue, SqlDate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_nano_opt(h, mi, s, nanos)
        .unwrap()
}

#[rstest]
#[case("2023-05-01T10:15:30", datetime(2023, 5, 1, 10, 15, 30, 0))]
#[case("2023-05-01T10:15", datetime(2023, 5, 1, 10, 15, 0, 0))]
#[case("2023-05-01T10:15:30.123456789", datetime(2023, 5, 1, 10, 15, 30, 123_456_789))]
#[case("{ts '2023-05-01 10:15:30'}", datetime(2023, 5, 1, 10, 15, 30, 0))]
#[case("{ts '1999-12-31 23:59:59.9'}", datetime(1999, 12, 31, 23, 59, 59, 900_000_000))]
#[case("2023-05-01T10:15:30.", datetime(2023, 5, 1, 10, 15, 30, 0))]
#[case("+10000-01-01T00:00", datetime(10_000, 1, 1, 0, 0, 0, 0))]
fn test_timestamp_forms(#[case] text: &str, #[case] expected: NaiveDateTime) {
    assert_eq!(parse_timestamp(text).unwrap(), expected);
}

#[rstest]
#[case("2023-05-01", 2023, 5, 1)]
#[case("{d '2023-05-01'}", 2023, 5, 1)]
#[case("0001-01-01", 1, 1, 1)]
#[case("2000-02-29", 2000, 2, 29)]
#[case("+10000-01-01", 10_000, 1, 1)]
#[case("-0001-01-01", -1, 1, 1)]
fn test_date_forms(#[case] text: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
    assert_eq!(parse_date(text).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
}

#[rstest]
#[case("10:15:30", 10, 15, 30)]
#[case("10:15", 10, 15, 0)]
#[case("{t '23:59:59'}", 23, 59, 59)]
#[case("00:00:00", 0, 0, 0)]
#[case("10:15:30.", 10, 15, 30)]
fn test_time_forms(#[case] text: &str, #[case] h: u32, #[case] m: u32, #[case] s: u32) {
    assert_eq!(parse_time(text).unwrap(), NaiveTime::from_hms_opt(h, m, s).unwrap());
}

#[rstest]
#[case(LiteralKind::Timestamp, "abc")]
#[case(LiteralKind::Timestamp, "2023-05-01")]
#[case(LiteralKind::Timestamp, "2023-05-01T25:00")]
#[case(LiteralKind::Timestamp, "{ts '2023-05-01T10:15:30'}")]
#[case(LiteralKind::Date, "2023-13-01")]
#[case(LiteralKind::Date, "2023-05-01 ")]
#[case(LiteralKind::Date, "{d 2023-05-01}")]
#[case(LiteralKind::Date, "")]
#[case(LiteralKind::Time, "10")]
#[case(LiteralKind::Time, "10:60")]
#[case(LiteralKind::Time, "10:15.")]
#[case(LiteralKind::Date, "20230-05-01")]
#[case(LiteralKind::Date, "+2023-05-01")]
fn test_malformed_temporal_literals(#[case] kind: LiteralKind, #[case] text: &str) {
    let err = parse_literal(kind, text).unwrap_err();
    assert_eq!(err.code(), SQM0008);
    assert!(matches!(err, SqmError::Parse { .. }));
    assert_eq!(err.expression(), Some(text));
}

#[rstest]
#[case("abc")]
#[case("4 2")]
#[case("99999999999")]
fn test_malformed_integer_literals(#[case] text: &str) {
    let err = parse_integer(text).unwrap_err();
    assert_eq!(err.code(), SQM0007);
    assert!(err.to_string().contains(&format!("Invalid INTEGER literal '{}'", text)));
}

#[test]
fn test_integer_42() {
    assert_eq!(parse_literal(LiteralKind::Integer, "42").unwrap(), ParsedLiteral::Integer(42));
}

#[test]
fn test_long_range() {
    assert_eq!(parse_long("-9223372036854775808").unwrap(), i64::MIN);
    assert!(parse_long("9223372036854775808").is_err());
}

#[test]
fn test_date_epoch_day() {
    let value = parse_literal(LiteralKind::Date, "2023-05-01").unwrap().into_value();
    assert_eq!(value, LiteralValue::Date(SqlDate::from_epoch_day(19478)));

    let epoch = parse_literal(LiteralKind::Date, "1970-01-01").unwrap().into_value();
    assert_eq!(epoch, LiteralValue::Date(SqlDate::from_epoch_day(0)));
}

#[test]
fn test_time_value_drops_fraction() {
    let parsed = parse_literal(LiteralKind::Time, "10:15:30.75").unwrap();
    match parsed.into_value() {
        LiteralValue::Time(time) => {
            assert_eq!(time.nanosecond(), 0);
            assert_eq!(time, NaiveTime::from_hms_opt(10, 15, 30).unwrap());
        }
        other => panic!("Expected Time, got: {:?}", other),
    }
}

#[test]
fn test_error_help_names_grammar() {
    let err = parse_date("2023/05/01").unwrap_err();
    let diagnostic = err.to_diagnostic();
    let help = diagnostic.help.expect("literal errors carry the expected grammar");
    assert!(help.contains("expected yyyy-MM-dd"), "help was {:?}", help);
}

fn timestamp_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1i32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60, 0u32..1_000_000_000)
        .prop_map(|(y, mo, d, h, mi, s, n)| datetime(y, mo, d, h, mi, s, n))
}

proptest! {
    #[test]
    fn timestamp_round_trips_through_render(ts in timestamp_strategy()) {
        let value = LiteralValue::Timestamp(ts);
        let text = LiteralKind::Timestamp.render(&value).unwrap();
        let parsed = parse_literal(LiteralKind::Timestamp, &text).unwrap().into_value();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn date_round_trips_through_render(epoch_day in -1_500_000i64..=4_000_000) {
        let value = LiteralValue::Date(SqlDate::from_epoch_day(epoch_day));
        let text = LiteralKind::Date.render(&value).unwrap();
        let parsed = parse_literal(LiteralKind::Date, &text).unwrap().into_value();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn time_round_trips_through_render(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let value = LiteralValue::time(NaiveTime::from_hms_opt(h, m, s).unwrap());
        let text = LiteralKind::Time.render(&value).unwrap();
        let parsed = parse_literal(LiteralKind::Time, &text).unwrap().into_value();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn integer_round_trips(v in any::<i32>()) {
        prop_assert_eq!(parse_integer(&v.to_string()).unwrap(), v);
    }
}
