//! Literal construction through a bootstrapped engine

use hibernate_sqm::diagnostics::{SQM0007, SQM0008};
use hibernate_sqm::tree::helper::{
    date_literal_from, integer_literal, integer_literal_from, literal_from, time_literal_from, timestamp_literal_from,
};
use hibernate_sqm::types::{JavaTypeKey, LiteralKind, LiteralValue, SqlDate};
use hibernate_sqm::{EngineConfig, SessionFactoryBuilder};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;

#[test]
fn test_date_epoch_day() {
    let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
    let literal = date_literal_from("2023-05-01", &factory.creation_state()).unwrap();
    assert_eq!(literal.value(), &LiteralValue::Date(SqlDate::from_epoch_day(19478)));
    assert_eq!(literal.node_type().java_type(), &JavaTypeKey::SQL_DATE);
}

#[test]
fn test_literal_keeps_its_node_builder() {
    let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
    let literal = timestamp_literal_from("2023-05-01T10:15:30", &**factory.query_engine()).unwrap();
    assert!(Arc::ptr_eq(literal.node_builder(), factory.query_engine().criteria_builder()));
}

#[rstest]
#[case(LiteralKind::Timestamp, "2023-05-01 10:15:30", SQM0008)]
#[case(LiteralKind::Date, "01/05/2023", SQM0008)]
#[case(LiteralKind::Time, "noon", SQM0008)]
#[case(LiteralKind::Integer, "abc", SQM0007)]
#[case(LiteralKind::Long, "1e3", SQM0007)]
fn test_malformed_literals(
    #[case] kind: LiteralKind,
    #[case] text: &str,
    #[case] code: hibernate_sqm::diagnostics::ErrorCode,
) {
    let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
    let err = literal_from(kind, text, &factory).unwrap_err();
    assert_eq!(err.code(), code);
}

#[test]
fn test_time_literal_equal_after_truncation() {
    let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
    let state = factory.creation_state();
    let precise = time_literal_from("10:15:30.123", &state).unwrap();
    let whole = time_literal_from("{t '10:15:30'}", &state).unwrap();
    assert_eq!(precise, whole);
}

proptest! {
    #[test]
    fn integer_entry_points_agree(value in any::<i32>()) {
        let factory = SessionFactoryBuilder::new(EngineConfig::default()).build().unwrap();
        let state = factory.creation_state();
        let from_text = integer_literal_from(&value.to_string(), &state).unwrap();
        let from_value = integer_literal(value, &state);
        prop_assert_eq!(from_text, from_value);
    }
}
