//! Canonical literal values and the literal grammars associated with them

use crate::JavaTypeKey;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Days between 0001-01-01 (CE day 1) and 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Kind of literal text understood by the literal parser
///
/// Each temporal kind carries the literal-format descriptor of its canonical
/// type: [`LiteralKind::pattern`] documents the grammar and
/// [`LiteralKind::render`] produces text that parses back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Integer,
    Long,
    Timestamp,
    Date,
    Time,
}

impl LiteralKind {
    pub const fn sql_keyword(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Long => "BIGINT",
            Self::Timestamp => "TIMESTAMP",
            Self::Date => "DATE",
            Self::Time => "TIME",
        }
    }

    /// Grammar of the literal-format descriptor
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Integer | Self::Long => "[+-]digits",
            Self::Timestamp => "yyyy-MM-dd'T'HH:mm[:ss[.SSSSSSSSS]]",
            Self::Date => "yyyy-MM-dd",
            Self::Time => "HH:mm[:ss[.SSSSSSSSS]]",
        }
    }

    /// Java type of the canonical value produced for this kind
    pub const fn java_type(&self) -> JavaTypeKey {
        match self {
            Self::Integer => JavaTypeKey::INTEGER,
            Self::Long => JavaTypeKey::LONG,
            Self::Timestamp => JavaTypeKey::SQL_TIMESTAMP,
            Self::Date => JavaTypeKey::SQL_DATE,
            Self::Time => JavaTypeKey::SQL_TIME,
        }
    }

    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Timestamp | Self::Date | Self::Time)
    }

    /// Render a value with this kind's literal-format descriptor
    ///
    /// Returns `None` when the value is not of this kind.
    pub fn render(&self, value: &LiteralValue) -> Option<String> {
        match (self, value) {
            (Self::Integer, LiteralValue::Integer(v)) => Some(v.to_string()),
            (Self::Long, LiteralValue::Long(v)) => Some(v.to_string()),
            (Self::Timestamp, LiteralValue::Timestamp(ts)) => {
                Some(format!("{}T{}", ts.format("%Y-%m-%d"), iso_time(&ts.time())))
            }
            (Self::Date, LiteralValue::Date(date)) => {
                date.to_naive().map(|d| d.format("%Y-%m-%d").to_string())
            }
            (Self::Time, LiteralValue::Time(time)) => Some(iso_time(time)),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_keyword())
    }
}

impl FromStr for LiteralKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(Self::Integer),
            "long" | "bigint" => Ok(Self::Long),
            "timestamp" | "ts" => Ok(Self::Timestamp),
            "date" | "d" => Ok(Self::Date),
            "time" | "t" => Ok(Self::Time),
            other => Err(format!("unknown literal kind '{}'", other)),
        }
    }
}

/// `java.sql.Date` representation: a day count relative to 1970-01-01
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SqlDate {
    epoch_day: i64,
}

impl SqlDate {
    pub const fn from_epoch_day(epoch_day: i64) -> Self {
        Self { epoch_day }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            epoch_day: i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE,
        }
    }

    pub const fn epoch_day(&self) -> i64 {
        self.epoch_day
    }

    /// Calendar date, if the day count is within chrono's range
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let days_from_ce = i32::try_from(self.epoch_day + UNIX_EPOCH_DAYS_FROM_CE).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce)
    }
}

/// A literal value in its canonical (engine) representation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum LiteralValue {
    Integer(i32),
    Long(i64),
    BigDecimal(Decimal),
    String(String),
    Boolean(bool),
    /// `java.sql.Timestamp`: local date-time with nanosecond precision
    Timestamp(NaiveDateTime),
    /// `java.sql.Date`: epoch day
    Date(SqlDate),
    /// `java.sql.Time`: time of day with whole-second precision
    Time(NaiveTime),
}

impl LiteralValue {
    /// Java-level type, used to look up the standard semantic type
    pub fn java_type(&self) -> JavaTypeKey {
        match self {
            Self::Integer(_) => JavaTypeKey::INTEGER,
            Self::Long(_) => JavaTypeKey::LONG,
            Self::BigDecimal(_) => JavaTypeKey::BIG_DECIMAL,
            Self::String(_) => JavaTypeKey::STRING,
            Self::Boolean(_) => JavaTypeKey::BOOLEAN,
            Self::Timestamp(_) => JavaTypeKey::SQL_TIMESTAMP,
            Self::Date(_) => JavaTypeKey::SQL_DATE,
            Self::Time(_) => JavaTypeKey::SQL_TIME,
        }
    }

    /// Canonical time of day, dropping sub-second precision
    pub fn time(time: NaiveTime) -> Self {
        Self::Time(time.with_nanosecond(0).unwrap_or(time))
    }

    /// Render as an ANSI SQL literal
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Long(v) => v.to_string(),
            Self::BigDecimal(v) => v.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Boolean(b) => b.to_string(),
            Self::Timestamp(ts) => {
                format!("timestamp '{} {}'", ts.format("%Y-%m-%d"), iso_time(&ts.time()))
            }
            Self::Date(date) => match date.to_naive() {
                Some(d) => format!("date '{}'", d.format("%Y-%m-%d")),
                None => format!("date '{}'", date.epoch_day()),
            },
            Self::Time(time) => format!("time '{}'", iso_time(time)),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match self {
            Self::Timestamp(_) => LiteralKind::Timestamp.render(self),
            Self::Date(_) => LiteralKind::Date.render(self),
            Self::Time(_) => LiteralKind::Time.render(self),
            Self::String(s) => return f.write_str(s),
            other => Some(other.to_sql_literal()),
        };
        match rendered {
            Some(text) => f.write_str(&text),
            None => write!(f, "{:?}", self),
        }
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<Decimal> for LiteralValue {
    fn from(value: Decimal) -> Self {
        Self::BigDecimal(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDateTime> for LiteralValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<NaiveDate> for LiteralValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(SqlDate::from_naive(value))
    }
}

impl From<NaiveTime> for LiteralValue {
    fn from(value: NaiveTime) -> Self {
        Self::time(value)
    }
}

/// `HH:mm:ss` followed by the fraction with trailing zeros removed
fn iso_time(time: &NaiveTime) -> String {
    let mut out = time.format("%H:%M:%S").to_string();
    let nanos = time.nanosecond();
    if nanos != 0 {
        let digits = format!("{:09}", nanos);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}
