//! Java-class-like keys for the canonical type registry

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Key identifying the Java-level type of a value, by fully qualified class name
///
/// Standard keys are available as associated constants; contributed types
/// (such as geometries) build their key from an owned name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JavaTypeKey(Cow<'static, str>);

impl JavaTypeKey {
    pub const BOOLEAN: Self = Self::from_static("java.lang.Boolean");
    pub const INTEGER: Self = Self::from_static("java.lang.Integer");
    pub const LONG: Self = Self::from_static("java.lang.Long");
    pub const DOUBLE: Self = Self::from_static("java.lang.Double");
    pub const BIG_DECIMAL: Self = Self::from_static("java.math.BigDecimal");
    pub const STRING: Self = Self::from_static("java.lang.String");
    pub const BINARY: Self = Self::from_static("[B");
    pub const SQL_DATE: Self = Self::from_static("java.sql.Date");
    pub const SQL_TIME: Self = Self::from_static("java.sql.Time");
    pub const SQL_TIMESTAMP: Self = Self::from_static("java.sql.Timestamp");
    pub const LOCAL_DATE: Self = Self::from_static("java.time.LocalDate");
    pub const LOCAL_TIME: Self = Self::from_static("java.time.LocalTime");
    pub const LOCAL_DATE_TIME: Self = Self::from_static("java.time.LocalDateTime");

    pub const fn from_static(class_name: &'static str) -> Self {
        Self(Cow::Borrowed(class_name))
    }

    pub fn new(class_name: impl Into<String>) -> Self {
        Self(Cow::Owned(class_name.into()))
    }

    /// Fully qualified class name
    pub fn class_name(&self) -> &str {
        &self.0
    }

    /// Unqualified class name (`Timestamp` for `java.sql.Timestamp`)
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Map primitive spellings and common short names onto their boxed class
    pub fn from_class_name(name: &str) -> Self {
        match name {
            "int" | "Integer" => Self::INTEGER,
            "long" | "Long" => Self::LONG,
            "double" | "Double" => Self::DOUBLE,
            "boolean" | "Boolean" => Self::BOOLEAN,
            "String" => Self::STRING,
            "BigDecimal" => Self::BIG_DECIMAL,
            "byte[]" => Self::BINARY,
            other => Self::new(other),
        }
    }
}

impl fmt::Display for JavaTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
