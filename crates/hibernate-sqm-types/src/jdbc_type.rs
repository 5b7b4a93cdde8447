//! JDBC type descriptors and the registry dialects contribute them to

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// JDBC type codes, as defined by `java.sql.Types` plus Hibernate extensions
pub struct SqlTypes;

impl SqlTypes {
    pub const BOOLEAN: i32 = 16;
    pub const INTEGER: i32 = 4;
    pub const BIGINT: i32 = -5;
    pub const DOUBLE: i32 = 8;
    pub const NUMERIC: i32 = 2;
    pub const VARCHAR: i32 = 12;
    pub const VARBINARY: i32 = -3;
    pub const DATE: i32 = 91;
    pub const TIME: i32 = 92;
    pub const TIMESTAMP: i32 = 93;
    pub const GEOMETRY: i32 = 3200;
}

/// Descriptor for a wire/column type handler
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JdbcType {
    /// JDBC type code (see [`SqlTypes`])
    pub code: i32,
    /// Descriptor name, e.g. `INTEGER` or `GEOMETRY`
    pub name: &'static str,
    /// Column type used in DDL
    pub ddl_name: &'static str,
}

impl JdbcType {
    pub const fn new(code: i32, name: &'static str, ddl_name: &'static str) -> Self {
        Self { code, name, ddl_name }
    }

    pub const BOOLEAN: Self = Self::new(SqlTypes::BOOLEAN, "BOOLEAN", "boolean");
    pub const INTEGER: Self = Self::new(SqlTypes::INTEGER, "INTEGER", "integer");
    pub const BIGINT: Self = Self::new(SqlTypes::BIGINT, "BIGINT", "bigint");
    pub const DOUBLE: Self = Self::new(SqlTypes::DOUBLE, "DOUBLE", "float(53)");
    pub const NUMERIC: Self = Self::new(SqlTypes::NUMERIC, "NUMERIC", "numeric");
    pub const VARCHAR: Self = Self::new(SqlTypes::VARCHAR, "VARCHAR", "varchar");
    pub const VARBINARY: Self = Self::new(SqlTypes::VARBINARY, "VARBINARY", "varbinary");
    pub const DATE: Self = Self::new(SqlTypes::DATE, "DATE", "date");
    pub const TIME: Self = Self::new(SqlTypes::TIME, "TIME", "time");
    pub const TIMESTAMP: Self = Self::new(SqlTypes::TIMESTAMP, "TIMESTAMP", "timestamp");
}

impl fmt::Display for JdbcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.code)
    }
}

/// Registry of JDBC type descriptors keyed by type code
///
/// Re-registering a code replaces the previous descriptor.
#[derive(Debug, Clone, Default)]
pub struct JdbcTypeRegistry {
    descriptors: IndexMap<i32, JdbcType>,
}

impl JdbcTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the standard descriptors
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for descriptor in [
            JdbcType::BOOLEAN,
            JdbcType::INTEGER,
            JdbcType::BIGINT,
            JdbcType::DOUBLE,
            JdbcType::NUMERIC,
            JdbcType::VARCHAR,
            JdbcType::VARBINARY,
            JdbcType::DATE,
            JdbcType::TIME,
            JdbcType::TIMESTAMP,
        ] {
            registry.add_descriptor(descriptor);
        }
        registry
    }

    /// Register a descriptor, returning the one it replaced
    pub fn add_descriptor(&mut self, descriptor: JdbcType) -> Option<JdbcType> {
        let previous = self.descriptors.insert(descriptor.code, descriptor);
        if let Some(previous) = &previous {
            log::debug!(
                "JDBC type code {} re-registered: {} replaces {}",
                previous.code,
                self.descriptors[&previous.code],
                previous
            );
        }
        previous
    }

    pub fn descriptor(&self, code: i32) -> Option<&JdbcType> {
        self.descriptors.get(&code)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JdbcType> {
        self.descriptors.values()
    }
}
