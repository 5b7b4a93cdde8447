//! Canonical semantic type descriptors

use crate::{JavaTypeKey, JdbcType, LiteralKind};
use serde::Serialize;
use std::fmt;

/// Canonical, engine-wide descriptor of a value's domain type
///
/// Instances are created once by the [`TypeConfiguration`](crate::TypeConfiguration)
/// and shared as `Arc<SemanticType>`; two expressions of the same type point at
/// the same allocation.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SemanticType {
    name: String,
    java_type: JavaTypeKey,
    jdbc_type: JdbcType,
    literal_kind: Option<LiteralKind>,
}

impl SemanticType {
    pub fn new(name: impl Into<String>, java_type: JavaTypeKey, jdbc_type: JdbcType) -> Self {
        Self {
            name: name.into(),
            java_type,
            jdbc_type,
            literal_kind: None,
        }
    }

    /// Associate the literal grammar used for values of this type
    pub fn with_literal_kind(mut self, kind: LiteralKind) -> Self {
        self.literal_kind = Some(kind);
        self
    }

    /// Registration name, e.g. `timestamp`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn java_type(&self) -> &JavaTypeKey {
        &self.java_type
    }

    pub fn jdbc_type(&self) -> &JdbcType {
        &self.jdbc_type
    }

    pub fn literal_kind(&self) -> Option<LiteralKind> {
        self.literal_kind
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.java_type)
    }
}

/// A nominal type given by its registration name (`"integer"`, `"geometry"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
