//! The canonical type registry

use crate::{JavaTypeKey, JdbcType, JdbcTypeRegistry, LiteralKind, SemanticType};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Sink that dialect contributors register types into during bootstrap
///
/// Re-registration semantics belong to the sink: the [`TypeConfiguration`]
/// implementation replaces earlier registrations.
pub trait TypeContributions {
    /// Register a dialect-specific JDBC type handler
    fn contribute_jdbc_type(&mut self, jdbc_type: JdbcType);

    /// Register a basic type keyed by its Java type and name
    fn contribute_type(&mut self, semantic_type: SemanticType);

    /// Read access to the registry being contributed to
    fn type_configuration(&self) -> &TypeConfiguration;
}

/// Canonical registry mapping Java types and type names to [`SemanticType`]s
///
/// Mutable during bootstrap only; afterwards it is shared read-only behind an
/// `Arc` owned by the session factory.
#[derive(Debug, Clone)]
pub struct TypeConfiguration {
    by_java_type: IndexMap<JavaTypeKey, Arc<SemanticType>>,
    by_name: HashMap<String, Arc<SemanticType>>,
    jdbc_types: JdbcTypeRegistry,
}

impl Default for TypeConfiguration {
    fn default() -> Self {
        Self::standard()
    }
}

impl TypeConfiguration {
    /// Empty registry with the standard JDBC descriptors but no basic types
    pub fn empty() -> Self {
        Self {
            by_java_type: IndexMap::new(),
            by_name: HashMap::new(),
            jdbc_types: JdbcTypeRegistry::standard(),
        }
    }

    /// Registry populated with the standard basic types
    pub fn standard() -> Self {
        let mut config = Self::empty();

        config.register_basic_type(SemanticType::new("boolean", JavaTypeKey::BOOLEAN, JdbcType::BOOLEAN));
        config.register_basic_type(
            SemanticType::new("integer", JavaTypeKey::INTEGER, JdbcType::INTEGER)
                .with_literal_kind(LiteralKind::Integer),
        );
        config.register_basic_type(
            SemanticType::new("long", JavaTypeKey::LONG, JdbcType::BIGINT)
                .with_literal_kind(LiteralKind::Long),
        );
        config.register_basic_type(SemanticType::new("double", JavaTypeKey::DOUBLE, JdbcType::DOUBLE));
        config.register_basic_type(SemanticType::new("big_decimal", JavaTypeKey::BIG_DECIMAL, JdbcType::NUMERIC));
        config.register_basic_type(SemanticType::new("string", JavaTypeKey::STRING, JdbcType::VARCHAR));
        config.register_basic_type(SemanticType::new("binary", JavaTypeKey::BINARY, JdbcType::VARBINARY));
        config.register_basic_type(
            SemanticType::new("date", JavaTypeKey::SQL_DATE, JdbcType::DATE)
                .with_literal_kind(LiteralKind::Date),
        );
        config.register_basic_type(
            SemanticType::new("time", JavaTypeKey::SQL_TIME, JdbcType::TIME)
                .with_literal_kind(LiteralKind::Time),
        );
        config.register_basic_type(
            SemanticType::new("timestamp", JavaTypeKey::SQL_TIMESTAMP, JdbcType::TIMESTAMP)
                .with_literal_kind(LiteralKind::Timestamp),
        );
        config.register_basic_type(
            SemanticType::new("local_date", JavaTypeKey::LOCAL_DATE, JdbcType::DATE)
                .with_literal_kind(LiteralKind::Date),
        );
        config.register_basic_type(
            SemanticType::new("local_time", JavaTypeKey::LOCAL_TIME, JdbcType::TIME)
                .with_literal_kind(LiteralKind::Time),
        );
        config.register_basic_type(
            SemanticType::new("local_date_time", JavaTypeKey::LOCAL_DATE_TIME, JdbcType::TIMESTAMP)
                .with_literal_kind(LiteralKind::Timestamp),
        );

        config
    }

    /// Register a basic type, replacing any type previously registered for
    /// the same Java type or name
    ///
    /// A replaced type leaves both indexes, so every registered type is
    /// reachable by its Java type and by its name.
    pub fn register_basic_type(&mut self, semantic_type: SemanticType) -> Arc<SemanticType> {
        let semantic_type = Arc::new(semantic_type);
        if let Some(previous) = self
            .by_java_type
            .insert(semantic_type.java_type().clone(), Arc::clone(&semantic_type))
        {
            log::debug!("basic type for {} replaced: {} -> {}", previous.java_type(), previous, semantic_type);
            if self.by_name.get(previous.name()).is_some_and(|named| Arc::ptr_eq(named, &previous)) {
                self.by_name.remove(previous.name());
            }
        }
        if let Some(previous) = self
            .by_name
            .insert(semantic_type.name().to_string(), Arc::clone(&semantic_type))
            && previous.java_type() != semantic_type.java_type()
        {
            log::debug!("basic type named '{}' replaced: {} -> {}", previous.name(), previous, semantic_type);
            if self
                .by_java_type
                .get(previous.java_type())
                .is_some_and(|registered| Arc::ptr_eq(registered, &previous))
            {
                self.by_java_type.shift_remove(previous.java_type());
            }
        }
        semantic_type
    }

    /// The standard semantic type for a Java type
    pub fn standard_basic_type_for_java_type(&self, java_type: &JavaTypeKey) -> Option<Arc<SemanticType>> {
        self.by_java_type.get(java_type).cloned()
    }

    /// The semantic type registered under a name
    pub fn basic_type_by_name(&self, name: &str) -> Option<Arc<SemanticType>> {
        self.by_name.get(name).cloned()
    }

    pub fn jdbc_type_registry(&self) -> &JdbcTypeRegistry {
        &self.jdbc_types
    }

    /// All registered basic types, in registration order
    pub fn basic_types(&self) -> impl Iterator<Item = &Arc<SemanticType>> {
        self.by_java_type.values()
    }
}

impl TypeContributions for TypeConfiguration {
    fn contribute_jdbc_type(&mut self, jdbc_type: JdbcType) {
        self.jdbc_types.add_descriptor(jdbc_type);
    }

    fn contribute_type(&mut self, semantic_type: SemanticType) {
        self.register_basic_type(semantic_type);
    }

    fn type_configuration(&self) -> &TypeConfiguration {
        self
    }
}
