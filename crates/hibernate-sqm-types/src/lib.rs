//! SQM type system
//!
//! This crate defines the semantic types used by query translation:
//! - Java-class-like type keys and JDBC type descriptors
//! - The canonical type registry ([`TypeConfiguration`])
//! - Canonical literal values and their literal grammars
//! - Resolution of nominal/bindable types to [`SemanticType`]s

pub mod java_type;
pub mod jdbc_type;
pub mod resolve;
pub mod semantic_type;
pub mod type_configuration;
pub mod value;

pub use java_type::JavaTypeKey;
pub use jdbc_type::{JdbcType, JdbcTypeRegistry, SqlTypes};
pub use resolve::{to_sqm_type, try_to_sqm_type, BindableType, TypeResolutionContext};
pub use semantic_type::{SemanticType, TypeName};
pub use type_configuration::{TypeConfiguration, TypeContributions};
pub use value::{LiteralKind, LiteralValue, SqlDate};
