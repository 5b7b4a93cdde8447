//! Typed SQM expression tree
//!
//! Every node carries the canonical [`SemanticType`](hibernate_sqm_types::SemanticType)
//! it was typed with and, for literals, the [`NodeBuilder`] that created it.

pub mod creation;
pub mod expression;
pub mod helper;
pub mod node_builder;

pub use creation::SqmCreationContext;
pub use expression::{ParameterName, SqmExpression, SqmFunctionCall, SqmLiteral, SqmParameter};
pub use node_builder::NodeBuilder;
