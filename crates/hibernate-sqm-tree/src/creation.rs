//! Compilation context seen by the expression helpers

use crate::NodeBuilder;
use hibernate_sqm_types::TypeResolutionContext;
use std::sync::Arc;

/// Anything a query is compiled against: yields the node builder, and
/// through it the type and function registries
pub trait SqmCreationContext: TypeResolutionContext {
    fn node_builder(&self) -> &Arc<NodeBuilder>;
}

impl SqmCreationContext for Arc<NodeBuilder> {
    fn node_builder(&self) -> &Arc<NodeBuilder> {
        self
    }
}
