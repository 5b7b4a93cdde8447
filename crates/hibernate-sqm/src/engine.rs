//! Compilation contexts
//!
//! [`SessionFactory`], [`QueryEngine`] and [`SqmCreationState`] all expose the
//! same frozen registries; any of them can be handed to the expression
//! helpers.

use crate::EngineConfig;
use hibernate_sqm_diagnostics::Result;
use hibernate_sqm_function::{ServiceRegistry, SqmFunctionRegistry};
use hibernate_sqm_tree::{NodeBuilder, SqmCreationContext};
use hibernate_sqm_types::{TypeConfiguration, TypeResolutionContext};
use std::fmt;
use std::sync::Arc;

/// Query compilation services for one engine
pub struct QueryEngine {
    type_configuration: Arc<TypeConfiguration>,
    function_registry: Arc<SqmFunctionRegistry>,
    node_builder: Arc<NodeBuilder>,
}

impl QueryEngine {
    fn new(type_configuration: Arc<TypeConfiguration>, function_registry: Arc<SqmFunctionRegistry>) -> Result<Self> {
        let node_builder = NodeBuilder::new(Arc::clone(&type_configuration), Arc::clone(&function_registry))?;
        Ok(Self {
            type_configuration,
            function_registry,
            node_builder,
        })
    }

    /// The node builder queries are built with
    pub fn criteria_builder(&self) -> &Arc<NodeBuilder> {
        &self.node_builder
    }

    pub fn function_registry(&self) -> &SqmFunctionRegistry {
        &self.function_registry
    }
}

impl TypeResolutionContext for QueryEngine {
    fn type_configuration(&self) -> &TypeConfiguration {
        &self.type_configuration
    }
}

impl SqmCreationContext for QueryEngine {
    fn node_builder(&self) -> &Arc<NodeBuilder> {
        &self.node_builder
    }
}

impl fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryEngine")
            .field("node_builder", &self.node_builder)
            .finish()
    }
}

/// A bootstrapped engine; shared across threads
#[derive(Debug)]
pub struct SessionFactory {
    config: EngineConfig,
    type_configuration: Arc<TypeConfiguration>,
    service_registry: Arc<ServiceRegistry>,
    query_engine: Arc<QueryEngine>,
}

impl SessionFactory {
    pub(crate) fn new(
        config: EngineConfig,
        type_configuration: Arc<TypeConfiguration>,
        function_registry: Arc<SqmFunctionRegistry>,
        service_registry: Arc<ServiceRegistry>,
    ) -> Result<Self> {
        let query_engine = Arc::new(QueryEngine::new(Arc::clone(&type_configuration), function_registry)?);
        Ok(Self {
            config,
            type_configuration,
            service_registry,
            query_engine,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn query_engine(&self) -> &Arc<QueryEngine> {
        &self.query_engine
    }

    pub fn service_registry(&self) -> &Arc<ServiceRegistry> {
        &self.service_registry
    }

    /// State for compiling one query
    pub fn creation_state(&self) -> SqmCreationState {
        SqmCreationState {
            query_engine: Arc::clone(&self.query_engine),
        }
    }
}

impl TypeResolutionContext for SessionFactory {
    fn type_configuration(&self) -> &TypeConfiguration {
        &self.type_configuration
    }
}

impl SqmCreationContext for SessionFactory {
    fn node_builder(&self) -> &Arc<NodeBuilder> {
        self.query_engine.criteria_builder()
    }
}

/// Per-compilation state; cheap to create, one per query
#[derive(Debug, Clone)]
pub struct SqmCreationState {
    query_engine: Arc<QueryEngine>,
}

impl SqmCreationState {
    pub fn query_engine(&self) -> &Arc<QueryEngine> {
        &self.query_engine
    }
}

impl TypeResolutionContext for SqmCreationState {
    fn type_configuration(&self) -> &TypeConfiguration {
        self.query_engine.type_configuration()
    }
}

impl SqmCreationContext for SqmCreationState {
    fn node_builder(&self) -> &Arc<NodeBuilder> {
        self.query_engine.criteria_builder()
    }
}
